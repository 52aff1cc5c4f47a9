//! Component preview directive parsing.
//!
//! Pages embed previews with a self-closing tag:
//! `<ComponentPreview path="components/button/HeartbeatButton" align="start" usingFramer />`.
//! The builder later swaps each occurrence for a rendered preview block.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Horizontal alignment of the rendered demo inside the preview stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Center,
    Start,
    End,
}

impl Align {
    fn from_value(value: &str) -> Option<Self> {
        match value {
            "center" => Some(Self::Center),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    /// CSS class applied to the preview stage.
    pub fn as_class(&self) -> &'static str {
        match self {
            Self::Center => "items-center",
            Self::Start => "items-start",
            Self::End => "items-end",
        }
    }
}

/// A preview directive lifted out of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewDirective {
    /// Showcase path identifier, relative to the showcase root
    /// (e.g. `components/loaders/OrbitingLoader`).
    pub path: String,

    /// Demo alignment inside the stage.
    pub align: Align,

    /// Demo depends on the animation library.
    pub using_framer: bool,

    /// Render the copy-paste recipe layout instead of tabs.
    pub using_cn: bool,

    /// Byte range of the tag in the page content, for replacement.
    pub span: (usize, usize),
}

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<ComponentPreview\b([^>]*?)/>").expect("Invalid preview tag regex")
});

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Match: name="value" or name='value' or bare name (boolean)
    Regex::new(r#"([a-zA-Z][a-zA-Z0-9]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'))?"#)
        .expect("Invalid attr regex")
});

/// Find every preview directive in page content.
///
/// Malformed directives (no `path` attribute, unknown `align` value) are
/// skipped with a diagnostic rather than failing the page.
pub fn extract_directives(content: &str) -> Vec<PreviewDirective> {
    let mut directives = Vec::new();

    for caps in TAG_RE.captures_iter(content) {
        let whole = caps.get(0).expect("capture 0 always present");
        let attrs = parse_attrs(caps.get(1).map(|m| m.as_str()).unwrap_or(""));

        let Some(path) = attrs.get("path").and_then(|v| v.clone()) else {
            tracing::warn!("Skipping ComponentPreview without a path attribute");
            continue;
        };

        let align = match attrs.get("align") {
            Some(Some(value)) => match Align::from_value(value) {
                Some(a) => a,
                None => {
                    tracing::warn!(path = %path, align = %value, "Unknown align value, skipping directive");
                    continue;
                }
            },
            _ => Align::Center,
        };

        directives.push(PreviewDirective {
            path,
            align,
            using_framer: is_flag_set(&attrs, "usingFramer"),
            using_cn: is_flag_set(&attrs, "usingCn"),
            span: (whole.start(), whole.end()),
        });
    }

    directives
}

/// Parse tag attributes into name -> optional value.
///
/// A bare attribute (`usingFramer`) maps to None and reads as a true flag.
fn parse_attrs(attrs_str: &str) -> HashMap<String, Option<String>> {
    let mut attrs = HashMap::new();

    for caps in ATTR_RE.captures_iter(attrs_str) {
        let name = caps.get(1).expect("attr name group").as_str().to_string();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string());
        attrs.insert(name, value);
    }

    attrs
}

fn is_flag_set(attrs: &HashMap<String, Option<String>>, name: &str) -> bool {
    match attrs.get(name) {
        Some(None) => true,
        Some(Some(value)) => value == "true",
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_minimal_directive() {
        let content = r#"Some text.

<ComponentPreview path="components/button/HeartbeatButton" />

More text."#;

        let directives = extract_directives(content);

        assert_eq!(directives.len(), 1);
        let d = &directives[0];
        assert_eq!(d.path, "components/button/HeartbeatButton");
        assert_eq!(d.align, Align::Center);
        assert!(!d.using_framer);
        assert!(!d.using_cn);
        assert_eq!(&content[d.span.0..d.span.1], r#"<ComponentPreview path="components/button/HeartbeatButton" />"#);
    }

    #[test]
    fn extracts_flags_and_align() {
        let content = r#"<ComponentPreview path="animations/hover/HoverPulseButton" align="start" usingFramer usingCn />"#;

        let directives = extract_directives(content);

        assert_eq!(directives.len(), 1);
        let d = &directives[0];
        assert_eq!(d.align, Align::Start);
        assert!(d.using_framer);
        assert!(d.using_cn);
    }

    #[test]
    fn skips_directive_without_path() {
        let content = r#"<ComponentPreview align="center" />"#;

        assert!(extract_directives(content).is_empty());
    }

    #[test]
    fn skips_unknown_align() {
        let content = r#"<ComponentPreview path="components/x/Y" align="middle" />"#;

        assert!(extract_directives(content).is_empty());
    }

    #[test]
    fn finds_multiple_directives_in_order() {
        let content = r#"
<ComponentPreview path="components/toggle/SimpleToggle" />

## Next

<ComponentPreview path="components/loaders/OrbitingLoader" align="end" />
"#;

        let directives = extract_directives(content);

        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].path, "components/toggle/SimpleToggle");
        assert_eq!(directives[1].path, "components/loaders/OrbitingLoader");
        assert!(directives[0].span.1 <= directives[1].span.0);
    }

    #[test]
    fn align_classes() {
        assert_eq!(Align::Center.as_class(), "items-center");
        assert_eq!(Align::Start.as_class(), "items-start");
        assert_eq!(Align::End.as_class(), "items-end");
    }
}
