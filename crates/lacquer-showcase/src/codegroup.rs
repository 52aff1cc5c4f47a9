//! Code group container rendering.
//!
//! A code group wraps a code block in a bordered container with an optional
//! title bar. Long blocks start height-constrained with an Expand button;
//! the client runtime alternates the constrained state on each activation.
//! With `no_expand` the button is omitted and the block renders full height.

use crate::render::html_escape;

/// Render a code group around pre-rendered inner HTML.
pub fn render_code_group(title: Option<&str>, no_expand: bool, inner: &str) -> String {
    let mut out = String::from(r#"<div class="code-group">"#);

    if let Some(title) = title {
        out.push_str(&format!(
            r#"<div class="code-group-title">{}</div>"#,
            html_escape(title)
        ));
    }

    if no_expand {
        out.push_str(r#"<div class="code-group-body">"#);
        out.push_str(inner);
        out.push_str("</div>");
    } else {
        out.push_str(r#"<div class="code-group-body minimized" data-minimized="true">"#);
        out.push_str(inner);
        out.push_str("</div>");
        out.push_str(
            r#"<button type="button" class="code-group-toggle">Expand</button>"#,
        );
    }

    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expandable_group_starts_minimized_with_toggle() {
        let html = render_code_group(None, false, "<pre><code>let x = 1;</code></pre>");

        assert!(html.contains(r#"code-group-body minimized"#));
        assert!(html.contains(r#"data-minimized="true""#));
        assert!(html.contains("code-group-toggle"));
        assert!(html.contains("Expand"));
    }

    #[test]
    fn no_expand_omits_toggle_and_constraint() {
        let html = render_code_group(Some("lib/utils.ts"), true, "<pre><code>cn()</code></pre>");

        assert!(html.contains("lib/utils.ts"));
        assert!(!html.contains("code-group-toggle"));
        assert!(!html.contains("minimized"));
    }

    #[test]
    fn title_is_escaped() {
        let html = render_code_group(Some("a<b>.tsx"), true, "");

        assert!(html.contains("a&lt;b&gt;.tsx"));
    }
}
