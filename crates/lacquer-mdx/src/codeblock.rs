//! Fenced code block extraction.

/// Programming language of a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Tsx,
    Jsx,
    TypeScript,
    JavaScript,
    Html,
    Css,
    Json,
    Bash,
    #[default]
    Unknown,
}

impl Language {
    /// Parse language from a code fence info string.
    pub fn from_info(info: &str) -> Self {
        let lang = info.split_whitespace().next().unwrap_or("");
        match lang.to_lowercase().as_str() {
            "tsx" => Self::Tsx,
            "jsx" => Self::Jsx,
            "ts" | "typescript" => Self::TypeScript,
            "js" | "javascript" => Self::JavaScript,
            "html" => Self::Html,
            "css" => Self::Css,
            "json" => Self::Json,
            "bash" | "sh" | "shell" => Self::Bash,
            _ => Self::Unknown,
        }
    }

    /// CSS class suffix used by the highlighter.
    pub fn as_class(&self) -> &'static str {
        match self {
            Self::Tsx => "tsx",
            Self::Jsx => "jsx",
            Self::TypeScript => "ts",
            Self::JavaScript => "js",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Bash => "bash",
            Self::Unknown => "text",
        }
    }
}

/// A fenced code block lifted out of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    /// Unique identifier for this block (format: block-{line_number})
    pub id: String,

    /// Programming language
    pub language: Language,

    /// Source code content
    pub source: String,

    /// Line number where the block starts (1-indexed)
    pub line_number: usize,

    /// Optional filename hint from the info string
    pub filename: Option<String>,
}

impl CodeBlock {
    pub fn new(language: Language, source: String, line_number: usize) -> Self {
        Self {
            id: format!("block-{}", line_number),
            language,
            source,
            line_number,
            filename: None,
        }
    }
}

/// Extract a filename hint from a code fence info string.
///
/// Supports `tsx filename="Button.tsx"` and `tsx file=Button.tsx`.
pub fn extract_filename(info: &str) -> Option<String> {
    if let Some(start) = info.find("filename=\"") {
        let rest = &info[start + 10..];
        if let Some(end) = rest.find('"') {
            return Some(rest[..end].to_string());
        }
    }

    if let Some(start) = info.find("file=") {
        let rest = &info[start + 5..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let filename = rest[..end].trim_matches('"');
        if !filename.is_empty() {
            return Some(filename.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language() {
        assert_eq!(Language::from_info("tsx filename=\"x.tsx\""), Language::Tsx);
        assert_eq!(Language::from_info("jsx"), Language::Jsx);
        assert_eq!(Language::from_info("shell"), Language::Bash);
        assert_eq!(Language::from_info("css"), Language::Css);
        assert_eq!(Language::from_info("fortran"), Language::Unknown);
    }

    #[test]
    fn language_class_is_stable() {
        assert_eq!(Language::Tsx.as_class(), "tsx");
        assert_eq!(Language::Bash.as_class(), "bash");
        assert_eq!(Language::Unknown.as_class(), "text");
    }

    #[test]
    fn extracts_filename() {
        assert_eq!(
            extract_filename("tsx filename=\"HeartbeatButton.tsx\""),
            Some("HeartbeatButton.tsx".to_string())
        );
        assert_eq!(
            extract_filename("bash file=install.sh"),
            Some("install.sh".to_string())
        );
        assert_eq!(extract_filename("tsx"), None);
    }
}
