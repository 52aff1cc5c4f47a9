//! Page document parser.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::codeblock::{extract_filename, CodeBlock, Language};
use crate::directive::{extract_directives, PreviewDirective};
use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};

/// A parsed page document.
#[derive(Debug, Clone)]
pub struct PageDoc {
    /// Parsed frontmatter (if present)
    pub frontmatter: Option<Frontmatter>,

    /// Markdown content (without frontmatter)
    pub content: String,

    /// Fenced code blocks
    pub code_blocks: Vec<CodeBlock>,

    /// Component preview directives, in source order
    pub directives: Vec<PreviewDirective>,

    /// Table of contents entries
    pub toc: Vec<TocEntry>,
}

/// A table of contents entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    /// Heading text
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// Errors that can occur when parsing a page.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

/// Parse a page document.
///
/// Extracts frontmatter, code blocks, preview directives, and a table of
/// contents.
pub fn parse_page(source: &str) -> Result<PageDoc, ParseError> {
    let (frontmatter, content) = extract_frontmatter(source)?;

    let directives = extract_directives(content);

    let mut code_blocks = Vec::new();
    let mut toc = Vec::new();

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(content, options);

    let mut current_code_block: Option<(String, usize)> = None; // (info, line)
    let mut current_heading: Option<(u8, String)> = None; // (level, text)
    let mut line_number = 1;

    // Offset block line numbers by the frontmatter we stripped.
    let frontmatter_lines = source.len() - content.len();
    let frontmatter_line_offset = source[..frontmatter_lines].lines().count();

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match &kind {
                    CodeBlockKind::Fenced(info) => info.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                current_code_block = Some((info, line_number + frontmatter_line_offset));
            }

            Event::Text(text) => {
                if let Some((ref info, start_line)) = current_code_block {
                    let language = Language::from_info(info);
                    let filename = extract_filename(info);

                    let mut block = CodeBlock::new(language, text.to_string(), start_line);
                    block.filename = filename;
                    code_blocks.push(block);
                } else if let Some((_, ref mut heading_text)) = current_heading {
                    heading_text.push_str(&text);
                }

                line_number += text.matches('\n').count();
            }

            Event::End(TagEnd::CodeBlock) => {
                current_code_block = None;
            }

            Event::Start(Tag::Heading { level, .. }) => {
                current_heading = Some((level as u8, String::new()));
            }

            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, title)) = current_heading.take() {
                    let id = slugify(&title);
                    toc.push(TocEntry { title, id, level });
                }
            }

            Event::SoftBreak | Event::HardBreak => {
                line_number += 1;
            }

            _ => {}
        }
    }

    Ok(PageDoc {
        frontmatter,
        content: content.to_string(),
        code_blocks,
        directives,
        toc,
    })
}

/// Convert a heading to a URL-safe slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::Align;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_complete_page() {
        let source = r#"---
title: Button
description: Copy-paste button demos
---

# Button

Press-ready buttons.

<ComponentPreview path="components/button/HeartbeatButton" />

## Install

```bash
npm i clsx tailwind-merge
```
"#;

        let doc = parse_page(source).unwrap();

        let fm = doc.frontmatter.unwrap();
        assert_eq!(fm.title, "Button");
        assert_eq!(fm.description, Some("Copy-paste button demos".to_string()));

        assert_eq!(doc.directives.len(), 1);
        assert_eq!(doc.directives[0].path, "components/button/HeartbeatButton");
        assert_eq!(doc.directives[0].align, Align::Center);

        assert_eq!(doc.code_blocks.len(), 1);
        assert_eq!(doc.code_blocks[0].language, Language::Bash);

        assert_eq!(doc.toc.len(), 2);
        assert_eq!(doc.toc[0].title, "Button");
        assert_eq!(doc.toc[0].id, "button");
        assert_eq!(doc.toc[1].title, "Install");
        assert_eq!(doc.toc[1].level, 2);
    }

    #[test]
    fn parses_without_frontmatter() {
        let source = "# Bare page\n\nNo metadata.";

        let doc = parse_page(source).unwrap();

        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.toc.len(), 1);
        assert_eq!(doc.toc[0].title, "Bare page");
    }

    #[test]
    fn directive_spans_index_into_content() {
        let source = r#"---
title: Loaders
---

<ComponentPreview path="components/loaders/OrbitingLoader" align="end" />
"#;

        let doc = parse_page(source).unwrap();

        let d = &doc.directives[0];
        let tag = &doc.content[d.span.0..d.span.1];
        assert!(tag.starts_with("<ComponentPreview"));
        assert!(tag.ends_with("/>"));
    }

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Text Ticker"), "text-ticker");
        assert_eq!(slugify("Button (3D)"), "button-3d");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }
}
