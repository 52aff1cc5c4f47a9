//! MDX parser for showcase pages.
//!
//! Parses MDX files into frontmatter, fenced code blocks, component preview
//! directives, and a table of contents.

pub mod codeblock;
pub mod directive;
pub mod frontmatter;
pub mod parser;

pub use codeblock::{CodeBlock, Language};
pub use directive::{Align, PreviewDirective};
pub use frontmatter::Frontmatter;
pub use parser::{parse_page, PageDoc, ParseError, TocEntry};
