//! Static HTML projection of demo components.
//!
//! The preview panel cannot execute a demo's source, so the JSX expression
//! the demo returns is projected into plain HTML: lowercase tags pass
//! through, framework-only attributes are dropped, animation-wrapper
//! elements (`m.div`, `motion.span`) collapse to their underlying tag, and
//! other component elements unwrap to their children. Animation comes from
//! the CSS classes the markup keeps.

use std::sync::LazyLock;

use regex::Regex;

/// Errors from projecting a demo to HTML.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("No JSX expression found in demo source")]
    NoJsx,

    #[error("Invalid JSX at byte {offset}: {message}")]
    Parse { offset: usize, message: String },
}

/// A parsed JSX element.
#[derive(Debug)]
struct JsxElement {
    /// Element name; empty for a fragment (`<>...</>`).
    name: String,
    attrs: Vec<(String, AttrValue)>,
    children: Vec<JsxChild>,
}

#[derive(Debug)]
enum AttrValue {
    /// Bare attribute (`disabled`).
    Bare,
    /// String literal (`className="btn"`).
    Literal(String),
    /// Braced expression (`animate={{ scale: 1 }}`), dropped on output.
    Expression,
}

#[derive(Debug)]
enum JsxChild {
    Element(JsxElement),
    Text(String),
    /// Braced expression; string literals survive, the rest is dropped.
    Expression(String),
}

/// Project a demo component's source to static preview HTML.
pub fn render_demo(source: &str) -> Result<String, RenderError> {
    let start = find_jsx_start(source).ok_or(RenderError::NoJsx)?;

    let mut parser = JsxParser {
        input: source,
        pos: start,
    };
    let element = parser.parse_element()?;

    Ok(emit(&element))
}

static RETURN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"return\s*\(?\s*<").expect("Invalid return regex"));

static ARROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=>\s*\(?\s*<").expect("Invalid arrow regex"));

/// Byte offset of the `<` opening the component's returned JSX.
fn find_jsx_start(source: &str) -> Option<usize> {
    RETURN_RE
        .find(source)
        .or_else(|| ARROW_RE.find(source))
        .map(|m| m.end() - 1)
}

struct JsxParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> JsxParser<'a> {
    fn error(&self, message: impl Into<String>) -> RenderError {
        RenderError::Parse {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn bump(&mut self, n: usize) {
        self.pos += n;
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    /// Parse one element starting at `<`.
    fn parse_element(&mut self) -> Result<JsxElement, RenderError> {
        if !self.rest().starts_with('<') {
            return Err(self.error("expected '<'"));
        }
        self.bump(1);

        let name = self.parse_name();
        let mut attrs = Vec::new();

        loop {
            self.skip_whitespace();
            let rest = self.rest();

            if rest.starts_with("/>") {
                self.bump(2);
                return Ok(JsxElement {
                    name,
                    attrs,
                    children: Vec::new(),
                });
            }
            if rest.starts_with('>') {
                self.bump(1);
                break;
            }
            if rest.is_empty() {
                return Err(self.error("unterminated opening tag"));
            }

            attrs.push(self.parse_attr()?);
        }

        let children = self.parse_children(&name)?;

        Ok(JsxElement {
            name,
            attrs,
            children,
        })
    }

    /// Element or attribute name: letters, digits, and `.`/`-`/`_`/`:`.
    fn parse_name(&mut self) -> String {
        let rest = self.rest();
        let end = rest
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '.' | '-' | '_' | ':')))
            .unwrap_or(rest.len());
        let name = rest[..end].to_string();
        self.bump(end);
        name
    }

    fn parse_attr(&mut self) -> Result<(String, AttrValue), RenderError> {
        let name = self.parse_name();
        if name.is_empty() {
            return Err(self.error("expected attribute name"));
        }

        self.skip_whitespace();
        if !self.rest().starts_with('=') {
            return Ok((name, AttrValue::Bare));
        }
        self.bump(1);
        self.skip_whitespace();

        let rest = self.rest();
        if let Some(quote) = rest.chars().next().filter(|c| *c == '"' || *c == '\'') {
            let inner = &rest[1..];
            let end = inner
                .find(quote)
                .ok_or_else(|| self.error("unterminated attribute value"))?;
            let value = inner[..end].to_string();
            self.bump(end + 2);
            return Ok((name, AttrValue::Literal(value)));
        }
        if rest.starts_with('{') {
            self.skip_braced()?;
            return Ok((name, AttrValue::Expression));
        }

        Err(self.error("expected attribute value"))
    }

    /// Skip a balanced `{ ... }` block, honoring string literals inside.
    fn skip_braced(&mut self) -> Result<String, RenderError> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        let mut depth = 0usize;
        let mut i = self.pos;
        let mut in_string: Option<u8> = None;

        while i < bytes.len() {
            let b = bytes[i];
            match in_string {
                Some(quote) => {
                    if b == b'\\' {
                        i += 1;
                    } else if b == quote {
                        in_string = None;
                    }
                }
                None => match b {
                    b'\'' | b'"' | b'`' => in_string = Some(b),
                    b'{' => depth += 1,
                    b'}' => {
                        depth -= 1;
                        if depth == 0 {
                            self.pos = i + 1;
                            return Ok(self.input[start + 1..i].to_string());
                        }
                    }
                    _ => {}
                },
            }
            i += 1;
        }

        self.pos = i;
        Err(self.error("unbalanced braces"))
    }

    fn parse_children(&mut self, open_name: &str) -> Result<Vec<JsxChild>, RenderError> {
        let mut children = Vec::new();

        loop {
            let rest = self.rest();

            if rest.is_empty() {
                return Err(self.error(format!("missing closing tag for <{open_name}>")));
            }

            if rest.starts_with("</") {
                self.bump(2);
                let close_name = self.parse_name();
                self.skip_whitespace();
                if !self.rest().starts_with('>') {
                    return Err(self.error("malformed closing tag"));
                }
                self.bump(1);
                if close_name != open_name {
                    return Err(self.error(format!(
                        "mismatched closing tag: expected </{open_name}>, found </{close_name}>"
                    )));
                }
                return Ok(children);
            }

            if rest.starts_with('<') {
                children.push(JsxChild::Element(self.parse_element()?));
            } else if rest.starts_with('{') {
                let expr = self.skip_braced()?;
                children.push(JsxChild::Expression(expr));
            } else {
                let end = rest
                    .find(|c| c == '<' || c == '{')
                    .unwrap_or(rest.len());
                let text = &rest[..end];
                if !text.trim().is_empty() {
                    children.push(JsxChild::Text(collapse_whitespace(text)));
                }
                self.bump(end);
            }
        }
    }
}

/// Emit HTML for a parsed element tree.
fn emit(element: &JsxElement) -> String {
    let mut out = String::new();
    emit_element(element, &mut out);
    out
}

fn emit_element(element: &JsxElement, out: &mut String) {
    // Fragments and component elements contribute only their children;
    // animation wrappers collapse to the wrapped tag.
    let tag = match output_tag(&element.name) {
        Some(tag) => tag,
        None => {
            for child in &element.children {
                emit_child(child, out);
            }
            return;
        }
    };

    out.push('<');
    out.push_str(tag);

    for (name, value) in &element.attrs {
        let Some(attr) = output_attr_name(name) else {
            continue;
        };
        match value {
            AttrValue::Bare => {
                out.push(' ');
                out.push_str(attr);
            }
            AttrValue::Literal(v) => {
                out.push(' ');
                out.push_str(attr);
                out.push_str("=\"");
                out.push_str(&html_escape(v));
                out.push('"');
            }
            AttrValue::Expression => {}
        }
    }

    if element.children.is_empty() && is_void_tag(tag) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        emit_child(child, out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn emit_child(child: &JsxChild, out: &mut String) {
    match child {
        JsxChild::Element(el) => emit_element(el, out),
        JsxChild::Text(text) => out.push_str(&html_escape(text)),
        JsxChild::Expression(expr) => {
            // String-literal expressions like {'Loading'} keep their text;
            // everything else is runtime-only and dropped.
            let trimmed = expr.trim();
            if let Some(inner) = string_literal(trimmed) {
                out.push_str(&html_escape(inner));
            }
        }
    }
}

/// Resolve a JSX element name to an output HTML tag, or None to unwrap.
fn output_tag(name: &str) -> Option<&str> {
    if name.is_empty() {
        return None; // fragment
    }

    // Animation wrappers render as the wrapped tag.
    if let Some(tag) = name.strip_prefix("m.").or_else(|| name.strip_prefix("motion.")) {
        if tag.chars().next().is_some_and(|c| c.is_lowercase()) {
            return Some(tag);
        }
    }

    if name.chars().next().is_some_and(|c| c.is_lowercase()) {
        Some(name)
    } else {
        None
    }
}

/// Map a JSX attribute name to HTML, or None to drop it.
fn output_attr_name(name: &str) -> Option<&str> {
    match name {
        "className" => Some("class"),
        "htmlFor" => Some("for"),
        "key" | "ref" => None,
        _ => {
            // Event handlers (onClick, onMouseEnter, ...) are framework-only.
            let is_handler = name
                .strip_prefix("on")
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c.is_uppercase());
            if is_handler {
                None
            } else {
                Some(name)
            }
        }
    }
}

fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}

fn string_literal(expr: &str) -> Option<&str> {
    for quote in ['\'', '"', '`'] {
        if expr.len() >= 2 && expr.starts_with(quote) && expr.ends_with(quote) {
            let inner = &expr[1..expr.len() - 1];
            if !inner.contains(quote) {
                return Some(inner);
            }
        }
    }
    None
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }
    out
}

/// Escape HTML special characters including single quotes.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
