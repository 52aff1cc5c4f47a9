//! Preview resolution and preview block rendering.
//!
//! A preview block pairs a demo's live rendering with its literal source.
//! Resolution is lookup-with-fallback: a path missing from the registry, or
//! a demo whose JSX cannot be projected, is logged and substituted with a
//! placeholder naming the path. Failures are terminal, never retried.

use lacquer_mdx::{Align, PreviewDirective};

use crate::registry::{format_name, ShowcaseRegistry};
use crate::render::{html_escape, render_demo};

/// What a page asked a preview block to show.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSpec {
    /// Showcase path identifier.
    pub path: String,

    /// Demo alignment inside the stage.
    pub align: Align,

    /// Demo depends on the animation library.
    pub using_framer: bool,

    /// Render the copy-paste recipe layout instead of tabs.
    pub using_cn: bool,
}

impl From<&PreviewDirective> for PreviewSpec {
    fn from(d: &PreviewDirective) -> Self {
        Self {
            path: d.path.clone(),
            align: d.align,
            using_framer: d.using_framer,
            using_cn: d.using_cn,
        }
    }
}

/// The (element, source) pair a preview block displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPreview {
    /// Display name for the block header.
    pub name: String,

    /// Rendered demo HTML, or the not-found placeholder.
    pub element: String,

    /// Display code; None when source resolution failed, in which case the
    /// code panel renders empty.
    pub code: Option<String>,
}

/// Resolve a preview spec against the registry.
///
/// Never panics; every failure substitutes a placeholder.
pub fn resolve(registry: &ShowcaseRegistry, spec: &PreviewSpec) -> ResolvedPreview {
    match registry.get(&spec.path) {
        Some(entry) => {
            let element = match render_demo(&entry.source) {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!(path = %spec.path, error = %e, "Failed to render demo, substituting placeholder");
                    not_found_placeholder(&spec.path)
                }
            };
            ResolvedPreview {
                name: entry.name.clone(),
                element,
                code: Some(entry.code.clone()),
            }
        }
        None => {
            tracing::warn!(path = %spec.path, "Demo not found in showcase registry");
            ResolvedPreview {
                name: format_name(&spec.path),
                element: not_found_placeholder(&spec.path),
                code: None,
            }
        }
    }
}

/// Demo HTML for a path, with the same not-found substitution previews use.
///
/// Card grids share this so a broken manifest entry degrades instead of
/// failing the homepage.
pub fn element_or_placeholder(registry: &ShowcaseRegistry, path: &str) -> String {
    match registry.get(path) {
        Some(entry) => render_demo(&entry.source).unwrap_or_else(|e| {
            tracing::warn!(path = %path, error = %e, "Failed to render demo, substituting placeholder");
            not_found_placeholder(path)
        }),
        None => {
            tracing::warn!(path = %path, "Demo not found in showcase registry");
            not_found_placeholder(path)
        }
    }
}

fn not_found_placeholder(path: &str) -> String {
    format!(
        r#"<p class="preview-missing">Component <code>{}</code> not found.</p>"#,
        html_escape(path)
    )
}

/// Render the full preview block for a spec.
pub fn render_preview_block(registry: &ShowcaseRegistry, spec: &PreviewSpec) -> String {
    let resolved = resolve(registry, spec);

    if spec.using_cn {
        render_recipe_block(registry, spec, &resolved)
    } else {
        render_tabbed_block(spec, &resolved)
    }
}

/// Tabbed layout: preview panel first, code panel hidden until selected.
fn render_tabbed_block(spec: &PreviewSpec, resolved: &ResolvedPreview) -> String {
    let id = block_id(&spec.path);
    let code_html = resolved
        .code
        .as_deref()
        .map(|code| html_escape(code))
        .unwrap_or_default();

    format!(
        r#"<div class="component-preview" id="{id}">
<div class="preview-header">
<h2 class="preview-name">{name}</h2>
<div class="preview-badges">{badges}</div>
<div class="preview-tabs" role="tablist">
<button type="button" class="tab active" data-tab="preview" aria-selected="true">Preview</button>
<button type="button" class="tab" data-tab="code" aria-selected="false">Code</button>
</div>
</div>
<div class="tab-panel" data-panel="preview">
<button type="button" class="copy-btn">Copy</button>
<div class="preview-stage {align}">{element}</div>
</div>
<div class="tab-panel" data-panel="code" hidden>
<pre><code class="language-tsx">{code}</code></pre>
</div>
</div>"#,
        id = id,
        name = html_escape(&resolved.name),
        badges = render_badges(spec.using_framer),
        align = spec.align.as_class(),
        element = resolved.element,
        code = code_html,
    )
}

/// Recipe layout: preview plus install, utils, and source steps, all
/// rendered as non-collapsible code groups.
fn render_recipe_block(
    registry: &ShowcaseRegistry,
    spec: &PreviewSpec,
    resolved: &ResolvedPreview,
) -> String {
    let id = block_id(&spec.path);
    let file_name = format!("{}.tsx", resolved.name.replace(' ', ""));

    let install = if spec.using_framer {
        "npm i clsx tailwind-merge framer-motion"
    } else {
        "npm i clsx tailwind-merge"
    };

    let mut steps = String::new();

    steps.push_str(r#"<p class="step"><span class="step-label">Step 1:</span> Install dependencies</p>"#);
    steps.push_str(&crate::codegroup::render_code_group(
        None,
        true,
        &format!(r#"<pre><code class="language-bash">{}</code></pre>"#, install),
    ));

    match registry.utils_source() {
        Some(utils) => {
            steps.push_str(r#"<p class="step"><span class="step-label">Step 2:</span> Add util file</p>"#);
            steps.push_str(&crate::codegroup::render_code_group(
                Some("lib/utils.ts"),
                true,
                &format!(r#"<pre><code class="language-ts">{}</code></pre>"#, html_escape(utils)),
            ));
        }
        None => {
            tracing::warn!(path = %spec.path, "No utils source configured, omitting util step");
        }
    }

    steps.push_str(r#"<p class="step"><span class="step-label">Step 3:</span> Copy the source code</p>"#);
    let code_html = resolved
        .code
        .as_deref()
        .map(|code| html_escape(code))
        .unwrap_or_default();
    steps.push_str(&crate::codegroup::render_code_group(
        Some(&file_name),
        true,
        &format!(r#"<pre><code class="language-tsx">{}</code></pre>"#, code_html),
    ));

    format!(
        r#"<div class="component-preview recipe" id="{id}">
<div class="preview-header">
<h2 class="preview-name">{name}</h2>
<div class="preview-badges">{badges}</div>
</div>
<div class="tab-panel" data-panel="preview">
<div class="preview-stage {align}">{element}</div>
</div>
{steps}
</div>"#,
        id = id,
        name = html_escape(&resolved.name),
        badges = render_badges(spec.using_framer),
        align = spec.align.as_class(),
        element = resolved.element,
        steps = steps,
    )
}

/// Requirement badges with tooltip links, opened in new browsing contexts.
fn render_badges(using_framer: bool) -> String {
    let mut badges = String::from(
        r#"<span class="badge" tabindex="0">Tailwind<span class="tooltip">This component requires <a href="https://tailwindcss.com/" target="_blank" rel="noreferrer">Tailwind CSS</a></span></span>"#,
    );
    if using_framer {
        badges.push_str(
            r#"<span class="badge" tabindex="0">Motion<span class="tooltip">This component requires <a href="https://www.framer.com/motion/" target="_blank" rel="noreferrer">Framer Motion</a></span></span>"#,
        );
    }
    badges
}

/// Element id of the preview block for a showcase path.
///
/// The dev server uses the same id to target a block for hot updates.
pub fn block_id(path: &str) -> String {
    let slug: String = path
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    format!("preview-{}", slug)
}
