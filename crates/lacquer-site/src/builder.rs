//! Static site builder.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use lacquer_mdx::{parse_page, Frontmatter, PageDoc};
use lacquer_showcase::{render_card_grid, render_preview_block, Manifest, PreviewSpec, ShowcaseRegistry};

use crate::assets::AssetPipeline;
use crate::templates::{GridSection, HomeContext, NavItem, PageContext, TemplateEngine, TocEntry};

/// Configuration for building a showcase site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source docs directory
    pub docs_dir: PathBuf,

    /// Showcase source directory (demo .tsx/.jsx files)
    pub showcase_dir: PathBuf,

    /// Shared utils module shown in recipe previews
    pub utils_file: Option<PathBuf>,

    /// Card manifest for the homepage
    pub manifest_path: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Site title
    pub title: String,

    /// Hero tagline on the homepage
    pub tagline: String,

    /// Repository URL for the homepage hero link
    pub repo_url: String,

    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            showcase_dir: PathBuf::from("showcase"),
            utils_file: None,
            manifest_path: PathBuf::from("showcase.toml"),
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            title: "Showcase".to_string(),
            tagline: String::new(),
            repo_url: String::new(),
            styles: vec![],
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of preview blocks rendered
    pub previews: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read docs directory: {0}")]
    Read(String),

    #[error("Failed to parse page: {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// A page to be built.
#[derive(Debug)]
struct PageInfo {
    /// Source file path
    source_path: PathBuf,

    /// Relative path from docs dir
    relative_path: PathBuf,

    /// Output path
    output_path: PathBuf,

    /// Parsed document
    doc: PageDoc,
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    registry: ShowcaseRegistry,
    manifest: Manifest,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder. Scans the showcase directory and loads
    /// the card manifest up front; either can be missing, in which case
    /// previews fall back to placeholders and the homepage renders no cards.
    pub fn new(config: BuildConfig) -> Self {
        let mut registry = ShowcaseRegistry::new();

        if config.showcase_dir.exists() {
            match registry.scan(&config.showcase_dir) {
                Ok(count) => {
                    tracing::info!(
                        "Loaded {} demos from {}",
                        count,
                        config.showcase_dir.display()
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to scan showcase directory: {}", e);
                }
            }
        } else {
            tracing::warn!(
                "Showcase directory not found: {}",
                config.showcase_dir.display()
            );
        }

        if let Some(ref utils) = config.utils_file {
            if let Err(e) = registry.load_utils(utils) {
                tracing::warn!("Failed to load utils module: {}", e);
            }
        }

        let manifest = if config.manifest_path.exists() {
            match Manifest::load(&config.manifest_path) {
                Ok(m) => m,
                Err(e) => {
                    tracing::warn!("Failed to load manifest: {}", e);
                    Manifest::default()
                }
            }
        } else {
            tracing::warn!("Manifest not found: {}", config.manifest_path.display());
            Manifest::default()
        };

        Self {
            config,
            registry,
            manifest,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the site.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let pages = self.discover_pages()?;
        let nav = self.build_navigation(&pages);

        let results: Vec<Result<(usize, usize), BuildError>> = pages
            .par_iter()
            .map(|page| self.build_page(page, &nav))
            .collect();

        let mut total_pages = 0;
        let mut total_previews = 0;

        for result in results {
            let (pages, previews) = result?;
            total_pages += pages;
            total_previews += previews;
        }

        // The manifest-driven homepage is written after the doc pages so it
        // wins over any root index page from the docs directory.
        self.build_homepage(&pages, &nav)?;
        total_pages += 1;

        self.generate_assets()?;
        self.generate_search_index(&pages)?;
        self.generate_sitemap(&pages)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: total_pages,
            previews: total_previews,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Discover all pages in the docs directory.
    fn discover_pages(&self) -> Result<Vec<PageInfo>, BuildError> {
        let mut pages = Vec::new();

        if !self.config.docs_dir.exists() {
            return Err(BuildError::Read(format!(
                "Docs directory not found: {}",
                self.config.docs_dir.display()
            )));
        }

        for entry in WalkDir::new(&self.config.docs_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "mdx" && ext != "md" {
                continue;
            }

            let content = fs::read_to_string(path)
                .map_err(|e| BuildError::Read(format!("{}: {}", path.display(), e)))?;

            let doc = parse_page(&content).map_err(|e| BuildError::Parse {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let relative_path = path
                .strip_prefix(&self.config.docs_dir)
                .unwrap_or(path)
                .to_path_buf();

            let output_path = self.calculate_output_path(&relative_path, &doc.frontmatter);

            pages.push(PageInfo {
                source_path: path.to_path_buf(),
                relative_path,
                output_path,
                doc,
            });
        }

        // Sort by order from frontmatter
        pages.sort_by(|a, b| {
            let order_a = a
                .doc
                .frontmatter
                .as_ref()
                .and_then(|f| f.order)
                .unwrap_or(999);
            let order_b = b
                .doc
                .frontmatter
                .as_ref()
                .and_then(|f| f.order)
                .unwrap_or(999);
            order_a.cmp(&order_b)
        });

        Ok(pages)
    }

    /// Calculate output path for a page.
    fn calculate_output_path(&self, relative: &Path, frontmatter: &Option<Frontmatter>) -> PathBuf {
        if let Some(fm) = frontmatter {
            if let Some(slug) = &fm.slug {
                return self.config.output_dir.join(slug).join("index.html");
            }
        }

        let stem = relative
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("index");

        if stem == "index" {
            // docs/components/index.mdx -> dist/components/index.html
            let parent = relative.parent().unwrap_or(Path::new(""));
            self.config.output_dir.join(parent).join("index.html")
        } else {
            // docs/components/button.mdx -> dist/components/button/index.html
            let parent = relative.parent().unwrap_or(Path::new(""));
            self.config
                .output_dir
                .join(parent)
                .join(stem)
                .join("index.html")
        }
    }

    /// Build navigation structure from pages.
    fn build_navigation(&self, pages: &[PageInfo]) -> Vec<NavItem> {
        let mut nav = Vec::new();
        let mut dirs: HashMap<PathBuf, Vec<NavItem>> = HashMap::new();

        for page in pages {
            let fm = page.doc.frontmatter.as_ref();

            if let Some(f) = fm {
                if !f.nav {
                    continue;
                }
            }

            let title = fm.map(|f| f.title.clone()).unwrap_or_else(|| {
                page.relative_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("Untitled")
                    .to_string()
            });

            let url_path = self.path_to_url(&page.output_path);

            let item = NavItem {
                title,
                path: url_path,
                children: Vec::new(),
                active: false,
            };

            let parent = page.relative_path.parent().unwrap_or(Path::new(""));
            dirs.entry(parent.to_path_buf()).or_default().push(item);
        }

        if let Some(root_items) = dirs.remove(&PathBuf::new()) {
            nav.extend(root_items);
        }

        // HashMap iteration order is unstable; sort so the sidebar is
        // reproducible across builds.
        let mut sections: Vec<_> = dirs.into_iter().collect();
        sections.sort_by(|a, b| a.0.cmp(&b.0));

        for (dir, items) in sections {
            let dir_name: &str = dir
                .file_name()
                .and_then(|s: &std::ffi::OsStr| s.to_str())
                .unwrap_or("Section");

            nav.push(NavItem {
                title: capitalize(dir_name),
                path: format!("{}{}/", self.config.base_url, dir.display()),
                children: items,
                active: false,
            });
        }

        nav
    }

    /// Convert output path to URL.
    fn path_to_url(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.config.output_dir).unwrap_or(path);

        let url = relative
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        if url.is_empty() {
            self.config.base_url.clone()
        } else {
            format!("{}{}/", self.config.base_url, url)
        }
    }

    /// Build a single page.
    fn build_page(&self, page: &PageInfo, nav: &[NavItem]) -> Result<(usize, usize), BuildError> {
        let (content, blocks) = self.expand_directives(&page.doc);
        let previews = blocks.len();

        // Markdown renders with markers in place of preview blocks; the
        // block HTML is substituted afterwards so blank lines in demo
        // source never terminate a CommonMark HTML block mid-panel.
        let mut content_html = render_markdown(&content);
        for (marker, block) in &blocks {
            content_html = content_html.replace(marker.as_str(), block);
        }

        let toc: Vec<TocEntry> = page
            .doc
            .toc
            .iter()
            .map(|e| TocEntry {
                title: e.title.clone(),
                id: e.id.clone(),
                level: e.level,
            })
            .collect();

        let title = page
            .doc
            .frontmatter
            .as_ref()
            .map(|f| f.title.clone())
            .unwrap_or_else(|| "Untitled".to_string());

        let context = PageContext {
            title,
            site_title: self.config.title.clone(),
            content: content_html,
            nav: nav.to_vec(),
            toc,
            base_url: self.config.base_url.clone(),
            styles: self.style_urls(),
        };

        let html = self
            .templates
            .render_page(&context)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        if let Some(parent) = page.output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
        }
        fs::write(&page.output_path, html).map_err(|e| BuildError::Write(e.to_string()))?;

        Ok((1, previews))
    }

    /// Replace preview directives in the page content with marker comments
    /// and return the rendered block HTML for each marker. Spans are
    /// replaced back to front so earlier offsets stay valid.
    fn expand_directives(&self, doc: &PageDoc) -> (String, Vec<(String, String)>) {
        let mut content = doc.content.clone();
        let mut blocks = Vec::with_capacity(doc.directives.len());

        for (index, directive) in doc.directives.iter().enumerate().rev() {
            let spec = PreviewSpec::from(directive);
            let block = render_preview_block(&self.registry, &spec);
            let marker = format!("<!--preview-block-{}-->", index);
            content.replace_range(directive.span.0..directive.span.1, &marker);
            blocks.push((marker, block));
        }

        (content, blocks)
    }

    /// Build the homepage from the card manifest.
    fn build_homepage(&self, pages: &[PageInfo], nav: &[NavItem]) -> Result<(), BuildError> {
        let index_path = self.config.output_dir.join("index.html");

        if pages.iter().any(|p| p.output_path == index_path) {
            tracing::warn!(
                "Root index page in {} is shadowed by the manifest homepage",
                self.config.docs_dir.display()
            );
        }

        let sections: Vec<GridSection> = self
            .manifest
            .groups
            .iter()
            .map(|group| GridSection {
                title: group.title.clone(),
                grid: render_card_grid(&self.registry, group),
            })
            .collect();

        let context = HomeContext {
            site_title: self.config.title.clone(),
            tagline: self.config.tagline.clone(),
            repo_url: self.config.repo_url.clone(),
            sections,
            nav: nav.to_vec(),
            base_url: self.config.base_url.clone(),
            styles: self.style_urls(),
        };

        let html = self
            .templates
            .render_home(&context)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        fs::write(&index_path, html).map_err(|e| BuildError::Write(e.to_string()))
    }

    fn style_urls(&self) -> Vec<String> {
        self.config
            .styles
            .iter()
            .map(|s| {
                let filename = Path::new(s)
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap_or("style.css");
                format!("{}assets/{}", self.config.base_url, filename)
            })
            .collect()
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::Write(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };
        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let js = AssetPipeline::generate_js();
        fs::write(assets_dir.join("main.js"), js)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        // Copy configured stylesheets
        for style_path in &self.config.styles {
            let source_path = PathBuf::from(style_path);
            if source_path.exists() {
                let filename = source_path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap_or("style.css");
                let content = fs::read_to_string(&source_path)
                    .map_err(|e| BuildError::Read(format!("Failed to read stylesheet: {}", e)))?;
                fs::write(assets_dir.join(filename), content)
                    .map_err(|e| BuildError::Write(e.to_string()))?;
            } else {
                tracing::warn!("Stylesheet not found: {}", style_path);
            }
        }

        Ok(())
    }

    /// Generate search index.
    fn generate_search_index(&self, pages: &[PageInfo]) -> Result<(), BuildError> {
        let index: Vec<serde_json::Value> = pages
            .iter()
            .map(|page| {
                let title = page
                    .doc
                    .frontmatter
                    .as_ref()
                    .map(|f| f.title.clone())
                    .unwrap_or_default();

                let description = page
                    .doc
                    .frontmatter
                    .as_ref()
                    .and_then(|f| f.description.clone())
                    .unwrap_or_default();

                let url = self.path_to_url(&page.output_path);

                let content = page
                    .doc
                    .content
                    .lines()
                    .filter(|l| !l.starts_with('#') && !l.starts_with("```") && !l.starts_with('<'))
                    .take(10)
                    .collect::<Vec<_>>()
                    .join(" ");

                serde_json::json!({
                    "title": title,
                    "description": description,
                    "url": url,
                    "content": content,
                })
            })
            .collect();

        let json = serde_json::to_string_pretty(&index)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        fs::write(self.config.output_dir.join("search-index.json"), json)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(())
    }

    /// Generate sitemap and robots.txt.
    fn generate_sitemap(&self, pages: &[PageInfo]) -> Result<(), BuildError> {
        let urls: Vec<String> = pages
            .iter()
            .map(|page| {
                let url = self.path_to_url(&page.output_path);
                format!(
                    "  <url>\n    <loc>{}{}</loc>\n  </url>",
                    self.config.base_url.trim_end_matches('/'),
                    url
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(())
    }
}

/// Render markdown to HTML.
fn render_markdown(content: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn config_for(root: &Path) -> BuildConfig {
        BuildConfig {
            docs_dir: root.join("docs"),
            showcase_dir: root.join("showcase"),
            manifest_path: root.join("showcase.toml"),
            output_dir: root.join("dist"),
            title: "Lacquer".to_string(),
            tagline: "Free-to-use UI elements.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn builds_simple_site() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(
            temp.path().join("docs/about.mdx"),
            "---\ntitle: About\n---\n# About\n",
        )
        .unwrap();

        let builder = SiteBuilder::new(config_for(temp.path()));
        let result = builder.build().unwrap();

        // One doc page plus the homepage
        assert_eq!(result.pages, 2);
        assert!(temp.path().join("dist/about/index.html").exists());
        assert!(temp.path().join("dist/index.html").exists());
        assert!(temp.path().join("dist/assets/main.css").exists());
        assert!(temp.path().join("dist/assets/main.js").exists());
    }

    #[test]
    fn expands_preview_directives() {
        let temp = tempdir().unwrap();

        let demo = temp.path().join("showcase/components/button/HeartbeatButton.tsx");
        fs::create_dir_all(demo.parent().unwrap()).unwrap();
        fs::write(
            &demo,
            "export default function HeartbeatButton() {\n  return <button className=\"animate-heartbeat\">Beat</button>\n}\n",
        )
        .unwrap();

        fs::create_dir_all(temp.path().join("docs/components")).unwrap();
        fs::write(
            temp.path().join("docs/components/button.mdx"),
            "---\ntitle: Button\n---\n\n# Button\n\n<ComponentPreview path=\"components/button/HeartbeatButton\" />\n",
        )
        .unwrap();

        let builder = SiteBuilder::new(config_for(temp.path()));
        let result = builder.build().unwrap();

        assert_eq!(result.previews, 1);

        let html =
            fs::read_to_string(temp.path().join("dist/components/button/index.html")).unwrap();
        assert!(html.contains("component-preview"));
        assert!(html.contains(r#"<button class="animate-heartbeat">Beat</button>"#));
        assert!(html.contains("data-tab=\"code\""));
        assert!(!html.contains("ComponentPreview"));
    }

    #[test]
    fn code_panel_survives_blank_lines_in_demo_source() {
        let temp = tempdir().unwrap();

        let demo = temp.path().join("showcase/components/button/HeartbeatButton.tsx");
        fs::create_dir_all(demo.parent().unwrap()).unwrap();
        fs::write(
            &demo,
            "const HeartbeatButton = () => {\n\n  const _internal_ = 1\n\n  return <button className=\"beat\">Beat</button>\n}\n\nexport default HeartbeatButton\n",
        )
        .unwrap();

        fs::create_dir_all(temp.path().join("docs/components")).unwrap();
        fs::write(
            temp.path().join("docs/components/button.mdx"),
            "---\ntitle: Button\n---\n\n# Button\n\n<ComponentPreview path=\"components/button/HeartbeatButton\" />\n",
        )
        .unwrap();

        let builder = SiteBuilder::new(config_for(temp.path()));
        builder.build().unwrap();

        let html =
            fs::read_to_string(temp.path().join("dist/components/button/index.html")).unwrap();

        // The code panel carries the full source, escaped, with nothing
        // re-parsed as markdown after the blank lines.
        let start = html.find(r#"<pre><code class="language-tsx">"#).unwrap();
        let end = html[start..].find("</code></pre>").unwrap() + start;
        let panel = &html[start..end];

        assert!(panel.contains("const _internal_ = 1"));
        assert!(panel.contains("export default HeartbeatButton"));
        assert!(panel.contains("&lt;button className=&quot;beat&quot;&gt;"));
        assert!(!panel.contains("<p>"));
        assert!(!panel.contains("<em>"));
        assert!(!html.contains("preview-block-0"));
    }

    #[test]
    fn nav_sections_are_ordered_deterministically() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs/zeta")).unwrap();
        fs::create_dir_all(temp.path().join("docs/alpha")).unwrap();
        fs::write(
            temp.path().join("docs/zeta/one.mdx"),
            "---\ntitle: One\n---\n# One\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("docs/alpha/two.mdx"),
            "---\ntitle: Two\n---\n# Two\n",
        )
        .unwrap();

        let builder = SiteBuilder::new(config_for(temp.path()));
        builder.build().unwrap();

        let html = fs::read_to_string(temp.path().join("dist/alpha/two/index.html")).unwrap();

        let alpha = html.find(">Alpha<").unwrap();
        let zeta = html.find(">Zeta<").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn homepage_renders_manifest_cards() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(
            temp.path().join("docs/about.mdx"),
            "---\ntitle: About\n---\n# About\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("showcase.toml"),
            r#"
[[group]]
title = "Components"

[[group.card]]
title = "Button"
link = "/components/button"
"#,
        )
        .unwrap();

        let builder = SiteBuilder::new(config_for(temp.path()));
        builder.build().unwrap();

        let html = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();
        assert!(html.contains("Free-to-use UI elements."));
        assert!(html.contains("card-grid"));
        assert!(html.contains(r#"href="/components/button""#));
    }

    #[test]
    fn manifest_homepage_shadows_root_index_page() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(
            temp.path().join("docs/index.mdx"),
            "---\ntitle: Old Home\n---\n# Old homepage content\n",
        )
        .unwrap();

        let builder = SiteBuilder::new(config_for(temp.path()));
        builder.build().unwrap();

        let html = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();
        assert!(!html.contains("Old homepage content"));
        assert!(html.contains("hero"));
    }

    #[test]
    fn generates_search_index() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(
            temp.path().join("docs/guide.mdx"),
            "---\ntitle: Guide\ndescription: Getting started\n---\nSearchable content here.",
        )
        .unwrap();

        let builder = SiteBuilder::new(config_for(temp.path()));
        builder.build().unwrap();

        let index =
            fs::read_to_string(temp.path().join("dist/search-index.json")).unwrap();
        assert!(index.contains("Guide"));
        assert!(index.contains("Getting started"));
    }

    #[test]
    fn slug_override_controls_output_path() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs")).unwrap();
        fs::write(
            temp.path().join("docs/deeply-named.mdx"),
            "---\ntitle: Short\nslug: s\n---\n# Short\n",
        )
        .unwrap();

        let builder = SiteBuilder::new(config_for(temp.path()));
        builder.build().unwrap();

        assert!(temp.path().join("dist/s/index.html").exists());
    }
}
