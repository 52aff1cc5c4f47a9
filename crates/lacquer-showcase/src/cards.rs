//! Card manifest and homepage card grids.
//!
//! `showcase.toml` declares groups of cards; each card links a route and
//! shows either a live demo (resolved through the registry) or a static
//! image. A card with neither renders an empty tile.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::preview::element_or_placeholder;
use crate::registry::ShowcaseRegistry;
use crate::render::html_escape;

/// The showcase manifest: ordered card groups for the homepage.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Manifest {
    #[serde(default, rename = "group")]
    pub groups: Vec<CardGroup>,
}

/// A titled group of cards (e.g. Components, Animations, Effects).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CardGroup {
    pub title: String,

    #[serde(default, rename = "card")]
    pub cards: Vec<Card>,
}

/// A single card tile.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Card {
    /// Tile label.
    pub title: String,

    /// Route the tile links to (e.g. `/components/button`).
    pub link: String,

    /// Showcase path id for a live demo visual. Takes precedence over
    /// `image` when both are set.
    #[serde(default)]
    pub demo: Option<String>,

    /// Static image visual.
    #[serde(default)]
    pub image: Option<ImageRef>,
}

/// An image rendered at fixed pixel dimensions.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ImageRef {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

impl Manifest {
    /// Load the manifest from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ManifestError::Read(path.display().to_string(), e))?;
        Self::parse(&content)
    }

    /// Parse the manifest from TOML text.
    pub fn parse(content: &str) -> Result<Self, ManifestError> {
        toml::from_str(content).map_err(|e| ManifestError::Parse(e.to_string()))
    }
}

/// Errors that can occur when loading the manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {0}: {1}")]
    Read(String, #[source] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    Parse(String),
}

/// Render one group as a card grid: exactly one link per card, labeled with
/// its title and pointing at its configured route.
pub fn render_card_grid(registry: &ShowcaseRegistry, group: &CardGroup) -> String {
    let mut out = String::from(r#"<div class="card-grid">"#);

    for card in &group.cards {
        out.push_str(&format!(
            r#"<a href="{}" class="card-link"><div class="card"><div class="card-visual">{}</div><div class="card-title">{}</div></div></a>"#,
            html_escape(&card.link),
            render_visual(registry, card),
            html_escape(&card.title),
        ));
    }

    out.push_str("</div>");
    out
}

fn render_visual(registry: &ShowcaseRegistry, card: &Card) -> String {
    if let Some(demo) = &card.demo {
        return element_or_placeholder(registry, demo);
    }
    if let Some(image) = &card.image {
        return format!(
            r#"<img src="{}" alt="{}" width="{}" height="{}">"#,
            html_escape(&image.src),
            html_escape(&card.title),
            image.width,
            image.height,
        );
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
[[group]]
title = "Components"

[[group.card]]
title = "Button"
link = "/components/button"
demo = "components/button/HeartbeatButton"

[[group.card]]
title = "Input"
link = "/components/input"
image = { src = "/images/ui/input.png", width = 200, height = 200 }

[[group]]
title = "Animations"

[[group.card]]
title = "Hover"
link = "/animations/hover"
"#;

    #[test]
    fn parses_manifest() {
        let manifest = Manifest::parse(MANIFEST).unwrap();

        assert_eq!(manifest.groups.len(), 2);
        assert_eq!(manifest.groups[0].title, "Components");
        assert_eq!(manifest.groups[0].cards.len(), 2);

        let button = &manifest.groups[0].cards[0];
        assert_eq!(button.demo.as_deref(), Some("components/button/HeartbeatButton"));
        assert!(button.image.is_none());

        let input = &manifest.groups[0].cards[1];
        assert!(input.demo.is_none());
        assert_eq!(input.image.as_ref().unwrap().width, 200);
    }

    #[test]
    fn rejects_malformed_manifest() {
        let result = Manifest::parse("[[group]]\ncard = 3");

        assert!(matches!(result, Err(ManifestError::Parse(_))));
    }

    #[test]
    fn grid_has_one_link_per_card() {
        let manifest = Manifest::parse(MANIFEST).unwrap();
        let registry = ShowcaseRegistry::new();

        let html = render_card_grid(&registry, &manifest.groups[0]);

        assert_eq!(html.matches("<a href=").count(), 2);
        assert!(html.contains(r#"href="/components/button""#));
        assert!(html.contains(r#"href="/components/input""#));
        assert!(html.contains("Button"));
        assert!(html.contains("Input"));
    }

    #[test]
    fn demo_visual_resolves_through_registry() {
        let temp = tempdir().unwrap();
        let demo = temp.path().join("components/button/HeartbeatButton.tsx");
        fs::create_dir_all(demo.parent().unwrap()).unwrap();
        fs::write(
            &demo,
            "export default function HeartbeatButton() {\n  return <button className=\"beat\">Beat</button>\n}\n",
        )
        .unwrap();

        let mut registry = ShowcaseRegistry::new();
        registry.scan(temp.path()).unwrap();

        let manifest = Manifest::parse(MANIFEST).unwrap();
        let html = render_card_grid(&registry, &manifest.groups[0]);

        assert!(html.contains(r#"<button class="beat">Beat</button>"#));
    }

    #[test]
    fn missing_demo_degrades_to_placeholder() {
        let manifest = Manifest::parse(MANIFEST).unwrap();
        let registry = ShowcaseRegistry::new();

        let html = render_card_grid(&registry, &manifest.groups[0]);

        assert!(html.contains("not found"));
        assert!(html.contains("HeartbeatButton"));
    }

    #[test]
    fn image_visual_renders_at_fixed_dimensions() {
        let manifest = Manifest::parse(MANIFEST).unwrap();
        let registry = ShowcaseRegistry::new();

        let html = render_card_grid(&registry, &manifest.groups[0]);

        assert!(html.contains(r#"<img src="/images/ui/input.png" alt="Input" width="200" height="200">"#));
    }

    #[test]
    fn card_without_visual_renders_empty_tile() {
        let manifest = Manifest::parse(MANIFEST).unwrap();
        let registry = ShowcaseRegistry::new();

        let html = render_card_grid(&registry, &manifest.groups[1]);

        assert!(html.contains(r#"<div class="card-visual"></div>"#));
        assert!(html.contains("Hover"));
    }
}
