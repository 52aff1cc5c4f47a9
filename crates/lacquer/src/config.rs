//! Configuration file loading (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use lacquer_site::BuildConfig;

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub showcase: ShowcaseConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_docs_dir")]
    pub docs: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub repo_url: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Paths to CSS stylesheets to include
    pub styles: Option<Vec<String>>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs: default_docs_dir(),
            output: default_output(),
            title: default_title(),
            tagline: String::new(),
            repo_url: String::new(),
            base_url: default_base_url(),
            styles: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShowcaseConfig {
    #[serde(default = "default_showcase_dir")]
    pub dir: String,
    #[serde(default = "default_manifest")]
    pub manifest: String,
    /// Shared utils module shown by recipe previews
    pub utils: Option<String>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            dir: default_showcase_dir(),
            manifest: default_manifest(),
            utils: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
        }
    }
}

fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_title() -> String {
    "Showcase".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_showcase_dir() -> String {
    "showcase".to_string()
}
fn default_manifest() -> String {
    "showcase.toml".to_string()
}
fn default_minify() -> bool {
    true
}

impl ConfigFile {
    /// Load configuration from site.toml if it exists.
    ///
    /// Returns an error if the config file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
            let config: ConfigFile = toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
            tracing::info!("Loaded config from {}", path.display());
            return Ok(config);
        }
        Ok(ConfigFile::default())
    }

    /// Convert to a build configuration.
    pub fn into_build_config(self) -> BuildConfig {
        BuildConfig {
            docs_dir: PathBuf::from(&self.site.docs),
            showcase_dir: PathBuf::from(&self.showcase.dir),
            utils_file: self.showcase.utils.map(PathBuf::from),
            manifest_path: PathBuf::from(&self.showcase.manifest),
            output_dir: PathBuf::from(&self.site.output),
            minify: self.build.minify,
            base_url: self.site.base_url,
            title: self.site.title,
            tagline: self.site.tagline,
            repo_url: self.site.repo_url,
            styles: self.site.styles.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: ConfigFile = toml::from_str(
            r#"
[site]
docs = "pages"
title = "Polish UI"
tagline = "Free-to-use UI elements."
repo_url = "https://github.com/example/ui"

[showcase]
dir = "demos"
utils = "lib/utils.ts"

[build]
minify = false
"#,
        )
        .unwrap();

        let build = config.into_build_config();

        assert_eq!(build.docs_dir, PathBuf::from("pages"));
        assert_eq!(build.showcase_dir, PathBuf::from("demos"));
        assert_eq!(build.utils_file, Some(PathBuf::from("lib/utils.ts")));
        assert_eq!(build.title, "Polish UI");
        assert!(!build.minify);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();
        let build = config.into_build_config();

        assert_eq!(build.docs_dir, PathBuf::from("docs"));
        assert_eq!(build.showcase_dir, PathBuf::from("showcase"));
        assert_eq!(build.manifest_path, PathBuf::from("showcase.toml"));
        assert!(build.minify);
        assert_eq!(build.base_url, "/");
    }
}
