//! Static showcase registry.
//!
//! Scans the showcase directory once per build and maps path identifiers
//! (e.g. `components/loaders/OrbitingLoader`) to demo entries holding the
//! raw source and the display code. Pages never reach into the filesystem at
//! render time; a path that is absent from the registry degrades to a
//! placeholder at the preview layer.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A registered demo component.
#[derive(Debug, Clone)]
pub struct DemoEntry {
    /// Path identifier relative to the showcase root, without extension.
    pub id: String,

    /// Display name derived from the last path segment
    /// (`HeartbeatButton` -> `Heartbeat Button`).
    pub name: String,

    /// Source file path.
    pub source_path: PathBuf,

    /// Raw source text.
    pub source: String,

    /// Display code: source with a leading client-directive line stripped.
    pub code: String,
}

/// A registry of demo components keyed by path identifier.
#[derive(Debug, Default)]
pub struct ShowcaseRegistry {
    demos: HashMap<String, DemoEntry>,
    utils: Option<String>,
}

impl ShowcaseRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a showcase directory and populate the registry.
    ///
    /// Returns the number of demos registered.
    pub fn scan(&mut self, showcase_dir: &Path) -> Result<usize, RegistryError> {
        if !showcase_dir.exists() {
            return Err(RegistryError::DirectoryNotFound(
                showcase_dir.display().to_string(),
            ));
        }

        let mut count = 0;

        for entry in WalkDir::new(showcase_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "tsx" && ext != "jsx" {
                continue;
            }

            // Skip test files, stories, and index files.
            let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if filename.contains(".test.")
                || filename.contains(".spec.")
                || filename.contains(".stories.")
                || filename == "index.tsx"
                || filename == "index.jsx"
            {
                continue;
            }

            let source = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable demo");
                    continue;
                }
            };

            let Some(id) = path_id(showcase_dir, path) else {
                continue;
            };

            let code = strip_client_directive(&source);

            self.demos.insert(
                id.clone(),
                DemoEntry {
                    name: format_name(&id),
                    id,
                    source_path: path.to_path_buf(),
                    source,
                    code,
                },
            );
            count += 1;
        }

        Ok(count)
    }

    /// Load the shared utils file shown by the copy-paste recipe layout.
    pub fn load_utils(&mut self, utils_path: &Path) -> Result<(), RegistryError> {
        let source = fs::read_to_string(utils_path)
            .map_err(|e| RegistryError::UtilsUnreadable(utils_path.display().to_string(), e))?;
        self.utils = Some(strip_client_directive(&source));
        Ok(())
    }

    /// Look up a demo by its path identifier.
    pub fn get(&self, id: &str) -> Option<&DemoEntry> {
        self.demos.get(id)
    }

    /// Check whether a demo is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.demos.contains_key(id)
    }

    /// All registered path identifiers.
    pub fn ids(&self) -> Vec<&str> {
        self.demos.keys().map(|k| k.as_str()).collect()
    }

    /// Number of registered demos.
    pub fn len(&self) -> usize {
        self.demos.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// The shared utils source, when configured.
    pub fn utils_source(&self) -> Option<&str> {
        self.utils.as_deref()
    }
}

/// Compute the path identifier for a demo file.
fn path_id(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let without_ext = relative.with_extension("");

    // Normalize to forward slashes so identifiers match page directives on
    // every platform.
    let id = without_ext
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join("/");

    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Derive a display name from a path identifier.
///
/// Takes the last segment and splits camel-case humps with spaces.
pub fn format_name(id: &str) -> String {
    let segment = id.rsplit('/').next().unwrap_or(id);

    let mut name = String::with_capacity(segment.len() + 4);
    let mut prev_lower = false;
    for c in segment.chars() {
        if c.is_uppercase() && prev_lower {
            name.push(' ');
        }
        prev_lower = c.is_lowercase();
        name.push(c);
    }
    name
}

/// Strip a leading `'use client'` directive line for cleaner display.
pub fn strip_client_directive(source: &str) -> String {
    let trimmed = source.trim_start_matches('\u{feff}');
    if let Some(first_line) = trimmed.lines().next() {
        let directive = first_line.trim();
        if directive == "'use client'" || directive == "\"use client\"" {
            let rest = &trimmed[first_line.len()..];
            return rest.strip_prefix('\n').unwrap_or(rest).to_string();
        }
    }
    trimmed.to_string()
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Showcase directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read utils file {0}: {1}")]
    UtilsUnreadable(String, #[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_demo(root: &Path, rel: &str, source: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, source).unwrap();
    }

    #[test]
    fn scans_showcase_directory() {
        let temp = tempdir().unwrap();
        let root = temp.path();

        write_demo(
            root,
            "components/button/HeartbeatButton.tsx",
            "'use client'\nexport default function HeartbeatButton() {\n  return <button>Beat</button>\n}\n",
        );
        write_demo(
            root,
            "components/loaders/OrbitingLoader.tsx",
            "export default function OrbitingLoader() {\n  return <div className=\"orbit\" />\n}\n",
        );

        let mut registry = ShowcaseRegistry::new();
        let count = registry.scan(root).unwrap();

        assert_eq!(count, 2);
        assert!(registry.contains("components/button/HeartbeatButton"));
        assert!(registry.contains("components/loaders/OrbitingLoader"));
        assert!(!registry.contains("components/button/heartbeatbutton"));
    }

    #[test]
    fn entry_strips_client_directive_from_code() {
        let temp = tempdir().unwrap();
        let root = temp.path();

        write_demo(
            root,
            "components/toggle/SimpleToggle.tsx",
            "'use client'\nexport default function SimpleToggle() {\n  return <input type=\"checkbox\" />\n}\n",
        );

        let mut registry = ShowcaseRegistry::new();
        registry.scan(root).unwrap();

        let entry = registry.get("components/toggle/SimpleToggle").unwrap();
        assert!(entry.source.starts_with("'use client'"));
        assert!(entry.code.starts_with("export default"));
    }

    #[test]
    fn skips_test_and_story_files() {
        let temp = tempdir().unwrap();
        let root = temp.path();

        write_demo(root, "button.test.tsx", "export default () => <b />");
        write_demo(root, "button.stories.tsx", "export default () => <b />");
        write_demo(root, "index.tsx", "export default () => <b />");

        let mut registry = ShowcaseRegistry::new();
        let count = registry.scan(root).unwrap();

        assert_eq!(count, 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn errors_on_missing_directory() {
        let mut registry = ShowcaseRegistry::new();
        let result = registry.scan(Path::new("/nonexistent/showcase"));

        assert!(matches!(result, Err(RegistryError::DirectoryNotFound(_))));
    }

    #[test]
    fn loads_utils_source() {
        let temp = tempdir().unwrap();
        let utils = temp.path().join("utils.ts");
        fs::write(&utils, "export function cn() {}\n").unwrap();

        let mut registry = ShowcaseRegistry::new();
        registry.load_utils(&utils).unwrap();

        assert_eq!(registry.utils_source(), Some("export function cn() {}\n"));
    }

    #[test]
    fn format_name_splits_camel_humps() {
        assert_eq!(format_name("components/button/HeartbeatButton"), "Heartbeat Button");
        assert_eq!(format_name("components/text/TextTicker"), "Text Ticker");
        assert_eq!(format_name("SimpleToggle"), "Simple Toggle");
        assert_eq!(format_name("components/loaders/loader"), "loader");
        // A digit does not open a hump boundary.
        assert_eq!(format_name("components/button/3DButton"), "3DButton");
        assert_eq!(format_name("Button3D"), "Button3D");
    }

    #[test]
    fn strip_client_directive_variants() {
        assert_eq!(strip_client_directive("'use client'\ncode"), "code");
        assert_eq!(strip_client_directive("\"use client\"\ncode"), "code");
        assert_eq!(strip_client_directive("code"), "code");
        assert_eq!(strip_client_directive("'use client'"), "");
    }
}
