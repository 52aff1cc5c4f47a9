//! Initialize a showcase site in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing lacquer...");

    let docs_dir = Path::new("docs");

    if docs_dir.exists() {
        if !yes {
            tracing::warn!("docs/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(docs_dir).context("Failed to create docs directory")?;
    }

    let config_path = Path::new("site.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write site.toml")?;
        tracing::info!("Created site.toml");
    }

    let manifest_path = Path::new("showcase.toml");
    if !manifest_path.exists() || yes {
        fs::write(manifest_path, DEFAULT_MANIFEST).context("Failed to write showcase.toml")?;
        tracing::info!("Created showcase.toml");
    }

    let getting_started_path = docs_dir.join("getting-started.mdx");
    if !getting_started_path.exists() || yes {
        fs::write(&getting_started_path, DEFAULT_GETTING_STARTED)
            .context("Failed to write getting-started.mdx")?;
        tracing::info!("Created docs/getting-started.mdx");
    }

    let components_dir = docs_dir.join("components");
    if !components_dir.exists() {
        fs::create_dir_all(&components_dir).context("Failed to create components directory")?;
    }

    let button_path = components_dir.join("button.mdx");
    if !button_path.exists() || yes {
        fs::write(&button_path, DEFAULT_BUTTON_DOC).context("Failed to write button.mdx")?;
        tracing::info!("Created docs/components/button.mdx");
    }

    let demo_path = Path::new("showcase/components/button/HeartbeatButton.tsx");
    if !demo_path.exists() || yes {
        fs::create_dir_all(demo_path.parent().unwrap())
            .context("Failed to create showcase directory")?;
        fs::write(demo_path, DEFAULT_DEMO).context("Failed to write HeartbeatButton.tsx")?;
        tracing::info!("Created showcase/components/button/HeartbeatButton.tsx");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'lacquer dev' to start the development server.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Lacquer Configuration

[site]
# Source directory for doc pages
docs = "docs"

# Output directory for the built site
output = "dist"

# Site title shown in the homepage hero and navigation
title = "My Showcase"

# Tagline shown under the title on the homepage
tagline = "Free-to-use UI elements."

# Repository link for the homepage hero (leave empty to hide)
repo_url = ""

# Base URL (for deployment)
base_url = "/"

[showcase]
# Directory containing your demo components
dir = "showcase"

# Card manifest for the homepage
manifest = "showcase.toml"

# Shared utils module shown by recipe previews
# utils = "lib/utils.ts"

[build]
# Enable minification
minify = true
"#;

const DEFAULT_MANIFEST: &str = r#"# Homepage card groups

[[group]]
title = "Components"

[[group.card]]
title = "Button"
link = "/components/button"
demo = "components/button/HeartbeatButton"
"#;

const DEFAULT_GETTING_STARTED: &str = r#"---
title: Getting Started
order: 1
---

# Getting Started

This guide will help you set up your showcase site.

## Project Structure

```
your-project/
├── docs/                  # Doc pages
│   └── components/        # Component pages
├── showcase/              # Demo components (.tsx)
├── showcase.toml          # Homepage card manifest
└── site.toml              # Configuration
```

## Writing Pages

Create `.mdx` files in the `docs/` directory. Each file needs frontmatter:

```mdx
---
title: Page Title
order: 1
---

# Your Content Here
```

## Component Previews

Drop a self-closing ComponentPreview tag anywhere in a page to show a demo
with its source. Point its `path` attribute at a file under `showcase/`,
without the extension, e.g. `components/button/HeartbeatButton`. Optional
attributes: `align` (`center`, `start`, `end`), `usingFramer`, and
`usingCn` for the copy-paste recipe layout.

## Development

Start the dev server:

```bash
lacquer dev
```

## Building

Build for production:

```bash
lacquer build
```
"#;

const DEFAULT_BUTTON_DOC: &str = r#"---
title: Button
order: 1
---

# Button

Press-ready buttons for your next project.

<ComponentPreview path="components/button/HeartbeatButton" />
"#;

const DEFAULT_DEMO: &str = r#"const HeartbeatButton = () => {
  return (
    <button className="animate-heartbeat rounded-full bg-red-500 px-4 py-2 text-white">
      Beat
    </button>
  )
}

export default HeartbeatButton
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn scaffolds_project_files() {
        let temp = tempdir().unwrap();
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp.path()).unwrap();

        let result = run(true).await;

        std::env::set_current_dir(original).unwrap();
        result.unwrap();

        assert!(temp.path().join("site.toml").exists());
        assert!(temp.path().join("showcase.toml").exists());
        assert!(temp.path().join("docs/components/button.mdx").exists());
        assert!(temp
            .path()
            .join("showcase/components/button/HeartbeatButton.tsx")
            .exists());
    }
}
