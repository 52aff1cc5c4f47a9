//! Asset pipeline for the generated site.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the client runtime JavaScript.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const DEFAULT_CSS: &str = r#"/* Lacquer showcase theme */

:root {
  --background: #ffffff;
  --foreground: #18181b;
  --muted: #f4f4f5;
  --muted-foreground: #71717a;
  --border: #e4e4e7;
  --card: #fafafa;
  --accent: #ef4444;
  --accent-foreground: #ffffff;
  --radius: 0.5rem;
  --sidebar-width: 280px;
  --toc-width: 200px;
  --content-max-width: 800px;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
}

.layout {
  display: grid;
  grid-template-columns: var(--sidebar-width) 1fr;
  min-height: 100vh;
}

/* Sidebar */
.sidebar {
  background: var(--muted);
  border-right: 1px solid var(--border);
  padding: 1.5rem;
  position: sticky;
  top: 0;
  height: 100vh;
  overflow-y: auto;
}

.nav-header {
  margin-bottom: 1.5rem;
}

.nav-logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--foreground);
  text-decoration: none;
}

.nav-list {
  list-style: none;
}

.nav-item {
  margin-bottom: 0.25rem;
}

.nav-item a {
  display: block;
  padding: 0.5rem 0.75rem;
  color: var(--muted-foreground);
  text-decoration: none;
  border-radius: var(--radius);
  transition: background 0.15s, color 0.15s;
}

.nav-item a:hover {
  background: var(--border);
  color: var(--foreground);
}

.nav-item.active > a {
  background: var(--accent);
  color: var(--accent-foreground);
}

.nav-children {
  list-style: none;
  margin-left: 1rem;
  margin-top: 0.25rem;
}

/* Main content */
.main {
  display: grid;
  grid-template-columns: 1fr var(--toc-width);
  gap: 2rem;
  padding: 2rem;
  max-width: calc(var(--content-max-width) + var(--toc-width) + 4rem);
}

.doc,
.home {
  max-width: var(--content-max-width);
}

.home {
  grid-column: 1 / -1;
  max-width: 1100px;
  width: 100%;
  margin: 0 auto;
}

.content h1 {
  font-size: 2.5rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.content h2 {
  font-size: 1.5rem;
  font-weight: 600;
  margin: 2rem 0 1rem;
  padding-bottom: 0.5rem;
  border-bottom: 1px solid var(--border);
}

.content p {
  margin-bottom: 1rem;
}

.content a {
  color: var(--accent);
  text-decoration: underline;
  text-underline-offset: 4px;
}

.content pre {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem;
  overflow-x: auto;
  font-family: ui-monospace, monospace;
  font-size: 0.875rem;
  margin-bottom: 1rem;
}

.content code {
  font-family: ui-monospace, monospace;
  font-size: 0.875em;
  background: var(--muted);
  padding: 0.125rem 0.375rem;
  border-radius: 0.25rem;
}

.content pre code {
  background: none;
  padding: 0;
}

/* Hero */
.hero {
  text-align: center;
  padding: 4rem 1rem 3rem;
}

.hero h1 {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: -0.025em;
}

.hero .tagline {
  color: var(--muted-foreground);
  margin: 0.5rem 0 1.5rem;
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.button {
  display: inline-block;
  padding: 0.5rem 1.25rem;
  border-radius: var(--radius);
  font-weight: 500;
  text-decoration: none;
}

.button.primary {
  background: var(--accent);
  color: var(--accent-foreground);
}

.button.primary:hover {
  opacity: 0.9;
}

.button.outline {
  border: 1px solid var(--border);
  color: var(--foreground);
}

/* Card grids */
.card-section {
  margin-bottom: 2.5rem;
}

.card-section h2 {
  font-size: 1.125rem;
  font-weight: 600;
  text-align: left;
  margin-bottom: 1rem;
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

@media (min-width: 768px) {
  .card-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

@media (min-width: 1024px) {
  .card-grid {
    grid-template-columns: repeat(4, 1fr);
  }
}

.card-link {
  text-decoration: none;
  color: inherit;
}

.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem 1rem 1rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  min-height: 180px;
  justify-content: space-between;
  transition: border-color 0.15s;
}

.card:hover {
  border-color: var(--accent);
}

.card-visual {
  display: flex;
  align-items: center;
  justify-content: center;
  flex: 1;
  overflow: hidden;
}

.card-visual img {
  max-width: 150px;
  height: auto;
  transition: transform 0.3s ease-in-out;
}

.card:hover .card-visual img {
  transform: scale(1.1);
}

.card-title {
  font-size: 0.875rem;
  font-weight: 500;
}

/* Component preview blocks */
.component-preview {
  margin: 2.5rem 0;
  width: 100%;
}

.preview-header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.preview-name {
  font-size: 1rem;
  font-weight: 500;
  margin: 0;
  border: none;
  padding: 0;
}

.preview-badges {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.badge {
  position: relative;
  font-size: 0.6875rem;
  font-weight: 600;
  padding: 0.125rem 0.5rem;
  border-radius: 999px;
  background: var(--muted);
  color: var(--muted-foreground);
  cursor: default;
}

.badge .tooltip {
  display: none;
  position: absolute;
  bottom: calc(100% + 0.375rem);
  left: 50%;
  transform: translateX(-50%);
  white-space: nowrap;
  background: var(--foreground);
  color: var(--background);
  font-weight: 400;
  padding: 0.25rem 0.5rem;
  border-radius: 0.25rem;
  z-index: 10;
}

.badge .tooltip a {
  color: var(--accent);
  text-decoration: none;
}

.badge:hover .tooltip,
.badge:focus .tooltip {
  display: block;
}

.preview-tabs {
  margin-left: auto;
  display: flex;
  gap: 0.25rem;
  background: var(--muted);
  border-radius: var(--radius);
  padding: 0.25rem;
}

.tab {
  border: none;
  background: none;
  padding: 0.25rem 0.75rem;
  font-size: 0.8125rem;
  border-radius: calc(var(--radius) - 0.125rem);
  cursor: pointer;
  color: var(--muted-foreground);
}

.tab.active {
  background: var(--background);
  color: var(--foreground);
}

.tab-panel {
  position: relative;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
}

.tab-panel[hidden] {
  display: none;
}

.preview-stage {
  display: flex;
  justify-content: center;
  min-height: 250px;
  padding: 2.5rem;
  overflow: hidden;
}

.preview-stage.items-center {
  align-items: center;
}

.preview-stage.items-start {
  align-items: flex-start;
}

.preview-stage.items-end {
  align-items: flex-end;
}

.preview-missing {
  color: var(--muted-foreground);
  font-size: 0.875rem;
}

.tab-panel pre {
  margin: 0;
  padding: 1rem;
  overflow-x: auto;
  font-family: ui-monospace, monospace;
  font-size: 0.875rem;
  background: var(--card);
}

/* Copy button */
.copy-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  padding: 0.25rem 0.75rem;
  font-size: 0.75rem;
  font-weight: 500;
  background: var(--muted);
  color: var(--foreground);
  border: none;
  border-radius: var(--radius);
  cursor: pointer;
  z-index: 5;
}

.copy-btn:hover {
  background: var(--border);
}

/* Code groups */
.code-group {
  position: relative;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  margin: 2rem 0 1rem;
}

.code-group-title {
  border-bottom: 1px solid var(--border);
  background: #27272a;
  color: #ffffff;
  padding: 0.75rem 1.25rem;
  font-size: 0.75rem;
  font-weight: 600;
}

.code-group-body {
  transition: max-height 0.5s;
}

.code-group-body.minimized {
  max-height: 300px;
  overflow: hidden;
}

.code-group-body pre {
  margin: 0;
  padding: 1rem;
  overflow-x: auto;
  font-family: ui-monospace, monospace;
  font-size: 0.875rem;
  background: var(--card);
}

.code-group-toggle {
  position: absolute;
  bottom: 0;
  width: 100%;
  padding: 0.5rem;
  border: none;
  background: rgba(24, 24, 27, 0.45);
  color: #ffffff;
  font-size: 0.8125rem;
  font-weight: 500;
  cursor: pointer;
}

.code-group-toggle:hover {
  color: var(--accent);
}

.step {
  margin: 1.5rem 0 -1.25rem;
}

.step-label {
  font-weight: 600;
}

/* Table of contents */
.toc {
  position: sticky;
  top: 2rem;
  align-self: start;
}

.toc h2 {
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--muted-foreground);
  margin-bottom: 0.75rem;
}

.toc ul {
  list-style: none;
}

.toc a {
  font-size: 0.875rem;
  color: var(--muted-foreground);
  text-decoration: none;
}

.toc a:hover {
  color: var(--foreground);
}

.toc-level-3 {
  padding-left: 1rem;
}

/* Demo animation keyframes */
@keyframes heartbeat {
  0%, 100% { transform: scale(1); }
  25% { transform: scale(1.08); }
  40% { transform: scale(1); }
  60% { transform: scale(1.08); }
}

@keyframes orbit {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

@keyframes pulse-soft {
  0%, 100% { transform: scale(1); opacity: 1; }
  50% { transform: scale(1.2); opacity: 0.8; }
}

@keyframes ticker {
  from { transform: translateX(100%); }
  to { transform: translateX(-100%); }
}

@keyframes hover-pulse {
  0%, 100% { transform: scale(1); }
  50% { transform: scale(1.05); }
}

.animate-heartbeat { animation: heartbeat 1.5s ease-in-out infinite; }
.animate-orbit { animation: orbit 1.2s linear infinite; }
.animate-pulse-soft { animation: pulse-soft 1.5s ease-in-out infinite; }
.animate-ticker { animation: ticker 8s linear infinite; }
.group-hover-pulse:hover { animation: hover-pulse 1s ease-in-out infinite; }

/* Responsive */
@media (max-width: 1024px) {
  .layout {
    grid-template-columns: 1fr;
  }

  .sidebar {
    position: fixed;
    left: -100%;
    z-index: 50;
    transition: left 0.3s;
    width: var(--sidebar-width);
  }

  .sidebar.open {
    left: 0;
  }

  .main {
    grid-template-columns: 1fr;
  }

  .toc {
    display: none;
  }
}

.menu-btn {
  display: none;
  position: fixed;
  top: 1rem;
  left: 1rem;
  z-index: 100;
  padding: 0.5rem;
  background: var(--accent);
  color: var(--accent-foreground);
  border: none;
  border-radius: var(--radius);
  cursor: pointer;
}

@media (max-width: 1024px) {
  .menu-btn {
    display: block;
  }
}
"#;

const DEFAULT_JS: &str = r#"// Lacquer runtime
(function() {
  'use strict';

  // Mobile menu toggle
  const menuBtn = document.querySelector('.menu-btn');
  const sidebar = document.querySelector('.sidebar');

  if (menuBtn && sidebar) {
    menuBtn.addEventListener('click', () => {
      sidebar.classList.toggle('open');
    });
  }

  // Highlight current nav item
  const currentPath = window.location.pathname;
  document.querySelectorAll('.nav-item a').forEach(link => {
    const href = link.getAttribute('href');
    if (href === currentPath || (currentPath.startsWith(href) && href !== '/')) {
      link.parentElement.classList.add('active');
    }
  });

  // Preview/code tab switch. Two states, preview first; selecting a tab
  // swaps which panel is visible.
  document.querySelectorAll('.component-preview').forEach(block => {
    const tabs = block.querySelectorAll('.tab');
    const panels = block.querySelectorAll('.tab-panel');

    tabs.forEach(tab => {
      tab.addEventListener('click', () => {
        const target = tab.getAttribute('data-tab');

        tabs.forEach(t => {
          const selected = t === tab;
          t.classList.toggle('active', selected);
          t.setAttribute('aria-selected', selected ? 'true' : 'false');
        });
        panels.forEach(panel => {
          panel.hidden = panel.getAttribute('data-panel') !== target;
        });
      });
    });
  });

  // Code group expand/collapse. Alternates the constrained state on each
  // activation; groups without a toggle always render full height.
  document.querySelectorAll('.code-group-toggle').forEach(btn => {
    btn.addEventListener('click', () => {
      const body = btn.parentElement.querySelector('.code-group-body');
      if (!body) return;

      const minimized = body.classList.toggle('minimized');
      body.setAttribute('data-minimized', minimized ? 'true' : 'false');
      btn.textContent = minimized ? 'Expand' : 'Collapse';
    });
  });

  // Copy-to-clipboard, best effort.
  document.querySelectorAll('.copy-btn').forEach(btn => {
    btn.addEventListener('click', async () => {
      const block = btn.closest('.component-preview');
      const code = block ? block.querySelector('[data-panel="code"] code') : null;
      const text = code ? code.textContent : '';

      try {
        await navigator.clipboard.writeText(text || '');
        btn.textContent = 'Copied!';
      } catch (err) {
        btn.textContent = 'Error';
      }
      setTimeout(() => { btn.textContent = 'Copy'; }, 2000);
    });
  });
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains(".card-grid"));
        assert!(css.contains(".component-preview"));
        assert!(css.contains("@keyframes heartbeat"));
    }

    #[test]
    fn generates_js() {
        let js = AssetPipeline::generate_js();
        assert!(js.contains("data-tab"));
        assert!(js.contains("code-group-toggle"));
        assert!(js.contains("clipboard"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.card {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".card"));
    }
}
