//! Template engine for rendering site pages.

use minijinja::{context, Environment};

/// A navigation item.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NavItem {
    /// Display title
    pub title: String,
    /// URL path
    pub path: String,
    /// Child items
    pub children: Vec<NavItem>,
    /// Whether this is the active page
    pub active: bool,
}

/// A table of contents entry.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TocEntry {
    /// Heading text
    pub title: String,
    /// Anchor ID
    pub id: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// Context for rendering a document page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Page title
    pub title: String,
    /// Site title
    pub site_title: String,
    /// Rendered content HTML
    pub content: String,
    /// Navigation items
    pub nav: Vec<NavItem>,
    /// Table of contents
    pub toc: Vec<TocEntry>,
    /// Base URL
    pub base_url: String,
    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
}

/// One card-grid section of the homepage.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GridSection {
    /// Group title (Components, Animations, ...)
    pub title: String,
    /// Pre-rendered card grid HTML
    pub grid: String,
}

/// Context for rendering the homepage.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HomeContext {
    /// Site title
    pub site_title: String,
    /// Hero tagline
    pub tagline: String,
    /// Repository URL for the outbound hero link (empty hides the link)
    pub repo_url: String,
    /// Card grid sections
    pub sections: Vec<GridSection>,
    /// Navigation items
    pub nav: Vec<NavItem>,
    /// Base URL
    pub base_url: String,
    /// Paths to extra CSS stylesheets to include
    pub styles: Vec<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");
        env.add_template_owned("doc.html".to_string(), DOC_TEMPLATE.to_string())
            .expect("Failed to add doc template");
        env.add_template_owned("home.html".to_string(), HOME_TEMPLATE.to_string())
            .expect("Failed to add home template");
        env.add_template_owned("nav.html".to_string(), NAV_TEMPLATE.to_string())
            .expect("Failed to add nav template");

        Self { env }
    }

    /// Render a document page.
    pub fn render_page(&self, ctx: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("doc.html")?;

        tmpl.render(context! {
            title => &ctx.title,
            site_title => &ctx.site_title,
            content => &ctx.content,
            nav => &ctx.nav,
            toc => &ctx.toc,
            base_url => &ctx.base_url,
            styles => &ctx.styles,
        })
    }

    /// Render the homepage.
    pub fn render_home(&self, ctx: &HomeContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("home.html")?;

        tmpl.render(context! {
            title => "Home",
            site_title => &ctx.site_title,
            tagline => &ctx.tagline,
            repo_url => &ctx.repo_url,
            sections => &ctx.sections,
            nav => &ctx.nav,
            base_url => &ctx.base_url,
            styles => &ctx.styles,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}<link rel="stylesheet" href="{{ base_url }}assets/main.css">
</head>
<body>
  <div class="layout">
    <nav class="sidebar">
      {% include "nav.html" %}
    </nav>
    <main class="main">
      {% block content %}{% endblock %}
    </main>
  </div>
  <script src="{{ base_url }}assets/main.js"></script>
</body>
</html>"##;

const DOC_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="doc">
  <div class="content">
    {{ content | safe }}
  </div>
</article>

{% if toc %}
<aside class="toc">
  <h2>On this page</h2>
  <ul>
  {% for entry in toc %}
    <li class="toc-level-{{ entry.level }}">
      <a href="#{{ entry.id }}">{{ entry.title }}</a>
    </li>
  {% endfor %}
  </ul>
</aside>
{% endif %}
{% endblock %}"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="home">
  <div class="hero">
    <h1>{{ site_title }}</h1>
    <p class="tagline">{{ tagline }}</p>
    <div class="hero-actions">
      <a class="button primary" href="{{ base_url }}components/">Get Started</a>
      {% if repo_url %}<a class="button outline" href="{{ repo_url }}" target="_blank" rel="noreferrer">Star on GitHub</a>{% endif %}
    </div>
  </div>
  {% for section in sections %}
  <section class="card-section">
    <h2>{{ section.title }}</h2>
    {{ section.grid | safe }}
  </section>
  {% endfor %}
</article>
{% endblock %}"##;

const NAV_TEMPLATE: &str = r##"<div class="nav-header">
  <a href="{{ base_url }}" class="nav-logo">{{ site_title }}</a>
</div>
<ul class="nav-list">
{% for item in nav %}
  <li class="nav-item{% if item.active %} active{% endif %}">
    <a href="{{ item.path }}">{{ item.title }}</a>
    {% if item.children %}
    <ul class="nav-children">
      {% for child in item.children %}
      <li class="nav-item{% if child.active %} active{% endif %}">
        <a href="{{ child.path }}">{{ child.title }}</a>
      </li>
      {% endfor %}
    </ul>
    {% endif %}
  </li>
{% endfor %}
</ul>"##;
