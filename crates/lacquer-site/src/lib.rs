//! Static site builder for lacquer showcase sites.
//!
//! Turns a docs directory, a showcase directory, and a card manifest into a
//! static site: a homepage of categorized card grids plus one page per
//! document, with preview directives expanded into preview blocks.

pub mod assets;
pub mod builder;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
