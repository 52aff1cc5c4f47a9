//! Showcase registry and preview rendering.
//!
//! This crate owns the static registry that maps showcase path identifiers to
//! demo components, the JSX-to-static-HTML projection used for preview
//! panels, and the HTML generation for preview blocks, code groups, and
//! homepage card grids.

pub mod cards;
pub mod codegroup;
pub mod preview;
pub mod registry;
pub mod render;

pub use cards::{Card, CardGroup, Manifest, ManifestError};
pub use codegroup::render_code_group;
pub use cards::render_card_grid;
pub use preview::{block_id, render_preview_block, resolve, PreviewSpec, ResolvedPreview};
pub use registry::{strip_client_directive, DemoEntry, RegistryError, ShowcaseRegistry};
pub use render::{render_demo, RenderError};
