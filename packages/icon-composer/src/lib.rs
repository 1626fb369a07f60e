//! # icon-composer
//!
//! A small library for combining two standalone SVG icons into one: a base icon and a badge
//! overlaid on top of it.
//!
//! ## How it works
//!
//! - **Extraction**: the outer `<svg>` tags of each source are stripped textually, keeping the inner
//!   markup verbatim along with the source `viewBox`
//! - **Layout**: the base icon is scaled and centered on the canvas; the badge goes bottom-right
//!   unless an explicit offset is given
//! - **Composition**: both sources become `<symbol>`s in `<defs>`, each placed once with `<use>`
//! - **PNG export**: optional rendering through an external converter (Inkscape by default)
//!
//! ## Quick Start
//!
//! ```ignore
//! use icon_composer::prelude::*;
//!
//! let options = ComposerOptions {
//!     base_path: "matrix.svg".into(),
//!     badge_path: "telegram.svg".into(),
//!     output_path: "combined.svg".into(),
//!     main_size: Size::new(400, 400),
//!     badge_size: Size::new(100, 100),
//!     main_scale: 0.9,
//!     ..Default::default()
//! };
//!
//! let result = IconComposer::new(options).run()?;
//! println!("badge at {},{}", result.layout.badge.x, result.layout.badge.y);
//! ```

pub mod cli;
pub mod composer;
pub mod geometry;
pub mod rasterizer;
pub mod svg_extractor;

// Re-export commonly used types at the root level
pub use composer::{render_document, ComposeResult, ComposerOptions, IconComposer, Role};
pub use geometry::{badge_placement, base_placement, compute_layout, Layout, Placement, Size};
pub use rasterizer::{png_path_for, InkscapeRasterizer, RasterizeError, Rasterizer, RenderRequest};
pub use svg_extractor::{extract_inner, extract_view_box, read_source, SourceGraphic};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```ignore
/// use icon_composer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        badge_placement, base_placement, compute_layout, extract_inner, extract_view_box, png_path_for,
        read_source, render_document, ComposeResult, ComposerOptions, IconComposer, InkscapeRasterizer, Layout,
        Placement, RasterizeError, Rasterizer, RenderRequest, Role, Size, SourceGraphic,
    };
}
