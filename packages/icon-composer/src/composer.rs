//! Builds the combined SVG: both sources become `<symbol>`s in `<defs>`, each placed once with `<use>`.
use crate::geometry::{compute_layout, Layout, Placement, Size};
use crate::rasterizer::{png_path_for, InkscapeRasterizer, Rasterizer, RenderRequest};
use crate::svg_extractor::{read_source, SourceGraphic};
use anyhow::{anyhow, Result};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Which input a symbol came from; doubles as the symbol id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  Base,
  Badge,
}

impl Role {
  pub fn symbol_id(self) -> &'static str {
    match self {
      Role::Base => "base",
      Role::Badge => "badge",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol_id())
  }
}

/// Configuration for one compose run.
pub struct ComposerOptions {
  pub base_path: PathBuf,
  pub badge_path: PathBuf,
  pub output_path: PathBuf,
  pub main_size: Size,
  pub badge_size: Size,
  pub badge_offset: Option<(i64, i64)>,
  pub main_scale: f64,
  pub export_png: bool,
  pub verbose: bool,
}

impl Default for ComposerOptions {
  fn default() -> Self {
    Self {
      base_path: PathBuf::from("base.svg"),
      badge_path: PathBuf::from("badge.svg"),
      output_path: PathBuf::from("combined.svg"),
      main_size: Size::new(24, 24),
      badge_size: Size::new(6, 6),
      badge_offset: None,
      main_scale: 1.0,
      export_png: false,
      verbose: true,
    }
  }
}

/// Result returned after a compose run.
#[derive(Debug, Clone)]
pub struct ComposeResult {
  pub svg_path: PathBuf,
  pub png_path: Option<PathBuf>,
  pub layout: Layout,
}

fn symbol(role: Role, view_box: &str, inner: &str) -> String {
  format!(
    "    <symbol id=\"{}\" viewBox=\"{}\">\n{}\n    </symbol>\n",
    role.symbol_id(),
    view_box,
    inner
  )
}

fn use_element(role: Role, placement: &Placement) -> String {
  format!(
    "  <use href=\"#{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>\n",
    role.symbol_id(),
    placement.x,
    placement.y,
    placement.width,
    placement.height
  )
}

/// Serializes the combined document.
///
/// A source without a `viewBox` gets one sized to its placement on the canvas.
pub fn render_document(layout: &Layout, base: &SourceGraphic, badge: &SourceGraphic) -> String {
  let base_view_box = base.view_box_or(layout.base.width, layout.base.height);
  let badge_view_box = badge.view_box_or(layout.badge.width, layout.badge.height);

  let mut svg = format!(
    "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n",
    layout.canvas.width, layout.canvas.height
  );
  svg.push_str("  <defs>\n");
  svg.push_str(&symbol(Role::Base, &base_view_box, &base.inner));
  svg.push_str(&symbol(Role::Badge, &badge_view_box, &badge.inner));
  svg.push_str("  </defs>\n");
  svg.push_str(&use_element(Role::Base, &layout.base));
  svg.push_str(&use_element(Role::Badge, &layout.badge));
  svg.push_str("</svg>\n");
  svg
}

/// Drives a run: read both sources, lay them out, write the SVG and optionally export a PNG.
pub struct IconComposer {
  options: ComposerOptions,
  rasterizer: Box<dyn Rasterizer>,
}

impl IconComposer {
  pub fn new(options: ComposerOptions) -> Self {
    Self::with_rasterizer(options, Box::new(InkscapeRasterizer::new()))
  }

  pub fn with_rasterizer(options: ComposerOptions, rasterizer: Box<dyn Rasterizer>) -> Self {
    Self {
      options,
      rasterizer,
    }
  }

  pub fn options(&self) -> &ComposerOptions {
    &self.options
  }

  fn read_role(&self, role: Role) -> Result<SourceGraphic> {
    let path = match role {
      Role::Base => &self.options.base_path,
      Role::Badge => &self.options.badge_path,
    };

    if self.options.verbose {
      println!("Reading {} source: {}", role, path.display());
    }

    read_source(path)
  }

  pub fn layout(&self) -> Layout {
    compute_layout(
      self.options.main_size,
      self.options.badge_size,
      self.options.main_scale,
      self.options.badge_offset,
    )
  }

  /// Writes the combined SVG, then runs the PNG export when enabled.
  ///
  /// Both sources are read before the output is touched, so a missing input leaves no file behind.
  /// A failed export still leaves the written SVG in place.
  pub fn run(&self) -> Result<ComposeResult> {
    let base = self.read_role(Role::Base)?;
    let badge = self.read_role(Role::Badge)?;

    let layout = self.layout();
    if self.options.verbose {
      println!(
        "Base placement: x={} y={} {}x{}",
        layout.base.x, layout.base.y, layout.base.width, layout.base.height
      );
      println!(
        "Badge placement: x={} y={} {}x{}",
        layout.badge.x, layout.badge.y, layout.badge.width, layout.badge.height
      );
    }

    let document = render_document(&layout, &base, &badge);
    let svg_path = self.options.output_path.clone();
    fs::write(&svg_path, document)
      .map_err(|e| anyhow!("Failed to write {}: {}", svg_path.display(), e))?;

    if self.options.verbose {
      println!("SVG exported: {}", svg_path.display());
    }

    let png_path = if self.options.export_png {
      Some(self.export_png(&layout)?)
    } else {
      None
    };

    Ok(ComposeResult {
      svg_path,
      png_path,
      layout,
    })
  }

  fn export_png(&self, layout: &Layout) -> Result<PathBuf> {
    let request = RenderRequest {
      svg_path: self.options.output_path.clone(),
      png_path: png_path_for(&self.options.output_path),
      width: layout.canvas.width,
      height: layout.canvas.height,
    };

    if self.options.verbose {
      println!("Exporting PNG: {}", request.png_path.display());
    }

    self
      .rasterizer
      .render(&request)
      .map_err(|e| anyhow!("PNG export failed: {}", e))?;

    if self.options.verbose {
      println!("PNG exported: {}", request.png_path.display());
    }

    Ok(request.png_path)
  }
}
