//! PNG export through an external converter.
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Converter used when none is configured.
pub const DEFAULT_RASTERIZER_PROGRAM: &str = "inkscape";

/// One SVG-to-PNG conversion at an explicit pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
  pub svg_path: PathBuf,
  pub png_path: PathBuf,
  pub width: i64,
  pub height: i64,
}

#[derive(Debug, Error)]
pub enum RasterizeError {
  #[error("failed to launch {program}: {source}")]
  Launch {
    program: String,
    #[source]
    source: std::io::Error,
  },
  #[error("{program} exited with {status}")]
  Failed { program: String, status: String },
}

pub trait Rasterizer {
  fn render(&self, request: &RenderRequest) -> Result<(), RasterizeError>;
}

/// Shells out to the Inkscape command line and blocks until it exits.
#[derive(Debug, Clone)]
pub struct InkscapeRasterizer {
  program: PathBuf,
}

impl InkscapeRasterizer {
  pub fn new() -> Self {
    Self::with_program(DEFAULT_RASTERIZER_PROGRAM)
  }

  pub fn with_program(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
    }
  }

  pub fn program(&self) -> &Path {
    &self.program
  }

  /// Builds the converter invocation without running it.
  pub fn command(&self, request: &RenderRequest) -> Command {
    let mut command = Command::new(&self.program);
    command
      .arg(&request.svg_path)
      .arg("--export-type=png")
      .arg("--export-filename")
      .arg(&request.png_path)
      .arg("--export-width")
      .arg(request.width.to_string())
      .arg("--export-height")
      .arg(request.height.to_string());
    command
  }
}

impl Default for InkscapeRasterizer {
  fn default() -> Self {
    Self::new()
  }
}

impl Rasterizer for InkscapeRasterizer {
  fn render(&self, request: &RenderRequest) -> Result<(), RasterizeError> {
    let program = self.program.display().to_string();

    let status = self
      .command(request)
      .status()
      .map_err(|source| RasterizeError::Launch {
        program: program.clone(),
        source,
      })?;

    if !status.success() {
      return Err(RasterizeError::Failed {
        program,
        status: status.to_string(),
      });
    }

    Ok(())
  }
}

/// Sibling PNG path for a composed SVG: `icon.svg` becomes `icon.png`.
pub fn png_path_for(svg_path: &Path) -> PathBuf {
  svg_path.with_extension("png")
}
