//! Command line arguments backing the `icon-composer` binary.
use crate::composer::ComposerOptions;
use crate::geometry::Size;
use crate::rasterizer::DEFAULT_RASTERIZER_PROGRAM;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
  name = "icon-composer",
  about = "Combine a base SVG and a badge SVG into one icon, with optional PNG export",
  version
)]
pub struct Args {
  /// Base SVG, scaled and centered on the canvas
  pub base: PathBuf,

  /// Badge SVG, overlaid bottom-right unless an offset is given
  pub badge: PathBuf,

  /// Output path for the combined SVG (overwritten if it exists)
  pub output: PathBuf,

  /// Output canvas size
  #[arg(long, num_args = 2, value_names = ["W", "H"], default_values_t = [24, 24], allow_negative_numbers = true)]
  pub main_size: Vec<i64>,

  /// Badge size
  #[arg(long, num_args = 2, value_names = ["w", "h"], default_values_t = [6, 6], allow_negative_numbers = true)]
  pub badge_size: Vec<i64>,

  /// Badge position, defaults to the bottom-right corner
  #[arg(long, num_args = 2, value_names = ["x", "y"], allow_negative_numbers = true)]
  pub badge_offset: Option<Vec<i64>>,

  /// Scale of the base icon (0.0-1.0)
  #[arg(long, default_value_t = 1.0, allow_negative_numbers = true, value_parser = parse_scale)]
  pub main_scale: f64,

  /// Also render a PNG next to the output SVG
  #[arg(long)]
  pub export_png: bool,

  /// Converter used for PNG export
  #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_RASTERIZER_PROGRAM)]
  pub rasterizer: PathBuf,

  /// Disable progress output
  #[arg(long)]
  pub quiet: bool,
}

/// Any finite float; `nan` and `inf` have no pixel size.
fn parse_scale(value: &str) -> Result<f64, String> {
  let scale: f64 = value.parse().map_err(|e| format!("{}", e))?;
  if !scale.is_finite() {
    return Err(format!("scale must be a finite number, got {}", value));
  }
  Ok(scale)
}

/// Last pair given for a two-value option; repeated flags override earlier ones.
fn pair(values: &[i64]) -> Option<(i64, i64)> {
  match values {
    [.., first, second] => Some((*first, *second)),
    _ => None,
  }
}

impl Args {
  pub fn composer_options(&self) -> ComposerOptions {
    let defaults = ComposerOptions::default();

    ComposerOptions {
      base_path: self.base.clone(),
      badge_path: self.badge.clone(),
      output_path: self.output.clone(),
      main_size: pair(&self.main_size)
        .map(|(w, h)| Size::new(w, h))
        .unwrap_or(defaults.main_size),
      badge_size: pair(&self.badge_size)
        .map(|(w, h)| Size::new(w, h))
        .unwrap_or(defaults.badge_size),
      badge_offset: self.badge_offset.as_deref().and_then(pair),
      main_scale: self.main_scale,
      export_png: self.export_png,
      verbose: !self.quiet,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let args = Args::parse_from(["icon-composer", "a.svg", "b.svg", "out.svg"]);
    let options = args.composer_options();

    assert_eq!(options.main_size, Size::new(24, 24));
    assert_eq!(options.badge_size, Size::new(6, 6));
    assert_eq!(options.badge_offset, None);
    assert_eq!(options.main_scale, 1.0);
    assert!(!options.export_png);
    assert!(options.verbose);
    assert_eq!(args.rasterizer, PathBuf::from("inkscape"));
  }

  #[test]
  fn test_all_options() {
    let args = Args::parse_from([
      "icon-composer",
      "matrix.svg",
      "telegram.svg",
      "combined.svg",
      "--main-size",
      "400",
      "400",
      "--badge-size",
      "100",
      "100",
      "--badge-offset",
      "-4",
      "2",
      "--main-scale",
      "0.9",
      "--export-png",
      "--quiet",
    ]);
    let options = args.composer_options();

    assert_eq!(options.base_path, PathBuf::from("matrix.svg"));
    assert_eq!(options.badge_path, PathBuf::from("telegram.svg"));
    assert_eq!(options.output_path, PathBuf::from("combined.svg"));
    assert_eq!(options.main_size, Size::new(400, 400));
    assert_eq!(options.badge_size, Size::new(100, 100));
    assert_eq!(options.badge_offset, Some((-4, 2)));
    assert_eq!(options.main_scale, 0.9);
    assert!(options.export_png);
    assert!(!options.verbose);
  }

  #[test]
  fn test_rejects_non_numeric_size() {
    let result = Args::try_parse_from(["icon-composer", "a.svg", "b.svg", "out.svg", "--main-size", "big", "24"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_rejects_non_finite_scale() {
    for value in ["nan", "NaN", "inf", "-inf"] {
      let result = Args::try_parse_from(["icon-composer", "a.svg", "b.svg", "out.svg", "--main-scale", value]);
      assert!(result.is_err(), "accepted {}", value);
    }
  }

  #[test]
  fn test_accepts_negative_sizes() {
    let args = Args::parse_from([
      "icon-composer",
      "a.svg",
      "b.svg",
      "out.svg",
      "--main-size",
      "-24",
      "24",
      "--badge-size",
      "-1",
      "-1",
      "--main-scale",
      "-0.5",
    ]);
    let options = args.composer_options();

    assert_eq!(options.main_size, Size::new(-24, 24));
    assert_eq!(options.badge_size, Size::new(-1, -1));
    assert_eq!(options.main_scale, -0.5);
  }

  #[test]
  fn test_rejects_missing_size_value() {
    let result = Args::try_parse_from(["icon-composer", "a.svg", "b.svg", "out.svg", "--badge-size", "6"]);
    assert!(result.is_err());
  }
}
