//! Placement math for the base icon and the badge.
//!
//! Nothing here is clamped: a scale above `1.0` or a badge larger than the canvas simply yields
//! placements that run past the canvas edges.

/// Width and height in output pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
  pub width: i64,
  pub height: i64,
}

impl Size {
  pub fn new(width: i64, height: i64) -> Self {
    Self { width, height }
  }
}

/// Where a `<use>` element lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
  pub x: i64,
  pub y: i64,
  pub width: i64,
  pub height: i64,
}

/// Canvas size plus both computed placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
  pub canvas: Size,
  pub base: Placement,
  pub badge: Placement,
}

/// Scales the base icon and centers it on the canvas.
pub fn base_placement(canvas: Size, scale: f64) -> Placement {
  let width = (canvas.width as f64 * scale).floor() as i64;
  let height = (canvas.height as f64 * scale).floor() as i64;

  Placement {
    x: canvas.width.saturating_sub(width).div_euclid(2),
    y: canvas.height.saturating_sub(height).div_euclid(2),
    width,
    height,
  }
}

/// Uses the explicit offset when given, otherwise pins the badge to the bottom-right corner.
pub fn badge_placement(canvas: Size, badge: Size, offset: Option<(i64, i64)>) -> Placement {
  let (x, y) = offset.unwrap_or((
    canvas.width.saturating_sub(badge.width),
    canvas.height.saturating_sub(badge.height),
  ));

  Placement {
    x,
    y,
    width: badge.width,
    height: badge.height,
  }
}

pub fn compute_layout(canvas: Size, badge: Size, scale: f64, offset: Option<(i64, i64)>) -> Layout {
  Layout {
    canvas,
    base: base_placement(canvas, scale),
    badge: badge_placement(canvas, badge, offset),
  }
}
