//! Pulls the drawable body and the declared `viewBox` out of a standalone SVG file.
//!
//! This is a textual pass over the raw file, not an XML parse: the outer `<svg>` tags are
//! removed with a case-insensitive pattern wherever they appear.
use anyhow::{anyhow, Result};
use regex::RegexBuilder;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Patterns stripped from the source to leave only the inner markup
static WRAPPER_PATTERNS: OnceLock<Vec<&'static str>> = OnceLock::new();

const VIEW_BOX_PATTERN: &str = r#"viewBox=["']([^"']+)["']"#;

fn get_wrapper_patterns() -> &'static Vec<&'static str> {
  WRAPPER_PATTERNS.get_or_init(|| {
    vec![
      r"<svg[^>]*>", // Opening tag, any attributes
      r"</svg>",     // Closing tag
    ]
  })
}

/// The two pieces of a source SVG that end up inside a `<symbol>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceGraphic {
  pub inner: String,
  pub view_box: Option<String>,
}

impl SourceGraphic {
  /// Splits raw SVG text into its inner markup and optional `viewBox`.
  pub fn from_text(text: &str) -> Self {
    Self {
      inner: extract_inner(text),
      view_box: extract_view_box(text),
    }
  }

  /// Returns the declared `viewBox`, or `0 0 {width} {height}` when the source has none.
  pub fn view_box_or(&self, width: i64, height: i64) -> String {
    self
      .view_box
      .clone()
      .unwrap_or_else(|| format!("0 0 {} {}", width, height))
  }
}

/// Removes every `<svg ...>` and `</svg>` tag (case-insensitive, across newlines) and trims the rest.
pub fn extract_inner(text: &str) -> String {
  let mut result = text.to_string();

  for pattern_str in get_wrapper_patterns() {
    if let Ok(re) = RegexBuilder::new(pattern_str)
      .case_insensitive(true)
      .dot_matches_new_line(true)
      .build()
    {
      result = re.replace_all(&result, "").to_string();
    }
  }

  result.trim().to_string()
}

/// Finds the first `viewBox="..."` (or single-quoted) attribute value in the raw text.
pub fn extract_view_box(text: &str) -> Option<String> {
  let re = RegexBuilder::new(VIEW_BOX_PATTERN).build().ok()?;
  re.captures(text)
    .and_then(|caps| caps.get(1))
    .map(|m| m.as_str().to_string())
}

/// Reads an SVG file from disk and extracts its inner markup and `viewBox`.
pub fn read_source(path: &Path) -> Result<SourceGraphic> {
  let text = fs::read_to_string(path)
    .map_err(|e| anyhow!("File not found: {} ({})", path.display(), e))?;
  Ok(SourceGraphic::from_text(&text))
}
