//! # Templates Module
//!
//! This module renders the copyright header for a file kind: the attribution
//! text is fixed per run and wrapped in the comment markers of the target
//! language.
//!
//! The module includes:
//! - [`CommentStyle`] for defining how comments should be formatted in
//!   different file types
//! - [`render_header`] for producing the final header text
//!
//! ## Example
//!
//! ```rust
//! use headerfix::config::HeaderConfig;
//! use headerfix::templates::{CommentStyle, render_header};
//!
//! let config = HeaderConfig::default();
//! let header = render_header(&CommentStyle::line("// "), &config, "2025");
//! assert!(header.starts_with("// Copyright (c) 2025,"));
//! ```

use crate::config::HeaderConfig;

/// Defines the comment style for a file kind.
///
/// # Fields
///
/// * `top` - The string opening a comment block (e.g., "/*"), empty for line
///   comments
/// * `middle` - The prefix for each content line (e.g., " * " or "// ")
/// * `bottom` - The string closing a comment block (e.g., " */"), empty for
///   line comments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
  /// The string to use at the top of a comment block
  pub top: &'static str,

  /// The string to use at the beginning of each line in the comment block
  pub middle: &'static str,

  /// The string to use at the bottom of a comment block
  pub bottom: &'static str,
}

impl CommentStyle {
  /// Create a line-comment style (no top/bottom markers).
  pub const fn line(prefix: &'static str) -> Self {
    Self {
      top: "",
      middle: prefix,
      bottom: "",
    }
  }

  /// Create a block-comment style.
  pub const fn block(top: &'static str, middle: &'static str, bottom: &'static str) -> Self {
    Self { top, middle, bottom }
  }
}

/// Renders the full header for one comment style.
///
/// The attribution is always two lines: the copyright line with the year
/// field and holder, and the SPDX identifier line.
pub fn render_header(style: &CommentStyle, config: &HeaderConfig, years: &str) -> String {
  let attribution = format!(
    "Copyright (c) {years}, {holder}.\nSPDX-License-Identifier: {license}",
    holder = config.holder,
    license = config.license,
  );
  format_with_comment_style(&attribution, style)
}

/// Formats attribution text with the given comment style.
///
/// The top marker (if any) goes on its own line, each text line is prefixed
/// with the middle marker, and the bottom marker (if any) closes the block.
/// No separator line is appended; spacing between the header and the file
/// body is the caller's concern.
pub fn format_with_comment_style(text: &str, style: &CommentStyle) -> String {
  let mut result = String::new();

  if !style.top.is_empty() {
    result.push_str(style.top);
    result.push('\n');
  }

  for line in text.lines() {
    if line.is_empty() {
      result.push_str(style.middle.trim_end());
    } else {
      result.push_str(style.middle);
      result.push_str(line);
    }
    result.push('\n');
  }

  if !style.bottom.is_empty() {
    result.push_str(style.bottom);
    result.push('\n');
  }

  result
}
