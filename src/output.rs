//! # Output Module
//!
//! This module centralizes all user-facing output for the headerfix tool.
//! It provides consistent formatting, colors, and symbols for terminal
//! output.
//!
//! ## Design Goals
//!
//! - **Scannable**: one line per file, symbols up front
//! - **Progressive**: timing detail with `-v`, silence with `-q`
//! - **Scriptable**: stdout stays predictable for piping; errors go to stderr

use std::path::Path;
use std::time::Duration;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::processor::RewriteError;

/// Symbols used in output
pub mod symbols {
  /// Run completed
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Per-file failure
  pub const FAILURE: &str = "\u{2717}"; // ✗
  /// Not a target file
  pub const IGNORED: &str = "-";
  /// File rewritten
  pub const UPDATED: &str = "\u{21bb}"; // ↻
}

/// Print the banner line opening a full-tree run.
pub fn print_start_message() {
  if is_quiet() {
    return;
  }

  println!("Starting header update process...");
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the per-file line for a successful rewrite.
///
/// The path is shown relative to `root` when one is given.
pub fn print_file_updated(path: &Path, root: Option<&Path>) {
  if is_quiet() {
    return;
  }

  println!(
    "{} {}",
    symbols::UPDATED.if_supports_color(Stream::Stdout, |s| s.yellow()),
    make_relative_path(path, root)
  );
}

/// Print the single-file-mode line for a path that is not a target.
pub fn print_file_skipped(path: &Path) {
  if is_quiet() {
    return;
  }

  println!(
    "{} {} (not a recognized file kind)",
    symbols::IGNORED.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    path.display()
  );
}

/// Print a per-file failure to stderr.
///
/// Error lines are never suppressed by quiet mode.
pub fn print_file_error(err: &RewriteError) {
  eprintln!(
    "{} {}",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    err
  );
}

/// Print the end-of-run summary.
///
/// Format: "Files updated: N"; verbose mode appends the elapsed time.
pub fn print_summary(files_updated: usize, elapsed: Duration) {
  if is_quiet() {
    return;
  }

  let mut summary_line = format!(
    "Files updated: {}",
    files_updated.if_supports_color(Stream::Stdout, |s| s.cyan())
  );

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", elapsed.as_secs_f64()));
  }

  println!("{summary_line}");
}

/// Print the fixed completion message closing a full-tree run.
pub fn print_completion() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All done! Review and commit the changes.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Make a path relative to the walk root for display.
fn make_relative_path(path: &Path, root: Option<&Path>) -> String {
  if let Some(root) = root {
    path
      .strip_prefix(root)
      .map(|p| p.to_string_lossy().to_string())
      .unwrap_or_else(|_| path.to_string_lossy().to_string())
  } else {
    path.to_string_lossy().to_string()
  }
}
