//! # Processor Module
//!
//! The rewrite engine: read a target file, strip a stale header when one is
//! recognized, and write the fresh header followed by a single blank line and
//! the original body. Files are handled strictly one at a time; a failure on
//! one file never stops the run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use headerfix::config::HeaderConfig;
//! use headerfix::processor::Processor;
//!
//! let processor = Processor::new(&HeaderConfig::default(), 2025);
//! let stats = processor.run_tree(Path::new("."));
//! println!("updated {} files", stats.files_updated);
//! ```

use std::path::{Path, PathBuf};
use std::{fs, io};

use thiserror::Error;
use tracing::{debug, trace};

use crate::config::HeaderConfig;
use crate::detection::has_header;
use crate::file_kind::FileKind;
use crate::output::{print_file_error, print_file_updated};
use crate::templates::render_header;
use crate::walker::collect_files;

/// Error raised while rewriting a single file.
///
/// Each variant carries the path so failures stay attributable after the run
/// has moved on to the next file.
#[derive(Debug, Error)]
pub enum RewriteError {
  #[error("failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("{path} is not valid UTF-8")]
  Decode { path: PathBuf },

  #[error("failed to write {path}: {source}")]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Outcome of processing one explicitly named path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// The file matched a kind and was rewritten
  Updated,
  /// The file is not a recognized kind and was left untouched
  Skipped,
}

/// Counters accumulated over a full-tree run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
  /// Files successfully rewritten
  pub files_updated: usize,
}

/// The header rewrite engine.
///
/// Both kinds' headers are rendered once at construction; every file of a
/// kind then receives identical header text for the whole run.
pub struct Processor {
  typescript_header: String,
  go_header: String,
}

impl Processor {
  /// Creates a processor with headers rendered for the given current year.
  pub fn new(config: &HeaderConfig, current_year: i32) -> Self {
    let years = config.copyright_years(current_year);
    Self {
      typescript_header: render_header(&FileKind::TypeScript.comment_style(), config, &years),
      go_header: render_header(&FileKind::Go.comment_style(), config, &years),
    }
  }

  /// Rendered header text for the given kind.
  fn header_for(&self, kind: FileKind) -> &str {
    match kind {
      FileKind::TypeScript => &self.typescript_header,
      FileKind::Go => &self.go_header,
    }
  }

  /// Processes a single explicitly named path, classifying it first.
  ///
  /// Returns [`Outcome::Skipped`] without touching the file when the path is
  /// not a recognized kind.
  pub fn process_path(&self, path: &Path) -> Result<Outcome, RewriteError> {
    match FileKind::from_path(path) {
      Some(kind) => {
        self.rewrite_file(path, kind)?;
        Ok(Outcome::Updated)
      }
      None => {
        trace!("Not a target file: {}", path.display());
        Ok(Outcome::Skipped)
      }
    }
  }

  /// Rewrites one file of a known kind in place.
  ///
  /// The whole file is read up front, the new content is assembled in memory,
  /// and a single write replaces the file. Body lines keep their own
  /// terminators; only the header and the separator line are normalized to
  /// LF. Leading blank lines of the body are dropped so repeated runs do not
  /// accumulate spacing.
  pub fn rewrite_file(&self, path: &Path, kind: FileKind) -> Result<(), RewriteError> {
    let bytes = fs::read(path).map_err(|source| RewriteError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| RewriteError::Decode {
      path: path.to_path_buf(),
    })?;

    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let mut body = lines.as_slice();
    if has_header(body, kind) {
      debug!("Replacing existing header in {}", path.display());
      body = &body[kind.header_lines()..];
    }

    while let Some((first, rest)) = body.split_first() {
      if !first.trim().is_empty() {
        break;
      }
      body = rest;
    }

    let header = self.header_for(kind);
    let mut updated = String::with_capacity(header.len() + 1 + content.len());
    updated.push_str(header);
    updated.push('\n');
    for line in body {
      updated.push_str(line);
    }

    fs::write(path, &updated).map_err(|source| RewriteError::Write {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Processes every file under `root`, reporting per-file results.
  ///
  /// Failures are printed and skipped; the run always completes and returns
  /// the number of files rewritten.
  pub fn run_tree(&self, root: &Path) -> RunStats {
    let mut stats = RunStats::default();

    for path in collect_files(root) {
      match self.process_path(&path) {
        Ok(Outcome::Updated) => {
          print_file_updated(&path, Some(root));
          stats.files_updated += 1;
        }
        Ok(Outcome::Skipped) => {}
        Err(err) => print_file_error(&err),
      }
    }

    stats
  }
}
