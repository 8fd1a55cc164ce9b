//! # Header Detection Module
//!
//! Decides whether the leading lines of a file already carry a recognized
//! copyright header, so a rewrite replaces it instead of stacking a second
//! one on top. The check is deliberately loose: any comment block mentioning
//! "copyright" in the expected position counts, whatever holder, year, or
//! license it names.

use std::sync::LazyLock;

use regex::Regex;

use crate::file_kind::FileKind;

/// Case-insensitive match for the word "copyright".
static COPYRIGHT_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)copyright").expect("copyright pattern must compile"));

/// Checks whether `lines` starts with a recognized header of the given kind.
///
/// Block-comment kinds require the first line to open a block comment, one of
/// the leading lines to mention "copyright", and one of them to close the
/// block. Line-comment kinds only require the "copyright" mention. Files with
/// fewer lines than the kind's header line count never match; their entire
/// content is body.
pub fn has_header(lines: &[&str], kind: FileKind) -> bool {
  let count = kind.header_lines();
  if lines.len() < count {
    return false;
  }

  let leading = &lines[..count];

  match kind {
    FileKind::TypeScript => {
      leading[0].trim_start().starts_with("/*")
        && leading.iter().any(|line| COPYRIGHT_PATTERN.is_match(line))
        && leading.iter().any(|line| line.contains("*/"))
    }
    FileKind::Go => leading.iter().any(|line| COPYRIGHT_PATTERN.is_match(line)),
  }
}
