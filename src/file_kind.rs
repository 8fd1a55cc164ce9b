//! # File Kind Module
//!
//! Classification of target files by extension. Only two kinds of files are
//! rewritten: TypeScript sources (`.ts`/`.tsx`) headed by a block comment,
//! and Go sources (`.go`) headed by line comments. Everything else is left
//! untouched.

use std::path::Path;

use crate::templates::CommentStyle;

/// The kinds of source files that receive a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
  /// TypeScript and TSX sources
  TypeScript,
  /// Go sources
  Go,
}

impl FileKind {
  /// All kinds, in classification order.
  pub const ALL: [FileKind; 2] = [FileKind::TypeScript, FileKind::Go];

  /// Classifies a path by file-name suffix.
  ///
  /// Matching is case-sensitive and uses suffix semantics rather than
  /// [`Path::extension`], so a file literally named `.ts` still matches and
  /// `.d.ts` declaration files match through their `.ts` suffix.
  pub fn from_path(path: &Path) -> Option<Self> {
    let file_name = path.file_name()?.to_str()?;
    Self::ALL
      .into_iter()
      .find(|kind| kind.suffixes().iter().any(|suffix| file_name.ends_with(suffix)))
  }

  /// File-name suffixes that map to this kind.
  pub const fn suffixes(self) -> &'static [&'static str] {
    match self {
      FileKind::TypeScript => &[".ts", ".tsx"],
      FileKind::Go => &[".go"],
    }
  }

  /// Number of lines an existing header of this kind occupies.
  pub const fn header_lines(self) -> usize {
    match self {
      FileKind::TypeScript => 4,
      FileKind::Go => 2,
    }
  }

  /// Comment style used to render this kind's header.
  pub const fn comment_style(self) -> CommentStyle {
    match self {
      FileKind::TypeScript => CommentStyle::block("/*", " * ", " */"),
      FileKind::Go => CommentStyle::line("// "),
    }
  }
}
