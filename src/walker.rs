//! # Walker Module
//!
//! Recursive traversal of the working tree. Directory names that only ever
//! hold version-control metadata, third-party code, or build output are
//! pruned before descending into them, at any depth.

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Directory names that are never descended into.
pub const EXCLUDED_DIRS: [&str; 5] = [".git", "node_modules", "dist", "build", "vendor"];

/// Returns true if the entry is a directory with an excluded name.
///
/// Applies only to entries below the walk root; the root itself is always
/// entered even when its own name is on the list. Plain files sharing an
/// excluded name pass through.
fn is_excluded_dir(entry: &DirEntry) -> bool {
  entry.depth() > 0
    && entry.file_type().is_dir()
    && entry
      .file_name()
      .to_str()
      .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}

/// Collects every file under `root`, skipping excluded directories.
///
/// Unreadable entries are logged and skipped; they never abort the walk.
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
  let mut files = Vec::new();

  for entry in WalkDir::new(root).into_iter().filter_entry(|entry| !is_excluded_dir(entry)) {
    match entry {
      Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
      Ok(_) => {}
      Err(err) => warn!("Skipping unreadable entry: {err}"),
    }
  }

  files
}

#[cfg(test)]
mod tests {
  use std::fs;

  use anyhow::Result;
  use tempfile::tempdir;

  use super::*;

  fn touch(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(path, "x")?;
    Ok(())
  }

  #[test]
  fn test_collects_nested_files() -> Result<()> {
    let dir = tempdir()?;
    touch(&dir.path().join("a.go"))?;
    touch(&dir.path().join("web/src/app.tsx"))?;

    let mut files = collect_files(dir.path());
    files.sort();

    assert_eq!(files, vec![dir.path().join("a.go"), dir.path().join("web/src/app.tsx")]);
    Ok(())
  }

  #[test]
  fn test_prunes_excluded_directories() -> Result<()> {
    let dir = tempdir()?;
    touch(&dir.path().join("kept.go"))?;
    for name in EXCLUDED_DIRS {
      touch(&dir.path().join(name).join("skipped.go"))?;
    }

    let files = collect_files(dir.path());

    assert_eq!(files, vec![dir.path().join("kept.go")]);
    Ok(())
  }

  #[test]
  fn test_prunes_excluded_directories_at_depth() -> Result<()> {
    let dir = tempdir()?;
    touch(&dir.path().join("web/node_modules/pkg/index.ts"))?;
    touch(&dir.path().join("web/app.ts"))?;

    let files = collect_files(dir.path());

    assert_eq!(files, vec![dir.path().join("web/app.ts")]);
    Ok(())
  }

  #[test]
  fn test_files_named_like_excluded_dirs_are_kept() -> Result<()> {
    let dir = tempdir()?;
    touch(&dir.path().join("vendor"))?;

    let files = collect_files(dir.path());

    assert_eq!(files, vec![dir.path().join("vendor")]);
    Ok(())
  }

  #[test]
  fn test_root_with_excluded_name_is_still_walked() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("vendor");
    touch(&root.join("main.go"))?;

    let files = collect_files(&root);

    assert_eq!(files, vec![root.join("main.go")]);
    Ok(())
  }
}
