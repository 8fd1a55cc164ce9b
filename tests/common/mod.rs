#![allow(dead_code)]

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::Datelike;

/// Copyright holder every header names.
pub const HOLDER: &str = "s0up and the autobrr contributors";

/// SPDX identifier every header names.
pub const LICENSE: &str = "GPL-2.0-or-later";

/// Copyright years the tool renders for today's date.
///
/// Kept independent of the library's own rendering so the expected strings
/// stay golden.
pub fn current_years() -> String {
  let year = chrono::Local::now().year();
  if year <= 2025 {
    "2025".to_string()
  } else {
    format!("2025-{year}")
  }
}

/// The exact Go header the tool writes today.
pub fn go_header() -> String {
  format!(
    "// Copyright (c) {years}, {HOLDER}.\n// SPDX-License-Identifier: {LICENSE}\n",
    years = current_years()
  )
}

/// The exact TypeScript header the tool writes today.
pub fn ts_header() -> String {
  format!(
    "/*\n * Copyright (c) {years}, {HOLDER}.\n * SPDX-License-Identifier: {LICENSE}\n */\n",
    years = current_years()
  )
}

/// Writes `content` to `dir/rel`, creating parent directories as needed.
pub fn write_file(dir: &Path, rel: &str, content: &str) -> Result<()> {
  let path = dir.join(rel);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

/// Reads `dir/rel` back as a string.
pub fn read_file(dir: &Path, rel: &str) -> Result<String> {
  Ok(fs::read_to_string(dir.join(rel))?)
}
