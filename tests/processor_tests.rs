mod common;

use anyhow::Result;
use chrono::Datelike;
use headerfix::config::HeaderConfig;
use headerfix::processor::{Outcome, Processor};
use tempfile::tempdir;

use common::{go_header, read_file, ts_header, write_file};

fn processor() -> Processor {
  Processor::new(&HeaderConfig::default(), chrono::Local::now().year())
}

#[test]
fn test_project_layout_is_rewritten() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  // Backend files without headers
  write_file(root, "main.go", "package main\n\nfunc main() {}\n")?;
  write_file(root, "internal/api/handler.go", "package api\n")?;

  // Frontend files, one already carrying a stale header
  write_file(root, "web/src/App.tsx", "export const App = () => null;\n")?;
  write_file(
    root,
    "web/src/api/client.ts",
    "/*\n * Copyright (c) 2024, Old Owner.\n * SPDX-License-Identifier: GPL-2.0\n */\n\nexport {};\n",
  )?;

  // Content that must never be touched
  write_file(root, "vendor/dep/dep.go", "package dep\n")?;
  write_file(root, "web/node_modules/pkg/index.ts", "module.exports = {};\n")?;
  write_file(root, "docs/README.md", "# docs\n")?;

  let stats = processor().run_tree(root);

  assert_eq!(stats.files_updated, 4);

  assert_eq!(read_file(root, "main.go")?, format!("{}\npackage main\n\nfunc main() {{}}\n", go_header()));
  assert_eq!(read_file(root, "internal/api/handler.go")?, format!("{}\npackage api\n", go_header()));
  assert_eq!(read_file(root, "web/src/App.tsx")?, format!("{}\nexport const App = () => null;\n", ts_header()));
  assert_eq!(read_file(root, "web/src/api/client.ts")?, format!("{}\nexport {{}};\n", ts_header()));

  assert_eq!(read_file(root, "vendor/dep/dep.go")?, "package dep\n");
  assert_eq!(read_file(root, "web/node_modules/pkg/index.ts")?, "module.exports = {};\n");
  assert_eq!(read_file(root, "docs/README.md")?, "# docs\n");
  Ok(())
}

#[test]
fn test_second_run_reaches_the_same_fixed_point() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  write_file(root, "a.go", "package a\n")?;
  write_file(root, "b.ts", "export {};\n")?;
  write_file(root, "sub/c.tsx", "export {};\n")?;

  let proc = processor();

  let first_stats = proc.run_tree(root);
  let snapshot: Vec<String> = ["a.go", "b.ts", "sub/c.tsx"]
    .iter()
    .map(|rel| read_file(root, rel))
    .collect::<Result<_>>()?;

  let second_stats = proc.run_tree(root);
  let after: Vec<String> = ["a.go", "b.ts", "sub/c.tsx"]
    .iter()
    .map(|rel| read_file(root, rel))
    .collect::<Result<_>>()?;

  // Every target still counts as updated on the second pass, but the bytes
  // must not move.
  assert_eq!(first_stats.files_updated, 3);
  assert_eq!(second_stats.files_updated, 3);
  assert_eq!(snapshot, after);
  Ok(())
}

#[test]
fn test_headers_are_kind_specific() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  write_file(root, "main.go", "package main\n")?;
  write_file(root, "app.ts", "export {};\n")?;

  processor().run_tree(root);

  let go_content = read_file(root, "main.go")?;
  let ts_content = read_file(root, "app.ts")?;

  assert!(go_content.starts_with("// Copyright"));
  assert!(!go_content.contains("/*"));

  assert!(ts_content.starts_with("/*\n"));
  assert!(!ts_content.starts_with("// "));
  Ok(())
}

#[test]
fn test_crlf_bodies_survive_a_tree_run() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();

  write_file(root, "win.go", "package main\r\n\r\nfunc main() {}\r\n")?;
  write_file(root, "unix.go", "package main\n")?;

  processor().run_tree(root);

  assert_eq!(read_file(root, "win.go")?, format!("{}\npackage main\r\n\r\nfunc main() {{}}\r\n", go_header()));
  assert_eq!(read_file(root, "unix.go")?, format!("{}\npackage main\n", go_header()));
  Ok(())
}

#[test]
fn test_process_path_reports_skip_without_touching_the_file() -> Result<()> {
  let temp_dir = tempdir()?;
  let root = temp_dir.path();
  write_file(root, "Makefile", "all:\n\ttrue\n")?;

  let outcome = processor().process_path(&root.join("Makefile"))?;

  assert_eq!(outcome, Outcome::Skipped);
  assert_eq!(read_file(root, "Makefile")?, "all:\n\ttrue\n");
  Ok(())
}
