//! # headerfix
//!
//! A tool that rewrites copyright license headers in TypeScript and Go source files.
//!
//! `headerfix` walks the working tree (or takes a single file), strips any recognized header already
//! sitting at the top, and writes a fresh one followed by a single blank line. Re-running it is
//! idempotent: a header it wrote is recognized and replaced, never stacked.
//!
//! ## Features
//!
//! * Recursively scan the working tree and rewrite headers in `.ts`/`.tsx`/`.go` files
//! * Replace stale headers in place, keeping the copyright year range current
//! * Skip version-control, dependency, and build-output directories by name
//! * Contain per-file read/write failures so one bad file never aborts a run
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use headerfix::config::HeaderConfig;
//! use headerfix::processor::Processor;
//!
//! let processor = Processor::new(&HeaderConfig::default(), 2025);
//! let stats = processor.run_tree(Path::new("."));
//! println!("Files updated: {}", stats.files_updated);
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Core rewrite engine for single files and full trees
//! * [`file_kind`] - Classification of target files by extension
//! * [`templates`] - Header rendering with per-kind comment styles
//! * [`detection`] - Recognition of existing headers
//! * [`walker`] - Working-tree traversal with directory exclusions
//! * [`logging`] - Output modes, colors, and tracing setup

pub mod cli;
pub mod config;
pub mod detection;
pub mod file_kind;
pub mod logging;
pub mod output;
pub mod processor;
pub mod templates;
pub mod walker;
