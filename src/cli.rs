//! # CLI Module
//!
//! Command-line interface for headerfix. Parses arguments with clap and
//! drives a run: rewrite one explicitly named file, or walk the working tree
//! and rewrite every recognized source file under it.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use tracing::debug;

use crate::config::HeaderConfig;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  print_blank_line, print_completion, print_file_error, print_file_skipped, print_file_updated, print_start_message,
  print_summary,
};
use crate::processor::{Outcome, Processor};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Full version string including build metadata when available.
fn long_version() -> &'static str {
  static LONG_VERSION: LazyLock<String> = LazyLock::new(|| {
    let hash = env!("GIT_HASH");
    let date = env!("GIT_DATE");
    if hash.is_empty() {
      env!("CARGO_PKG_VERSION").to_string()
    } else {
      format!("{} ({hash} {date})", env!("CARGO_PKG_VERSION"))
    }
  });
  LONG_VERSION.as_str()
}

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  version,
  long_version = long_version(),
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Rewrite headers in every TypeScript and Go file under the current directory
  headerfix

  # Rewrite the header of a single file
  headerfix internal/api/handler.go

  # Show timing detail
  headerfix -v

  # Only print errors
  headerfix -q
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  /// File to process; the whole working tree is processed when omitted
  #[arg(value_name = "FILE")]
  pub path: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

/// Run a full invocation with the given arguments.
///
/// Per-file failures are reported and contained; the process exits 0 after a
/// completed run either way.
pub fn run(cli: Cli) -> Result<()> {
  init_tracing(cli.quiet, cli.verbose);

  if cli.verbose > 0 {
    set_verbose();
  } else if cli.quiet {
    set_quiet();
  }
  cli.colors.apply();

  let config = HeaderConfig::default();
  let current_year = chrono::Local::now().year();
  let processor = Processor::new(&config, current_year);

  match cli.path {
    Some(ref path) => {
      run_single_file(&processor, path);
      Ok(())
    }
    None => run_tree(&processor),
  }
}

/// Process one explicitly named file and print its single outcome line.
fn run_single_file(processor: &Processor, path: &Path) {
  match processor.process_path(path) {
    Ok(Outcome::Updated) => print_file_updated(path, None),
    Ok(Outcome::Skipped) => print_file_skipped(path),
    Err(err) => print_file_error(&err),
  }
}

/// Walk the working tree, rewrite every target file, and print the summary.
fn run_tree(processor: &Processor) -> Result<()> {
  let root = env::current_dir().context("Failed to resolve the current directory")?;
  debug!("Walking {}", root.display());

  print_start_message();

  let start_time = Instant::now();
  let stats = processor.run_tree(&root);
  let elapsed = start_time.elapsed();

  print_blank_line();
  print_summary(stats.files_updated, elapsed);
  print_blank_line();
  print_completion();

  Ok(())
}
