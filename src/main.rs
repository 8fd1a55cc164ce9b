//! # headerfix
//!
//! A tool that rewrites copyright license headers in TypeScript and Go source files.

use anyhow::Result;

use headerfix::cli::{Cli, run};

fn main() -> Result<()> {
  run(Cli::parse_args())
}
