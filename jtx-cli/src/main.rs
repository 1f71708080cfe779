//! # jtx CLI Entry Point
//!
//! Lists the workflow transitions available on a Jira issue, or applies one.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use jtx_cli::cli::{Cli, handle_cli, normalize_single_dash_flags};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<ExitCode> {
  let cli = Cli::parse_from(normalize_single_dash_flags(std::env::args_os()));

  // Set up tracing based on verbosity level
  let level = match cli.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  // Logs go to stderr; stdout carries the command's results
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  handle_cli(cli)
}
