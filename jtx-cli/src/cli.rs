//! # Command Line Interface
//!
//! Defines the CLI surface of `jtx` and dispatches to the transition
//! handlers once the issue key and credentials have been resolved.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};
use jtx_jira::{create_jira_runtime_and_client, credentials_from_env, load_dotenv, validate_issue_key};
use tracing::info;

use crate::output::ColorMode;
use crate::transition::{list_transitions, perform_transition};

/// Top-level CLI command for the jtx tool
#[derive(Parser, Debug)]
#[command(name = "jtx")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "List or apply Jira workflow transitions")]
#[command(
  long_about = "Lists the workflow transitions available on a Jira issue, or applies one.\n\n\
        Credentials are read from JIRA_SITE, JIRA_USER and JIRA_TOKEN. A .env file in the\n\
        current directory (or any parent) is loaded first if present; variables already set\n\
        in the environment take precedence."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ", ", env!("TARGET"), ")"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// The Jira issue key (e.g., PROJ-123)
  #[arg(long, value_name = "KEY")]
  pub issue: Option<String>,

  /// Transition ID to apply (if not provided, available transitions are
  /// listed)
  #[arg(long, value_name = "ID")]
  pub transition: Option<String>,

  /// Load credentials from this dotenv file instead of searching for .env
  #[arg(long, value_name = "PATH")]
  pub env_file: Option<PathBuf>,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// The issue key, if one was given and is not blank
  pub fn issue_key(&self) -> Option<&str> {
    non_blank(self.issue.as_deref())
  }

  /// The transition ID, if one was given and is not blank
  pub fn transition_id(&self) -> Option<&str> {
    non_blank(self.transition.as_deref())
  }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|value| !value.is_empty())
}

/// Flags that are also accepted with a single leading dash
const SINGLE_DASH_FLAGS: [&str; 2] = ["issue", "transition"];

/// Rewrite `-issue`, `-issue=KEY`, `-transition` and `-transition=ID` to
/// their `--` forms so they parse as the long flags.
///
/// Arguments after a `--` terminator are left alone.
pub fn normalize_single_dash_flags<I>(args: I) -> Vec<OsString>
where
  I: IntoIterator<Item = OsString>,
{
  let mut terminated = false;

  args
    .into_iter()
    .map(|arg| {
      if terminated {
        return arg;
      }
      if arg == "--" {
        terminated = true;
        return arg;
      }

      let Some(text) = arg.to_str() else {
        return arg;
      };
      let Some(rest) = text.strip_prefix('-').filter(|rest| !rest.starts_with('-')) else {
        return arg;
      };
      let name = rest.split_once('=').map_or(rest, |(name, _)| name);

      if SINGLE_DASH_FLAGS.contains(&name) {
        OsString::from(format!("-{text}"))
      } else {
        arg
      }
    })
    .collect()
}

/// Run the command described by `cli`.
///
/// Usage, configuration, transport and decode failures are returned as
/// errors. A transition Jira rejects is reported on stdout and yields
/// [`ExitCode::FAILURE`].
pub fn handle_cli(cli: Cli) -> Result<ExitCode> {
  cli.colors.apply();

  // Validated before the environment is consulted at all
  let issue_key = cli
    .issue_key()
    .ok_or_else(|| anyhow::anyhow!("Please provide an issue key using the --issue flag"))?;
  validate_issue_key(issue_key)?;

  load_dotenv(cli.env_file.as_deref())?;
  let credentials = credentials_from_env()?;
  info!(site = %credentials.site, user = %credentials.username, "Resolved Jira credentials");

  let (rt, jira_client) = create_jira_runtime_and_client(&credentials)?;
  let mut stdout = io::stdout().lock();

  match cli.transition_id() {
    Some(transition_id) => {
      let outcome = rt.block_on(perform_transition(&jira_client, &mut stdout, issue_key, transition_id))?;
      if outcome.is_transitioned() {
        Ok(ExitCode::SUCCESS)
      } else {
        Ok(ExitCode::FAILURE)
      }
    }
    None => {
      rt.block_on(list_transitions(&jira_client, &mut stdout, issue_key))?;
      Ok(ExitCode::SUCCESS)
    }
  }
}
