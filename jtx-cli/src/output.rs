//! # Output Formatting
//!
//! Formatted output helpers with colors and emoji markers. Everything is
//! written to a caller-supplied writer so results can go to stdout in the
//! binary and to a buffer in tests.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream, Style};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Set the global color override for this mode
  pub fn apply(self) {
    match self {
      Self::Always | Self::Yes => owo_colors::set_override(true),
      Self::Never | Self::No => owo_colors::set_override(false),
      // Let owo_colors use its default auto-detection
      Self::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

fn styled(text: &str, style: Style) -> String {
  text
    .if_supports_color(Stream::Stdout, |text| text.style(style))
    .to_string()
}

/// Write a success message
pub fn write_success(out: &mut impl Write, message: &str) -> io::Result<()> {
  let check = get_emoji_or_default("check_mark", "✓");
  writeln!(out, "{} {}", styled(&check, Style::new().green().bold()), message)
}

/// Write a failure message
pub fn write_failure(out: &mut impl Write, message: &str) -> io::Result<()> {
  let cross = get_emoji_or_default("cross_mark", "✗");
  writeln!(out, "{} {}", styled(&cross, Style::new().red().bold()), message)
}

/// Write a section header
pub fn write_header(out: &mut impl Write, header: &str) -> io::Result<()> {
  writeln!(out, "{}", styled(header, Style::new().blue().bold()))
}

/// Format a transition ID
pub fn format_transition_id(id: &str) -> String {
  styled(id, Style::new().yellow())
}

/// Format a workflow status name
pub fn format_status(status: &str) -> String {
  styled(status, Style::new().bright_cyan().bold())
}
