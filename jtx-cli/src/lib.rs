//! # jtx CLI Library
//!
//! Argument parsing, output formatting and the list/apply handlers behind
//! the `jtx` binary.

pub mod cli;
pub mod output;
pub mod transition;
