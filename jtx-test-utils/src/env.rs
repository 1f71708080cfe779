//! Environment variable management for testing
//!
//! Tests that touch the process environment wrap each variable in an
//! [`EnvVarGuard`] so the original value is restored when the test ends.

use std::env;

/// Restores a single environment variable to its original value on drop
pub struct EnvVarGuard {
  key: String,
  /// The original value, if the variable was set
  original: Option<String>,
}

impl EnvVarGuard {
  /// Capture the current value of `key`
  pub fn new(key: &str) -> Self {
    Self {
      key: key.to_string(),
      original: env::var(key).ok(),
    }
  }

  /// Set the variable for the remainder of the test
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.key, value);
    }
  }

  /// Unset the variable for the remainder of the test
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.key);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.key, val);
      },
      None => unsafe {
        env::remove_var(&self.key);
      },
    }
  }
}
