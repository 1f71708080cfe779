//! Authentication helpers for the Jira client.
//!
//! Credentials come from the `JIRA_SITE`, `JIRA_USER` and `JIRA_TOKEN`
//! environment variables, optionally pre-populated from a dotenv file. All
//! three must be present and non-empty before a client is built.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;
use url::Url;

use crate::{JiraClient, create_jira_client};

/// Environment variable holding the Jira site base URL.
pub const ENV_JIRA_SITE: &str = "JIRA_SITE";
/// Environment variable holding the Jira username (usually an email).
pub const ENV_JIRA_USER: &str = "JIRA_USER";
/// Environment variable holding the Jira API token.
pub const ENV_JIRA_TOKEN: &str = "JIRA_TOKEN";

/// Errors raised while resolving Jira credentials.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
  #[error("Missing required environment variables: {}", .0.join(", "))]
  Missing(Vec<&'static str>),
  #[error("Invalid JIRA_SITE value '{0}': expected a URL such as https://your-domain.atlassian.net")]
  InvalidSite(String),
}

/// Fully populated Jira credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct JiraCredentials {
  pub site: String,
  pub username: String,
  pub api_token: String,
}

impl fmt::Debug for JiraCredentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JiraCredentials")
      .field("site", &self.site)
      .field("username", &self.username)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

/// Load variables from a dotenv file into the process environment.
///
/// With no explicit path, `.env` is searched from the current directory
/// upwards and any failure is ignored. An explicit path must load. Variables
/// already set in the environment are never overridden.
pub fn load_dotenv(path: Option<&Path>) -> Result<()> {
  match path {
    Some(path) => {
      dotenvy::from_path(path).with_context(|| format!("Failed to load environment file {}", path.display()))?;
      debug!(path = %path.display(), "Loaded environment file");
    }
    None => match dotenvy::dotenv() {
      Ok(path) => debug!(path = %path.display(), "Loaded environment file"),
      Err(e) => debug!("No environment file loaded: {e}"),
    },
  }

  Ok(())
}

/// Read Jira credentials from the process environment.
pub fn credentials_from_env() -> Result<JiraCredentials, CredentialsError> {
  credentials_from_lookup(|key| std::env::var(key).ok())
}

/// Resolve credentials through an arbitrary variable lookup.
///
/// Values are trimmed; a variable that is unset or blank counts as missing
/// and every missing name is reported at once.
pub fn credentials_from_lookup<F>(lookup: F) -> Result<JiraCredentials, CredentialsError>
where
  F: Fn(&str) -> Option<String>,
{
  let read = |key: &str| {
    lookup(key)
      .map(|value| value.trim().to_string())
      .filter(|value| !value.is_empty())
  };

  let site = read(ENV_JIRA_SITE);
  let username = read(ENV_JIRA_USER);
  let api_token = read(ENV_JIRA_TOKEN);

  let (Some(site), Some(username), Some(api_token)) = (site.as_ref(), username.as_ref(), api_token.as_ref()) else {
    let missing = [
      (ENV_JIRA_SITE, site.is_none()),
      (ENV_JIRA_USER, username.is_none()),
      (ENV_JIRA_TOKEN, api_token.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, is_missing)| is_missing.then_some(name))
    .collect();
    return Err(CredentialsError::Missing(missing));
  };

  Ok(JiraCredentials {
    site: normalize_site_url(site)?,
    username: username.clone(),
    api_token: api_token.clone(),
  })
}

/// Normalize a Jira site URL.
///
/// Assumes `https://` when no scheme is given and strips trailing slashes so
/// REST paths can be appended directly.
pub fn normalize_site_url(input: &str) -> Result<String, CredentialsError> {
  let trimmed = input.trim();
  let candidate = if trimmed.contains("://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).map_err(|_| CredentialsError::InvalidSite(input.to_string()))?;
  if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
    return Err(CredentialsError::InvalidSite(input.to_string()));
  }

  Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Creates a single-threaded tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client(credentials: &JiraCredentials) -> Result<(Runtime, JiraClient)> {
  let rt = Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;
  let client = create_jira_client(&credentials.site, &credentials.username, &credentials.api_token)?;
  Ok((rt, client))
}
