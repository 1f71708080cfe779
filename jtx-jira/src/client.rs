use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

use crate::consts::{REST_API_PREFIX, USER_AGENT};
use crate::models::JiraAuth;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Result<Self> {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    })
  }

  /// Base URL every request is resolved against
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// URL of the transitions resource for an issue.
  ///
  /// The key is appended as a single percent-encoded path segment.
  pub(crate) fn transitions_url(&self, issue_key: &str) -> Result<Url> {
    let mut url = Url::parse(&self.base_url).with_context(|| format!("Invalid Jira base URL '{}'", self.base_url))?;
    url
      .path_segments_mut()
      .map_err(|()| anyhow::anyhow!("Jira base URL '{}' cannot carry a path", self.base_url))?
      .pop_if_empty()
      .extend(REST_API_PREFIX.split('/'))
      .extend(["issue", issue_key, "transitions"]);

    Ok(url)
  }
}

/// Check that `issue_key` looks like a Jira issue key or numeric issue ID.
///
/// Only ASCII letters, digits, `-` and `_` are accepted so a key can never
/// address another resource.
pub fn validate_issue_key(issue_key: &str) -> Result<()> {
  let valid = !issue_key.is_empty()
    && issue_key
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

  if valid {
    Ok(())
  } else {
    Err(anyhow::anyhow!(
      "Invalid Jira issue key '{issue_key}': expected a key such as PROJ-123"
    ))
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}
