//! # Jira Transition Endpoints
//!
//! `GET` and `POST` on `/rest/api/3/issue/{key}/transitions`: list the
//! transitions available from the issue's current status, or apply one.

use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use reqwest::{Response, StatusCode};
use tracing::{debug, instrument, warn};

use crate::client::{JiraClient, validate_issue_key};
use crate::models::{JiraTransition, JiraTransitions, TransitionOutcome, TransitionRequest};

impl JiraClient {
  /// Get available transitions for an issue, in the order Jira returns them
  #[instrument(skip(self))]
  pub async fn get_transitions(&self, issue_key: &str) -> Result<Vec<JiraTransition>> {
    validate_issue_key(issue_key)?;
    let url = self.transitions_url(issue_key)?;
    debug!(%url, "Fetching Jira transitions");

    let response = self
      .client
      .get(url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .header(ACCEPT, "application/json")
      .send()
      .await
      .context("Failed to fetch Jira transitions")?;

    let status = response.status();
    debug!(%status, "Received transitions response");

    match status {
      StatusCode::OK => {
        let transitions = response
          .json::<JiraTransitions>()
          .await
          .context("Failed to parse Jira transitions")?;
        debug!(count = transitions.transitions.len(), "Decoded transitions");
        Ok(transitions.transitions)
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue_key)),
      _ => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        read_error_body(response).await
      )),
    }
  }

  /// Transition an issue to a new status.
  ///
  /// Only transport failures are errors; a non-204 answer from Jira is
  /// returned as [`TransitionOutcome::Rejected`] with the raw body.
  #[instrument(skip(self))]
  pub async fn transition_issue(&self, issue_key: &str, transition_id: &str) -> Result<TransitionOutcome> {
    validate_issue_key(issue_key)?;
    let url = self.transitions_url(issue_key)?;
    let payload = TransitionRequest::new(transition_id);
    debug!(%url, "Requesting Jira transition");

    let response = self
      .client
      .post(url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .json(&payload)
      .send()
      .await
      .context("Failed to transition Jira issue")?;

    let status = response.status();
    if status == StatusCode::NO_CONTENT {
      debug!("Transition applied");
      return Ok(TransitionOutcome::Transitioned);
    }

    let body = read_error_body(response).await;
    warn!(%status, "Jira rejected the transition");

    Ok(TransitionOutcome::Rejected {
      status: status.as_u16(),
      body,
    })
  }
}

/// Read the body of an error response for reporting.
///
/// A body that cannot be read is logged and reported as empty.
async fn read_error_body(response: Response) -> String {
  match response.text().await {
    Ok(body) => body,
    Err(e) => {
      warn!("Failed to read Jira error response body: {e}");
      String::new()
    }
  }
}
