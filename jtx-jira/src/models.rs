use serde::{Deserialize, Serialize};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Represents a Jira transition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JiraTransition {
  pub id: String,
  pub name: String,
  /// Status the issue lands in once the transition is applied
  #[serde(default)]
  pub to: JiraTransitionTarget,
}

/// Target status of a transition
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JiraTransitionTarget {
  pub name: String,
}

/// Represents a list of Jira transitions
#[derive(Debug, Deserialize)]
pub struct JiraTransitions {
  #[serde(default)]
  pub transitions: Vec<JiraTransition>,
}

/// Represents a transition request payload
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: String,
}

impl TransitionRequest {
  pub fn new(transition_id: &str) -> Self {
    Self {
      transition: TransitionId {
        id: transition_id.to_string(),
      },
    }
  }
}

/// Result of asking Jira to apply a transition.
///
/// Jira answers a successful transition with `204 No Content`; every other
/// status is a rejection and the raw response body is kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
  Transitioned,
  Rejected { status: u16, body: String },
}

impl TransitionOutcome {
  pub const fn is_transitioned(&self) -> bool {
    matches!(self, Self::Transitioned)
  }
}
