//! # Jira Transitions Client
//!
//! Provides Jira REST API integration for querying the workflow transitions
//! available on an issue and applying one of them, together with the
//! environment-based credential lookup the `jtx` binary relies on.

pub mod auth;
mod client;
pub mod consts;
mod endpoints;
pub mod models;

// Re-export the client
pub use auth::{
  CredentialsError, ENV_JIRA_SITE, ENV_JIRA_TOKEN, ENV_JIRA_USER, JiraCredentials, create_jira_runtime_and_client,
  credentials_from_env, load_dotenv,
};
pub use client::{JiraClient, create_jira_client, validate_issue_key};
// Re-export models
pub use models::{
  JiraAuth, JiraTransition, JiraTransitionTarget, JiraTransitions, TransitionId, TransitionOutcome, TransitionRequest,
};
