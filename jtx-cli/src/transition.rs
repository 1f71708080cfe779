//! # Transition Handlers
//!
//! Lists the transitions available on an issue, or applies one and reports
//! the outcome.

use std::io::Write;

use anyhow::{Context, Result};
use jtx_jira::{JiraClient, JiraTransition, TransitionOutcome};
use tracing::info;

use crate::output::{format_status, format_transition_id, write_failure, write_header, write_success};

/// Fetch the transitions for `issue_key` and write one line per transition
/// under a header. Nothing is written if the request fails.
pub async fn list_transitions(jira_client: &JiraClient, out: &mut impl Write, issue_key: &str) -> Result<()> {
  let transitions = jira_client.get_transitions(issue_key).await?;
  info!(count = transitions.len(), "Fetched transitions for {issue_key}");

  render_transitions(out, issue_key, &transitions)
}

/// Write the transitions header followed by one line per transition, in order
pub fn render_transitions(out: &mut impl Write, issue_key: &str, transitions: &[JiraTransition]) -> Result<()> {
  write_header(out, &format!("Available transitions for issue {issue_key}:")).context("Failed to write output")?;

  for t in transitions {
    writeln!(
      out,
      "ID: {}, Name: {}, To Status: {}",
      format_transition_id(&t.id),
      t.name,
      format_status(&t.to.name)
    )
    .context("Failed to write output")?;
  }

  Ok(())
}

/// Apply `transition_id` to `issue_key` and report the outcome
pub async fn perform_transition(
  jira_client: &JiraClient,
  out: &mut impl Write,
  issue_key: &str,
  transition_id: &str,
) -> Result<TransitionOutcome> {
  let outcome = jira_client.transition_issue(issue_key, transition_id).await?;
  render_transition_outcome(out, issue_key, transition_id, &outcome)?;

  Ok(outcome)
}

/// Write the success or failure line for a transition attempt
pub fn render_transition_outcome(
  out: &mut impl Write,
  issue_key: &str,
  transition_id: &str,
  outcome: &TransitionOutcome,
) -> Result<()> {
  let written = match outcome {
    TransitionOutcome::Transitioned => write_success(
      out,
      &format!("Successfully transitioned issue {issue_key} to status with ID {transition_id}"),
    ),
    TransitionOutcome::Rejected { status, body } => write_failure(
      out,
      &format!("Failed to transition issue. Status: {status}, Response: {body}"),
    ),
  };

  written.context("Failed to write output")
}

#[cfg(test)]
mod tests {
  use jtx_jira::create_jira_client;
  use wiremock::matchers::{basic_auth, body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn output_of(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
  }

  #[tokio::test]
  async fn test_list_transitions_prints_header_and_lines_in_order() -> anyhow::Result<()> {
    owo_colors::set_override(false);
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/PROJ-7/transitions"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "transitions": [
              { "id": "21", "name": "Start Progress", "to": { "name": "In Progress" } },
              { "id": "11", "name": "Stop", "to": { "name": "To Do" } },
              { "id": "31", "name": "Resolve", "to": { "name": "Done" } }
          ]
      })))
      .mount(&mock_server)
      .await;

    let mut buffer = Vec::new();
    list_transitions(&client, &mut buffer, "PROJ-7").await?;

    let text = output_of(buffer);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
      lines,
      [
        "Available transitions for issue PROJ-7:",
        "ID: 21, Name: Start Progress, To Status: In Progress",
        "ID: 11, Name: Stop, To Status: To Do",
        "ID: 31, Name: Resolve, To Status: Done",
      ]
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_list_transitions_empty_prints_only_header() -> anyhow::Result<()> {
    owo_colors::set_override(false);
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/PROJ-7/transitions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "transitions": [] })))
      .mount(&mock_server)
      .await;

    let mut buffer = Vec::new();
    list_transitions(&client, &mut buffer, "PROJ-7").await?;

    assert_eq!(output_of(buffer), "Available transitions for issue PROJ-7:\n");

    Ok(())
  }

  #[tokio::test]
  async fn test_list_transitions_decode_error_writes_nothing() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/3/issue/PROJ-7/transitions"))
      .respond_with(ResponseTemplate::new(200).set_body_string("{\"transitions\": ["))
      .mount(&mock_server)
      .await;

    let mut buffer = Vec::new();
    let result = list_transitions(&client, &mut buffer, "PROJ-7").await;

    assert!(result.is_err());
    assert!(buffer.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_perform_transition_success() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/PROJ-7/transitions"))
      .and(body_json(serde_json::json!({ "transition": { "id": "31" } })))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let mut buffer = Vec::new();
    let outcome = perform_transition(&client, &mut buffer, "PROJ-7", "31").await?;

    assert_eq!(outcome, TransitionOutcome::Transitioned);
    let text = output_of(buffer);
    assert!(text.contains("Successfully transitioned issue PROJ-7 to status with ID 31"));
    assert_eq!(text.lines().count(), 1);

    Ok(())
  }

  #[tokio::test]
  async fn test_perform_transition_rejected() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token")?;

    Mock::given(method("POST"))
      .and(path("/rest/api/3/issue/PROJ-7/transitions"))
      .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"errorMessages":["bad"]}"#))
      .mount(&mock_server)
      .await;

    let mut buffer = Vec::new();
    let outcome = perform_transition(&client, &mut buffer, "PROJ-7", "99").await?;

    assert!(!outcome.is_transitioned());
    let text = output_of(buffer);
    assert!(text.contains("Status: 400"));
    assert!(text.contains(r#"Response: {"errorMessages":["bad"]}"#));

    Ok(())
  }

  #[test]
  fn test_render_transitions_keeps_order() {
    owo_colors::set_override(false);
    let transitions: Vec<JiraTransition> = serde_json::from_value(serde_json::json!([
        { "id": "3", "name": "C", "to": { "name": "Z" } },
        { "id": "1", "name": "A", "to": { "name": "X" } }
    ]))
    .unwrap();

    let mut buffer = Vec::new();
    render_transitions(&mut buffer, "KEY-1", &transitions).unwrap();

    let text = output_of(buffer);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), transitions.len() + 1);
    assert_eq!(lines[1], "ID: 3, Name: C, To Status: Z");
    assert_eq!(lines[2], "ID: 1, Name: A, To Status: X");
  }
}
