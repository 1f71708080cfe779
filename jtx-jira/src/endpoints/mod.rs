//! # Jira API Endpoints
//!
//! Endpoint implementations for the Jira REST resources the client uses.

pub mod transitions;
