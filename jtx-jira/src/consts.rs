//! Constants for the jtx Jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("jtx/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Version prefix of every REST resource the client talks to.
pub const REST_API_PREFIX: &str = "rest/api/3";
