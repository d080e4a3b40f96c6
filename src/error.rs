//! Error types for the two backend exchanges.
//!
//! Both enums are `Clone` so they can ride inside `NetworkResponse`.

use thiserror::Error;

/// Failure while adding an expense. Surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("backend rejected expense with status {0}")]
    Status(u16),
}

/// Failure while loading the expense list. Only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("backend answered with status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Describe a transport error the way the log should read it
pub(crate) fn describe_reqwest_error(e: &reqwest::Error) -> String {
    if e.is_connect() {
        format!("connection failed: {}", e)
    } else if e.is_timeout() {
        format!("timed out: {}", e)
    } else {
        e.to_string()
    }
}
