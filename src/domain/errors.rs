//! Domain errors. Used by ports and use cases.
//!
//! Enrollment itself never fails; these cover the infrastructure around it.
//! Adapters map their errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Console output failed: {0}")]
    Output(String),

    /// The offering lock was poisoned by a panic in another holder.
    #[error("State error: {0}")]
    State(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Output(e.to_string())
    }
}
