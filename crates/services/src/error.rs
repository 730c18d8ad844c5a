//! Shared error types for the services crate.

use thiserror::Error;

use vetting_core::model::SummaryError;

/// Errors emitted by assessment sessions.
///
/// Navigation itself never fails; the only fallible operations are
/// mutating a session that has already completed and summarizing one
/// that has not.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("assessment session already completed")]
    Completed,

    #[error("assessment session is still in progress")]
    InProgress,

    #[error(transparent)]
    Summary(#[from] SummaryError),
}
