use thiserror::Error;

use crate::model::{AssessmentError, CandidateError, SummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Candidate(#[from] CandidateError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}
