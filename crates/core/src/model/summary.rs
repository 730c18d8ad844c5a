use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::Niche;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("answered count ({answered}) exceeds total questions ({total})")]
    CountMismatch { answered: usize, total: usize },
}

/// How an assessment reached its completion screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionReason {
    /// The candidate advanced past the last question of the last phase.
    Finished,
    /// The countdown reached zero before the candidate finished.
    TimedOut,
}

/// Aggregate record for a completed assessment session.
///
/// Built once when the session ends; the mutable session state itself is
/// discarded immediately afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSummary {
    niche: Niche,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    answered: usize,
    total: usize,
    reason: CompletionReason,
}

impl AssessmentSummary {
    /// Builds a validated summary.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::InvalidTimeRange` if `completed_at` precedes
    /// `started_at`, and `SummaryError::CountMismatch` if more answers are
    /// claimed than questions exist.
    pub fn new(
        niche: Niche,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        answered: usize,
        total: usize,
        reason: CompletionReason,
    ) -> Result<Self, SummaryError> {
        if completed_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        if answered > total {
            return Err(SummaryError::CountMismatch { answered, total });
        }

        Ok(Self {
            niche,
            started_at,
            completed_at,
            answered,
            total,
            reason,
        })
    }

    #[must_use]
    pub fn niche(&self) -> Niche {
        self.niche
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.answered
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn reason(&self) -> CompletionReason {
        self.reason
    }

    /// True when every question had a non-blank answer at completion.
    #[must_use]
    pub fn is_exhaustive(&self) -> bool {
        self.answered == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    #[test]
    fn summary_accepts_valid_range() {
        let now = fixed_now();
        let summary = AssessmentSummary::new(
            Niche::FrontendDev,
            now,
            now + Duration::seconds(3600),
            50,
            50,
            CompletionReason::Finished,
        )
        .unwrap();

        assert!(summary.is_exhaustive());
        assert_eq!(summary.reason(), CompletionReason::Finished);
    }

    #[test]
    fn rejects_completion_before_start() {
        let now = fixed_now();
        let err = AssessmentSummary::new(
            Niche::FrontendDev,
            now,
            now - Duration::seconds(1),
            0,
            50,
            CompletionReason::TimedOut,
        )
        .unwrap_err();
        assert_eq!(err, SummaryError::InvalidTimeRange);
    }

    #[test]
    fn rejects_more_answers_than_questions() {
        let now = fixed_now();
        let err = AssessmentSummary::new(
            Niche::FrontendDev,
            now,
            now,
            51,
            50,
            CompletionReason::Finished,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SummaryError::CountMismatch {
                answered: 51,
                total: 50
            }
        );
    }

    #[test]
    fn timed_out_summary_may_be_partial() {
        let now = fixed_now();
        let summary = AssessmentSummary::new(
            Niche::VideoEditing,
            now,
            now + Duration::seconds(3600),
            12,
            50,
            CompletionReason::TimedOut,
        )
        .unwrap();
        assert!(!summary.is_exhaustive());
    }
}
