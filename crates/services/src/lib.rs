#![forbid(unsafe_code)]

pub mod error;
pub mod flow;
pub mod sessions;

pub use vetting_core::Clock;

pub use error::SessionError;
pub use flow::{AssessmentFlow, Stage};

pub use sessions::{
    ASSESSMENT_TIME_BUDGET_SECS, AdvanceOutcome, AnswerStore, AssessmentSession, CountdownTimer,
    SessionProgress, TimerTick,
};
