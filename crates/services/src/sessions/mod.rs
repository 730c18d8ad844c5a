mod answers;
mod progress;
mod service;
mod timer;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use answers::AnswerStore;
pub use progress::SessionProgress;
pub use service::{AdvanceOutcome, AssessmentSession};
pub use timer::{ASSESSMENT_TIME_BUDGET_SECS, CountdownTimer, TimerTick};
