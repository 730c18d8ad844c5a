mod assessment;
mod candidate;
mod ids;
mod niche;
mod overview;
mod phase;
mod question;
mod summary;

pub use assessment::{AssessmentDefinition, AssessmentError};
pub use candidate::{Candidate, CandidateError};
pub use ids::{PhaseId, QuestionId, SessionId};
pub use niche::Niche;
pub use overview::NicheOverview;
pub use phase::Phase;
pub use question::{Question, ResponseKind};
pub use summary::{AssessmentSummary, CompletionReason, SummaryError};
