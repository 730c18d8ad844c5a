use chrono::{DateTime, Duration, Utc};
use std::fmt;

use vetting_core::model::{
    AssessmentDefinition, AssessmentSummary, CompletionReason, Niche, Phase, Question, QuestionId,
    SessionId,
};

use super::answers::AnswerStore;
use super::progress::SessionProgress;
use super::timer::{ASSESSMENT_TIME_BUDGET_SECS, CountdownTimer, TimerTick};
use crate::error::SessionError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of one forward-navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The cursor moved to the next question (possibly into the next phase).
    Advanced,
    /// The current question has no non-blank answer; nothing changed.
    Blocked,
    /// The cursor was on the last question of the last phase; the session
    /// is now (or already was) complete.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Completion {
    at: DateTime<Utc>,
    reason: CompletionReason,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state for one in-progress assessment.
///
/// Owns a copy of the definition plus the cursor, the answers, and the
/// countdown. Every transition is total over the reachable state space;
/// the cursor can never leave the definition's bounds.
pub struct AssessmentSession {
    id: SessionId,
    definition: AssessmentDefinition,
    phase_index: usize,
    question_index: usize,
    answers: AnswerStore,
    timer: CountdownTimer,
    started_at: DateTime<Utc>,
    completion: Option<Completion>,
}

impl AssessmentSession {
    /// Starts a session at the first question of the first phase, with the
    /// standard time budget.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(definition: AssessmentDefinition, started_at: DateTime<Utc>) -> Self {
        Self::with_time_budget(definition, started_at, ASSESSMENT_TIME_BUDGET_SECS)
    }

    /// Starts a session with a custom time budget in seconds.
    #[must_use]
    pub fn with_time_budget(
        definition: AssessmentDefinition,
        started_at: DateTime<Utc>,
        budget_secs: u32,
    ) -> Self {
        Self {
            id: SessionId::generate(),
            definition,
            phase_index: 0,
            question_index: 0,
            answers: AnswerStore::new(),
            timer: CountdownTimer::new(budget_secs),
            started_at,
            completion: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn niche(&self) -> Niche {
        self.definition.niche()
    }

    #[must_use]
    pub fn definition(&self) -> &AssessmentDefinition {
        &self.definition
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completion.map(|completion| completion.at)
    }

    #[must_use]
    pub fn completion_reason(&self) -> Option<CompletionReason> {
        self.completion.map(|completion| completion.reason)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    #[must_use]
    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// The phase the cursor is on. The cursor never leaves the definition,
    /// so this is total.
    #[must_use]
    pub fn current_phase(&self) -> &Phase {
        &self.definition.phases()[self.phase_index]
    }

    /// The question the cursor is on.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.current_phase().questions()[self.question_index]
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.timer.remaining()
    }

    //
    // ─── ANSWERS ───────────────────────────────────────────────────────────
    //

    /// Stores free text for a question, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session has ended; the
    /// answer set is frozen at that point.
    pub fn set_answer(
        &mut self,
        id: QuestionId,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        self.answers.set(id, text);
        Ok(())
    }

    /// Stores free text for the question the cursor is on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session has ended.
    pub fn answer_current(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        let id = self.current_question().id().clone();
        self.set_answer(id, text)
    }

    #[must_use]
    pub fn answer(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id)
    }

    #[must_use]
    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.answers.is_answered(id)
    }

    /// Count of definition questions with a non-blank answer.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.definition
            .phases()
            .iter()
            .flat_map(Phase::questions)
            .filter(|question| self.answers.is_answered(question.id()))
            .count()
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────
    //

    /// Moves forward one question, gated on the current answer being
    /// non-blank. Past the last question of the last phase the session
    /// completes instead; calling again keeps reporting `Completed`.
    pub fn advance(&mut self, now: DateTime<Utc>) -> AdvanceOutcome {
        if self.is_complete() {
            return AdvanceOutcome::Completed;
        }
        if !self.answers.is_answered(self.current_question().id()) {
            return AdvanceOutcome::Blocked;
        }

        if self.question_index + 1 < self.current_phase().len() {
            self.question_index += 1;
            AdvanceOutcome::Advanced
        } else if self.phase_index + 1 < self.definition.phase_count() {
            self.phase_index += 1;
            self.question_index = 0;
            AdvanceOutcome::Advanced
        } else {
            self.complete(now, CompletionReason::Finished);
            AdvanceOutcome::Completed
        }
    }

    /// Moves back one question, crossing into the previous phase when the
    /// cursor is on a phase boundary. Never gated. A no-op at the very
    /// first question; returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        if self.question_index > 0 {
            self.question_index -= 1;
            true
        } else if self.phase_index > 0 {
            self.phase_index -= 1;
            self.question_index = self.current_phase().len() - 1;
            true
        } else {
            false
        }
    }

    /// Returns a snapshot of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let completed = self.definition.questions_before_phase(self.phase_index)
            + self.question_index
            + 1;
        SessionProgress {
            completed,
            total: self.definition.total_questions(),
            phase_index: self.phase_index,
            phase_count: self.definition.phase_count(),
            question_index: self.question_index,
            question_count: self.current_phase().len(),
            is_complete: self.is_complete(),
        }
    }

    //
    // ─── TIMER ─────────────────────────────────────────────────────────────
    //

    /// Registers one elapsed second. On the countdown's transition to zero
    /// the session completes with reason `TimedOut`, exactly once; ticks
    /// after completion are no-ops.
    pub fn tick(&mut self) -> TimerTick {
        if self.is_complete() {
            return TimerTick::Idle;
        }
        let tick = self.timer.tick();
        if tick == TimerTick::Expired {
            let expired_at = self.started_at + Duration::seconds(i64::from(self.timer.budget()));
            self.complete(expired_at, CompletionReason::TimedOut);
        }
        tick
    }

    fn complete(&mut self, at: DateTime<Utc>, reason: CompletionReason) {
        // Completion never predates the start timestamp.
        let at = at.max(self.started_at);
        self.completion = Some(Completion { at, reason });
    }

    /// Builds the completion summary for a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InProgress` while the session is still
    /// running.
    pub fn summary(&self) -> Result<AssessmentSummary, SessionError> {
        let completion = self.completion.ok_or(SessionError::InProgress)?;
        Ok(AssessmentSummary::new(
            self.niche(),
            self.started_at,
            completion.at,
            self.answered_count(),
            self.definition.total_questions(),
            completion.reason,
        )?)
    }
}

impl fmt::Debug for AssessmentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentSession")
            .field("id", &self.id)
            .field("niche", &self.niche())
            .field("phase_index", &self.phase_index)
            .field("question_index", &self.question_index)
            .field("answered", &self.answered_count())
            .field("remaining_seconds", &self.timer.remaining())
            .field("started_at", &self.started_at)
            .field("completion", &self.completion)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use vetting_core::model::{Phase, Question};
    use vetting_core::time::fixed_now;

    fn small_definition() -> AssessmentDefinition {
        let phases = vec![
            Phase::new(
                "alpha",
                "Phase Alpha",
                vec![
                    Question::written("a_1", "First prompt"),
                    Question::written("a_2", "Second prompt"),
                ],
            ),
            Phase::new("beta", "Phase Beta", vec![Question::written("b_1", "Third prompt")]),
        ];
        AssessmentDefinition::new(Niche::FrontendDev, phases).unwrap()
    }

    fn session() -> AssessmentSession {
        AssessmentSession::new(small_definition(), fixed_now())
    }

    #[test]
    fn starts_at_first_question_with_full_budget() {
        let session = session();
        assert_eq!(session.phase_index(), 0);
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.current_question().id().as_str(), "a_1");
        assert_eq!(session.remaining_seconds(), ASSESSMENT_TIME_BUDGET_SECS);
        assert!(!session.is_complete());
    }

    #[test]
    fn advance_is_blocked_until_answer_is_non_blank() {
        let mut session = session();
        assert_eq!(session.advance(fixed_now()), AdvanceOutcome::Blocked);

        session.answer_current("   ").unwrap();
        assert_eq!(session.advance(fixed_now()), AdvanceOutcome::Blocked);

        session.answer_current("a real answer").unwrap();
        assert_eq!(session.advance(fixed_now()), AdvanceOutcome::Advanced);
        assert_eq!(session.current_question().id().as_str(), "a_2");
    }

    #[test]
    fn advance_crosses_phase_boundary() {
        let mut session = session();
        session.answer_current("one").unwrap();
        session.advance(fixed_now());
        session.answer_current("two").unwrap();
        assert_eq!(session.advance(fixed_now()), AdvanceOutcome::Advanced);
        assert_eq!(session.phase_index(), 1);
        assert_eq!(session.question_index(), 0);
    }

    #[test]
    fn final_advance_completes_without_moving_the_cursor() {
        let mut session = session();
        for answer in ["one", "two", "three"] {
            session.answer_current(answer).unwrap();
            session.advance(fixed_now());
        }
        assert!(session.is_complete());
        assert_eq!(session.completion_reason(), Some(CompletionReason::Finished));
        assert_eq!(session.phase_index(), 1);
        assert_eq!(session.question_index(), 0);
        // Idempotent afterwards.
        assert_eq!(session.advance(fixed_now()), AdvanceOutcome::Completed);
    }

    #[test]
    fn retreat_at_the_very_start_is_a_no_op() {
        let mut session = session();
        assert!(!session.retreat());
        assert_eq!(session.phase_index(), 0);
        assert_eq!(session.question_index(), 0);
    }

    #[test]
    fn retreat_crosses_back_to_last_question_of_previous_phase() {
        let mut session = session();
        session.answer_current("one").unwrap();
        session.advance(fixed_now());
        session.answer_current("two").unwrap();
        session.advance(fixed_now());
        assert_eq!(session.phase_index(), 1);

        assert!(session.retreat());
        assert_eq!(session.phase_index(), 0);
        assert_eq!(session.question_index(), 1);
    }

    #[test]
    fn retreat_is_never_gated() {
        let mut session = session();
        session.answer_current("one").unwrap();
        session.advance(fixed_now());
        // a_2 is unanswered, backward motion still works
        assert!(session.retreat());
        assert_eq!(session.question_index(), 0);
    }

    #[test]
    fn progress_is_monotonic_under_advance_and_tops_out_at_one() {
        let mut session = session();
        let mut last = 0.0_f64;
        loop {
            let fraction = session.progress().fraction();
            assert!(fraction >= last);
            last = fraction;
            session.answer_current("answer").unwrap();
            if session.advance(fixed_now()) == AdvanceOutcome::Completed {
                break;
            }
        }
        assert!((last - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_fraction_reaches_one_only_on_the_last_question() {
        let mut session = session();
        assert!(session.progress().fraction() < 1.0);
        session.answer_current("one").unwrap();
        session.advance(fixed_now());
        assert!(session.progress().fraction() < 1.0);
        session.answer_current("two").unwrap();
        session.advance(fixed_now());
        assert!((session.progress().fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn timer_expiry_completes_session_once() {
        let mut session =
            AssessmentSession::with_time_budget(small_definition(), fixed_now(), 2);
        assert_eq!(session.tick(), TimerTick::Running(1));
        assert_eq!(session.tick(), TimerTick::Expired);
        assert!(session.is_complete());
        assert_eq!(session.completion_reason(), Some(CompletionReason::TimedOut));
        assert_eq!(session.tick(), TimerTick::Idle);
    }

    #[test]
    fn ticks_after_finishing_are_no_ops() {
        let mut session = session();
        for answer in ["one", "two", "three"] {
            session.answer_current(answer).unwrap();
            session.advance(fixed_now());
        }
        assert_eq!(session.tick(), TimerTick::Idle);
        assert_eq!(session.remaining_seconds(), ASSESSMENT_TIME_BUDGET_SECS);
    }

    #[test]
    fn completed_session_rejects_new_answers() {
        let mut session = session();
        for answer in ["one", "two", "three"] {
            session.answer_current(answer).unwrap();
            session.advance(fixed_now());
        }
        let err = session.answer_current("late edit").unwrap_err();
        assert!(matches!(err, SessionError::Completed));
    }

    #[test]
    fn summary_reflects_partial_answers_on_timeout() {
        let mut session =
            AssessmentSession::with_time_budget(small_definition(), fixed_now(), 1);
        session.answer_current("only one").unwrap();
        assert_eq!(session.tick(), TimerTick::Expired);

        let summary = session.summary().unwrap();
        assert_eq!(summary.answered(), 1);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.reason(), CompletionReason::TimedOut);
        assert!(!summary.is_exhaustive());
    }

    #[test]
    fn summary_of_running_session_is_an_error() {
        let session = session();
        assert!(matches!(session.summary(), Err(SessionError::InProgress)));
    }

    #[test]
    fn frontend_dev_midpoint_scenario() {
        // 5 phases of 10 questions; phase index 2, question index 4 is
        // (10 + 10 + 4 + 1) / 50 = 0.5.
        let mut session = AssessmentSession::new(
            catalog::definition(Niche::FrontendDev).clone(),
            fixed_now(),
        );
        for _ in 0..24 {
            session.answer_current("answer").unwrap();
            assert_eq!(session.advance(fixed_now()), AdvanceOutcome::Advanced);
        }
        let progress = session.progress();
        assert_eq!(progress.phase_index, 2);
        assert_eq!(progress.question_index, 4);
        assert_eq!(progress.completed, 25);
        assert_eq!(progress.total, 50);
        assert!((progress.fraction() - 0.5).abs() < f64::EPSILON);
    }
}
