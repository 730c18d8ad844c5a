use tracing::{debug, warn};

use vetting_core::Clock;
use vetting_core::model::{
    AssessmentSummary, Candidate, CandidateError, Niche, NicheOverview,
};

use crate::sessions::{AdvanceOutcome, AssessmentSession, SessionProgress, TimerTick};

/// Where the candidate currently is in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Landing,
    NicheSelection,
    Overview,
    Assessment,
    Results,
}

/// Top-level wizard state machine:
/// landing → niche selection → overview → assessment → results.
///
/// One flow holds at most one live session; completing it (by answering
/// everything or by timer expiry) produces a summary, discards the session
/// state, and lands on the results stage. Calls that do not apply to the
/// current stage are silent no-ops — the state space has no invalid
/// transitions, only ignored ones.
pub struct AssessmentFlow {
    clock: Clock,
    stage: Stage,
    candidate: Option<Candidate>,
    niche: Option<Niche>,
    session: Option<AssessmentSession>,
    summary: Option<AssessmentSummary>,
}

impl AssessmentFlow {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            stage: Stage::Landing,
            candidate: None,
            niche: None,
            session: None,
            summary: None,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn candidate(&self) -> Option<&Candidate> {
        self.candidate.as_ref()
    }

    #[must_use]
    pub fn niche(&self) -> Option<Niche> {
        self.niche
    }

    #[must_use]
    pub fn session(&self) -> Option<&AssessmentSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&AssessmentSummary> {
        self.summary.as_ref()
    }

    /// Landing: record contact details and move to niche selection.
    ///
    /// # Errors
    ///
    /// Returns `CandidateError` when either field is blank after trimming;
    /// the flow stays on the landing stage.
    pub fn submit_contact(&mut self, name: &str, email: &str) -> Result<(), CandidateError> {
        if self.stage != Stage::Landing {
            return Ok(());
        }
        let candidate = Candidate::new(name, email)?;
        debug!(candidate = candidate.name(), "contact details captured");
        self.candidate = Some(candidate);
        self.stage = Stage::NicheSelection;
        Ok(())
    }

    /// Niche selection: resolve the chosen key and move to the overview.
    ///
    /// An unrecognized key logs a warning and keeps the candidate on the
    /// selection stage; returns whether the transition happened.
    pub fn select_niche(&mut self, key: &str) -> bool {
        if self.stage != Stage::NicheSelection {
            return false;
        }
        match Niche::from_key(key) {
            Some(niche) => {
                self.niche = Some(niche);
                self.stage = Stage::Overview;
                true
            }
            None => {
                warn!(%key, "no assessment found for niche");
                false
            }
        }
    }

    /// The overview record for the selected niche. Unset or unrecognized
    /// selections degrade to the default niche's record.
    #[must_use]
    pub fn overview(&self) -> &'static NicheOverview {
        catalog::overview(self.niche.unwrap_or(Niche::DEFAULT))
    }

    /// Overview: start the assessment for the selected niche.
    pub fn start_assessment(&mut self) -> bool {
        if self.stage != Stage::Overview {
            return false;
        }
        let niche = self.niche.unwrap_or(Niche::DEFAULT);
        let definition = catalog::definition(niche).clone();
        let session = AssessmentSession::new(definition, self.clock.now());
        debug!(session = %session.id(), %niche, "assessment started");
        self.session = Some(session);
        self.stage = Stage::Assessment;
        true
    }

    /// One step back: selection → landing, overview → selection,
    /// assessment → overview. Leaving the assessment tears the session
    /// down, which also unhooks its countdown from the tick source.
    pub fn back(&mut self) -> bool {
        match self.stage {
            Stage::NicheSelection => {
                self.stage = Stage::Landing;
                true
            }
            Stage::Overview => {
                self.stage = Stage::NicheSelection;
                true
            }
            Stage::Assessment => {
                self.session = None;
                self.stage = Stage::Overview;
                true
            }
            Stage::Landing | Stage::Results => false,
        }
    }

    /// Stores free text for the current question of the live session.
    pub fn answer_current(&mut self, text: &str) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.answer_current(text).is_ok()
    }

    /// Forwards navigation to the live session; completion moves the flow
    /// to results.
    pub fn advance(&mut self) -> Option<AdvanceOutcome> {
        let now = self.clock.now();
        let outcome = self.session.as_mut()?.advance(now);
        if outcome == AdvanceOutcome::Completed {
            self.finish();
        }
        Some(outcome)
    }

    /// Backward navigation; never gated, no-op at the very start.
    pub fn retreat(&mut self) -> bool {
        self.session.as_mut().is_some_and(AssessmentSession::retreat)
    }

    /// One elapsed second. Timer expiry completes the assessment through
    /// the same path as finishing the last question.
    pub fn tick(&mut self) -> Option<TimerTick> {
        let tick = self.session.as_mut()?.tick();
        if tick == TimerTick::Expired {
            self.finish();
        }
        Some(tick)
    }

    #[must_use]
    pub fn progress(&self) -> Option<SessionProgress> {
        self.session.as_ref().map(AssessmentSession::progress)
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.session.as_ref().map(AssessmentSession::remaining_seconds)
    }

    /// Completion path shared by both triggers: summarize, discard the
    /// session state, show results.
    fn finish(&mut self) {
        if let Some(session) = self.session.take() {
            match session.summary() {
                Ok(summary) => self.summary = Some(summary),
                Err(error) => warn!(%error, "discarding session without summary"),
            }
        }
        self.stage = Stage::Results;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vetting_core::time::fixed_clock;

    fn flow_at_selection() -> AssessmentFlow {
        let mut flow = AssessmentFlow::new(fixed_clock());
        flow.submit_contact("Ada Lovelace", "ada@example.com").unwrap();
        flow
    }

    #[test]
    fn landing_rejects_blank_contact_details() {
        let mut flow = AssessmentFlow::new(fixed_clock());
        assert!(flow.submit_contact("  ", "ada@example.com").is_err());
        assert_eq!(flow.stage(), Stage::Landing);

        flow.submit_contact("Ada", "ada@example.com").unwrap();
        assert_eq!(flow.stage(), Stage::NicheSelection);
    }

    #[test]
    fn unknown_niche_key_stays_on_selection() {
        let mut flow = flow_at_selection();
        assert!(!flow.select_niche("brand-identity"));
        assert_eq!(flow.stage(), Stage::NicheSelection);
        assert_eq!(flow.niche(), None);
    }

    #[test]
    fn known_niche_key_reaches_overview_with_its_record() {
        let mut flow = flow_at_selection();
        assert!(flow.select_niche("video-editing"));
        assert_eq!(flow.stage(), Stage::Overview);
        assert_eq!(flow.overview().title(), "Video Editing");
    }

    #[test]
    fn overview_defaults_before_any_selection() {
        let flow = AssessmentFlow::new(fixed_clock());
        assert_eq!(flow.overview().niche(), Niche::DEFAULT);
    }

    #[test]
    fn back_walks_the_stages_and_tears_down_the_session() {
        let mut flow = flow_at_selection();
        flow.select_niche("frontend-dev");
        flow.start_assessment();
        assert!(flow.session().is_some());

        assert!(flow.back());
        assert_eq!(flow.stage(), Stage::Overview);
        assert!(flow.session().is_none());

        assert!(flow.back());
        assert_eq!(flow.stage(), Stage::NicheSelection);
        assert!(flow.back());
        assert_eq!(flow.stage(), Stage::Landing);
        assert!(!flow.back());
    }

    #[test]
    fn session_calls_without_a_session_are_no_ops() {
        let mut flow = flow_at_selection();
        assert!(!flow.answer_current("text"));
        assert_eq!(flow.advance(), None);
        assert!(!flow.retreat());
        assert_eq!(flow.tick(), None);
        assert_eq!(flow.progress(), None);
    }

    #[test]
    fn wrong_stage_transitions_are_ignored() {
        let mut flow = AssessmentFlow::new(fixed_clock());
        assert!(!flow.select_niche("copywriting"));
        assert!(!flow.start_assessment());
        flow.submit_contact("Ada", "ada@example.com").unwrap();
        // a second submit on the selection stage changes nothing
        flow.submit_contact("Grace", "grace@example.com").unwrap();
        assert_eq!(flow.candidate().unwrap().name(), "Ada");
    }
}
