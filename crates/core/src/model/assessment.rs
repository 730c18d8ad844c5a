use std::collections::HashSet;
use thiserror::Error;

use crate::model::{Niche, Phase, PhaseId, Question, QuestionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("assessment must contain at least one phase")]
    NoPhases,

    #[error("phase {phase} contains no questions")]
    EmptyPhase { phase: PhaseId },

    #[error("question id {id} appears more than once")]
    DuplicateQuestionId { id: QuestionId },
}

/// The complete static phase/question set for one niche.
///
/// Immutable once built; every session for the niche walks the same
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentDefinition {
    niche: Niche,
    phases: Vec<Phase>,
}

impl AssessmentDefinition {
    /// Builds a definition from its ordered phase list.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::NoPhases` for an empty phase list,
    /// `AssessmentError::EmptyPhase` if any phase has no questions, and
    /// `AssessmentError::DuplicateQuestionId` if a question id repeats
    /// anywhere in the definition.
    pub fn new(niche: Niche, phases: Vec<Phase>) -> Result<Self, AssessmentError> {
        if phases.is_empty() {
            return Err(AssessmentError::NoPhases);
        }

        let mut seen = HashSet::new();
        for phase in &phases {
            if phase.is_empty() {
                return Err(AssessmentError::EmptyPhase {
                    phase: phase.id().clone(),
                });
            }
            for question in phase.questions() {
                if !seen.insert(question.id().clone()) {
                    return Err(AssessmentError::DuplicateQuestionId {
                        id: question.id().clone(),
                    });
                }
            }
        }

        Ok(Self { niche, phases })
    }

    #[must_use]
    pub fn niche(&self) -> Niche {
        self.niche
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Number of phases in this definition. Always at least one.
    #[must_use]
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// The phase at `index`, if within bounds.
    #[must_use]
    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    /// Total question count across all phases. Computed, never stored.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.phases.iter().map(Phase::len).sum()
    }

    /// Questions in all phases strictly before `phase_index`.
    #[must_use]
    pub fn questions_before_phase(&self, phase_index: usize) -> usize {
        self.phases
            .iter()
            .take(phase_index)
            .map(Phase::len)
            .sum()
    }

    /// Looks up a question anywhere in the definition by id.
    #[must_use]
    pub fn find_question(&self, id: &QuestionId) -> Option<&Question> {
        self.phases
            .iter()
            .flat_map(|phase| phase.questions())
            .find(|question| question.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase(id: &str, question_ids: &[&str]) -> Phase {
        let questions = question_ids
            .iter()
            .map(|qid| Question::written(*qid, format!("Prompt for {qid}")))
            .collect();
        Phase::new(id, format!("Phase {id}"), questions)
    }

    #[test]
    fn counts_are_computed_from_phases() {
        let definition = AssessmentDefinition::new(
            Niche::FrontendDev,
            vec![phase("a", &["a_1", "a_2"]), phase("b", &["b_1"])],
        )
        .unwrap();

        assert_eq!(definition.phase_count(), 2);
        assert_eq!(definition.total_questions(), 3);
        assert_eq!(definition.questions_before_phase(0), 0);
        assert_eq!(definition.questions_before_phase(1), 2);
    }

    #[test]
    fn rejects_empty_definition() {
        let err = AssessmentDefinition::new(Niche::FrontendDev, Vec::new()).unwrap_err();
        assert_eq!(err, AssessmentError::NoPhases);
    }

    #[test]
    fn rejects_phase_without_questions() {
        let err = AssessmentDefinition::new(
            Niche::FrontendDev,
            vec![phase("a", &["a_1"]), Phase::new("b", "Phase b", Vec::new())],
        )
        .unwrap_err();
        assert!(matches!(err, AssessmentError::EmptyPhase { .. }));
    }

    #[test]
    fn rejects_duplicate_question_ids_across_phases() {
        let err = AssessmentDefinition::new(
            Niche::FrontendDev,
            vec![phase("a", &["q_1"]), phase("b", &["q_1"])],
        )
        .unwrap_err();
        assert!(matches!(err, AssessmentError::DuplicateQuestionId { .. }));
    }

    #[test]
    fn finds_questions_by_id() {
        let definition = AssessmentDefinition::new(
            Niche::FrontendDev,
            vec![phase("a", &["a_1"]), phase("b", &["b_1", "b_2"])],
        )
        .unwrap();

        let found = definition.find_question(&QuestionId::new("b_2")).unwrap();
        assert_eq!(found.id().as_str(), "b_2");
        assert!(definition.find_question(&QuestionId::new("c_9")).is_none());
    }
}
