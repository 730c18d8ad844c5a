use crate::model::{PhaseId, Question};

/// A named, ordered group of questions within one assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    id: PhaseId,
    title: String,
    questions: Vec<Question>,
}

impl Phase {
    /// Builds a phase from its ordered question list.
    ///
    /// Emptiness is checked by [`AssessmentDefinition::new`], which owns
    /// whole-definition validation.
    ///
    /// [`AssessmentDefinition::new`]: crate::model::AssessmentDefinition::new
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            id: PhaseId::new(id),
            title: title.into(),
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &PhaseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions in this phase.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The question at `index`, if within bounds.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}
