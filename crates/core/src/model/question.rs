use serde::{Deserialize, Serialize};

use crate::model::QuestionId;

/// How a question expects its response.
///
/// Every shipped question is `Written`; the fixed-choice kind is modeled
/// because the intake format defines it, but no catalog entry uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum ResponseKind {
    Written,
    MultipleChoice { options: Vec<String> },
}

impl ResponseKind {
    #[must_use]
    pub fn is_written(&self) -> bool {
        matches!(self, ResponseKind::Written)
    }
}

/// A single prompt within a phase. Immutable once defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    kind: ResponseKind,
    prompt: String,
}

impl Question {
    /// Builds a free-text question.
    #[must_use]
    pub fn written(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(id),
            kind: ResponseKind::Written,
            prompt: prompt.into(),
        }
    }

    /// Builds a fixed-choice question.
    #[must_use]
    pub fn multiple_choice(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            kind: ResponseKind::MultipleChoice { options },
            prompt: prompt.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> &ResponseKind {
        &self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_question_has_no_options() {
        let q = Question::written("fund_1", "Why is clarity more important than word count?");
        assert!(q.kind().is_written());
        assert_eq!(q.id().as_str(), "fund_1");
    }

    #[test]
    fn multiple_choice_keeps_option_order() {
        let q = Question::multiple_choice(
            "comm_4",
            "When do you set a revision policy?",
            vec!["Up front".to_string(), "When asked".to_string()],
        );
        match q.kind() {
            ResponseKind::MultipleChoice { options } => {
                assert_eq!(options[0], "Up front");
            }
            ResponseKind::Written => panic!("expected multiple choice"),
        }
    }
}
