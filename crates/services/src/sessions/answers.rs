use std::collections::HashMap;

use vetting_core::model::QuestionId;

/// Free-text responses keyed by question id.
///
/// Writes overwrite unconditionally (last write wins). The only read
/// anyone cares about is the forward-navigation gate: a question counts
/// as answered iff its stored text is non-empty after trimming. Content
/// is never validated beyond that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    answers: HashMap<QuestionId, String>,
}

impl AnswerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` for `id`, replacing any prior value.
    pub fn set(&mut self, id: QuestionId, text: impl Into<String>) {
        self.answers.insert(id, text.into());
    }

    /// The stored text for `id`, verbatim.
    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    /// True iff the stored text for `id` is non-empty after trimming.
    #[must_use]
    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.answers
            .get(id)
            .is_some_and(|text| !text.trim().is_empty())
    }

    /// Number of entries, answered or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(raw: &str) -> QuestionId {
        QuestionId::new(raw)
    }

    #[test]
    fn last_write_wins() {
        let mut store = AnswerStore::new();
        store.set(qid("html_1"), "first draft");
        store.set(qid("html_1"), "final answer");
        assert_eq!(store.get(&qid("html_1")), Some("final answer"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn whitespace_only_text_does_not_count_as_answered() {
        let mut store = AnswerStore::new();
        store.set(qid("css_2"), "   \n\t ");
        assert!(!store.is_answered(&qid("css_2")));
        assert_eq!(store.get(&qid("css_2")), Some("   \n\t "));
    }

    #[test]
    fn missing_entry_is_unanswered() {
        let store = AnswerStore::new();
        assert!(!store.is_answered(&qid("js_9")));
        assert_eq!(store.get(&qid("js_9")), None);
    }

    #[test]
    fn overwriting_with_blank_unanswers_the_question() {
        let mut store = AnswerStore::new();
        store.set(qid("frame_4"), "props flow down");
        assert!(store.is_answered(&qid("frame_4")));
        store.set(qid("frame_4"), "  ");
        assert!(!store.is_answered(&qid("frame_4")));
    }
}
