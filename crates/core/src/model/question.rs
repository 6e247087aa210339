use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("answer key cannot be empty")]
    EmptyAnswerKey,
}

//
// ─── ANSWER KEY ───────────────────────────────────────────────────────────────
//

/// Label of an answer slot, e.g. `answer_b` (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnswerKey(String);

impl AnswerKey {
    /// Suffix appended to a slot label to name its correctness flag.
    pub const CORRECT_SUFFIX: &'static str = "_correct";

    /// Create a validated answer key.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyAnswerKey` if the key is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, QuestionError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::EmptyAnswerKey);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the paired correctness flag (`answer_b` -> `answer_b_correct`).
    #[must_use]
    pub fn correctness_flag(&self) -> String {
        format!("{}{}", self.0, Self::CORRECT_SUFFIX)
    }
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── ANSWER OPTION ────────────────────────────────────────────────────────────
//

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub key: AnswerKey,
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    #[must_use]
    pub fn new(key: AnswerKey, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            key,
            text: text.into(),
            is_correct,
        }
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with a variable number of options.
///
/// Options keep the order in which they were supplied. Slots that were empty
/// upstream are simply not present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<AnswerOption>,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id,
            text: text.into(),
            options,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, key: &AnswerKey) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.key == *key)
    }

    /// Whether the option with `key` is marked correct.
    ///
    /// Returns `None` if the question has no option with that key.
    #[must_use]
    pub fn is_correct(&self, key: &AnswerKey) -> Option<bool> {
        self.option(key).map(|option| option.is_correct)
    }

    /// Keys of every option flagged correct. Usually one, but upstream does not enforce it.
    pub fn correct_keys(&self) -> impl Iterator<Item = &AnswerKey> {
        self.options
            .iter()
            .filter(|option| option.is_correct)
            .map(|option| &option.key)
    }
}
