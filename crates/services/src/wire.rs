//! JSON records returned by the question source and their mapping to core questions.

use std::collections::BTreeMap;

use log::warn;
use quiz_core::model::{AnswerKey, AnswerOption, Question, QuestionId};
use serde::Deserialize;

/// Literal value upstream uses for a correct slot.
const TRUE_FLAG: &str = "true";

/// One question record as served by quizapi.io.
///
/// Only the fields the quiz needs are decoded; anything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub id: u64,
    pub question: String,
    #[serde(default)]
    pub answers: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub correct_answers: BTreeMap<String, Option<String>>,
}

impl QuestionRecord {
    /// Build a core question, dropping empty slots.
    ///
    /// A present slot without a correctness flag is kept but never counts as correct.
    #[must_use]
    pub fn into_question(self) -> Question {
        let id = QuestionId::new(self.id);
        let mut options = Vec::with_capacity(self.answers.len());

        for (raw_key, text) in self.answers {
            let Some(text) = text else {
                continue;
            };
            let Ok(key) = AnswerKey::new(raw_key) else {
                warn!("question {id}: skipping answer with blank key");
                continue;
            };
            let is_correct = match self.correct_answers.get(&key.correctness_flag()) {
                Some(Some(flag)) => flag == TRUE_FLAG,
                Some(None) | None => {
                    warn!("question {id}: answer {key} has no correctness flag");
                    false
                }
            };
            options.push(AnswerOption::new(key, text, is_correct));
        }

        Question::new(id, self.question, options)
    }
}

/// Decode a JSON array of question records.
///
/// Records with no answer to offer are skipped, so a payload made only of
/// them yields an empty list.
///
/// # Errors
///
/// Returns `serde_json::Error` if the payload is not an array of records.
pub fn decode_questions(body: &str) -> Result<Vec<Question>, serde_json::Error> {
    let records: Vec<QuestionRecord> = serde_json::from_str(body)?;
    Ok(records
        .into_iter()
        .map(QuestionRecord::into_question)
        .filter(|question| {
            let answerable = !question.options().is_empty();
            if !answerable {
                warn!("question {}: no answers offered, skipping", question.id());
            }
            answerable
        })
        .collect())
}
