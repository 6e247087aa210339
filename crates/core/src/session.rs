use std::fmt;

use thiserror::Error;

use crate::model::{AnswerKey, Question};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Rejected transitions. The session is left untouched when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no question is awaiting an answer")]
    NotInProgress,

    #[error("current question has no answer {key}")]
    UnknownAnswer { key: AnswerKey },
}

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No active quiz.
    #[default]
    Start,
    /// A question is showing.
    InProgress,
    /// The last question has been answered.
    Finished,
}

/// Result of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub finished: bool,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: u32,
    pub percent: u8,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// One quiz run, from load to finish or reset.
///
/// The question list is fixed once loaded. The cursor and score only move
/// forward until `reset` or the next `load_questions`.
#[derive(Clone, Default, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    cursor: usize,
    score: u32,
    state: SessionState,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the question list and start from the first question.
    ///
    /// An empty list leaves the session in `Start`.
    pub fn load_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.cursor = 0;
        self.score = 0;
        self.state = if self.questions.is_empty() {
            SessionState::Start
        } else {
            SessionState::InProgress
        };
    }

    /// Drop the current quiz and return to `Start`.
    pub fn reset(&mut self) {
        self.questions.clear();
        self.cursor = 0;
        self.score = 0;
        self.state = SessionState::Start;
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.state != SessionState::InProgress {
            return None;
        }
        self.questions.get(self.cursor)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions already answered in this session.
    #[must_use]
    pub fn answered(&self) -> usize {
        match self.state {
            SessionState::Start => 0,
            SessionState::InProgress => self.cursor,
            SessionState::Finished => self.questions.len(),
        }
    }

    /// Percentage of questions answered while a quiz is running, else 0.
    #[must_use]
    pub fn progress(&self) -> u8 {
        if self.state != SessionState::InProgress || self.questions.is_empty() {
            return 0;
        }
        let percent = self.answered() * 100 / self.questions.len();
        u8::try_from(percent).unwrap_or(100)
    }

    #[must_use]
    pub fn summary(&self) -> SessionProgress {
        let answered = self.answered();
        SessionProgress {
            total: self.total(),
            answered,
            remaining: self.total().saturating_sub(answered),
            score: self.score,
            percent: self.progress(),
        }
    }

    /// Answer the current question with the option labelled `key` and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` if no question is showing.
    /// Returns `SessionError::UnknownAnswer` if the current question has no such option.
    pub fn submit_answer(&mut self, key: &AnswerKey) -> Result<AnswerOutcome, SessionError> {
        let question = self.current_question().ok_or(SessionError::NotInProgress)?;
        let correct = question
            .is_correct(key)
            .ok_or_else(|| SessionError::UnknownAnswer { key: key.clone() })?;

        if correct {
            self.score = self.score.saturating_add(1);
        }

        if self.cursor + 1 >= self.questions.len() {
            self.state = SessionState::Finished;
        } else {
            self.cursor += 1;
        }

        Ok(AnswerOutcome {
            correct,
            finished: self.is_finished(),
        })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("cursor", &self.cursor)
            .field("score", &self.score)
            .field("state", &self.state)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
