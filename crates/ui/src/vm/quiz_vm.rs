use quiz_core::model::{AnswerKey, Category, Difficulty, QuizParams, QuizRequest};
use quiz_core::{AnswerOutcome, QuizSession, SessionError, SessionState};
use services::{QuizError, QuizService};

use crate::views::ViewError;

/// Everything the quiz screen can ask for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SetDifficulty(Difficulty),
    SetCategory(Option<Category>),
    StartRandom,
    StartFiltered,
    Answer(AnswerKey),
    GoHome,
    Retry,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerButtonVm {
    pub key: AnswerKey,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    /// 1-based position in the quiz.
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub answers: Vec<AnswerButtonVm>,
    pub progress: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub score: u32,
    pub total: usize,
}

impl ScoreVm {
    #[must_use]
    pub fn headline(&self) -> String {
        format!("You scored {} out of {}! 🎉", self.score, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Start,
    Question(QuestionVm),
    Score(ScoreVm),
}

/// Owns the running session and the filters picked on the start screen.
#[derive(Debug, Default)]
pub struct QuizVm {
    session: QuizSession,
    params: QuizParams,
}

impl QuizVm {
    #[must_use]
    pub fn new(params: QuizParams) -> Self {
        Self {
            session: QuizSession::new(),
            params,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn params(&self) -> QuizParams {
        self.params
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.params.difficulty = difficulty;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.params.category = category;
    }

    #[must_use]
    pub fn filtered_request(&self) -> QuizRequest {
        QuizRequest::Filtered(self.params)
    }

    /// Swap in a freshly fetched session.
    pub fn begin(&mut self, session: QuizSession) {
        self.session = session;
    }

    /// # Errors
    ///
    /// Returns `SessionError` when there is nothing to answer or the key is not offered.
    pub fn answer(&mut self, key: &AnswerKey) -> Result<AnswerOutcome, SessionError> {
        self.session.submit_answer(key)
    }

    /// Back to the start screen. Filters are kept.
    pub fn go_home(&mut self) {
        self.session.reset();
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        let progress = self.session.summary();
        match self.session.state() {
            SessionState::Start => QuizScreen::Start,
            SessionState::InProgress => match self.session.current_question() {
                Some(question) => QuizScreen::Question(QuestionVm {
                    number: progress.answered + 1,
                    total: progress.total,
                    text: question.text().to_string(),
                    answers: question
                        .options()
                        .iter()
                        .map(|option| AnswerButtonVm {
                            key: option.key.clone(),
                            text: option.text.clone(),
                        })
                        .collect(),
                    progress: progress.percent,
                }),
                None => QuizScreen::Start,
            },
            SessionState::Finished => QuizScreen::Score(ScoreVm {
                score: progress.score,
                total: progress.total,
            }),
        }
    }
}

/// # Errors
///
/// Returns `ViewError::NoQuestions` when the source had nothing to offer.
/// Returns `ViewError::NotConfigured` when no API key was supplied.
/// Returns `ViewError::Unavailable` for other fetch failures.
pub async fn start_quiz(
    quiz_service: &QuizService,
    request: &QuizRequest,
) -> Result<QuizSession, ViewError> {
    match quiz_service.start_session(request).await {
        Ok(session) => Ok(session),
        Err(QuizError::NoQuestions) => Err(ViewError::NoQuestions),
        Err(QuizError::Source(services::QuestionSourceError::Disabled)) => {
            Err(ViewError::NotConfigured)
        }
        Err(_) => Err(ViewError::Unavailable),
    }
}
