use std::fmt;
use std::sync::Arc;

use log::{info, warn};
use quiz_core::QuizSession;
use quiz_core::model::QuizRequest;

use crate::error::QuizError;
use crate::question_source::QuestionSource;

/// Fetches question sets and turns them into running quiz sessions.
#[derive(Clone)]
pub struct QuizService {
    source: Arc<dyn QuestionSource>,
}

impl QuizService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetch a question set and return a session positioned on its first question.
    ///
    /// Failures are logged here; callers keep whatever session they had.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Source` if the fetch fails.
    /// Returns `QuizError::NoQuestions` if the source answered with an empty list.
    pub async fn start_session(&self, request: &QuizRequest) -> Result<QuizSession, QuizError> {
        match request {
            QuizRequest::Random => info!("fetching random quiz"),
            QuizRequest::Filtered(params) => info!(
                "fetching quiz: difficulty={} category={}",
                params.difficulty,
                params.category.map_or("any", |c| c.as_tag())
            ),
        }

        let questions = self.source.fetch(request).await.map_err(|err| {
            warn!("error fetching questions: {err}");
            QuizError::from(err)
        })?;

        if questions.is_empty() {
            warn!("question source returned no questions");
            return Err(QuizError::NoQuestions);
        }

        let mut session = QuizSession::new();
        session.load_questions(questions);
        info!("quiz ready with {} questions", session.total());
        Ok(session)
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService").finish_non_exhaustive()
    }
}
