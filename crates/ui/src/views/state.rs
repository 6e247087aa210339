#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The question source could not be reached or answered badly.
    Unavailable,
    /// The question source returned an empty list.
    NoQuestions,
    /// No API key was configured.
    NotConfigured,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unavailable => "Could not load questions. Please try again.",
            ViewError::NoQuestions => "No questions found for that selection.",
            ViewError::NotConfigured => "No quiz API key configured. Set QUIZ_API_KEY and restart.",
        }
    }
}
