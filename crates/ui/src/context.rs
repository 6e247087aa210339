use std::sync::Arc;

use quiz_core::model::QuizParams;
use services::QuizService;

pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;

    /// Filters preselected on the start screen.
    fn default_params(&self) -> QuizParams {
        QuizParams::default()
    }
}

#[derive(Clone)]
pub struct AppContext {
    quiz_service: Arc<QuizService>,
    default_params: QuizParams,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_service: app.quiz_service(),
            default_params: app.default_params(),
        }
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    #[must_use]
    pub fn default_params(&self) -> QuizParams {
        self.default_params
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
