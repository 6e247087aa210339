#![forbid(unsafe_code)]

pub mod error;
pub mod question_source;
pub mod quiz_service;
pub mod wire;

pub use error::{QuestionSourceError, QuizError};
pub use question_source::{
    DEFAULT_BASE_URL, QUESTION_LIMIT, QuestionSource, QuestionSourceConfig, QuizApiClient,
};
pub use quiz_service::QuizService;
