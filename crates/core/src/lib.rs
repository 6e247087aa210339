#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;

pub use error::Error;
pub use session::{AnswerOutcome, QuizSession, SessionError, SessionProgress, SessionState};
