mod ids;
mod params;
mod question;

pub use ids::QuestionId;
pub use params::{Category, Difficulty, ParamsError, QuizParams, QuizRequest};
pub use question::{AnswerKey, AnswerOption, Question, QuestionError};
