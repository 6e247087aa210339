use thiserror::Error;

use crate::model::{ParamsError, QuestionError};
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
