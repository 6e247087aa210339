mod quiz_vm;

pub use quiz_vm::{
    AnswerButtonVm, QuestionVm, QuizIntent, QuizScreen, QuizVm, ScoreVm, start_quiz,
};
