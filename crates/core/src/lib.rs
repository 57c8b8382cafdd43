pub mod model;
pub mod session;

pub use model::{
    Category, DEFAULT_PLAYER_NAME, Difficulty, QUESTION_AMOUNTS, Question, QuestionError,
    QuestionKind, SessionConfig,
};
pub use session::{Outcome, QuizSession, SessionError, SessionResult, Verdict};
