mod config;
mod question;

pub use config::{
    Category, DEFAULT_PLAYER_NAME, Difficulty, QUESTION_AMOUNTS, QuestionKind, SessionConfig,
};
pub use question::{Question, QuestionError};
