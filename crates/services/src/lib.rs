#![forbid(unsafe_code)]

pub mod answers;
pub mod error;
pub mod flow;
pub mod opentdb;
pub mod quizapi;
pub mod source;

pub use error::{FetchError, GameError};
pub use flow::{GameFlow, Presenter};
pub use opentdb::OpenTdbSource;
pub use quizapi::QuizApiSource;
pub use source::QuestionSource;
