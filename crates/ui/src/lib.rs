pub mod banner;
pub mod presenter;
pub mod prompt;
pub mod screens;
pub mod setup;
pub mod style;

pub use presenter::TerminalPresenter;
