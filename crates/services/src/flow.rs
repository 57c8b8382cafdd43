//! Drives one quiz session end to end: a single fetch, then the
//! prompt/evaluate loop.

use std::io;
use std::sync::Arc;

use async_trait::async_trait;

use trivia_core::model::{Question, SessionConfig};
use trivia_core::session::{QuizSession, SessionError, SessionResult, Verdict};

use crate::error::GameError;
use crate::source::QuestionSource;

//
// ─── PRESENTER SEAM ────────────────────────────────────────────────────────────
//

/// Presentation collaborator driven by the flow.
///
/// The flow owns the rules; implementations own rendering, pacing, and input.
#[async_trait]
pub trait Presenter: Send {
    /// Show one question and block until the player picks a choice.
    ///
    /// `number` is 1-based. Returns the index of the selection within
    /// `question.choices()`.
    async fn pick_answer(
        &mut self,
        question: &Question,
        number: usize,
        total: usize,
    ) -> io::Result<usize>;

    /// Show the correct/incorrect beat for the answer just submitted.
    ///
    /// This is where the deliberate pacing delay lives; the flow awaits it
    /// before prompting again.
    async fn feedback(&mut self, verdict: Verdict) -> io::Result<()>;
}

//
// ─── GAME FLOW ─────────────────────────────────────────────────────────────────
//

/// Orchestrates a session against whichever source the binary selected.
pub struct GameFlow {
    source: Arc<dyn QuestionSource>,
}

impl GameFlow {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetch questions once and open the session.
    ///
    /// Never called twice for one config; the session owns the list from
    /// here on.
    ///
    /// # Errors
    ///
    /// Fetch failures (including no results) and the empty-list guard both
    /// surface here, before any question is shown.
    pub async fn load_session(&self, config: &SessionConfig) -> Result<QuizSession, GameError> {
        let questions = self.source.fetch(config).await?;
        log::info!(
            "loaded {} questions from {}",
            questions.len(),
            self.source.label()
        );
        Ok(QuizSession::new(questions)?)
    }

    /// Run the prompt/evaluate loop to a terminal outcome.
    ///
    /// Each round: present the current question, evaluate the selection,
    /// forward the verdict to the presenter, and only then continue. The
    /// loop stops as soon as the session reaches `Won` or `Lost`.
    ///
    /// # Errors
    ///
    /// Prompt I/O failures and session misuse; a wrong answer is a normal
    /// outcome, not an error.
    pub async fn play<P>(
        &self,
        config: &SessionConfig,
        mut session: QuizSession,
        presenter: &mut P,
    ) -> Result<SessionResult, GameError>
    where
        P: Presenter + ?Sized,
    {
        let total = session.total();

        while let Some(question) = session.current_question() {
            let number = session.answered() + 1;
            let picked = presenter.pick_answer(question, number, total).await?;
            let selection = question.choices().get(picked).cloned().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "selection out of range")
            })?;

            let verdict = session.submit_answer(&selection)?;
            presenter.feedback(verdict).await?;
        }

        match session.outcome() {
            Some(outcome) => Ok(SessionResult::new(config.player_name(), outcome)),
            // Unreachable for a session built by `load_session`; kept as an
            // error rather than a panic.
            None => Err(GameError::Session(SessionError::Finished)),
        }
    }
}
