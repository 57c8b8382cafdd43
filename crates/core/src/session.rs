use thiserror::Error;

use crate::model::Question;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Terminal result of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Feedback for a single submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// Final result handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    player_name: String,
    outcome: Outcome,
}

impl SessionResult {
    #[must_use]
    pub fn new(player_name: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            player_name: player_name.into(),
            outcome,
        }
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Sequential answer-evaluation state machine for one quiz run.
///
/// Steps through the questions in order. A correct answer advances the
/// cursor; the run ends `Won` after the last question or `Lost` on the first
/// wrong answer, with no partial credit and no further questions exposed.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answered: usize,
    outcome: Option<Outcome>,
}

impl QuizSession {
    /// Open a session over an already-normalized question list.
    ///
    /// A short list is fine; the run is simply shorter.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            questions,
            answered: 0,
            outcome: None,
        })
    }

    /// Total number of questions in this run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of answers evaluated so far.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.answered
    }

    /// The question awaiting an answer, or `None` once the run is over.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.outcome.is_some() {
            return None;
        }
        self.questions.get(self.answered)
    }

    /// Terminal outcome, once reached.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Evaluate the player's selection against the current question.
    ///
    /// The comparison is exact string equality. The selection comes verbatim
    /// from the displayed choices, so trimming or case-folding here would
    /// only mask an upstream bug.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` if the run already reached `Won` or
    /// `Lost`.
    pub fn submit_answer(&mut self, selection: &str) -> Result<Verdict, SessionError> {
        let Some(question) = self.current_question() else {
            return Err(SessionError::Finished);
        };

        let verdict = if selection == question.correct_answer() {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };

        self.answered += 1;
        match verdict {
            Verdict::Correct if self.answered == self.questions.len() => {
                self.outcome = Some(Outcome::Won);
            }
            Verdict::Correct => {}
            Verdict::Incorrect => self.outcome = Some(Outcome::Lost),
        }

        Ok(verdict)
    }
}

//
// ─── SESSION ERRORS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,
    #[error("session already finished")]
    Finished,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
