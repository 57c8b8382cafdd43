use thiserror::Error;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One normalized trivia question.
///
/// Only constructed through [`Question::new`], so a `Question` in hand always
/// has at least two distinct choices with the correct answer among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    choices: Vec<String>,
    correct_answer: String,
}

impl Question {
    /// Build a question from its text, the choices in display order, and the
    /// correct answer.
    ///
    /// Duplicate choices are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::TooFewChoices` when fewer than two distinct
    /// choices remain, and `QuestionError::CorrectAnswerMissing` when the
    /// correct answer does not appear verbatim among the choices.
    pub fn new(
        text: impl Into<String>,
        choices: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let correct_answer = correct_answer.into();

        let mut deduped: Vec<String> = Vec::with_capacity(choices.len());
        for choice in choices {
            if !deduped.contains(&choice) {
                deduped.push(choice);
            }
        }

        if deduped.len() < 2 {
            return Err(QuestionError::TooFewChoices);
        }
        if !deduped.contains(&correct_answer) {
            return Err(QuestionError::CorrectAnswerMissing);
        }

        Ok(Self {
            text: text.into(),
            choices: deduped,
            correct_answer,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Choices in display order.
    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question needs at least two distinct choices")]
    TooFewChoices,
    #[error("correct answer is not among the choices")]
    CorrectAnswerMissing,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn valid_question_keeps_choice_order() {
        let question = Question::new("Capital of France?", choices(&["Lyon", "Paris"]), "Paris")
            .expect("valid question");

        assert_eq!(question.choices(), ["Lyon", "Paris"]);
        assert_eq!(question.correct_answer(), "Paris");
    }

    #[test]
    fn duplicate_choices_are_dropped_keeping_first() {
        let question = Question::new(
            "Pick one",
            choices(&["True", "False", "True"]),
            "False",
        )
        .expect("valid question");

        assert_eq!(question.choices(), ["True", "False"]);
    }

    #[test]
    fn all_duplicates_leave_too_few_choices() {
        let err = Question::new("Pick one", choices(&["A", "A", "A"]), "A").unwrap_err();
        assert_eq!(err, QuestionError::TooFewChoices);
    }

    #[test]
    fn correct_answer_must_be_verbatim() {
        let err = Question::new("Pick one", choices(&["Yes", "No"]), "yes").unwrap_err();
        assert_eq!(err, QuestionError::CorrectAnswerMissing);
    }
}
