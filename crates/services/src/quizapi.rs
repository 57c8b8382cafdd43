//! QuizAPI question source (<https://quizapi.io>), used when an API key is
//! present in the environment.
//!
//! The payload differs from Open Trivia DB in two ways: records arrive as a
//! flat array, and answers come as a keyed mapping whose unused slots are
//! null (a true/false question fills only two of the six slots). The
//! `correct_answer` field names the mapping entry that is correct.

use std::collections::BTreeMap;
use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use trivia_core::model::{Category, Question, SessionConfig};

use crate::answers::shuffled_choices;
use crate::error::FetchError;
use crate::source::{QuestionSource, build_client};

const BASE_URL: &str = "https://quizapi.io/api/v1/questions";
const API_KEY_VAR: &str = "TRIVIA_API_KEY";

/// QuizAPI filters by category name, not id.
pub const CATEGORIES: [Category; 7] = [
    Category::new("Linux", "Linux"),
    Category::new("DevOps", "DevOps"),
    Category::new("Networking", "Networking"),
    Category::new("Programming", "Code"),
    Category::new("Docker", "Docker"),
    Category::new("SQL", "SQL"),
    Category::mix("* Mix of all categories"),
];

//
// ─── SOURCE ────────────────────────────────────────────────────────────────────
//

/// Keyed-answer question source. This API has no question-type filter, so
/// the configured kind is accepted but not sent.
pub struct QuizApiSource {
    client: Client,
    api_key: String,
}

impl QuizApiSource {
    /// API key from `TRIVIA_API_KEY`; `None` when unset or blank.
    #[must_use]
    pub fn api_key_from_env() -> Option<String> {
        let api_key = env::var(API_KEY_VAR).ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        Some(api_key)
    }

    /// # Errors
    ///
    /// Fails only if the HTTP client cannot be constructed.
    pub fn new(api_key: String) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client()?,
            api_key,
        })
    }
}

#[async_trait]
impl QuestionSource for QuizApiSource {
    fn label(&self) -> &'static str {
        "quizapi"
    }

    fn categories(&self) -> &[Category] {
        &CATEGORIES
    }

    async fn fetch(&self, config: &SessionConfig) -> Result<Vec<Question>, FetchError> {
        let pairs = query_pairs(&self.api_key, config);
        log::debug!("GET {BASE_URL} limit={}", config.amount());

        let response = self.client.get(BASE_URL).query(&pairs).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        parse_payload(&body)
    }
}

//
// ─── QUERY & PAYLOAD ───────────────────────────────────────────────────────────
//

fn query_pairs(api_key: &str, config: &SessionConfig) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("apiKey", api_key.to_string()),
        ("limit", config.amount().to_string()),
    ];
    if let Some(category) = config.category() {
        pairs.push(("category", category.to_string()));
    }
    if let Some(difficulty) = config.difficulty() {
        pairs.push(("difficulty", difficulty.filter().to_string()));
    }
    pairs
}

fn parse_payload(body: &str) -> Result<Vec<Question>, FetchError> {
    let records: Vec<ApiQuestion> = serde_json::from_str(body)?;

    let questions: Vec<Question> = records.into_iter().filter_map(normalize_record).collect();

    if questions.is_empty() {
        return Err(FetchError::NoResults);
    }
    Ok(questions)
}

fn normalize_record(record: ApiQuestion) -> Option<Question> {
    let Some(correct_key) = record.correct_answer else {
        log::warn!("skipping question without a correct answer key");
        return None;
    };

    // Null slots are unused answer positions, not errors.
    let answers: Vec<(String, String)> = record
        .answers
        .into_iter()
        .filter_map(|(slot, text)| Some((slot, text?)))
        .collect();

    let Some(correct_text) = answers
        .iter()
        .find(|(slot, _)| *slot == correct_key)
        .map(|(_, text)| text.clone())
    else {
        log::warn!("skipping question whose correct answer slot is empty");
        return None;
    };

    let incorrect: Vec<String> = answers
        .into_iter()
        .filter(|(slot, _)| *slot != correct_key)
        .map(|(_, text)| text)
        .collect();

    let choices = shuffled_choices(incorrect, &correct_text);
    match Question::new(record.question, choices, correct_text) {
        Ok(question) => Some(question),
        Err(err) => {
            log::warn!("skipping malformed question: {err}");
            None
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiQuestion {
    question: String,
    // BTreeMap keeps slot order (answer_a, answer_b, ...) stable before the
    // shuffle.
    answers: BTreeMap<String, Option<String>>,
    correct_answer: Option<String>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::{Difficulty, QuestionKind};

    #[test]
    fn query_carries_key_limit_and_name_filters() {
        let config = SessionConfig::new(
            "Sam",
            Some("Linux".to_string()),
            Some(Difficulty::Easy),
            7,
            QuestionKind::Any,
        );
        let pairs = query_pairs("secret", &config);

        assert_eq!(
            pairs,
            [
                ("apiKey", "secret".to_string()),
                ("limit", "7".to_string()),
                ("category", "Linux".to_string()),
                ("difficulty", "easy".to_string()),
            ]
        );
    }

    #[test]
    fn null_answer_slots_are_excluded_from_choices() {
        let body = r#"[
            {
                "question": "Containers share the host kernel.",
                "answers": {
                    "answer_a": "True",
                    "answer_b": "False",
                    "answer_c": null,
                    "answer_d": null,
                    "answer_e": null,
                    "answer_f": null
                },
                "correct_answer": "answer_a"
            }
        ]"#;

        let questions = parse_payload(body).expect("payload parses");
        assert_eq!(questions.len(), 1);

        let question = &questions[0];
        assert_eq!(question.choices().len(), 2);
        assert_eq!(question.correct_answer(), "True");
        assert!(question.choices().iter().all(|choice| !choice.is_empty()));
    }

    #[test]
    fn record_without_correct_answer_is_skipped() {
        let body = r#"[
            {
                "question": "Orphan",
                "answers": {"answer_a": "Yes", "answer_b": "No"},
                "correct_answer": null
            },
            {
                "question": "Kept",
                "answers": {"answer_a": "Yes", "answer_b": "No"},
                "correct_answer": "answer_b"
            }
        ]"#;

        let questions = parse_payload(body).expect("payload parses");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text(), "Kept");
    }

    #[test]
    fn correct_answer_naming_a_null_slot_is_skipped() {
        let body = r#"[
            {
                "question": "Broken",
                "answers": {"answer_a": "Yes", "answer_b": null},
                "correct_answer": "answer_b"
            }
        ]"#;

        let err = parse_payload(body).unwrap_err();
        assert!(matches!(err, FetchError::NoResults));
    }

    #[test]
    fn empty_array_means_no_results() {
        let err = parse_payload("[]").unwrap_err();
        assert!(matches!(err, FetchError::NoResults));
    }
}
