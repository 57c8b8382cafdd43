//! Open Trivia Database question source (<https://opentdb.com>).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use trivia_core::model::{Category, Question, SessionConfig};

use crate::answers::shuffled_choices;
use crate::error::FetchError;
use crate::source::{QuestionSource, build_client};

const BASE_URL: &str = "https://opentdb.com/api.php";

/// Categories Open Trivia DB is queried with, by numeric id.
pub const CATEGORIES: [Category; 7] = [
    Category::new("General Knowledge", "9"),
    Category::new("Film", "11"),
    Category::new("Sports", "21"),
    Category::new("Games", "15"),
    Category::new("Computer Science", "18"),
    Category::new("History", "23"),
    Category::mix("* Mix of all categories"),
];

//
// ─── SOURCE ────────────────────────────────────────────────────────────────────
//

/// The default question source; no credential required.
pub struct OpenTdbSource {
    client: Client,
}

impl OpenTdbSource {
    /// # Errors
    ///
    /// Fails only if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client()?,
        })
    }
}

#[async_trait]
impl QuestionSource for OpenTdbSource {
    fn label(&self) -> &'static str {
        "open trivia db"
    }

    fn categories(&self) -> &[Category] {
        &CATEGORIES
    }

    async fn fetch(&self, config: &SessionConfig) -> Result<Vec<Question>, FetchError> {
        let pairs = query_pairs(config);
        log::debug!("GET {BASE_URL} {pairs:?}");

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

/// Query parameters for a configuration. Unfiltered fields are omitted
/// rather than sent empty.
fn query_pairs(config: &SessionConfig) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("amount", config.amount().to_string())];
    if let Some(category) = config.category() {
        pairs.push(("category", category.to_string()));
    }
    if let Some(difficulty) = config.difficulty() {
        pairs.push(("difficulty", difficulty.filter().to_string()));
    }
    if let Some(kind) = config.kind().filter() {
        pairs.push(("type", kind.to_string()));
    }
    pairs
}

/// `response_code` 0 is success; anything else means no matching questions.
fn parse_payload(body: &str) -> Result<Vec<Question>, FetchError> {
    let payload: ApiResponse = serde_json::from_str(body)?;
    if payload.response_code != 0 {
        return Err(FetchError::NoResults);
    }

    let questions: Vec<Question> = payload
        .results
        .into_iter()
        .filter_map(normalize_record)
        .collect();

    if questions.is_empty() {
        return Err(FetchError::NoResults);
    }
    Ok(questions)
}

fn normalize_record(record: ApiQuestion) -> Option<Question> {
    let choices = shuffled_choices(record.incorrect_answers, &record.correct_answer);
    match Question::new(record.question, choices, record.correct_answer) {
        Ok(question) => Some(question),
        Err(err) => {
            log::warn!("skipping malformed question: {err}");
            None
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
struct ApiQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::{Difficulty, QuestionKind};
    use url::Url;

    fn build_config() -> SessionConfig {
        SessionConfig::new(
            "Sam",
            Some("11".to_string()),
            Some(Difficulty::Hard),
            5,
            QuestionKind::MultipleChoice,
        )
    }

    #[test]
    fn query_round_trips_through_a_url() {
        let pairs = query_pairs(&build_config());
        let url = Url::parse_with_params(BASE_URL, &pairs).expect("valid url");

        let recovered: Vec<(String, String)> = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let expected: Vec<(String, String)> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect();

        assert_eq!(recovered, expected);
        assert_eq!(
            recovered,
            [
                ("amount".to_string(), "5".to_string()),
                ("category".to_string(), "11".to_string()),
                ("difficulty".to_string(), "hard".to_string()),
                ("type".to_string(), "multiple".to_string()),
            ]
        );
    }

    #[test]
    fn unfiltered_fields_are_omitted_from_the_query() {
        let config = SessionConfig::new("Sam", None, None, 3, QuestionKind::Any);
        let pairs = query_pairs(&config);
        assert_eq!(pairs, [("amount", "3".to_string())]);
    }

    #[test]
    fn nonzero_response_code_means_no_results() {
        let err = parse_payload(r#"{"response_code":1,"results":[]}"#).unwrap_err();
        assert!(matches!(err, FetchError::NoResults));
    }

    #[test]
    fn empty_results_with_success_code_still_means_no_results() {
        let err = parse_payload(r#"{"response_code":0,"results":[]}"#).unwrap_err();
        assert!(matches!(err, FetchError::NoResults));
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = parse_payload("not json").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn good_payload_normalizes_into_questions() {
        let body = r#"{
            "response_code": 0,
            "results": [
                {
                    "question": "What does CPU stand for?",
                    "correct_answer": "Central Processing Unit",
                    "incorrect_answers": [
                        "Central Process Unit",
                        "Computer Personal Unit",
                        "Central Processor Unit"
                    ]
                },
                {
                    "question": "The Windows ME operating system was released in 2000.",
                    "correct_answer": "True",
                    "incorrect_answers": ["False"]
                }
            ]
        }"#;

        let questions = parse_payload(body).expect("payload parses");
        assert_eq!(questions.len(), 2);

        let first = &questions[0];
        assert_eq!(first.choices().len(), 4);
        assert!(
            first
                .choices()
                .iter()
                .any(|choice| choice == first.correct_answer())
        );

        assert_eq!(questions[1].choices().len(), 2);
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        // First record collapses to a single choice and is dropped.
        let body = r#"{
            "response_code": 0,
            "results": [
                {
                    "question": "Broken",
                    "correct_answer": "Same",
                    "incorrect_answers": ["Same"]
                },
                {
                    "question": "Fine",
                    "correct_answer": "True",
                    "incorrect_answers": ["False"]
                }
            ]
        }"#;

        let questions = parse_payload(body).expect("payload parses");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text(), "Fine");
    }
}
