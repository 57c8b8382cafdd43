//! Pre-game setup dialogue: name plus the four filter prompts.

use std::io;

use trivia_core::{
    Category, DEFAULT_PLAYER_NAME, Difficulty, QUESTION_AMOUNTS, QuestionKind, SessionConfig,
};

use crate::{prompt, screens};

/// Walk the player through the setup prompts and build the session config.
///
/// The category list comes from the active question source, so the prompt
/// only offers categories that source can actually serve.
///
/// # Errors
///
/// Terminal I/O failures, including an aborted prompt.
pub async fn collect_config(categories: &[Category]) -> io::Result<SessionConfig> {
    let name = prompt::read_line(String::from("What is your name?")).await?;
    let display_name = if name.trim().is_empty() {
        DEFAULT_PLAYER_NAME
    } else {
        name.trim()
    };
    screens::greet(display_name)?;

    let labels = categories
        .iter()
        .map(|category| category.label().to_string())
        .collect();
    let picked = prompt::select(String::from("Choose a category?"), labels).await?;
    let category = categories[picked].filter().map(str::to_string);

    let labels = Difficulty::ALL
        .iter()
        .map(|difficulty| difficulty.label().to_string())
        .collect();
    let picked = prompt::select(String::from("Choose a questions difficulty?"), labels).await?;
    let difficulty = Some(Difficulty::ALL[picked]);

    let labels = QUESTION_AMOUNTS.iter().map(u8::to_string).collect();
    let picked = prompt::select(
        String::from("How many questions do you want to take?"),
        labels,
    )
    .await?;
    let amount = QUESTION_AMOUNTS[picked];

    let labels = QuestionKind::ALL
        .iter()
        .map(|kind| kind.label().to_string())
        .collect();
    let picked = prompt::select(String::from("Choose preferred questions type?"), labels).await?;
    let kind = QuestionKind::ALL[picked];

    Ok(SessionConfig::new(name, category, difficulty, amount, kind))
}
