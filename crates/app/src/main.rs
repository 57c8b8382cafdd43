use std::fmt;
use std::io;
use std::sync::Arc;

use dotenv::dotenv;
use services::{FetchError, GameError, GameFlow, OpenTdbSource, QuestionSource, QuizApiSource};
use trivia_core::DEFAULT_PLAYER_NAME;
use ui::TerminalPresenter;

#[derive(Debug)]
enum AppError {
    /// Questions could not be loaded; the player sees the friendly screen.
    Fetch { player: String, source: FetchError },
    /// The terminal itself failed; nothing nicer than stderr is possible.
    Terminal(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Fetch { source, .. } => write!(f, "{source}"),
            AppError::Terminal(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AppError {}

fn game_error(player: &str, err: GameError) -> AppError {
    match err {
        GameError::Fetch(source) => AppError::Fetch {
            player: player.to_string(),
            source,
        },
        GameError::Prompt(err) => AppError::Terminal(err),
        other => AppError::Terminal(io::Error::other(other)),
    }
}

/// Pick the question source for this process.
///
/// A QuizAPI key in the environment selects QuizAPI; otherwise the game runs
/// against Open Trivia DB, which needs no key.
fn build_source() -> Result<Arc<dyn QuestionSource>, FetchError> {
    if let Some(api_key) = QuizApiSource::api_key_from_env() {
        Ok(Arc::new(QuizApiSource::new(api_key)?))
    } else {
        Ok(Arc::new(OpenTdbSource::new()?))
    }
}

async fn run() -> Result<(), AppError> {
    // No name is known yet, so a failure this early blames nobody by name.
    let source = build_source().map_err(|source| AppError::Fetch {
        player: DEFAULT_PLAYER_NAME.to_string(),
        source,
    })?;
    log::info!("question source: {}", source.label());

    ui::screens::welcome().await.map_err(AppError::Terminal)?;
    let config = ui::setup::collect_config(source.categories())
        .await
        .map_err(AppError::Terminal)?;
    let player = config.player_name().to_string();

    let flow = GameFlow::new(Arc::clone(&source));
    let session = flow
        .load_session(&config)
        .await
        .map_err(|err| game_error(&player, err))?;

    let mut presenter = TerminalPresenter::new(player.as_str());
    let result = flow
        .play(&config, session, &mut presenter)
        .await
        .map_err(|err| game_error(&player, err))?;

    if result.won() {
        ui::screens::winner(result.player_name())
            .await
            .map_err(AppError::Terminal)?;
    } else {
        ui::screens::loser(result.player_name())
            .await
            .map_err(AppError::Terminal)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    pretty_env_logger::init();

    if let Err(err) = run().await {
        match err {
            AppError::Fetch { player, source } => {
                log::debug!("fetch failed: {source}");
                // Best effort; the process is exiting either way.
                let _ = ui::screens::fetch_failure(&player);
            }
            AppError::Terminal(err) => eprintln!("{err}"),
        }
        std::process::exit(1);
    }
}
