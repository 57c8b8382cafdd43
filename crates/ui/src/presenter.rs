//! Terminal presenter: the select prompt per question plus the answer beat.

use std::io::{self, Write};
use std::time::Duration;

use async_trait::async_trait;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{QueueableCommand, cursor, terminal};
use services::Presenter;
use tokio::time::sleep;
use trivia_core::{Question, Verdict};

use crate::prompt;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_TICKS: usize = 20;
const SPINNER_TICK: Duration = Duration::from_millis(100);
const LOSS_PAUSE: Duration = Duration::from_secs(2);

/// Presents questions on the controlling terminal.
pub struct TerminalPresenter {
    player_name: String,
}

impl TerminalPresenter {
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
        }
    }
}

#[async_trait]
impl Presenter for TerminalPresenter {
    async fn pick_answer(
        &mut self,
        question: &Question,
        number: usize,
        total: usize,
    ) -> io::Result<usize> {
        let title = format!("[{number}/{total}] {}", question.text());
        prompt::select(title, question.choices().to_vec()).await
    }

    async fn feedback(&mut self, verdict: Verdict) -> io::Result<()> {
        run_spinner("Checking answer...").await?;

        let mut stdout = io::stdout();
        match verdict {
            Verdict::Correct => {
                stdout.queue(SetAttribute(Attribute::Bold))?;
                stdout.queue(SetForegroundColor(Color::Green))?;
                stdout.queue(Print(format!("Nice work {}.", self.player_name)))?;
                stdout.queue(SetAttribute(Attribute::Reset))?;
                stdout.queue(Print("\n\n"))?;
                stdout.flush()?;
            }
            Verdict::Incorrect => {
                stdout.queue(SetAttribute(Attribute::Bold))?;
                stdout.queue(SetBackgroundColor(Color::Red))?;
                stdout.queue(Print(format!("Game Over, you lose {}!", self.player_name)))?;
                stdout.queue(SetAttribute(Attribute::Reset))?;
                stdout.queue(Print("\n"))?;
                stdout.flush()?;
                // Let the loss land before the ending screen replaces it.
                sleep(LOSS_PAUSE).await;
            }
        }
        Ok(())
    }
}

/// Suspense spinner shown after every answer.
async fn run_spinner(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(cursor::Hide)?;
    for tick in 0..SPINNER_TICKS {
        let frame = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
        stdout.queue(cursor::MoveToColumn(0))?;
        stdout.queue(SetForegroundColor(Color::Yellow))?;
        stdout.queue(Print(frame))?;
        stdout.queue(ResetColor)?;
        stdout.queue(Print(" "))?;
        stdout.queue(Print(message))?;
        stdout.flush()?;
        sleep(SPINNER_TICK).await;
    }
    stdout.queue(cursor::MoveToColumn(0))?;
    stdout.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    stdout.queue(cursor::Show)?;
    stdout.flush()
}
