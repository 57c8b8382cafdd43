//! Story screens around the quiz: title, rules, greeting and the two endings.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::{QueueableCommand, cursor, terminal};
use tokio::time::sleep;

use crate::banner;
use crate::style::{PASTEL_FROM, PASTEL_TO, RAINBOW, color, gradient};

const TITLE: &str = "Who Wants To Be A Millionaire?";

const TITLE_FRAMES: usize = 16;
const CLOSING_FRAMES: usize = 24;
const FRAME_DELAY: Duration = Duration::from_millis(120);
const TYPE_DELAY: Duration = Duration::from_millis(20);
const ENDING_HOLD: Duration = Duration::from_secs(3);

//
// ─── OPENING ───────────────────────────────────────────────────────────────────
//

/// Animated title followed by the rules of the game.
///
/// # Errors
///
/// Terminal I/O failures.
pub async fn welcome() -> io::Result<()> {
    animate_rainbow_line(TITLE, TITLE_FRAMES).await?;

    let mut stdout = io::stdout();
    stdout.queue(Print("\n"))?;
    stdout.queue(SetAttribute(Attribute::Bold))?;
    stdout.queue(SetForegroundColor(Color::Cyan))?;
    stdout.queue(Print("How To Play?"))?;
    stdout.queue(SetAttribute(Attribute::Reset))?;
    stdout.queue(Print("\n"))?;
    stdout.queue(Print("I am a process on your computer.\n"))?;
    stdout.queue(Print("If you get any question wrong I will be "))?;
    stdout.queue(SetForegroundColor(Color::Red))?;
    stdout.queue(Print("killed"))?;
    stdout.queue(ResetColor)?;
    stdout.queue(Print(".\n"))?;
    stdout.queue(Print("So get all the questions "))?;
    stdout.queue(SetForegroundColor(Color::Green))?;
    stdout.queue(Print("right"))?;
    stdout.queue(ResetColor)?;
    stdout.queue(Print("...\n\n"))?;
    stdout.flush()
}

/// One-line greeting shown right after the player gives their name.
///
/// # Errors
///
/// Terminal I/O failures.
pub fn greet(player: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(SetForegroundColor(Color::Magenta))?;
    stdout.queue(Print("Welcome "))?;
    stdout.queue(SetAttribute(Attribute::Bold))?;
    stdout.queue(SetForegroundColor(Color::Blue))?;
    stdout.queue(Print(player))?;
    stdout.queue(SetAttribute(Attribute::Reset))?;
    stdout.queue(SetForegroundColor(Color::Magenta))?;
    stdout.queue(Print(", nice to have you."))?;
    stdout.queue(ResetColor)?;
    stdout.queue(Print("\n\n"))?;
    stdout.flush()
}

/// Shown when no questions could be loaded; the session never starts.
///
/// # Errors
///
/// Terminal I/O failures.
pub fn fetch_failure(player: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(SetForegroundColor(Color::Red))?;
    stdout.queue(Print(format!(
        "Sorry {player}, no questions available right now!"
    )))?;
    stdout.queue(ResetColor)?;
    stdout.queue(Print("\n"))?;
    stdout.queue(SetForegroundColor(Color::Blue))?;
    stdout.queue(Print("Please come back soon."))?;
    stdout.queue(ResetColor)?;
    stdout.queue(Print("\n"))?;
    stdout.flush()
}

//
// ─── ENDINGS ───────────────────────────────────────────────────────────────────
//

/// Full-screen banner for a completed session.
///
/// # Errors
///
/// Terminal I/O failures.
pub async fn winner(player: &str) -> io::Result<()> {
    let lines = [
        format!("WELL DONE, {player}!"),
        String::from("$1,000,000 FOR YOU"),
    ];
    draw_banner(&lines)?;
    type_line(
        "Programming isn't about what you know; it's about making the command line look cool!",
        Color::Cyan,
    )
    .await?;
    sleep(ENDING_HOLD).await;
    Ok(())
}

/// Full-screen banner for a lost session.
///
/// # Errors
///
/// Terminal I/O failures.
pub async fn loser(player: &str) -> io::Result<()> {
    let lines = [format!("OOPS, {player}!"), String::from("YOU ARE LOSER")];
    draw_banner(&lines)?;
    animate_rainbow_line("Go and come with some information, loser.", CLOSING_FRAMES).await
}

/// Clear the screen and print block-letter lines in a pastel gradient.
fn draw_banner(lines: &[String]) -> io::Result<()> {
    let rows = banner_rows(lines);
    let colors = gradient(PASTEL_FROM, PASTEL_TO, rows.len());

    let mut stdout = io::stdout();
    stdout.queue(terminal::Clear(terminal::ClearType::All))?;
    stdout.queue(cursor::MoveTo(0, 0))?;
    for (row, rgb) in rows.iter().zip(colors) {
        stdout.queue(SetForegroundColor(color(rgb)))?;
        stdout.queue(Print(row))?;
        stdout.queue(Print("\n"))?;
    }
    stdout.queue(ResetColor)?;
    stdout.queue(Print("\n"))?;
    stdout.flush()
}

/// Block-letter rows for the banner, one blank row between lines.
fn banner_rows(lines: &[String]) -> Vec<String> {
    let mut rows = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            rows.push(String::new());
        }
        rows.extend(banner::big_text(line));
    }
    rows
}

//
// ─── EFFECTS ───────────────────────────────────────────────────────────────────
//

/// Redraw one line with the rainbow palette shifting a step per frame.
async fn animate_rainbow_line(text: &str, frames: usize) -> io::Result<()> {
    let chars: Vec<char> = text.chars().collect();
    let mut stdout = io::stdout();

    stdout.queue(cursor::Hide)?;
    for frame in 0..frames {
        stdout.queue(cursor::MoveToColumn(0))?;
        for (position, ch) in chars.iter().enumerate() {
            let rgb = RAINBOW[(position + frame) % RAINBOW.len()];
            stdout.queue(SetForegroundColor(color(rgb)))?;
            stdout.queue(Print(ch))?;
        }
        stdout.flush()?;
        sleep(FRAME_DELAY).await;
    }
    stdout.queue(ResetColor)?;
    stdout.queue(cursor::Show)?;
    stdout.queue(Print("\n"))?;
    stdout.flush()
}

/// Print a bold line one character at a time.
async fn type_line(text: &str, foreground: Color) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(SetAttribute(Attribute::Bold))?;
    stdout.queue(SetForegroundColor(foreground))?;
    for ch in text.chars() {
        stdout.queue(Print(ch))?;
        stdout.flush()?;
        sleep(TYPE_DELAY).await;
    }
    stdout.queue(SetAttribute(Attribute::Reset))?;
    stdout.queue(Print("\n"))?;
    stdout.flush()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
