//! Line input and the single-select list prompt.
//!
//! The select prompt runs a raw-mode key loop on the blocking pool; raw mode
//! is always left again, selection or abort alike.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{QueueableCommand, cursor, terminal};

//
// ─── KEY MAPPING ───────────────────────────────────────────────────────────────
//

/// What a key press means inside the select prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAction {
    Up,
    Down,
    Confirm,
    Abort,
}

/// Map a key event to a select action.
#[must_use]
pub fn handle_key_event(key: KeyEvent) -> Option<SelectAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(SelectAction::Abort);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(SelectAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(SelectAction::Down),
        KeyCode::Enter => Some(SelectAction::Confirm),
        KeyCode::Esc => Some(SelectAction::Abort),
        _ => None,
    }
}

//
// ─── CURSOR ────────────────────────────────────────────────────────────────────
//

/// Wrap-around cursor over a fixed-length list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    len: usize,
    index: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn up(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

//
// ─── PROMPTS ───────────────────────────────────────────────────────────────────
//

/// Ask a free-text question on one line.
///
/// Empty input is allowed; callers decide what a blank answer means.
///
/// # Errors
///
/// Terminal I/O failures.
pub async fn read_line(question: String) -> io::Result<String> {
    tokio::task::spawn_blocking(move || read_line_blocking(&question))
        .await
        .map_err(io::Error::other)?
}

fn read_line_blocking(question: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    print_question_mark(&mut stdout)?;
    stdout.queue(Print(question))?;
    stdout.queue(Print(" "))?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Ask a single-select question; returns the chosen index.
///
/// Arrow keys (or j/k) move with wrap-around, Enter confirms. On confirm
/// the list collapses into a single line echoing the choice.
///
/// # Errors
///
/// Terminal I/O failures; Esc or Ctrl-C abort with `ErrorKind::Interrupted`.
pub async fn select(question: String, items: Vec<String>) -> io::Result<usize> {
    tokio::task::spawn_blocking(move || select_blocking(&question, &items))
        .await
        .map_err(io::Error::other)?
}

fn select_blocking(question: &str, items: &[String]) -> io::Result<usize> {
    let mut stdout = io::stdout();
    print_question_mark(&mut stdout)?;
    stdout.queue(Print(question))?;
    stdout.queue(Print("\n"))?;
    stdout.flush()?;

    terminal::enable_raw_mode()?;
    let picked = run_select(&mut stdout, items);
    terminal::disable_raw_mode()?;

    let restore = restore_cursor(&mut stdout);
    let picked = picked?;
    restore?;

    collapse_list(&mut stdout, items, picked)?;
    Ok(picked)
}

fn run_select(stdout: &mut io::Stdout, items: &[String]) -> io::Result<usize> {
    let mut cursor = Cursor::new(items.len());
    stdout.queue(cursor::Hide)?;
    draw_items(stdout, items, cursor.index())?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key_event(key) {
            Some(SelectAction::Up) => cursor.up(),
            Some(SelectAction::Down) => cursor.down(),
            Some(SelectAction::Confirm) => return Ok(cursor.index()),
            Some(SelectAction::Abort) => {
                return Err(io::Error::new(
                    io::ErrorKind::Interrupted,
                    "cancelled by player",
                ));
            }
            None => continue,
        }

        stdout.queue(cursor::MoveUp(list_height(items)))?;
        draw_items(stdout, items, cursor.index())?;
    }
}

fn draw_items(stdout: &mut io::Stdout, items: &[String], selected: usize) -> io::Result<()> {
    for (index, item) in items.iter().enumerate() {
        stdout.queue(cursor::MoveToColumn(0))?;
        stdout.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        if index == selected {
            stdout.queue(SetForegroundColor(Color::Cyan))?;
            stdout.queue(Print("❯ "))?;
            stdout.queue(Print(item))?;
            stdout.queue(ResetColor)?;
        } else {
            stdout.queue(Print("  "))?;
            stdout.queue(Print(item))?;
        }
        stdout.queue(Print("\r\n"))?;
    }
    stdout.flush()
}

/// Replace the list with one line echoing the chosen item.
fn collapse_list(stdout: &mut io::Stdout, items: &[String], picked: usize) -> io::Result<()> {
    stdout.queue(cursor::MoveUp(list_height(items)))?;
    stdout.queue(cursor::MoveToColumn(0))?;
    stdout.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
    stdout.queue(SetForegroundColor(Color::Green))?;
    stdout.queue(Print("❯ "))?;
    stdout.queue(Print(&items[picked]))?;
    stdout.queue(ResetColor)?;
    stdout.queue(Print("\n"))?;
    stdout.flush()
}

fn restore_cursor(stdout: &mut io::Stdout) -> io::Result<()> {
    stdout.queue(cursor::Show)?;
    stdout.queue(ResetColor)?;
    stdout.flush()
}

fn print_question_mark(stdout: &mut io::Stdout) -> io::Result<()> {
    stdout.queue(SetForegroundColor(Color::Cyan))?;
    stdout.queue(Print("? "))?;
    stdout.queue(ResetColor)?;
    Ok(())
}

fn list_height(items: &[String]) -> u16 {
    u16::try_from(items.len()).unwrap_or(u16::MAX)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut cursor = Cursor::new(3);
        assert_eq!(cursor.index(), 0);

        cursor.up();
        assert_eq!(cursor.index(), 2);

        cursor.down();
        assert_eq!(cursor.index(), 0);
        cursor.down();
        cursor.down();
        cursor.down();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn empty_cursor_stays_put() {
        let mut cursor = Cursor::new(0);
        cursor.up();
        cursor.down();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn arrows_and_vim_keys_map_to_moves() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(SelectAction::Up)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(SelectAction::Up)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(SelectAction::Down)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(SelectAction::Down)
        );
    }

    #[test]
    fn enter_confirms_and_escape_aborts() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(SelectAction::Confirm)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(SelectAction::Abort)
        );
    }

    #[test]
    fn ctrl_c_aborts() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key), Some(SelectAction::Abort));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }
}
