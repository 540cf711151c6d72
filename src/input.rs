use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::Serialize;

use crate::config::Difficulty;

/// Canonical movement directions for snake input.
///
/// "No direction yet" is modelled as `Option<Direction>::None` by callers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit step as `(d_col, d_row)`; rows grow downwards.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// High-level commands produced by the terminal front-end.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Direction(Direction),
    SelectDifficulty(Difficulty),
    Retry,
    Quit,
}

/// Reads crossterm key events and translates them into [`Command`]s.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one event and maps it to a command.
    ///
    /// Returns `Ok(None)` on timeout or for keys without a binding.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<Command>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// Maps one key press to a command.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Command::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Command::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Command::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Command::Direction(Direction::Right)),
        KeyCode::Char('1') => Some(Command::SelectDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Command::SelectDifficulty(Difficulty::Medium)),
        KeyCode::Char('3') => Some(Command::SelectDifficulty(Difficulty::Hard)),
        KeyCode::Char('r' | 'R') => Some(Command::Retry),
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(Command::Quit),
        _ => None,
    }
}
