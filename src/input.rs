use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::GameError;
use crate::snake::Position;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
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

    /// Unit step in grid coordinates; y grows downwards.
    #[must_use]
    pub fn delta(self) -> Position {
        match self {
            Self::Up => Position { x: 0, y: -1 },
            Self::Down => Position { x: 0, y: 1 },
            Self::Left => Position { x: -1, y: 0 },
            Self::Right => Position { x: 1, y: 0 },
        }
    }
}

/// Discrete events the game loop reacts to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputEvent {
    Direction(Direction),
    /// Ctrl+C; raw mode swallows the terminal's own interrupt.
    Interrupt,
}

/// Non-blocking source of at most one event per call.
pub trait InputSource {
    fn poll(&mut self) -> Result<Option<InputEvent>, GameError>;
}

/// Reads arrow keys from the terminal through crossterm.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Result<Option<InputEvent>, GameError> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

/// Maps one key event; anything other than an arrow press or Ctrl+C is ignored.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Interrupt);
    }

    let direction = match key.code {
        KeyCode::Up => Direction::Up,
        KeyCode::Down => Direction::Down,
        KeyCode::Left => Direction::Left,
        KeyCode::Right => Direction::Right,
        _ => return None,
    };

    Some(InputEvent::Direction(direction))
}
