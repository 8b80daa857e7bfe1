use std::time::Duration;

use ratatui::symbols::border;

use crate::error::GameError;
use crate::input::Direction;
use crate::snake::Position;

/// Default side length of the square play field.
pub const DEFAULT_SIDE: u16 = 30;

/// Smallest side that still holds the start cell plus one free cell.
pub const MIN_SIDE: u16 = 2;

/// Largest side accepted, far beyond any terminal the board can be drawn on.
pub const MAX_SIDE: u16 = 254;

/// Fixed pause between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);

/// Cell the one-segment snake starts on.
pub const START_POSITION: Position = Position { x: 1, y: 1 };

/// Heading of a fresh snake.
pub const START_DIRECTION: Direction = Direction::Right;

/// Glyph for an empty cell.
pub const GLYPH_EMPTY: char = ' ';

/// Glyph for the fruit cell.
pub const GLYPH_FRUIT: char = '*';

/// Glyph for every snake segment.
pub const GLYPH_SNAKE: char = '█';

/// Double-line frame drawn around the grid.
pub const BORDER_DOUBLE_LINE: border::Set = border::DOUBLE;

/// Settings for one game session, resolved from the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub side: u16,
    pub seed: u64,
}

impl GameConfig {
    /// Validates the grid side and pairs it with the seed for the fruit RNG.
    pub fn new(side: u16, seed: u64) -> Result<Self, GameError> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
            return Err(GameError::InvalidSide {
                side,
                min: MIN_SIDE,
                max: MAX_SIDE,
            });
        }

        Ok(Self { side, seed })
    }
}
