use log::{debug, info, warn};
use rand::Rng;
use rand::rngs::StdRng;

use crate::config::{GLYPH_EMPTY, GLYPH_FRUIT, GLYPH_SNAKE};
use crate::snake::{Position, Snake};

/// Why a tick ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LossCause {
    SelfCollision,
    OutOfBounds,
}

/// Result of evaluating the field against the snake for one tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Evaluation {
    Continue,
    /// The fruit was under the body; the snake grew and a new fruit was placed.
    Grew,
    Lost(LossCause),
}

/// Square play field: fruit placement, loss checks and the character grid.
///
/// The field never owns the snake. Each evaluation receives it explicitly and
/// only ever mutates it through [`Snake::grow`].
#[derive(Debug, Clone)]
pub struct Field {
    side: u16,
    fruit: Position,
    grid: Vec<Vec<char>>,
    rng: StdRng,
}

impl Field {
    /// Builds an empty grid, places the first fruit and renders the initial state.
    #[must_use]
    pub fn new(side: u16, snake: &Snake, rng: StdRng) -> Self {
        let cells = usize::from(side);
        let mut field = Self {
            side,
            fruit: Position { x: 0, y: 0 },
            grid: vec![vec![GLYPH_EMPTY; cells]; cells],
            rng,
        };

        field.generate_fruit(snake);
        field.rebuild_grid(snake);
        field
    }

    /// Checks loss conditions, consumes the fruit and rebuilds the grid.
    ///
    /// Called before the snake advances, so it sees the body as it was at the
    /// start of the tick. A loss leaves the grid untouched.
    pub fn evaluate(&mut self, snake: &mut Snake) -> Evaluation {
        if let Some(cause) = self.loss_cause(snake) {
            info!(
                "game lost: {cause:?} with head at {:?}, length {}",
                snake.head(),
                snake.len()
            );
            return Evaluation::Lost(cause);
        }

        let grew = snake.occupies(self.fruit);
        if grew {
            snake.grow();
            debug!("fruit at {:?} eaten, length now {}", self.fruit, snake.len());
            self.generate_fruit(snake);
        }

        self.rebuild_grid(snake);

        if grew {
            Evaluation::Grew
        } else {
            Evaluation::Continue
        }
    }

    /// Moves the fruit to a uniformly chosen cell not covered by the snake.
    ///
    /// Returns false and keeps the current fruit when every cell is occupied.
    pub fn generate_fruit(&mut self, snake: &Snake) -> bool {
        let candidates = self.free_cells(snake);
        if candidates.is_empty() {
            warn!("no free cell left for fruit on a {0}x{0} field", self.side);
            return false;
        }

        let index = self.rng.gen_range(0..candidates.len());
        self.fruit = candidates[index];
        debug!(
            "fruit placed at {:?} ({} candidates)",
            self.fruit,
            candidates.len()
        );
        true
    }

    /// Lists every cell of the grid not occupied by a snake segment, row by row.
    #[must_use]
    pub fn free_cells(&self, snake: &Snake) -> Vec<Position> {
        let side = i32::from(self.side);
        let mut candidates = Vec::new();

        for y in 0..side {
            for x in 0..side {
                let position = Position { x, y };
                if !snake.occupies(position) {
                    candidates.push(position);
                }
            }
        }

        candidates
    }

    /// Places the fruit at `position` directly, bypassing the RNG.
    ///
    /// Only meant for scripted scenarios and tests. The position must lie on
    /// the grid, and the caller is responsible for keeping it off the body,
    /// which [`Field::generate_fruit`] otherwise guarantees.
    pub fn set_fruit(&mut self, position: Position) {
        debug_assert!(
            position.is_within_square(self.side),
            "fruit {position:?} outside a {0}x{0} field",
            self.side
        );
        self.fruit = position;
    }

    /// Side length of the square grid.
    #[must_use]
    pub fn side(&self) -> u16 {
        self.side
    }

    /// Current fruit cell.
    #[must_use]
    pub fn fruit(&self) -> Position {
        self.fruit
    }

    /// Last rendered grid, indexed `[y][x]`.
    #[must_use]
    pub fn grid(&self) -> &[Vec<char>] {
        &self.grid
    }

    /// Last rendered grid as one string per row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.grid.iter().map(|row| row.iter().collect())
    }

    fn loss_cause(&self, snake: &Snake) -> Option<LossCause> {
        if snake.head_body_collision() {
            return Some(LossCause::SelfCollision);
        }

        if snake
            .segments()
            .any(|segment| !segment.is_within_square(self.side))
        {
            return Some(LossCause::OutOfBounds);
        }

        None
    }

    fn rebuild_grid(&mut self, snake: &Snake) {
        for row in &mut self.grid {
            row.fill(GLYPH_EMPTY);
        }

        self.stamp(self.fruit, GLYPH_FRUIT);
        for segment in snake.segments() {
            self.stamp(*segment, GLYPH_SNAKE);
        }
    }

    fn stamp(&mut self, position: Position, glyph: char) {
        let (Ok(x), Ok(y)) = (usize::try_from(position.x), usize::try_from(position.y)) else {
            return;
        };

        if let Some(cell) = self.grid.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = glyph;
        }
    }
}
