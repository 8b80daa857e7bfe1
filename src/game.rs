use std::thread;
use std::time::Duration;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GameConfig, START_DIRECTION, START_POSITION};
use crate::error::GameError;
use crate::field::{Evaluation, Field, LossCause};
use crate::input::{Direction, InputEvent, InputSource};
use crate::renderer::Renderer;
use crate::snake::Snake;

/// How the loop ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Lost(LossCause),
    Interrupted,
}

/// Snake plus the field that judges it.
#[derive(Debug, Clone)]
pub struct Game {
    snake: Snake,
    field: Field,
}

impl Game {
    /// Starts a game with a one-segment snake and an RNG seeded from `config`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let snake = Snake::new(START_POSITION, START_DIRECTION);
        let field = Field::new(config.side, &snake, StdRng::seed_from_u64(config.seed));

        Self { snake, field }
    }

    /// Assembles a game from prepared parts.
    #[must_use]
    pub fn from_parts(snake: Snake, field: Field) -> Self {
        Self { snake, field }
    }

    /// Applies one direction intent; reversals are ignored by the snake.
    pub fn steer(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// Runs one tick: evaluate against the pre-move body, then advance.
    ///
    /// The snake does not move on a losing tick.
    pub fn step(&mut self) -> Evaluation {
        let evaluation = self.field.evaluate(&mut self.snake);
        if !matches!(evaluation, Evaluation::Lost(_)) {
            self.snake.advance();
        }
        evaluation
    }

    /// The snake being played.
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// The field judging the snake.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Mutable field access, e.g. to place a fruit in a scripted scenario.
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }
}

/// Fixed-tick loop: draw, take at most one input, step, sleep.
///
/// Returns only when the game is lost or interrupted.
pub fn run<I, R>(
    game: &mut Game,
    input: &mut I,
    renderer: &mut R,
    tick_interval: Duration,
) -> Result<Outcome, GameError>
where
    I: InputSource,
    R: Renderer,
{
    let mut ticks: u64 = 0;

    loop {
        renderer.draw(game.field())?;

        match input.poll()? {
            Some(InputEvent::Direction(direction)) => game.steer(direction),
            Some(InputEvent::Interrupt) => {
                info!("interrupted after {ticks} ticks");
                return Ok(Outcome::Interrupted);
            }
            None => {}
        }

        if let Evaluation::Lost(cause) = game.step() {
            info!("lost after {ticks} ticks, length {}", game.snake().len());
            return Ok(Outcome::Lost(cause));
        }

        ticks += 1;
        thread::sleep(tick_interval);
    }
}
