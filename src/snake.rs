use std::collections::VecDeque;
use std::ops::Add;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when both coordinates lie in `[0, side)`.
    #[must_use]
    pub fn is_within_square(self, side: u16) -> bool {
        let side = i32::from(side);
        (0..side).contains(&self.x) && (0..side).contains(&self.y)
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Snake body (head first) and its heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty; a snake always has at least one segment.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(
            !segments.is_empty(),
            "snake body must always contain at least one segment"
        );

        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Prepends `head + direction` and drops the tail, keeping the length.
    pub fn advance(&mut self) {
        let next_head = self.head() + self.direction.delta();
        self.body.push_front(next_head);
        let _ = self.body.pop_back();
    }

    /// Duplicates the tail so the snake is one segment longer after the next advance.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push_back(tail);
    }

    /// Turns the snake unless `direction` reverses the current heading.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Returns true when the head's value appears at more than one index.
    #[must_use]
    pub fn head_body_collision(&self) -> bool {
        let head = self.head();
        let first = self.body.iter().position(|segment| *segment == head);
        let last = self.body.iter().rposition(|segment| *segment == head);
        first != last
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Position, Snake};

    fn pos(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    #[test]
    fn positions_add_componentwise() {
        assert_eq!(pos(2, 3) + pos(-1, 0), pos(1, 3));
        assert_eq!(pos(0, 0) + Direction::Up.delta(), pos(0, -1));
    }

    #[test]
    fn square_bounds_are_half_open() {
        assert!(pos(0, 0).is_within_square(5));
        assert!(pos(4, 4).is_within_square(5));
        assert!(!pos(-1, 2).is_within_square(5));
        assert!(!pos(5, 2).is_within_square(5));
        assert!(!pos(2, -1).is_within_square(5));
        assert!(!pos(2, 5).is_within_square(5));
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(pos(1, 1), Direction::Right);

        snake.advance();

        assert_eq!(snake.head(), pos(2, 1));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_keeps_length_and_follows_the_head() {
        let mut snake =
            Snake::from_segments(vec![pos(3, 2), pos(2, 2), pos(1, 2)], Direction::Down);

        snake.advance();

        let body: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(body, vec![pos(3, 3), pos(3, 2), pos(2, 2)]);
    }

    #[test]
    fn grow_duplicates_the_tail() {
        let mut snake = Snake::from_segments(vec![pos(3, 2), pos(2, 2)], Direction::Right);

        snake.grow();

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), pos(2, 2));
        assert_eq!(snake.head(), pos(3, 2));

        snake.advance();
        let body: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(body, vec![pos(4, 2), pos(3, 2), pos(2, 2)]);
    }

    #[test]
    fn reversing_direction_is_ignored() {
        let cases = [
            (Direction::Up, Direction::Down),
            (Direction::Down, Direction::Up),
            (Direction::Left, Direction::Right),
            (Direction::Right, Direction::Left),
        ];

        for (current, reverse) in cases {
            let mut snake = Snake::new(pos(5, 5), current);
            snake.set_direction(reverse);
            assert_eq!(snake.direction(), current);
        }
    }

    #[test]
    fn non_reversing_directions_are_applied() {
        for requested in [Direction::Up, Direction::Down, Direction::Right] {
            let mut snake = Snake::new(pos(5, 5), Direction::Right);
            snake.set_direction(requested);
            assert_eq!(snake.direction(), requested);
        }
    }

    #[test]
    fn unique_body_has_no_collision() {
        let snake = Snake::from_segments(vec![pos(2, 2), pos(1, 2), pos(1, 3)], Direction::Right);

        assert!(!snake.head_body_collision());
    }

    #[test]
    fn head_repeated_in_body_collides() {
        let snake = Snake::from_segments(
            vec![pos(2, 2), pos(1, 2), pos(1, 3), pos(2, 3), pos(2, 2)],
            Direction::Up,
        );

        assert!(snake.head_body_collision());
    }

    #[test]
    fn duplicate_segments_behind_a_unique_head_do_not_collide() {
        let snake = Snake::from_segments(vec![pos(3, 3), pos(2, 3), pos(2, 3)], Direction::Right);

        assert!(!snake.head_body_collision());
    }

    #[test]
    #[should_panic(expected = "at least one segment")]
    fn empty_body_is_rejected_at_construction() {
        let _ = Snake::from_segments(Vec::new(), Direction::Right);
    }
}
