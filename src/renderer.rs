use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Rect, Size};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::BORDER_DOUBLE_LINE;
use crate::error::GameError;
use crate::field::Field;

/// Draws the field's last rendered grid once per tick.
pub trait Renderer {
    fn draw(&mut self, field: &Field) -> Result<(), GameError>;
}

impl<B: Backend> Renderer for Terminal<B> {
    /// Clears the whole screen first so every tick is a full redraw.
    fn draw(&mut self, field: &Field) -> Result<(), GameError> {
        self.clear()?;
        Terminal::draw(self, |frame| render(frame, field))?;
        Ok(())
    }
}

/// Renders the grid inside a double-line box anchored at the top-left corner.
pub fn render(frame: &mut Frame<'_>, field: &Field) {
    let area = board_area(frame.area(), field);
    let rows: Vec<Line<'_>> = field.rows().map(Line::from).collect();

    let board = Paragraph::new(rows).block(Block::bordered().border_set(BORDER_DOUBLE_LINE));
    frame.render_widget(board, area);
}

/// Fails when the terminal cannot show a bordered board of `side` cells.
///
/// Only needs the side, so it can run before any field is built.
pub fn ensure_fits(size: Size, side: u16) -> Result<(), GameError> {
    let required = side.saturating_add(2);
    if size.width < required || size.height < required {
        return Err(GameError::TerminalTooSmall {
            width: size.width,
            height: size.height,
            required,
        });
    }

    Ok(())
}

fn board_area(area: Rect, field: &Field) -> Rect {
    let width = framed_width(field);
    let height = field.side().saturating_add(2);

    Rect::new(area.x, area.y, width, height).intersection(area)
}

fn framed_width(field: &Field) -> u16 {
    let row_width = field.rows().next().map_or(0, |row| row.width());
    u16::try_from(row_width)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Size;

    use super::{Renderer, ensure_fits};
    use crate::error::GameError;
    use crate::field::Field;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    fn scripted_field() -> Field {
        let mut snake = Snake::from_segments(
            vec![Position { x: 2, y: 1 }, Position { x: 1, y: 1 }],
            Direction::Right,
        );
        let mut field = Field::new(3, &snake, StdRng::seed_from_u64(1));
        field.set_fruit(Position { x: 0, y: 2 });
        field.evaluate(&mut snake);
        field
    }

    #[test]
    fn board_is_boxed_with_double_lines() {
        let field = scripted_field();
        let mut terminal = Terminal::new(TestBackend::new(5, 5)).expect("test terminal");

        Renderer::draw(&mut terminal, &field).expect("draw succeeds");

        terminal.backend().assert_buffer(&Buffer::with_lines([
            "╔═══╗",
            "║   ║",
            "║ ██║",
            "║*  ║",
            "╚═══╝",
        ]));
    }

    #[test]
    fn board_is_anchored_top_left() {
        let field = scripted_field();
        let mut terminal = Terminal::new(TestBackend::new(7, 6)).expect("test terminal");

        Renderer::draw(&mut terminal, &field).expect("draw succeeds");

        terminal.backend().assert_buffer(&Buffer::with_lines([
            "╔═══╗  ",
            "║   ║  ",
            "║ ██║  ",
            "║*  ║  ",
            "╚═══╝  ",
            "       ",
        ]));
    }

    #[test]
    fn small_terminal_is_rejected() {
        assert!(ensure_fits(Size::new(5, 5), 3).is_ok());
        assert!(matches!(
            ensure_fits(Size::new(5, 4), 3),
            Err(GameError::TerminalTooSmall { required: 5, .. })
        ));
    }

    #[test]
    fn oversized_side_is_rejected_from_the_side_alone() {
        let result = ensure_fits(Size::new(80, 24), 250);

        assert!(matches!(
            result,
            Err(GameError::TerminalTooSmall {
                width: 80,
                height: 24,
                required: 252,
            })
        ));
    }
}
