use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Position};

/// What occupies a single grid cell. Drawing dispatches over this closed
/// set of variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

impl Tile {
    /// Classify the cell at `pos`
    pub fn at(state: &GameState, pos: Position) -> Tile {
        if pos == state.snake.head() {
            Tile::SnakeHead
        } else if state.snake.body.contains(&pos) {
            Tile::SnakeBody
        } else if pos == state.food.position {
            Tile::Food
        } else {
            Tile::Empty
        }
    }

    fn span(self) -> Span<'static> {
        match self {
            Tile::SnakeHead => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Tile::SnakeBody => Span::styled("□ ", Style::default().fg(Color::Green)),
            Tile::Food => Span::styled(
                "O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Tile::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, paused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[0])[1];

        let grid = self.render_grid(game_area, state, paused);
        frame.render_widget(grid, game_area);

        let controls = self.render_controls(chunks[1]);
        frame.render_widget(controls, chunks[1]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState, paused: bool) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..state.grid_height {
            let spans = (0..state.grid_width)
                .map(|x| Tile::at(state, Position::new(x as i32, y as i32)).span())
                .collect::<Vec<_>>();
            lines.push(Line::from(spans));
        }

        let title = if paused { " Snake - paused " } else { " Snake " };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction as Heading, Food, Snake};

    fn sample_state() -> GameState {
        let snake = Snake {
            body: vec![Position::new(5, 5), Position::new(4, 5)],
            direction: Heading::Right,
            pending: None,
            target_len: 2,
            last_vacated: None,
        };
        let food = Food {
            position: Position::new(2, 2),
        };
        GameState::new(snake, food, 10, 10)
    }

    #[test]
    fn test_tile_classification() {
        let state = sample_state();

        assert_eq!(Tile::at(&state, Position::new(5, 5)), Tile::SnakeHead);
        assert_eq!(Tile::at(&state, Position::new(4, 5)), Tile::SnakeBody);
        assert_eq!(Tile::at(&state, Position::new(2, 2)), Tile::Food);
        assert_eq!(Tile::at(&state, Position::new(0, 0)), Tile::Empty);
    }

    #[test]
    fn test_head_wins_over_body() {
        let mut state = sample_state();
        // Degenerate overlap: classification must pick the head
        state.snake.body = vec![Position::new(5, 5), Position::new(5, 5)];

        assert_eq!(Tile::at(&state, Position::new(5, 5)), Tile::SnakeHead);
    }
}
