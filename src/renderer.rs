use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::{
    BORDER_SOLID, CELL_COLUMNS, GAME_OVER_CAPTION, GLYPH_FOOD, GLYPH_GRID_DOT,
    GLYPH_SNAKE_SEGMENT, TITLE, Theme,
};
use crate::game::{GameController, RunState};
use crate::grid::{Grid, Position};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, game: &GameController, theme: &Theme) {
    let area = frame.area();
    let base = Style::new().fg(theme.foreground).bg(theme.background);
    frame.render_widget(Block::new().style(base), area);

    let [header, board, footer] = board_layout(area, game.grid());

    render_header(frame, header, game.score, base);

    let block = Block::bordered()
        .border_set(BORDER_SOLID)
        .border_style(base);
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_grid(frame, inner, game.grid(), base);
    render_food(frame, inner, game, theme);
    render_snake(frame, inner, game, base);

    if game.state == RunState::GameOver {
        let caption = Paragraph::new(Line::from(GAME_OVER_CAPTION))
            .style(base.add_modifier(Modifier::BOLD));
        frame.render_widget(caption, footer);
    }
}

/// Splits `area` into header row, bordered board and footer row, centred.
fn board_layout(area: Rect, grid: Grid) -> [Rect; 3] {
    let board_width = grid.cells() * CELL_COLUMNS + 2;
    let board_height = grid.cells() + 2;

    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);

    Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(board_height),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(column)
}

fn render_header(frame: &mut Frame<'_>, header: Rect, score: u32, style: Style) {
    frame.render_widget(Paragraph::new(score.to_string()).style(style), header);

    let title_width = u16::try_from(TITLE.width()).unwrap_or(u16::MAX);
    let title_area = Rect {
        x: header.right().saturating_sub(title_width).max(header.x),
        width: title_width.min(header.width),
        ..header
    };
    frame.render_widget(
        Paragraph::new(TITLE).style(style.add_modifier(Modifier::BOLD)),
        title_area,
    );
}

fn render_grid(frame: &mut Frame<'_>, inner: Rect, grid: Grid, style: Style) {
    let side = i32::from(grid.cells());
    let dot = style.add_modifier(Modifier::DIM);

    let buffer = frame.buffer_mut();
    for y in 0..side {
        for x in 0..side {
            if let Some((column, row)) = logical_to_terminal(inner, grid, Position { x, y }) {
                buffer.set_string(column, row, GLYPH_GRID_DOT, dot);
            }
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, game: &GameController, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, game.grid(), game.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(
        x,
        y,
        GLYPH_FOOD,
        Style::new().fg(theme.food).bg(theme.background),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &GameController, style: Style) {
    let segment = GLYPH_SNAKE_SEGMENT.repeat(usize::from(CELL_COLUMNS));

    let buffer = frame.buffer_mut();
    for position in game.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, game.grid(), *position) else {
            continue;
        };
        buffer.set_string(x, y, &segment, style);
    }
}

/// Returns the terminal cell of the left column of `position`, if it is visible.
fn logical_to_terminal(inner: Rect, grid: Grid, position: Position) -> Option<(u16, u16)> {
    if !grid.in_bounds(position) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use crate::config::{GLYPH_FOOD, GLYPH_SNAKE_SEGMENT, THEME_CLASSIC};
    use crate::game::{GameController, RunState};
    use crate::grid::{Grid, Position};

    use super::{logical_to_terminal, render};

    fn draw(game: &GameController) -> Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(44, 24)).expect("test backend never fails");
        terminal
            .draw(|frame| render(frame, game, &THEME_CLASSIC))
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn cells_map_to_two_columns_inside_the_border() {
        let inner = Rect::new(1, 2, 40, 20);
        let grid = Grid::new(20);

        assert_eq!(
            logical_to_terminal(inner, grid, Position::new(0, 0)),
            Some((1, 2))
        );
        assert_eq!(
            logical_to_terminal(inner, grid, Position::new(19, 19)),
            Some((39, 21))
        );
        assert_eq!(logical_to_terminal(inner, grid, Position::new(20, 0)), None);
    }

    #[test]
    fn frame_shows_score_title_snake_and_food() {
        let mut game = GameController::new_with_seed(1).expect("room for food");
        game.score = 3;
        game.food = Position::new(0, 0);

        let buffer = draw(&game);

        // 44x24 terminal: board is 42x22 centred, header on row 0, inner at (2, 2).
        let header = row_text(&buffer, 0);
        assert!(header.contains('3'));
        assert!(header.contains("SNAKE"));
        assert_eq!(buffer[(2, 2)].symbol(), GLYPH_FOOD);
        assert_eq!(buffer[(2 + 6 * 2, 2 + 9)].symbol(), GLYPH_SNAKE_SEGMENT);
        assert!(!row_text(&buffer, 23).contains("GAME OVER"));
    }

    #[test]
    fn game_over_caption_appears_below_the_board() {
        let mut game = GameController::new_with_seed(2).expect("room for food");
        game.state = RunState::GameOver;

        let buffer = draw(&game);

        assert!(row_text(&buffer, 23).contains("GAME OVER"));
    }
}
