use ratatui::style::Color;
use ratatui::symbols::border;

use crate::grid::Position;

/// Number of cells along each side of the square board.
pub const GRID_CELLS: u16 = 20;

/// Terminal columns used to draw one logical cell.
///
/// Terminal glyphs are roughly twice as tall as they are wide, so two columns
/// per row keep cells visually square.
pub const CELL_COLUMNS: u16 = 2;

/// Interval between movement ticks in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 200;

/// Upper bound on how long the loop waits for input before redrawing.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Snake layout at game start and after every game over (head first).
pub const INITIAL_SNAKE: [Position; 3] = [
    Position { x: 6, y: 9 },
    Position { x: 5, y: 9 },
    Position { x: 4, y: 9 },
];

/// Title shown above the board.
pub const TITLE: &str = "SNAKE";

/// Caption shown below the board after a collision.
pub const GAME_OVER_CAPTION: &str = "GAME OVER";

/// Colours applied to every visual element.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Theme {
    /// Snake segments, border, grid lines and text.
    pub foreground: Color,
    /// Play area and surrounding background.
    pub background: Color,
    /// Food marker.
    pub food: Color,
}

/// Dark green on light green, the look of the original handheld.
pub const THEME_CLASSIC: Theme = Theme {
    foreground: Color::Rgb(38, 60, 0),
    background: Color::Rgb(142, 163, 44),
    food: Color::Rgb(166, 38, 22),
};

/// Full-block border around the play area.
pub const BORDER_SOLID: border::Set = border::Set {
    top_left: "█",
    top_right: "█",
    bottom_left: "█",
    bottom_right: "█",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▀",
    horizontal_bottom: "▄",
};

/// Glyph for one snake segment (repeated `CELL_COLUMNS` times).
pub const GLYPH_SNAKE_SEGMENT: &str = "█";

/// Glyph for the food marker.
pub const GLYPH_FOOD: &str = "●";

/// Faint marker drawn in empty cells to show the grid.
pub const GLYPH_GRID_DOT: &str = "·";
