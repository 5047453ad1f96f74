use ratatui::style::Color;

use crate::input::Direction;
use crate::snake::Position;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// Default play field, 20×20 cells.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Starting body, head first. The snake starts folded on a single cell;
/// the duplicate segment resolves after the first step.
#[must_use]
pub fn initial_snake() -> Vec<Position> {
    vec![Position { x: 4, y: 10 }, Position { x: 4, y: 10 }]
}

/// Starting apple cell.
pub const INITIAL_APPLE: Position = Position { x: 14, y: 10 };

/// Direction the snake travels when a game starts.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Fastest allowed tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Slowest allowed tick interval in milliseconds.
pub const MAX_TICK_INTERVAL_MS: u64 = 200;

/// Step size for one speed adjustment.
pub const TICK_INTERVAL_STEP_MS: u64 = 10;

/// Solid block glyph for snake segments.
pub const GLYPH_SNAKE: &str = "█";

/// Apple glyph.
pub const GLYPH_APPLE: &str = "●";

/// A color theme applied to all visual elements.
///
/// Every entity is drawn as a solid colored glyph; the fields name the
/// entity they color rather than the widget that draws them.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub apple: Color,
    /// Background for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    apple: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    apple: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    hud_label: Color::DarkGray,
    hud_value: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};
