use ratatui::layout::{Position as ScreenPosition, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, Theme, GLYPH_APPLE, GLYPH_SNAKE};
use crate::engine::Snapshot;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Everything the renderer needs besides the engine snapshot.
#[derive(Debug)]
pub struct ViewContext<'a> {
    pub theme: &'a Theme,
    pub high_score: u32,
    /// Stored high score at the moment the current game started; the
    /// game-over banner compares against it to announce a new record.
    pub reference_high_score: u32,
    pub speed_rating: u32,
    /// False before the first play and after a game over.
    pub running: bool,
}

/// Renders the full game frame from an immutable snapshot.
pub fn render(
    frame: &mut Frame<'_>,
    snapshot: &Snapshot,
    bounds: GridSize,
    view: &ViewContext<'_>,
) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, view);

    let field = centered_field(play_area, bounds);
    let block = Block::bordered()
        .border_style(Style::new().fg(view.theme.border_fg))
        .style(Style::new().bg(view.theme.play_bg));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    render_apple(frame, inner, bounds, snapshot, view.theme);
    render_snake(frame, inner, bounds, snapshot, view.theme);

    if snapshot.game_over {
        render_game_over_menu(
            frame,
            play_area,
            snapshot.score,
            view.reference_high_score,
            view.theme,
        );
    } else if !view.running {
        render_start_menu(frame, play_area, view.high_score, view.theme);
    }
}

fn render_apple(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    snapshot: &Snapshot,
    theme: &Theme,
) {
    let Some(at) = cell_to_screen(inner, bounds, snapshot.apple) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(at.x, at.y, GLYPH_APPLE, Style::new().fg(theme.apple));
}

fn render_snake(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    snapshot: &Snapshot,
    theme: &Theme,
) {
    let mut segments = snapshot.snake.iter();
    let head = segments.next();
    let buffer = frame.buffer_mut();

    for segment in segments {
        if let Some(at) = cell_to_screen(inner, bounds, *segment) {
            buffer.set_string(at.x, at.y, GLYPH_SNAKE, Style::new().fg(theme.snake_body));
        }
    }

    // Drawn last so a self-collision frame shows the head on top of the
    // body segment it ran into.
    if let Some(at) = head.and_then(|head| cell_to_screen(inner, bounds, *head)) {
        buffer.set_string(
            at.x,
            at.y,
            GLYPH_SNAKE,
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD),
        );
    }
}

/// Centers the bordered play field inside the available area.
fn centered_field(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width.saturating_add(2).min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Maps a grid cell to its terminal cell inside `inner`.
///
/// Returns `None` for cells outside the grid (the head sits one cell out
/// on a wall-collision frame) and for cells the drawable area has clipped.
fn cell_to_screen(inner: Rect, bounds: GridSize, cell: Position) -> Option<ScreenPosition> {
    if !cell.is_within_bounds(bounds) {
        return None;
    }

    let at = ScreenPosition::new(
        inner.x.checked_add(cell.x as u16)?,
        inner.y.checked_add(cell.y as u16)?,
    );

    inner.contains(at).then_some(at)
}
