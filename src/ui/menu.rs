use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;

const START_BOX: (u16, u16) = (34, 9);
const GAME_OVER_BOX: (u16, u16) = (34, 8);

/// Overlay shown until the first game is started.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, high_score: u32, theme: &Theme) {
    let title_style = Style::new()
        .fg(theme.menu_title)
        .add_modifier(Modifier::BOLD);
    let text = Text::from(vec![
        Line::styled("S N A K E", title_style),
        Line::raw(""),
        Line::raw(format!("best so far: {high_score}")),
        Line::raw(""),
        Line::raw("Enter or Space starts a game"),
        Line::raw("+ / - adjust the speed"),
        Line::styled("q quits", Style::new().fg(theme.menu_footer)),
    ]);

    draw_overlay(frame, area, START_BOX, theme, text);
}

/// Overlay shown once a game has ended.
///
/// `reference_high_score` is the stored high score when the game started;
/// beating it is announced as a new record.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    reference_high_score: u32,
    theme: &Theme,
) {
    let title_style = Style::new()
        .fg(theme.menu_title)
        .add_modifier(Modifier::BOLD);
    let record_line = if score > reference_high_score {
        Line::styled("a new record!", Style::new().fg(theme.menu_title))
    } else {
        Line::raw(format!("record to beat: {reference_high_score}"))
    };

    let text = Text::from(vec![
        Line::styled("game over", title_style),
        Line::raw(""),
        Line::raw(format!("you scored {score}")),
        record_line,
        Line::raw(""),
        Line::styled("Enter replays · q quits", Style::new().fg(theme.menu_footer)),
    ]);

    draw_overlay(frame, area, GAME_OVER_BOX, theme, text);
}

/// Clears a fixed-size box in the middle of `area` and renders `text`
/// centered inside a bordered block. The box shrinks to fit tiny terminals.
fn draw_overlay(
    frame: &mut Frame<'_>,
    area: Rect,
    box_size: (u16, u16),
    theme: &Theme,
    text: Text<'_>,
) {
    let width = box_size.0.min(area.width);
    let height = box_size.1.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::new().fg(theme.border_fg))),
        popup,
    );
}
