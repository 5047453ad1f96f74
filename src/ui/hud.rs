use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::engine::Snapshot;
use crate::renderer::ViewContext;

/// Renders the one-line HUD at the bottom and returns the play area above it.
///
/// Falls back to single-letter labels when the terminal is too narrow for
/// the full line.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    view: &ViewContext<'_>,
) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let compact = hud_width(snapshot.score, view.high_score, view.speed_rating, false)
        > usize::from(hud_area.width);

    frame.render_widget(
        Paragraph::new(hud_line(
            snapshot.score,
            view.high_score,
            view.speed_rating,
            compact,
            view.theme,
        ))
        .alignment(Alignment::Right),
        hud_area,
    );

    play_area
}

fn hud_line(
    score: u32,
    high_score: u32,
    speed_rating: u32,
    compact: bool,
    theme: &Theme,
) -> Line<'static> {
    let (score_label, high_label, speed_label) = labels(compact);
    let label_style = Style::new().fg(theme.hud_label);
    let value_style = Style::new().fg(theme.hud_value);
    let sep = " │ ";

    Line::from(vec![
        Span::styled(format!("{score_label}: "), label_style),
        Span::styled(score.to_string(), value_style),
        Span::styled(sep, label_style),
        Span::styled(format!("{high_label}: "), label_style),
        Span::styled(high_score.to_string(), value_style),
        Span::styled(sep, label_style),
        Span::styled(format!("{speed_label}: "), label_style),
        Span::styled(speed_rating.to_string(), value_style),
    ])
}

fn hud_width(score: u32, high_score: u32, speed_rating: u32, compact: bool) -> usize {
    let (score_label, high_label, speed_label) = labels(compact);
    let text = format!(
        "{score_label}: {score} │ {high_label}: {high_score} │ {speed_label}: {speed_rating}"
    );

    UnicodeWidthStr::width(text.as_str())
}

fn labels(compact: bool) -> (&'static str, &'static str, &'static str) {
    if compact {
        ("S", "H", "V")
    } else {
        ("Score", "Hi", "Speed")
    }
}
