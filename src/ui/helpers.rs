use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Column for a cursor `offset` characters past `start`, pinned to the last
/// column of the region ending at `end` so long input never pushes it off
/// the widget.
pub(crate) fn cursor_column(start: u16, offset: usize, end: u16) -> u16 {
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    start.saturating_add(offset).min(end.saturating_sub(1).max(start))
}

/// Render `[key] Label` pairs as one footer line.
pub(crate) fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (idx, (key, label)) in hints.iter().enumerate() {
        spans.push(Span::styled(format!("[{key}]"), key_style));
        if idx + 1 == hints.len() {
            spans.push(Span::raw(format!(" {label}")));
        } else {
            spans.push(Span::raw(format!(" {label}   ")));
        }
    }
    Line::from(spans)
}
