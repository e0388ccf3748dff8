use engine::Window;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

/// Renders the time-window tab bar with an underline row.
pub fn render_tabs(frame: &mut Frame<'_>, area: Rect, active: Window, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    // Build the tab labels
    let mut spans = Vec::new();
    spans.push(Span::raw(" ")); // Leading padding

    for (i, window) in Window::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  ")); // Gap between tabs
        }

        spans.push(Span::styled(
            format!("{}:", i + 1),
            Style::default().fg(theme.dim),
        ));
        let label = window.label();
        if *window == active {
            spans.push(Span::styled("[", Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("]", Style::default().fg(theme.accent)));
        } else {
            spans.push(Span::styled(label, Style::default().fg(theme.dim)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let underline = "─".repeat(rows[1].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(underline, Style::default().fg(theme.border))),
        rows[1],
    );
}

/// Returns the shortcut hint for window selection.
pub fn tab_shortcuts(theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled("1", Style::default().fg(theme.accent)),
        Span::raw("-"),
        Span::styled("4", Style::default().fg(theme.accent)),
        Span::raw("/"),
        Span::styled("←", Style::default().fg(theme.accent)),
        Span::styled("→", Style::default().fg(theme.accent)),
        Span::raw(" window"),
    ]
}
