pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Mode};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    // Main layout: info bar, window tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar (label + underline)
            Constraint::Min(0),    // Dashboard content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    components::tabs::render_tabs(frame, layout[1], state.window, &theme);
    screens::dashboard::render(frame, layout[2], state);
    render_bottom_bar(frame, layout[3], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            "Saldo",
            Style::default()
                .fg(theme.accent)
                .add_modifier(ratatui::style::Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("File", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.snapshot_path)),
        Span::styled("Entries", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.total_entries)),
        Span::styled("Today", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}", state.today)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = components::tabs::tab_shortcuts(theme);

    parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
    parts.extend(get_context_hints(state, theme));

    let bar = Paragraph::new(Line::from(parts));
    frame.render_widget(bar, area);
}

/// Returns context-specific keyboard hints for the current mode.
fn get_context_hints(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    match state.mode {
        Mode::Browse => vec![
            Span::styled("a", Style::default().fg(theme.accent)),
            Span::raw(" add  "),
            Span::styled("j", Style::default().fg(theme.accent)),
            Span::raw("/"),
            Span::styled("k", Style::default().fg(theme.accent)),
            Span::raw(" select  "),
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::raw(" quit"),
        ],
        Mode::Entry => vec![
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" next field  "),
            Span::styled("i", Style::default().fg(theme.accent)),
            Span::raw("/"),
            Span::styled("e", Style::default().fg(theme.accent)),
            Span::raw(" kind  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" cancel"),
        ],
    }
}
