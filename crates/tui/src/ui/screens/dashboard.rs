use engine::TransactionKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, FormField, Mode},
    ui::{
        components::{
            card::Card,
            charts,
            money::{styled_amount, styled_amount_bold},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Balance
            Constraint::Min(8),    // Chart
            Constraint::Length(9), // Entry form
        ])
        .split(cols[0]);

    render_balance(frame, left[0], state, &theme);
    charts::render_category_chart(
        frame,
        left[1],
        "Income / Expense",
        &state.derived.totals,
        &theme,
    );
    render_form(frame, left[2], state, &theme);
    render_table(frame, cols[1], state, &theme);
}

fn render_balance(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("Balance", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let lines = vec![
        Line::from(styled_amount_bold(state.derived.balance, theme)),
        Line::from(Span::styled(
            format!(
                "{} · {} entries",
                state.window.label(),
                state.derived.entries.len()
            ),
            Style::default().fg(theme.dim),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let editing = state.mode == Mode::Entry;
    let card = Card::new("Add Entry", theme).focused(editing);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Kind
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
        ])
        .split(inner);

    let form = &state.form;

    render_kind_field(
        frame,
        rows[0],
        form.kind,
        editing && form.focus == FormField::Kind,
        theme,
    );
    render_text_field(
        frame,
        rows[1],
        "Amount",
        &form.amount,
        "0.00",
        editing && form.focus == FormField::Amount,
        theme,
    );
    render_text_field(
        frame,
        rows[2],
        "Date",
        &form.date,
        "YYYY-MM-DD",
        editing && form.focus == FormField::Date,
        theme,
    );

    if let Some(message) = &form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error),
            )),
            rows[4],
        );
    } else if !editing {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Press a to add an entry",
                Style::default().fg(theme.dim),
            )),
            rows[4],
        );
    }
}

fn render_kind_field(
    frame: &mut Frame<'_>,
    area: Rect,
    kind: TransactionKind,
    focused: bool,
    theme: &Theme,
) {
    let kind_color = match kind {
        TransactionKind::Income => theme.positive,
        TransactionKind::Expense => theme.negative,
    };

    let mut spans = vec![
        field_label("Type", focused, theme),
        Span::styled(kind.as_str(), Style::default().fg(kind_color)),
    ];
    if focused {
        spans.push(Span::styled(" ‹i/e›", Style::default().fg(theme.dim)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders a text input row: label, value and a cursor bar when focused
/// (placeholder shown dim while the value is empty).
fn render_text_field(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };

    let value_span = if value.is_empty() && !focused {
        Span::styled(placeholder.to_string(), Style::default().fg(theme.dim))
    } else {
        let style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text)
        };
        Span::styled(format!("{value}{cursor}"), style)
    };

    let line = Line::from(vec![field_label(label, focused, theme), value_span]);
    frame.render_widget(Paragraph::new(line), area);
}

fn field_label(label: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let marker = if focused { "› " } else { "  " };
    Span::styled(
        format!("{marker}{label:<7}"),
        Style::default().fg(theme.dim),
    )
}

fn render_table(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let title = format!("Entries · {}", state.window.label());
    let card = Card::new(&title, theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if state.derived.entries.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No entries in this window. Press a to add one.",
                Style::default().fg(theme.dim),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let items = state
        .derived
        .entries
        .iter()
        .map(|tx| {
            let kind_color = match tx.kind {
                TransactionKind::Income => theme.positive,
                TransactionKind::Expense => theme.negative,
            };
            let signed = match tx.kind {
                TransactionKind::Income => tx.amount,
                TransactionKind::Expense => -tx.amount,
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<5}", tx.id), Style::default().fg(theme.dim)),
                Span::raw(format!("{}  ", tx.date)),
                Span::styled(
                    format!("{:<9}", tx.kind.as_str()),
                    Style::default().fg(kind_color),
                ),
                styled_amount(signed, theme),
            ]))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(state.selected));
    }

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}
