use engine::CategoryTotals;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use crate::ui::{
    components::{card::Card, money::styled_amount},
    theme::Theme,
};

/// Renders the two-bar income/expense chart inside a card.
///
/// Bar heights scale against each other in cents; the exact totals are
/// printed in a legend line under the bars. The bar labels come straight
/// from the dataset contract, not from the theme or the screen.
pub fn render_category_chart(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    totals: &CategoryTotals,
    theme: &Theme,
) {
    let card = Card::new(title, theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    let bars: Vec<Bar> = totals
        .dataset()
        .iter()
        .map(|(label, total)| {
            let color = if *label == CategoryTotals::INCOME_LABEL {
                theme.positive
            } else {
                theme.negative
            };
            Bar::default()
                .value(total.cents().max(0) as u64)
                .text_value(total.to_string())
                .label(Line::from(*label))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(3)
        .label_style(Style::default().fg(theme.dim));
    frame.render_widget(chart, rows[0]);

    let legend = Line::from(vec![
        Span::styled("Income ", Style::default().fg(theme.dim)),
        styled_amount(totals.income, theme),
        Span::raw("   "),
        Span::styled("Expense ", Style::default().fg(theme.dim)),
        styled_amount(-totals.expense, theme),
    ]);
    frame.render_widget(Paragraph::new(legend), rows[1]);
}
