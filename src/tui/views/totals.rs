//! Totals view
//!
//! Total Spent and Total Left cards, a bar per category, and a gauge of
//! how much of the income is spent.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::services::BudgetTotals;
use crate::tui::app::App;
use crate::tui::layout::TotalsLayout;

/// Render the totals panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = TotalsLayout::new(area);
    let totals = app.totals();

    render_card(
        frame,
        layout.spent,
        " Total Spent ",
        app.formatter.format(totals.spent),
        if totals.is_overspent() {
            Color::Red
        } else {
            Color::Yellow
        },
    );
    render_card(
        frame,
        layout.left,
        " Total Left ",
        app.formatter.format(totals.remaining),
        if totals.remaining > 0.0 {
            Color::Green
        } else {
            Color::Red
        },
    );

    render_chart(frame, app, &totals, layout.chart);
    render_gauge(frame, &totals, layout.gauge);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, amount: String, color: Color) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        amount,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(block);

    frame.render_widget(paragraph, area);
}

/// The largest categories that fit, scaled in whole currency units
fn render_chart(frame: &mut Frame, app: &App, totals: &BudgetTotals, area: Rect) {
    let block = Block::default()
        .title(" Spending by Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if totals.spent <= 0.0 {
        let empty = Paragraph::new("Nothing spent yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // Narrowest bar is 3 columns plus a 1 column gap
    let inner_width = area.width.saturating_sub(2);
    let fits = usize::from(inner_width / 4).max(1);

    let bars: Vec<Bar> = totals
        .top_categories(fits)
        .into_iter()
        .map(|category| {
            Bar::default()
                .value(category.total.max(0.0).round() as u64)
                .label(Line::from(category.title.clone()))
                .text_value(app.formatter.format(category.total))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let count = bars.len().max(1) as u16;
    let bar_width = (inner_width / count).saturating_sub(1).clamp(3, 12);

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_gauge(frame: &mut Frame, totals: &BudgetTotals, area: Rect) {
    let ratio = totals.spent_ratio();
    let color = if totals.is_overspent() {
        Color::Red
    } else if ratio > 0.9 {
        Color::Yellow
    } else {
        Color::Green
    };

    let label = if totals.income > 0.0 {
        format!("{:.0}% of income spent", totals.spent / totals.income * 100.0)
    } else {
        "No income set".to_string()
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Spent vs Income ")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(ratio)
        .label(label);

    frame.render_widget(gauge, area);
}
