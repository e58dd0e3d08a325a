//! Ledger view
//!
//! Categories with their subcategories. Category rows show the category
//! total; subcategory rows show the value as typed and as currency.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::services::category_total;
use crate::tui::app::{App, LedgerRowRef};

/// Render the ledger table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" My Monthly Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let ledger = app.session.ledger();
    if ledger.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("  No categories yet."),
            Line::from("  Press 'c' to add one."),
        ])
        .block(block)
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    }

    let formatter = &app.formatter;
    let rows: Vec<Row> = app
        .rows()
        .into_iter()
        .filter_map(|row| match row {
            LedgerRowRef::Category(c) => {
                let category = ledger.get(c)?;
                Some(
                    Row::new(vec![
                        Cell::from(format!("▼ {}", category.title)),
                        Cell::from(""),
                        Cell::from(formatter.format(category_total(category))),
                    ])
                    .style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                )
            }
            LedgerRowRef::Subcategory(c, s) => {
                let sub = ledger.subcategory(c, s)?;
                let amount_style = if sub.amount() == 0.0 {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                Some(Row::new(vec![
                    Cell::from(format!("    {}", sub.label)),
                    Cell::from(sub.value.clone()).style(Style::default().fg(Color::Yellow)),
                    Cell::from(formatter.format(sub.amount())).style(amount_style),
                ]))
            }
        })
        .collect();

    let header = Row::new(vec!["Item", "Value", "Amount"]).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    );

    let widths = [
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row));

    frame.render_stateful_widget(table, area, &mut state);
}
