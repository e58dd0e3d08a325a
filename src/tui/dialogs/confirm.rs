//! Delete-category confirmation
//!
//! Shows what goes with the category and how the spent total changes.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::currency::CurrencyFormatter;
use crate::models::Category;
use crate::services::category_total;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the confirmation for deleting category `index`
pub fn render(frame: &mut Frame, app: &App, index: usize) {
    let Some(category) = app.session.ledger().get(index) else {
        return;
    };
    let spent_after = app.totals().spent - category_total(category);

    let area = centered_rect_fixed(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Category ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let mut lines = vec![Line::from(Span::styled(
        format!("Delete '{}'?", category.title),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        describe(category, spent_after, &app.formatter)
            .into_iter()
            .map(|text| Line::from(Span::styled(text, Style::default().fg(Color::Gray)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[y]", Style::default().fg(Color::Red)),
        Span::raw(" Delete  "),
        Span::styled("[n/Esc]", Style::default().fg(Color::Green)),
        Span::raw(" Keep"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// What is lost with the category, one line each
fn describe(category: &Category, spent_after: f64, formatter: &CurrencyFormatter) -> Vec<String> {
    let removed = match category.subcategories.len() {
        0 => "It has no subcategories.".to_string(),
        1 => format!(
            "Its subcategory ({}) goes with it.",
            formatter.format(category_total(category))
        ),
        n => format!(
            "Its {} subcategories ({}) go with it.",
            n,
            formatter.format(category_total(category))
        ),
    };

    vec![
        removed,
        format!("Total Spent becomes {}.", formatter.format(spent_after)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subcategory;

    #[test]
    fn test_describe_category_with_subcategories() {
        let category = Category::new("Housing")
            .with_subcategory(Subcategory::with_value("Rent", "1200"))
            .with_subcategory(Subcategory::with_value("Wifi", "50"));

        let lines = describe(&category, 300.0, &CurrencyFormatter::default());
        assert_eq!(
            lines,
            vec![
                "Its 2 subcategories ($1,250.00) go with it.".to_string(),
                "Total Spent becomes $300.00.".to_string(),
            ]
        );
    }

    #[test]
    fn test_describe_small_categories() {
        let fmt = CurrencyFormatter::new("€");
        let empty = describe(&Category::new("Loans"), 0.0, &fmt);
        assert_eq!(empty[0], "It has no subcategories.");
        assert_eq!(empty[1], "Total Spent becomes €0.00.");

        let single =
            Category::new("Transportation").with_subcategory(Subcategory::with_value("Gas", "40"));
        assert_eq!(
            describe(&single, 0.0, &fmt)[0],
            "Its subcategory (€40.00) goes with it."
        );
    }
}
