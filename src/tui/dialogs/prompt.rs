//! Text prompt dialog
//!
//! One-line input used for the income, new categories and subcategories,
//! value edits, renames and exports.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::export::ExportFormat;
use crate::tui::app::{App, PromptKind};
use crate::tui::layout::centered_rect_fixed;

/// Render the prompt dialog
pub fn render(frame: &mut Frame, app: &App, kind: PromptKind) {
    let area = centered_rect_fixed(56, 7, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(kind.title())
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_area = Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1);
    frame.render_widget(&app.input, input_area);

    let hint = match kind {
        PromptKind::Export => format!(
            "Formats: {}",
            ExportFormat::all()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        PromptKind::EditValue(_, _) | PromptKind::Income => "e.g. 1,250.00".to_string(),
        _ => String::new(),
    };

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
            Span::raw(" Save  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ]);

    let footer_area = Rect::new(
        inner.x + 1,
        inner.y + 3,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(3),
    );
    frame.render_widget(footer, footer_area);
}
