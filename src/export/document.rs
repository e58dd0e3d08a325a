//! Plain-text summary document
//!
//! A printable summary: a centered title, one block per category with
//! right-aligned amounts, and the total spent at the bottom. Pages are
//! separated by a form feed once a page's line budget is used up.

use std::io::Write;

use crate::config::DocumentSettings;
use crate::currency::CurrencyFormatter;
use crate::error::BudgetResult;
use crate::models::Ledger;
use crate::services::grand_total;

use super::export_error;

/// Title printed at the top of the first page
pub const DOCUMENT_TITLE: &str = "Monthly Budget Summary";

const PAGE_BREAK: char = '\u{000C}';

/// Export the ledger as a plain-text summary
pub fn export_document<W: Write>(
    ledger: &Ledger,
    formatter: &CurrencyFormatter,
    layout: &DocumentSettings,
    writer: &mut W,
) -> BudgetResult<()> {
    let width = layout.page_width.max(DOCUMENT_TITLE.len());
    let lines = render_lines(ledger, formatter, width);

    for (i, line) in lines.iter().enumerate() {
        if layout.lines_per_page > 0 && i > 0 && i % layout.lines_per_page == 0 {
            writeln!(writer, "{}", PAGE_BREAK).map_err(export_error)?;
        }
        writeln!(writer, "{}", line).map_err(export_error)?;
    }

    writer.flush().map_err(export_error)?;
    Ok(())
}

fn render_lines(ledger: &Ledger, formatter: &CurrencyFormatter, width: usize) -> Vec<String> {
    let mut lines = vec![centered(DOCUMENT_TITLE, width), String::new()];

    for category in ledger.categories() {
        lines.push(category.title.clone());
        lines.push("-".repeat(width));

        for sub in &category.subcategories {
            lines.push(amount_line(&sub.label, &formatter.format(sub.amount()), width));
        }

        lines.push(String::new());
    }

    lines.push("=".repeat(width));
    lines.push(centered(
        &format!(
            "Total Spent: {}",
            formatter.format(grand_total(ledger.categories()))
        ),
        width,
    ));

    lines
}

/// Indented label with the amount flush against the right margin
fn amount_line(label: &str, amount: &str, width: usize) -> String {
    let amount_width = amount.chars().count();
    let label_width = width.saturating_sub(amount_width + 3);
    format!("  {:<label_width$} {}", label, amount)
}

fn centered(text: &str, width: usize) -> String {
    format!("{:^width$}", text).trim_end().to_string()
}
