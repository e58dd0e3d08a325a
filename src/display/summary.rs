//! Budget summary formatting
//!
//! Renders the totals and the flattened ledger as terminal tables.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::currency::CurrencyFormatter;
use crate::models::Ledger;
use crate::services::BudgetTotals;

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "Category")]
    title: String,
    #[tabled(rename = "Items")]
    items: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct LedgerLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Subcategory")]
    subcategory: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format category totals followed by income, spent and left
pub fn format_budget_summary(totals: &BudgetTotals, formatter: &CurrencyFormatter) -> String {
    let mut output = String::new();

    if totals.categories.is_empty() {
        output.push_str("No categories found.\n");
    } else {
        let lines = totals.categories.iter().map(|c| CategoryLine {
            title: c.title.clone(),
            items: c.items,
            total: formatter.format(c.total),
            share: format!("{:.1}%", c.share),
        });

        let mut table = Table::new(lines);
        table
            .with(Style::rounded())
            .modify(Columns::new(1..), Alignment::right());
        output.push_str(&table.to_string());
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format!("Income:      {}\n", formatter.format(totals.income)));
    output.push_str(&format!("Total Spent: {}\n", formatter.format(totals.spent)));
    output.push_str(&format!("Total Left:  {}\n", formatter.format(totals.remaining)));

    if totals.is_overspent() {
        output.push_str(&format!(
            "\nOverspent by {}\n",
            formatter.format(totals.spent - totals.income)
        ));
    }

    output
}

/// Format every subcategory as one table row
pub fn format_ledger_table(ledger: &Ledger, formatter: &CurrencyFormatter) -> String {
    let rows = ledger.rows();
    if rows.is_empty() {
        return "No subcategories found.".to_string();
    }

    let lines = rows.into_iter().map(|row| LedgerLine {
        category: row.category,
        subcategory: row.subcategory,
        amount: formatter.format(row.amount),
    });

    let mut table = Table::new(lines);
    table
        .with(Style::rounded())
        .modify(Columns::single(2), Alignment::right());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_ledger;

    #[test]
    fn test_format_budget_summary() {
        let mut ledger = default_ledger();
        ledger.edit_subcategory_value(0, 0, "1500");
        ledger.edit_subcategory_value(1, 1, "500");

        let totals = BudgetTotals::compute(&ledger, 3000.0);
        let output = format_budget_summary(&totals, &CurrencyFormatter::default());

        assert!(output.contains("Category"));
        assert!(output.contains("Housing"));
        assert!(output.contains("$1,500.00"));
        assert!(output.contains("75.0%"));
        assert!(output.contains("Total Spent: $2,000.00"));
        assert!(output.contains("Total Left:  $1,000.00"));
        assert!(!output.contains("Overspent"));
    }

    #[test]
    fn test_format_overspent_summary() {
        let mut ledger = default_ledger();
        ledger.edit_subcategory_value(0, 0, "1000.50");

        let totals = BudgetTotals::compute(&ledger, 1000.0);
        let output = format_budget_summary(&totals, &CurrencyFormatter::default());

        assert!(output.contains("Total Left:  $0.00"));
        assert!(output.contains("Overspent by $0.50"));
    }

    #[test]
    fn test_format_empty_summary() {
        let totals = BudgetTotals::compute(&Ledger::new(), 0.0);
        let output = format_budget_summary(&totals, &CurrencyFormatter::default());
        assert!(output.starts_with("No categories found."));
        assert!(output.contains("Total Spent: $0.00"));
    }

    #[test]
    fn test_format_ledger_table() {
        let ledger = default_ledger();
        let output = format_ledger_table(&ledger, &CurrencyFormatter::default());

        assert!(output.contains("Subcategory"));
        assert!(output.contains("Electricity"));
        assert!(output.contains("Gas"));
        assert!(!output.contains("Loans"));
        assert_eq!(
            format_ledger_table(&Ledger::new(), &CurrencyFormatter::default()),
            "No subcategories found."
        );
    }
}
