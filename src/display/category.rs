//! Category display formatting
//!
//! Formats the ledger as a tree: each category followed by its subcategories
//! and their amounts.

use crate::currency::CurrencyFormatter;
use crate::models::{Category, Ledger};
use crate::services::category_total;

/// Format the ledger as a tree structure
pub fn format_category_tree(ledger: &Ledger, formatter: &CurrencyFormatter) -> String {
    if ledger.is_empty() {
        return "No categories found.\n\nAdd one with '--add-category <TITLE>'.".to_string();
    }

    let mut output = String::new();

    for (i, category) in ledger.categories().iter().enumerate() {
        output.push_str(&format!(
            "{} ({})\n",
            category.title,
            formatter.format(category_total(category))
        ));

        if category.is_empty() {
            output.push_str("  (no subcategories)\n");
        } else {
            let label_width = label_width(category);
            for (j, sub) in category.subcategories.iter().enumerate() {
                let is_last = j == category.subcategories.len() - 1;
                let prefix = if is_last { "└── " } else { "├── " };

                output.push_str(&format!(
                    "  {}{:<label_width$}  {}\n",
                    prefix,
                    sub.label,
                    formatter.format(sub.amount()),
                ));
            }
        }

        if i < ledger.len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Format one category with its description
pub fn format_category_details(category: &Category, formatter: &CurrencyFormatter) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.title));
    if !category.description.is_empty() {
        output.push_str(&format!("  Description:   {}\n", category.description));
    }
    output.push_str(&format!(
        "  Subcategories: {}\n",
        category.subcategories.len()
    ));
    output.push_str(&format!(
        "  Total:         {}\n",
        formatter.format(category_total(category))
    ));

    output
}

fn label_width(category: &Category) -> usize {
    category
        .subcategories
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0)
}
