//! Totals engine
//!
//! Pure derivations over a ledger snapshot: per-category totals, the grand
//! total spent, and what is left of the income. Nothing here mutates the
//! ledger, and every function is cheap enough to recompute on each read.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Ledger};

/// Sum of a category's subcategory amounts
///
/// Unreadable or empty values count as zero.
pub fn category_total(category: &Category) -> f64 {
    category
        .subcategories
        .iter()
        .fold(0.0, |sum, sub| sum + sub.amount())
}

/// Sum of every category total, in ledger order
pub fn grand_total(categories: &[Category]) -> f64 {
    categories
        .iter()
        .fold(0.0, |sum, category| sum + category_total(category))
}

/// Income left after spending, clamped at zero
///
/// Overspending reports as nothing left rather than a negative balance.
pub fn remaining(income: f64, grand_total: f64) -> f64 {
    (income - grand_total).max(0.0)
}

/// Total for one category with its share of the grand total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub title: String,
    pub total: f64,
    /// Percentage of the grand total (0 when nothing is spent)
    pub share: f64,
    pub items: usize,
}

/// Everything the presentation layer shows about a ledger and an income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetTotals {
    pub income: f64,
    pub spent: f64,
    pub remaining: f64,
    pub categories: Vec<CategoryTotal>,
}

impl BudgetTotals {
    /// Compute totals for a ledger against an income
    pub fn compute(ledger: &Ledger, income: f64) -> Self {
        let totals: Vec<f64> = ledger.categories().iter().map(category_total).collect();
        let spent = totals.iter().fold(0.0, |sum, total| sum + total);

        let categories = ledger
            .categories()
            .iter()
            .zip(totals)
            .map(|(category, total)| CategoryTotal {
                title: category.title.clone(),
                total,
                share: if spent == 0.0 {
                    0.0
                } else {
                    total / spent * 100.0
                },
                items: category.subcategories.len(),
            })
            .collect();

        Self {
            income,
            spent,
            remaining: remaining(income, spent),
            categories,
        }
    }

    /// Fraction of income spent, clamped to `0.0..=1.0`
    pub fn spent_ratio(&self) -> f64 {
        if self.income <= 0.0 {
            return if self.spent > 0.0 { 1.0 } else { 0.0 };
        }
        (self.spent / self.income).clamp(0.0, 1.0)
    }

    /// Whether spending exceeds income
    pub fn is_overspent(&self) -> bool {
        self.spent > self.income
    }

    /// Category totals with the largest first (ties keep ledger order)
    pub fn top_categories(&self, limit: usize) -> Vec<&CategoryTotal> {
        let mut sorted: Vec<_> = self.categories.iter().collect();
        sorted.sort_by(|a, b| b.total.total_cmp(&a.total));
        sorted.into_iter().take(limit).collect()
    }
}
