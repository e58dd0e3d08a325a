//! Default categories a new session starts with

use super::category::{Category, Subcategory};
use super::ledger::Ledger;

/// Categories seeded into every new ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Housing,
    Food,
    Loans,
    Subscriptions,
    Transportation,
}

impl DefaultCategory {
    /// Get all default categories in order
    pub fn all() -> &'static [Self] {
        &[
            Self::Housing,
            Self::Food,
            Self::Loans,
            Self::Subscriptions,
            Self::Transportation,
        ]
    }

    /// Get the title for this default category
    pub fn title(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Loans => "Loans",
            Self::Subscriptions => "Subscriptions",
            Self::Transportation => "Transportation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Housing => "Expenses related to housing and rent.",
            Self::Food => "Expenses for groceries and dining out.",
            Self::Loans => "Loan repayments and debts.",
            Self::Subscriptions => "Recurring subscription services.",
            Self::Transportation => "Transportation and commuting costs.",
        }
    }

    /// Subcategory labels this default starts with
    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            Self::Housing => &["Rent", "Wifi", "Electricity", "Utilities"],
            Self::Food => &["Restaurants", "Groceries"],
            Self::Loans | Self::Subscriptions => &[],
            Self::Transportation => &["Gas"],
        }
    }

    /// One-line listing such as `Food (Restaurants, Groceries)`
    pub fn outline(&self) -> String {
        match self.subcategories() {
            [] => self.title().to_string(),
            labels => format!("{} ({})", self.title(), labels.join(", ")),
        }
    }

    /// Build the category with empty values
    pub fn to_category(&self) -> Category {
        self.subcategories().iter().fold(
            Category::with_description(self.title(), self.description()),
            |category, label| category.with_subcategory(Subcategory::new(*label)),
        )
    }
}

/// The ledger a new session starts from
pub fn default_ledger() -> Ledger {
    Ledger::from_categories(
        DefaultCategory::all()
            .iter()
            .map(DefaultCategory::to_category)
            .collect(),
    )
}
