//! Category and Subcategory models
//!
//! A category is a named budget bucket (e.g., "Housing"). Its subcategories
//! are the individual line items that carry amounts (e.g., "Rent").

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::currency::coerce_amount;

/// A line item within a category
///
/// The value is kept as text because it is bound to a live text field while
/// the user types. It is only interpreted as a number when totals are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Display name
    pub label: String,

    /// Amount as typed (may be empty or partially typed)
    #[serde(default)]
    pub value: String,
}

impl Subcategory {
    /// Create a new subcategory with an empty value
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
        }
    }

    /// Create a subcategory with an initial value
    pub fn with_value(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The value coerced to a number (unreadable text counts as zero)
    pub fn amount(&self) -> f64 {
        coerce_amount(&self.value)
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A budget category holding an ordered list of subcategories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name (duplicates are allowed)
    pub title: String,

    /// Free text shown under the title
    #[serde(default)]
    pub description: String,

    /// Line items in display order
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Create a new category with no subcategories
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            subcategories: Vec::new(),
        }
    }

    /// Create a new category with a description
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        let mut category = Self::new(title);
        category.description = description.into();
        category
    }

    /// Builder-style helper to append a subcategory
    pub fn with_subcategory(mut self, subcategory: Subcategory) -> Self {
        self.subcategories.push(subcategory);
        self
    }

    /// Find a subcategory index by label (case-insensitive, first match)
    pub fn find_subcategory(&self, label: &str) -> Option<usize> {
        let label = label.trim();
        self.subcategories
            .iter()
            .position(|s| s.label.trim().eq_ignore_ascii_case(label))
    }

    /// Whether this category has no line items
    pub fn is_empty(&self) -> bool {
        self.subcategories.is_empty()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
