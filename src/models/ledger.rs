//! The ledger: every category in the current session
//!
//! All mutations are total. A bad index or an empty title leaves the ledger
//! untouched and the method returns `false`; nothing here panics or errors.

use serde::{Deserialize, Serialize};

use super::category::{Category, Subcategory};

/// One flattened (category, subcategory, amount) line, in ledger order
///
/// This is the read-only view handed to exporters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Subcategory")]
    pub subcategory: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
}

/// Ordered collection of categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    categories: Vec<Category>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from existing categories (order is kept)
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// All categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a category by index
    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Get a subcategory by its category and subcategory index
    pub fn subcategory(&self, category: usize, sub: usize) -> Option<&Subcategory> {
        self.categories
            .get(category)
            .and_then(|c| c.subcategories.get(sub))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the ledger has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of subcategories across all categories
    pub fn subcategory_count(&self) -> usize {
        self.categories.iter().map(|c| c.subcategories.len()).sum()
    }

    /// Find a category index by title (case-insensitive, first match)
    pub fn find_category(&self, title: &str) -> Option<usize> {
        let title = title.trim();
        self.categories
            .iter()
            .position(|c| c.title.trim().eq_ignore_ascii_case(title))
    }

    /// Append a new category with no subcategories
    ///
    /// Ignored when the title is empty or whitespace only.
    pub fn add_category(&mut self, title: &str, description: Option<&str>) -> bool {
        if title.trim().is_empty() {
            return false;
        }

        self.categories.push(Category::with_description(
            title,
            description.unwrap_or_default(),
        ));
        true
    }

    /// Remove a category and everything it owns
    pub fn delete_category(&mut self, index: usize) -> bool {
        if index >= self.categories.len() {
            return false;
        }

        self.categories.remove(index);
        true
    }

    /// Append a subcategory with an empty value
    pub fn add_subcategory(&mut self, category: usize, label: &str) -> bool {
        match self.categories.get_mut(category) {
            Some(cat) => {
                cat.subcategories.push(Subcategory::new(label));
                true
            }
            None => false,
        }
    }

    /// Remove a subcategory
    pub fn delete_subcategory(&mut self, category: usize, sub: usize) -> bool {
        match self.categories.get_mut(category) {
            Some(cat) if sub < cat.subcategories.len() => {
                cat.subcategories.remove(sub);
                true
            }
            _ => false,
        }
    }

    /// Replace a subcategory's label
    pub fn edit_subcategory_label(&mut self, category: usize, sub: usize, label: &str) -> bool {
        match self.subcategory_mut(category, sub) {
            Some(s) => {
                s.label = label.to_string();
                true
            }
            None => false,
        }
    }

    /// Replace a subcategory's value text
    ///
    /// Any text is accepted; it is only interpreted when totals are read.
    pub fn edit_subcategory_value(&mut self, category: usize, sub: usize, value: &str) -> bool {
        match self.subcategory_mut(category, sub) {
            Some(s) => {
                s.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Flatten the ledger into one row per subcategory
    pub fn rows(&self) -> Vec<LedgerRow> {
        self.categories
            .iter()
            .flat_map(|cat| {
                cat.subcategories.iter().map(move |sub| LedgerRow {
                    category: cat.title.clone(),
                    subcategory: sub.label.clone(),
                    amount: sub.amount(),
                })
            })
            .collect()
    }

    fn subcategory_mut(&mut self, category: usize, sub: usize) -> Option<&mut Subcategory> {
        self.categories
            .get_mut(category)
            .and_then(|c| c.subcategories.get_mut(sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_categories() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_category("Housing", Some("Rent and bills"));
        ledger.add_category("Food", None);
        ledger.add_category("Loans", None);
        ledger
    }

    #[test]
    fn test_add_category() {
        let mut ledger = Ledger::new();
        assert!(ledger.add_category("Pets", Some("Vet and food")));

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.categories()[0].title, "Pets");
        assert_eq!(ledger.categories()[0].description, "Vet and food");
        assert!(ledger.categories()[0].subcategories.is_empty());
    }

    #[test]
    fn test_add_category_ignores_blank_title() {
        let mut ledger = Ledger::new();
        assert!(!ledger.add_category("", None));
        assert!(!ledger.add_category("   \t", None));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_category_allows_duplicates() {
        let mut ledger = Ledger::new();
        ledger.add_category("Food", None);
        ledger.add_category("Food", None);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.find_category("food"), Some(0));
    }

    #[test]
    fn test_categories_append_at_end() {
        let mut ledger = three_categories();
        ledger.add_category("Pets", None);
        let titles: Vec<_> = ledger.categories().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Housing", "Food", "Loans", "Pets"]);
    }

    #[test]
    fn test_delete_category_out_of_range_is_noop() {
        let mut ledger = three_categories();
        assert!(!ledger.delete_category(5));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_delete_category_removes_subcategories() {
        let mut ledger = three_categories();
        ledger.add_subcategory(1, "Groceries");
        assert!(ledger.delete_category(1));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.subcategory_count(), 0);
        assert_eq!(ledger.find_category("Food"), None);
    }

    #[test]
    fn test_add_subcategory() {
        let mut ledger = three_categories();
        assert!(ledger.add_subcategory(2, "Student loan"));
        let sub = ledger.subcategory(2, 0).unwrap();
        assert_eq!(sub.label, "Student loan");
        assert_eq!(sub.value, "");

        assert!(!ledger.add_subcategory(3, "Nowhere"));
        assert_eq!(ledger.subcategory_count(), 1);
    }

    #[test]
    fn test_delete_subcategory() {
        let mut ledger = three_categories();
        ledger.add_subcategory(0, "Rent");
        ledger.add_subcategory(0, "Wifi");

        assert!(!ledger.delete_subcategory(0, 2));
        assert!(!ledger.delete_subcategory(9, 0));
        assert!(ledger.delete_subcategory(0, 0));

        assert_eq!(ledger.get(0).unwrap().subcategories.len(), 1);
        assert_eq!(ledger.subcategory(0, 0).unwrap().label, "Wifi");
    }

    #[test]
    fn test_edit_subcategory() {
        let mut ledger = three_categories();
        ledger.add_subcategory(0, "Rent");

        assert!(ledger.edit_subcategory_label(0, 0, "Mortgage"));
        assert!(ledger.edit_subcategory_value(0, 0, "12a3"));
        let sub = ledger.subcategory(0, 0).unwrap();
        assert_eq!(sub.label, "Mortgage");
        assert_eq!(sub.value, "12a3");

        assert!(!ledger.edit_subcategory_value(0, 1, "5"));
        assert!(!ledger.edit_subcategory_label(4, 0, "x"));
    }

    #[test]
    fn test_rows_follow_ledger_order() {
        let mut ledger = three_categories();
        ledger.add_subcategory(1, "Groceries");
        ledger.edit_subcategory_value(1, 0, "120.50");
        ledger.add_subcategory(0, "Rent");
        ledger.edit_subcategory_value(0, 0, "900");
        ledger.add_subcategory(1, "Dining");
        ledger.edit_subcategory_value(1, 1, "abc");

        let rows = ledger.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, "Housing");
        assert_eq!(rows[0].amount, 900.0);
        assert_eq!(rows[1].subcategory, "Groceries");
        assert_eq!(rows[1].amount, 120.5);
        assert_eq!(rows[2].subcategory, "Dining");
        assert_eq!(rows[2].amount, 0.0);
    }

    #[test]
    fn test_serializes_as_list() {
        let mut ledger = Ledger::new();
        ledger.add_category("Food", None);
        let json = serde_json::to_string(&ledger).unwrap();
        assert!(json.starts_with('['));

        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }
}
