//! Budget session
//!
//! The single owned piece of state behind a running UI: the ledger plus the
//! income field. Every mutation goes through [`BudgetSession::apply`], which
//! never fails; commands that do not fit the ledger are ignored and logged.

use tracing::{debug, trace};

use crate::currency::{normalize_income_text, parse_currency};
use crate::models::{default_ledger, Ledger};

use super::totals::BudgetTotals;

/// A mutation the presentation layer can request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    AddCategory {
        title: String,
        description: Option<String>,
    },
    DeleteCategory {
        category: usize,
    },
    AddSubcategory {
        category: usize,
        label: String,
    },
    DeleteSubcategory {
        category: usize,
        sub: usize,
    },
    RenameSubcategory {
        category: usize,
        sub: usize,
        label: String,
    },
    SetValue {
        category: usize,
        sub: usize,
        value: String,
    },
}

impl LedgerCommand {
    /// Short name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddCategory { .. } => "add_category",
            Self::DeleteCategory { .. } => "delete_category",
            Self::AddSubcategory { .. } => "add_subcategory",
            Self::DeleteSubcategory { .. } => "delete_subcategory",
            Self::RenameSubcategory { .. } => "rename_subcategory",
            Self::SetValue { .. } => "set_value",
        }
    }
}

/// Session state owned by the top-level controller
#[derive(Debug, Clone)]
pub struct BudgetSession {
    ledger: Ledger,
    income_text: String,
}

impl BudgetSession {
    /// Start a session with the default categories
    pub fn new() -> Self {
        Self::with_ledger(default_ledger())
    }

    /// Start a session from an existing ledger
    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger,
            income_text: String::new(),
        }
    }

    /// Read-only view of the ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Apply a command, returning whether the ledger changed
    pub fn apply(&mut self, command: LedgerCommand) -> bool {
        let name = command.name();
        let applied = match command {
            LedgerCommand::AddCategory { title, description } => {
                self.ledger.add_category(&title, description.as_deref())
            }
            LedgerCommand::DeleteCategory { category } => self.ledger.delete_category(category),
            LedgerCommand::AddSubcategory { category, label } => {
                self.ledger.add_subcategory(category, &label)
            }
            LedgerCommand::DeleteSubcategory { category, sub } => {
                self.ledger.delete_subcategory(category, sub)
            }
            LedgerCommand::RenameSubcategory {
                category,
                sub,
                label,
            } => self.ledger.edit_subcategory_label(category, sub, &label),
            LedgerCommand::SetValue {
                category,
                sub,
                value,
            } => self.ledger.edit_subcategory_value(category, sub, &value),
        };

        if applied {
            trace!(command = name, categories = self.ledger.len(), "ledger updated");
        } else {
            debug!(command = name, "ignored ledger command");
        }

        applied
    }

    /// The income field exactly as typed
    pub fn income_text(&self) -> &str {
        &self.income_text
    }

    /// Replace the income field text
    pub fn set_income(&mut self, text: impl Into<String>) {
        self.income_text = text.into();
    }

    /// Normalize the income field, as happens when the user leaves it
    pub fn commit_income(&mut self) {
        self.income_text = normalize_income_text(&self.income_text);
    }

    /// Income as a number
    pub fn income(&self) -> f64 {
        parse_currency(&self.income_text)
    }

    /// Recompute totals for the current ledger and income
    pub fn totals(&self) -> BudgetTotals {
        BudgetTotals::compute(&self.ledger, self.income())
    }
}

impl Default for BudgetSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_seeded() {
        let session = BudgetSession::new();
        assert_eq!(session.ledger().len(), 5);
        assert_eq!(session.income(), 0.0);
    }

    #[test]
    fn test_apply_commands() {
        let mut session = BudgetSession::with_ledger(Ledger::new());

        assert!(session.apply(LedgerCommand::AddCategory {
            title: "Housing".into(),
            description: None,
        }));
        assert!(session.apply(LedgerCommand::AddSubcategory {
            category: 0,
            label: "Rent".into(),
        }));
        assert!(session.apply(LedgerCommand::SetValue {
            category: 0,
            sub: 0,
            value: "500".into(),
        }));
        assert!(session.apply(LedgerCommand::RenameSubcategory {
            category: 0,
            sub: 0,
            label: "Mortgage".into(),
        }));

        let sub = session.ledger().subcategory(0, 0).unwrap();
        assert_eq!(sub.label, "Mortgage");
        assert_eq!(session.totals().spent, 500.0);
    }

    #[test]
    fn test_invalid_commands_are_ignored() {
        let mut session = BudgetSession::new();
        let before = session.ledger().clone();

        assert!(!session.apply(LedgerCommand::AddCategory {
            title: "  ".into(),
            description: Some("blank".into()),
        }));
        assert!(!session.apply(LedgerCommand::DeleteCategory { category: 5 }));
        assert!(!session.apply(LedgerCommand::DeleteSubcategory { category: 2, sub: 0 }));
        assert!(!session.apply(LedgerCommand::SetValue {
            category: 0,
            sub: 10,
            value: "1".into(),
        }));

        assert_eq!(session.ledger(), &before);
    }

    #[test]
    fn test_income() {
        let mut session = BudgetSession::new();
        session.set_income("$1,000.00");
        assert_eq!(session.income_text(), "$1,000.00");
        assert_eq!(session.income(), 1000.0);

        session.commit_income();
        assert_eq!(session.income_text(), "1000");
        assert_eq!(session.income(), 1000.0);
    }

    #[test]
    fn test_totals_follow_mutations() {
        let mut session = BudgetSession::new();
        session.set_income("1000");
        session.apply(LedgerCommand::SetValue {
            category: 0,
            sub: 0,
            value: "1000.50".into(),
        });

        let totals = session.totals();
        assert_eq!(totals.spent, 1000.5);
        assert_eq!(totals.remaining, 0.0);
        assert!(totals.is_overspent());
    }
}
