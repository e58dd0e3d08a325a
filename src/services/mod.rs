//! Service layer for the budget planner
//!
//! Totals are derived from the ledger on every read; the session routes
//! commands from the UI into the ledger.

pub mod session;
pub mod totals;

pub use session::{BudgetSession, LedgerCommand};
pub use totals::{category_total, grand_total, remaining, BudgetTotals, CategoryTotal};
