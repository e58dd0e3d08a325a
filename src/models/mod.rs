//! Core data models for the budget planner
//!
//! The ledger is an ordered list of categories, each holding subcategories
//! whose amounts are kept as the text the user typed.

pub mod category;
pub mod defaults;
pub mod ledger;

pub use category::{Category, Subcategory};
pub use defaults::{default_ledger, DefaultCategory};
pub use ledger::{Ledger, LedgerRow};
