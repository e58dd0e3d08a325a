//! Display formatting for terminal output
//!
//! Provides utilities for formatting the ledger and its totals for the
//! command line, as trees and tables.

pub mod category;
pub mod summary;

pub use category::{format_category_details, format_category_tree};
pub use summary::{format_budget_summary, format_ledger_table};
