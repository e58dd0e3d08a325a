//! Monthly Budget - terminal-based monthly budget planner
//!
//! This library provides the core of the planner: a ledger of categories and
//! subcategories holding typed-in amounts, a totals engine that derives what
//! was spent and what is left of the income, and lenient currency parsing and
//! formatting. Export adapters and the CLI/TUI front ends sit on top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Ledger, categories and subcategories
//! - `currency`: Coercion of typed text into amounts, and formatting
//! - `services`: Totals engine and the session that applies edits
//! - `export`: CSV, spreadsheet-style CSV, plain-text document, JSON and YAML
//! - `display`: Terminal tables and trees for the CLI
//! - `config`: Configuration and path management
//! - `logging`: Tracing setup
//! - `cli` / `tui`: Front ends
//!
//! # Example
//!
//! ```rust
//! use monthly_budget::services::{BudgetSession, LedgerCommand};
//!
//! let mut session = BudgetSession::new();
//! session.set_income("$2,000");
//! session.apply(LedgerCommand::SetValue {
//!     category: 0,
//!     sub: 0,
//!     value: "1200".into(),
//! });
//!
//! let totals = session.totals();
//! assert_eq!(totals.spent, 1200.0);
//! assert_eq!(totals.remaining, 800.0);
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
