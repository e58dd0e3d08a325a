//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session and exporters.

pub mod category;
pub mod edits;
pub mod export;
pub mod summary;

pub use category::{handle_category_command, CategoryArgs};
pub use edits::{DropTarget, LedgerEdits, SetValue};
pub use export::{handle_export_command, ExportArgs};
pub use summary::{handle_summary_command, SummaryArgs};
