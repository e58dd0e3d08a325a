//! Terminal User Interface module
//!
//! An interactive editor for the budget built on ratatui: the ledger table
//! on the left, live totals and charts on the right, and modal dialogs for
//! data entry.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
