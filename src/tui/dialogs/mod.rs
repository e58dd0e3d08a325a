//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the main view

pub mod confirm;
pub mod help;
pub mod prompt;
