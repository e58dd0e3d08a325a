//! Application state for the TUI
//!
//! The App struct owns the budget session and everything needed for
//! rendering and handling events. All ledger changes go through the
//! session's commands.

use std::path::PathBuf;

use tracing::warn;

use crate::config::Settings;
use crate::currency::{tidy_amount_text, CurrencyFormatter};
use crate::export::{write_export_file, ExportFormat};
use crate::services::{BudgetSession, BudgetTotals, LedgerCommand};

use super::widgets::TextInput;

/// A row of the ledger table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerRowRef {
    Category(usize),
    Subcategory(usize, usize),
}

impl LedgerRowRef {
    /// Index of the category this row belongs to
    pub fn category(&self) -> usize {
        match self {
            Self::Category(c) | Self::Subcategory(c, _) => *c,
        }
    }
}

/// What a text prompt is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Income,
    AddCategory,
    AddSubcategory(usize),
    EditValue(usize, usize),
    RenameSubcategory(usize, usize),
    Export,
}

impl PromptKind {
    /// Dialog title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Income => " Monthly Income ",
            Self::AddCategory => " Add Category ",
            Self::AddSubcategory(_) => " Add Subcategory ",
            Self::EditValue(_, _) => " Edit Value ",
            Self::RenameSubcategory(_, _) => " Rename Subcategory ",
            Self::Export => " Export ",
        }
    }

    /// Label shown in front of the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::AddCategory => "Title",
            Self::AddSubcategory(_) | Self::RenameSubcategory(_, _) => "Label",
            Self::EditValue(_, _) => "Value",
            Self::Export => "Format [path]",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Prompt(PromptKind),
    ConfirmDeleteCategory(usize),
}

/// Main application state
pub struct App<'a> {
    /// The budget being edited
    pub session: BudgetSession,

    /// Application settings
    pub settings: &'a Settings,

    /// Formatter built from the settings
    pub formatter: CurrencyFormatter,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the ledger table
    pub selected_row: usize,

    /// Text being typed into the open prompt
    pub input: TextInput,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(session: BudgetSession, settings: &'a Settings) -> Self {
        Self {
            session,
            settings,
            formatter: settings.formatter(),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_row: 0,
            input: TextInput::new(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Totals for the current ledger and income
    pub fn totals(&self) -> BudgetTotals {
        self.session.totals()
    }

    /// Every table row in display order: each category then its subcategories
    pub fn rows(&self) -> Vec<LedgerRowRef> {
        self.session
            .ledger()
            .categories()
            .iter()
            .enumerate()
            .flat_map(|(c, category)| {
                std::iter::once(LedgerRowRef::Category(c)).chain(
                    (0..category.subcategories.len()).map(move |s| LedgerRowRef::Subcategory(c, s)),
                )
            })
            .collect()
    }

    /// The row under the cursor
    pub fn selection(&self) -> Option<LedgerRowRef> {
        self.rows().get(self.selected_row).copied()
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let max = self.rows().len();
        if self.selected_row < max.saturating_sub(1) {
            self.selected_row += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_row = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_row = self.rows().len().saturating_sub(1);
    }

    /// Put the cursor on a specific row if it exists
    fn select(&mut self, row: LedgerRowRef) {
        if let Some(index) = self.rows().iter().position(|r| *r == row) {
            self.selected_row = index;
        }
    }

    /// Keep the cursor inside the table after rows disappear
    fn clamp_selection(&mut self) {
        let max = self.rows().len().saturating_sub(1);
        self.selected_row = self.selected_row.min(max);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if let ActiveDialog::Prompt(kind) = dialog {
            let initial = self.prompt_initial_text(kind);
            self.input = TextInput::new()
                .label(kind.label())
                .content(initial)
                .focused(true);
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input.clear();
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    fn prompt_initial_text(&self, kind: PromptKind) -> String {
        let ledger = self.session.ledger();
        match kind {
            PromptKind::Income => self.session.income_text().to_string(),
            PromptKind::EditValue(c, s) => ledger
                .subcategory(c, s)
                .map(|sub| sub.value.clone())
                .unwrap_or_default(),
            PromptKind::RenameSubcategory(c, s) => ledger
                .subcategory(c, s)
                .map(|sub| sub.label.clone())
                .unwrap_or_default(),
            PromptKind::Export => self.settings.default_export_format.to_string(),
            PromptKind::AddCategory | PromptKind::AddSubcategory(_) => String::new(),
        }
    }

    /// Open the value editor for the selected subcategory
    pub fn edit_selected_value(&mut self) {
        match self.selection() {
            Some(LedgerRowRef::Subcategory(c, s)) => {
                self.open_dialog(ActiveDialog::Prompt(PromptKind::EditValue(c, s)))
            }
            _ => self.set_status("Select a subcategory to edit its value"),
        }
    }

    /// Open the rename prompt for the selected subcategory
    pub fn rename_selected(&mut self) {
        match self.selection() {
            Some(LedgerRowRef::Subcategory(c, s)) => {
                self.open_dialog(ActiveDialog::Prompt(PromptKind::RenameSubcategory(c, s)))
            }
            _ => self.set_status("Select a subcategory to rename"),
        }
    }

    /// Open the add-subcategory prompt for the selected row's category
    pub fn add_subcategory_to_selected(&mut self) {
        match self.selection() {
            Some(row) => {
                self.open_dialog(ActiveDialog::Prompt(PromptKind::AddSubcategory(row.category())))
            }
            None => self.set_status("Add a category first"),
        }
    }

    /// Delete the selected subcategory, or ask before deleting a category
    pub fn delete_selected(&mut self) {
        match self.selection() {
            Some(LedgerRowRef::Category(c)) => {
                self.open_dialog(ActiveDialog::ConfirmDeleteCategory(c));
            }
            Some(LedgerRowRef::Subcategory(c, s)) => {
                if self
                    .session
                    .apply(LedgerCommand::DeleteSubcategory { category: c, sub: s })
                {
                    self.set_status("Subcategory deleted");
                }
                self.clamp_selection();
            }
            None => {}
        }
    }

    /// Confirm the pending delete
    pub fn confirm(&mut self) {
        if let ActiveDialog::ConfirmDeleteCategory(c) = self.active_dialog {
            if self
                .session
                .apply(LedgerCommand::DeleteCategory { category: c })
            {
                self.set_status("Category deleted");
            }
            self.clamp_selection();
        }
        self.close_dialog();
    }

    /// Apply what was typed into the open prompt and close it
    pub fn submit_prompt(&mut self) {
        let ActiveDialog::Prompt(kind) = self.active_dialog else {
            return;
        };
        let text = self.input.value().to_string();
        self.close_dialog();

        match kind {
            PromptKind::Income => {
                self.session.set_income(self.formatter.strip_symbol(&text));
                self.session.commit_income();
            }
            PromptKind::AddCategory => {
                if self.session.apply(LedgerCommand::AddCategory {
                    title: text,
                    description: None,
                }) {
                    let index = self.session.ledger().len() - 1;
                    self.select(LedgerRowRef::Category(index));
                } else {
                    self.set_status("Category title cannot be empty");
                }
            }
            PromptKind::AddSubcategory(c) => {
                if self.session.apply(LedgerCommand::AddSubcategory {
                    category: c,
                    label: text,
                }) {
                    let last = self
                        .session
                        .ledger()
                        .get(c)
                        .map_or(0, |cat| cat.subcategories.len().saturating_sub(1));
                    self.select(LedgerRowRef::Subcategory(c, last));
                }
            }
            PromptKind::EditValue(c, s) => {
                self.session.apply(LedgerCommand::SetValue {
                    category: c,
                    sub: s,
                    value: tidy_amount_text(&text),
                });
            }
            PromptKind::RenameSubcategory(c, s) => {
                self.session.apply(LedgerCommand::RenameSubcategory {
                    category: c,
                    sub: s,
                    label: text,
                });
            }
            PromptKind::Export => self.export(&text),
        }
    }

    /// Export using `format [path]` as typed into the export prompt
    fn export(&mut self, request: &str) {
        let request = request.trim();
        let (name, path) = request
            .split_once(char::is_whitespace)
            .map_or((request, ""), |(name, path)| (name, path.trim()));

        let format = match (!name.is_empty()).then_some(name) {
            Some(name) => match ExportFormat::from_name(name) {
                Some(format) => format,
                None => {
                    self.set_status(format!("Unknown export format: {}", name));
                    return;
                }
            },
            None => self.settings.default_export_format,
        };

        let output = if path.is_empty() {
            PathBuf::from(format.default_file_name())
        } else {
            PathBuf::from(path)
        };

        match write_export_file(format, &self.session, self.settings, &output) {
            Ok(()) => self.set_status(format!("Exported {} to {}", format, output.display())),
            Err(e) => {
                warn!(error = %e, "export failed");
                self.set_status(format!("Export failed: {}", e));
            }
        }
    }
}
