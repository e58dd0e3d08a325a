//! User settings for the budget planner
//!
//! Preferences only: currency symbol, whether sessions start with the default
//! categories, and export defaults. Budget data is never written here.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::currency::CurrencyFormatter;
use crate::error::BudgetError;
use crate::export::ExportFormat;

/// Layout settings for the plain-text summary document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSettings {
    /// Lines per page before a page break is inserted
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,

    /// Width used to center the title and right-align amounts
    #[serde(default = "default_page_width")]
    pub page_width: usize,
}

fn default_lines_per_page() -> usize {
    48
}

fn default_page_width() -> usize {
    64
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            lines_per_page: default_lines_per_page(),
            page_width: default_page_width(),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Start each session with the default categories
    #[serde(default = "default_seed")]
    pub seed_defaults: bool,

    /// Format used when none is given on the command line
    #[serde(default)]
    pub default_export_format: ExportFormat,

    #[serde(default)]
    pub document: DocumentSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            seed_defaults: default_seed(),
            default_export_format: ExportFormat::default(),
            document: DocumentSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BudgetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Formatter using the configured currency symbol
    pub fn formatter(&self) -> CurrencyFormatter {
        CurrencyFormatter::new(self.currency_symbol.clone())
    }
}
