//! Export module for the budget planner
//!
//! Every exporter reads the ledger without changing it and writes to any
//! `std::io::Write`:
//! - CSV: flat Category/Subcategory/Amount rows
//! - Sheet: spreadsheet-style layout with a title and category blocks
//! - Document: printable plain-text summary
//! - JSON / YAML: full snapshot including totals

pub mod csv;
pub mod document;
pub mod json;
pub mod yaml;

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::services::BudgetSession;

pub use self::csv::{export_rows_csv, export_sheet_csv};
pub use document::export_document;
pub use json::{export_json, BudgetExport, ExportMetadata, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Flat CSV rows (Category, Subcategory, Amount)
    #[default]
    Csv,
    /// Spreadsheet layout CSV with a title row and category blocks
    Sheet,
    /// Printable plain-text summary
    Document,
    /// JSON snapshot with totals
    Json,
    /// YAML snapshot with totals (human-readable)
    Yaml,
}

impl ExportFormat {
    /// Get all formats in menu order
    pub fn all() -> &'static [Self] {
        &[Self::Csv, Self::Sheet, Self::Document, Self::Json, Self::Yaml]
    }

    /// File name used when no output path is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::Csv => "budget-export.csv",
            Self::Sheet => "budget-sheet.csv",
            Self::Document => "budget-summary.txt",
            Self::Json => "budget-export.json",
            Self::Yaml => "budget-export.yaml",
        }
    }

    /// Parse a format name as typed in the TUI export prompt
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|format| format.to_string().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Csv => "csv",
            Self::Sheet => "sheet",
            Self::Document => "document",
            Self::Json => "json",
            Self::Yaml => "yaml",
        };
        write!(f, "{}", name)
    }
}

/// Write a session in the given format
pub fn write_export<W: Write>(
    format: ExportFormat,
    session: &BudgetSession,
    settings: &Settings,
    writer: &mut W,
) -> BudgetResult<()> {
    let ledger = session.ledger();
    match format {
        ExportFormat::Csv => export_rows_csv(ledger, writer),
        ExportFormat::Sheet => export_sheet_csv(ledger, writer),
        ExportFormat::Document => {
            export_document(ledger, &settings.formatter(), &settings.document, writer)
        }
        ExportFormat::Json => export_json(session, settings, writer, true),
        ExportFormat::Yaml => export_yaml(session, settings, writer),
    }
}

/// Write a session to a file, creating or truncating it
pub fn write_export_file(
    format: ExportFormat,
    session: &BudgetSession,
    settings: &Settings,
    output: &Path,
) -> BudgetResult<()> {
    let file = File::create(output).map_err(|e| {
        BudgetError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    write_export(format, session, settings, &mut writer)?;
    writer.flush().map_err(export_error)?;

    info!(%format, path = %output.display(), "budget exported");
    Ok(())
}

/// Wrap a writer failure as an export error
pub(crate) fn export_error(err: impl fmt::Display) -> BudgetError {
    BudgetError::Export(err.to_string())
}
