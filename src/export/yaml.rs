//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a form that is easier to read.

use std::io::Write;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::services::BudgetSession;

use super::export_error;
use super::json::BudgetExport;

/// Export the session to YAML format
pub fn export_yaml<W: Write>(
    session: &BudgetSession,
    settings: &Settings,
    writer: &mut W,
) -> BudgetResult<()> {
    let export = BudgetExport::from_session(session, settings);

    writeln!(writer, "# Monthly Budget Export").map_err(export_error)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_error)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(&mut *writer, &export)?;

    Ok(())
}
