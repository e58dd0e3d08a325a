//! CLI command for data export
//!
//! Writes the session built from the edit flags in any export format.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::export::{export_error, write_export, write_export_file, ExportFormat};

use super::edits::LedgerEdits;

/// Arguments for `budget export`
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path ("-" for stdout; defaults to a name per format)
    pub output: Option<PathBuf>,

    /// Export format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    #[command(flatten)]
    pub edits: LedgerEdits,
}

/// Handle the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> BudgetResult<()> {
    let session = args.edits.build_session(settings)?;
    let format = args.format.unwrap_or(settings.default_export_format);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format.default_file_name()));

    if output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        write_export(format, &session, settings, &mut writer)?;
        writer.flush().map_err(export_error)?;
        return Ok(());
    }

    write_export_file(format, &session, settings, &output)?;
    println!("Budget exported ({}) to: {}", format, output.display());

    Ok(())
}
