//! JSON Export functionality
//!
//! Snapshots the session (ledger, income and computed totals) with schema
//! versioning, so other tools can read a budget without recomputing it.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::models::{Category, LedgerRow};
use crate::services::{BudgetSession, BudgetTotals};

use super::export_error;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full session export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub currency_symbol: String,

    /// Income as entered, after coercion
    pub income: f64,

    pub totals: BudgetTotals,

    /// Categories in ledger order, values as typed
    pub categories: Vec<Category>,

    /// Flattened rows with coerced amounts
    pub rows: Vec<LedgerRow>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub category_count: usize,
    pub subcategory_count: usize,

    /// Categories with no subcategories
    pub empty_category_count: usize,
}

impl BudgetExport {
    /// Build an export from the current session
    pub fn from_session(session: &BudgetSession, settings: &Settings) -> Self {
        let ledger = session.ledger();

        let metadata = ExportMetadata {
            category_count: ledger.len(),
            subcategory_count: ledger.subcategory_count(),
            empty_category_count: ledger.categories().iter().filter(|c| c.is_empty()).count(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency_symbol: settings.currency_symbol.clone(),
            income: session.income(),
            totals: session.totals(),
            categories: ledger.categories().to_vec(),
            rows: ledger.rows(),
            metadata,
        }
    }
}

/// Export the session to JSON format
pub fn export_json<W: Write>(
    session: &BudgetSession,
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let export = BudgetExport::from_session(session, settings);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)?;
    } else {
        serde_json::to_writer(&mut *writer, &export)?;
    }
    writeln!(writer).map_err(export_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::LedgerCommand;

    fn sample_session() -> BudgetSession {
        let mut session = BudgetSession::new();
        session.set_income("$2,000");
        session.apply(LedgerCommand::SetValue {
            category: 0,
            sub: 0,
            value: "1200".into(),
        });
        session.apply(LedgerCommand::AddCategory {
            title: "Gifts".into(),
            description: None,
        });
        session
    }

    #[test]
    fn test_export_json() {
        let session = sample_session();
        let mut out = Vec::new();
        export_json(&session, &Settings::default(), &mut out, true).unwrap();

        let export: BudgetExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.currency_symbol, "$");
        assert_eq!(export.income, 2000.0);
        assert_eq!(export.totals.spent, 1200.0);
        assert_eq!(export.totals.remaining, 800.0);
        assert_eq!(export.categories.len(), 6);
        assert_eq!(export.rows.len(), 7);
        assert_eq!(
            export.metadata,
            ExportMetadata {
                category_count: 6,
                subcategory_count: 7,
                empty_category_count: 3,
            }
        );
    }

    #[test]
    fn test_export_json_compact() {
        let session = sample_session();
        let mut out = Vec::new();
        export_json(&session, &Settings::default(), &mut out, false).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"Amount\":1200.0"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_export_json_write_failure() {
        let err = export_json(&sample_session(), &Settings::default(), &mut BrokenPipe, true)
            .unwrap_err();
        assert!(matches!(err, crate::error::BudgetError::Json(_)));
    }
}
