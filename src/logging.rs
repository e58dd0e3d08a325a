//! Tracing setup
//!
//! The CLI logs to stderr. The TUI owns the terminal, so it logs to a file in
//! the config directory instead. Verbosity comes from `BUDGET_LOG` using the
//! usual `EnvFilter` directive syntax.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{BudgetError, BudgetResult};

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "BUDGET_LOG";

const DEFAULT_FILTER: &str = "warn";

static LOGGING_INIT: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr
pub fn init_cli_logging() {
    LOGGING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Append log output to a file
pub fn init_file_logging(path: &Path) -> BudgetResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BudgetError::Io(format!("Failed to open log file {}: {}", path.display(), e)))?;

    LOGGING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_logging_reports_bad_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("budget.log");

        let err = init_file_logging(&path).unwrap_err();
        assert!(matches!(err, BudgetError::Io(_)));
    }

    #[test]
    fn test_logging_init_is_idempotent() {
        init_cli_logging();
        init_cli_logging();
        tracing::debug!("still running");
    }
}
