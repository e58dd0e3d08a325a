//! CLI command for the budget summary

use clap::Args;

use crate::config::Settings;
use crate::display::{format_budget_summary, format_ledger_table};
use crate::error::BudgetResult;

use super::edits::LedgerEdits;

/// Arguments for `budget summary`
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Also list every subcategory with its amount
    #[arg(long)]
    pub rows: bool,

    #[command(flatten)]
    pub edits: LedgerEdits,
}

/// Handle the summary command
pub fn handle_summary_command(settings: &Settings, args: SummaryArgs) -> BudgetResult<()> {
    let session = args.edits.build_session(settings)?;
    let formatter = settings.formatter();

    if args.rows {
        println!("{}", format_ledger_table(session.ledger(), &formatter));
        println!();
    }

    print!("{}", format_budget_summary(&session.totals(), &formatter));

    Ok(())
}
