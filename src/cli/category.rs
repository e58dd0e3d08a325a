//! Category CLI commands
//!
//! Prints the ledger as a tree, or the details of a single category.

use clap::Args;

use crate::config::Settings;
use crate::display::category::{format_category_details, format_category_tree};
use crate::error::{BudgetError, BudgetResult};

use super::edits::LedgerEdits;

/// Arguments for `budget categories`
#[derive(Args, Debug, Clone)]
pub struct CategoryArgs {
    /// Show details for one category instead of the whole tree
    #[arg(long, value_name = "TITLE")]
    pub show: Option<String>,

    #[command(flatten)]
    pub edits: LedgerEdits,
}

/// Handle the categories command
pub fn handle_category_command(settings: &Settings, args: CategoryArgs) -> BudgetResult<()> {
    let session = args.edits.build_session(settings)?;
    let ledger = session.ledger();
    let formatter = settings.formatter();

    match args.show {
        Some(title) => {
            let category = ledger
                .find_category(&title)
                .and_then(|index| ledger.get(index))
                .ok_or_else(|| {
                    BudgetError::Validation(format!("Category not found: {}", title))
                })?;
            print!("{}", format_category_details(category, &formatter));
        }
        None => println!("{}", format_category_tree(ledger, &formatter)),
    }

    Ok(())
}
