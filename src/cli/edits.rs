//! Session edits shared by the non-interactive commands
//!
//! Budget data lives only for one run, so `summary`, `export` and
//! `categories` build their session from flags: an income, extra categories,
//! values to set and entries to drop.

use clap::Args;
use tracing::warn;

use crate::config::Settings;
use crate::currency::tidy_amount_text;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Ledger;
use crate::services::{BudgetSession, LedgerCommand};

/// Flags that shape the session before a command runs
#[derive(Args, Debug, Clone, Default)]
pub struct LedgerEdits {
    /// Monthly income, e.g. "$3,200.00"
    #[arg(short, long)]
    pub income: Option<String>,

    /// Start from an empty ledger instead of the default categories
    #[arg(long)]
    pub empty: bool,

    /// Add a category (repeatable)
    #[arg(long = "add-category", value_name = "TITLE")]
    pub add_category: Vec<String>,

    /// Set a value, creating the category or subcategory if missing (repeatable)
    ///
    /// The value is tidied the same way the editor tidies it on commit.
    #[arg(short, long, value_name = "CATEGORY/SUBCATEGORY=VALUE")]
    pub set: Vec<String>,

    /// Remove a category or one of its subcategories (repeatable)
    #[arg(long, value_name = "CATEGORY[/SUBCATEGORY]")]
    pub drop: Vec<String>,
}

/// A parsed `--set` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetValue {
    pub category: String,
    pub subcategory: String,
    pub value: String,
}

/// A parsed `--drop` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub category: String,
    pub subcategory: Option<String>,
}

impl SetValue {
    pub fn parse(arg: &str) -> BudgetResult<Self> {
        let (path, value) = arg.split_once('=').ok_or_else(|| {
            BudgetError::Validation(format!(
                "Invalid --set '{}': expected CATEGORY/SUBCATEGORY=VALUE",
                arg
            ))
        })?;

        let (category, subcategory) = split_path(path)
            .filter(|(_, sub)| sub.is_some())
            .ok_or_else(|| {
                BudgetError::Validation(format!(
                    "Invalid --set '{}': expected CATEGORY/SUBCATEGORY=VALUE",
                    arg
                ))
            })?;

        Ok(Self {
            category,
            subcategory: subcategory.unwrap_or_default(),
            value: value.trim().to_string(),
        })
    }
}

impl DropTarget {
    pub fn parse(arg: &str) -> BudgetResult<Self> {
        let (category, subcategory) = split_path(arg).ok_or_else(|| {
            BudgetError::Validation(format!(
                "Invalid --drop '{}': expected CATEGORY or CATEGORY/SUBCATEGORY",
                arg
            ))
        })?;

        Ok(Self {
            category,
            subcategory,
        })
    }
}

/// Split `Category[/Subcategory]`; both parts must be non-blank when present
fn split_path(path: &str) -> Option<(String, Option<String>)> {
    let (category, subcategory) = match path.split_once('/') {
        Some((category, sub)) => (category.trim(), Some(sub.trim())),
        None => (path.trim(), None),
    };

    if category.is_empty() || subcategory.is_some_and(str::is_empty) {
        return None;
    }

    Some((category.to_string(), subcategory.map(str::to_string)))
}

impl LedgerEdits {
    /// Build the session these flags describe
    ///
    /// Every argument is parsed before anything is applied, so a malformed
    /// flag never leaves a half-edited session behind.
    pub fn build_session(&self, settings: &Settings) -> BudgetResult<BudgetSession> {
        let sets = self
            .set
            .iter()
            .map(|arg| SetValue::parse(arg))
            .collect::<BudgetResult<Vec<_>>>()?;
        let drops = self
            .drop
            .iter()
            .map(|arg| DropTarget::parse(arg))
            .collect::<BudgetResult<Vec<_>>>()?;

        let mut session = if settings.seed_defaults && !self.empty {
            BudgetSession::new()
        } else {
            BudgetSession::with_ledger(Ledger::new())
        };

        for title in &self.add_category {
            if !session.apply(LedgerCommand::AddCategory {
                title: title.clone(),
                description: None,
            }) {
                warn!(title = %title, "skipping blank category title");
            }
        }

        for set in sets {
            apply_set(&mut session, set);
        }

        for target in drops {
            apply_drop(&mut session, target);
        }

        if let Some(income) = &self.income {
            session.set_income(settings.formatter().strip_symbol(income));
            session.commit_income();
        }

        Ok(session)
    }
}

fn apply_set(session: &mut BudgetSession, set: SetValue) {
    let category = match session.ledger().find_category(&set.category) {
        Some(index) => index,
        None => {
            session.apply(LedgerCommand::AddCategory {
                title: set.category.clone(),
                description: None,
            });
            session.ledger().len() - 1
        }
    };

    let sub = match session
        .ledger()
        .get(category)
        .and_then(|c| c.find_subcategory(&set.subcategory))
    {
        Some(index) => index,
        None => {
            session.apply(LedgerCommand::AddSubcategory {
                category,
                label: set.subcategory.clone(),
            });
            session
                .ledger()
                .get(category)
                .map_or(0, |c| c.subcategories.len().saturating_sub(1))
        }
    };

    session.apply(LedgerCommand::SetValue {
        category,
        sub,
        value: tidy_amount_text(&set.value),
    });
}

fn apply_drop(session: &mut BudgetSession, target: DropTarget) {
    let Some(category) = session.ledger().find_category(&target.category) else {
        warn!(category = %target.category, "no such category to drop");
        return;
    };

    let Some(label) = target.subcategory else {
        session.apply(LedgerCommand::DeleteCategory { category });
        return;
    };

    match session
        .ledger()
        .get(category)
        .and_then(|c| c.find_subcategory(&label))
    {
        Some(sub) => {
            session.apply(LedgerCommand::DeleteSubcategory { category, sub });
        }
        None => warn!(
            category = %target.category,
            subcategory = %label,
            "no such subcategory to drop"
        ),
    }
}
