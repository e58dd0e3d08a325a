use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};

use monthly_budget::cli::{
    handle_category_command, handle_export_command, handle_summary_command, CategoryArgs,
    ExportArgs, LedgerEdits, SummaryArgs,
};
use monthly_budget::config::{BudgetPaths, Settings};
use monthly_budget::logging::{init_cli_logging, init_file_logging, LOG_ENV};
use monthly_budget::models::DefaultCategory;
use monthly_budget::BudgetError;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based monthly budget planner",
    long_about = "Plan a month of spending: enter your income, fill in what each \
                  category costs, and see what is spent and what is left. \
                  Budgets can be exported as CSV, a printable summary, JSON or YAML."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui {
        #[command(flatten)]
        edits: LedgerEdits,
    },

    /// Print category totals, income, spent and left
    Summary(SummaryArgs),

    /// Export the budget to a file
    Export(ExportArgs),

    /// Print the categories as a tree
    #[command(alias = "cat")]
    Categories(CategoryArgs),

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui {
        edits: LedgerEdits::default(),
    }) {
        Commands::Tui { edits } => {
            if !std::io::stdout().is_terminal() {
                return Err(BudgetError::Tui(
                    "the interactive interface needs a terminal; try 'budget summary'".into(),
                )
                .into());
            }

            let session = edits.build_session(&settings)?;
            paths.ensure_directories()?;
            init_file_logging(&paths.log_file())?;
            monthly_budget::tui::run_tui(session, &settings)?;
        }
        Commands::Summary(args) => {
            init_cli_logging();
            handle_summary_command(&settings, args)?;
        }
        Commands::Export(args) => {
            init_cli_logging();
            handle_export_command(&settings, args)?;
        }
        Commands::Categories(args) => {
            init_cli_logging();
            handle_category_command(&settings, args)?;
        }
        Commands::Init => {
            println!("Initializing Monthly Budget at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!();
            println!("New budgets start with these categories:");
            for category in DefaultCategory::all() {
                println!("  - {}", category.outline());
            }
            println!();
            println!("Run 'budget' to open the planner.");
        }
        Commands::Config => {
            println!("Monthly Budget Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:       {}", settings.currency_symbol);
            println!("  Seed default ledger:   {}", settings.seed_defaults);
            println!("  Default export format: {}", settings.default_export_format);
            println!(
                "  Document layout:       {} lines/page, {} columns",
                settings.document.lines_per_page, settings.document.page_width
            );
            println!();
            println!("Set {} (e.g. 'debug') to change log verbosity.", LOG_ENV);
        }
    }

    Ok(())
}
