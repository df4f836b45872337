use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;

use ledger::cli::{
    handle_budget_command, handle_entry_command, handle_goal_command, handle_history_command,
    handle_summary_command, BudgetCommands, EntryCommands, GoalCommands,
};
use ledger::config::{paths::LedgerPaths, settings::Settings};
use ledger::models::LedgerKind;
use ledger::storage::{seed_demo_data, Storage};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal-based personal finance ledger",
    long_about = "Ledger records expenses, income, monthly category budgets and \
                  savings goals in a local SQLite database, and reports totals \
                  and budget status from the command line."
)]
struct Cli {
    /// Directory holding the database, settings and audit log
    #[arg(long, global = true, env = "LEDGER_CLI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(EntryCommands),

    /// Income management commands
    #[command(subcommand, alias = "inc")]
    Income(EntryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show total expenses, total income and net income
    Summary,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Create the database and seed demonstration data
    Init,

    /// Show current configuration and paths
    Config,
}

/// Open the database, creating the schema and seeding when enabled
fn open_storage(paths: &LedgerPaths, settings: &Settings) -> Result<Storage> {
    let mut storage = Storage::open_paths(paths)?;
    if settings.audit_enabled {
        storage = storage.with_audit_log(paths.audit_log());
    }

    storage.initialize()?;
    if settings.seed_demo_data {
        let report = seed_demo_data(&storage)?;
        debug!("Seeded {} rows", report.total());
    }

    Ok(storage)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let storage = open_storage(&paths, &settings)?;
            handle_entry_command(&storage, &settings, LedgerKind::Expense, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            let storage = open_storage(&paths, &settings)?;
            handle_entry_command(&storage, &settings, LedgerKind::Income, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let storage = open_storage(&paths, &settings)?;
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            let storage = open_storage(&paths, &settings)?;
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Summary) => {
            let storage = open_storage(&paths, &settings)?;
            handle_summary_command(&storage, &settings)?;
        }
        Some(Commands::History { count }) => {
            let storage = open_storage(&paths, &settings)?;
            handle_history_command(&storage, count)?;
        }
        Some(Commands::Init) => {
            println!("Initializing ledger at: {}", paths.base_dir().display());
            let storage = Storage::open_paths(&paths)?;
            storage.initialize()?;
            settings.save(&paths)?;

            if settings.seed_demo_data {
                let report = seed_demo_data(&storage)?;
                if report.is_empty() {
                    println!("Existing data found; nothing seeded.");
                } else {
                    println!("Demonstration data added:");
                    println!("  - {} expenses", report.expenses);
                    println!("  - {} income entries", report.income);
                    println!("  - {} budgets", report.budgets);
                    println!("  - {} goals", report.goals);
                }
            }

            println!("Initialization complete!");
            println!();
            println!("Run 'ledger expense list' to see your expenses.");
        }
        Some(Commands::Config) => {
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Database:       {}", paths.database_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Seed demo data:   {}", settings.seed_demo_data);
            println!("  Audit logging:    {}", settings.audit_enabled);
        }
        None => {
            println!("Ledger - terminal-based personal finance ledger");
            println!();
            println!("Run 'ledger --help' for usage information.");
        }
    }

    Ok(())
}
