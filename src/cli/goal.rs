//! Goal CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_goal_list, format_progress};
use crate::error::LedgerResult;
use crate::models::{GoalField, GoalId};
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target date (YYYY-MM-DD)
        target_date: String,
        /// Target amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List all goals
    List,
    /// Change one field of a goal
    Edit {
        /// Goal ID
        id: GoalId,
        /// Field to change: name, target-date or target-amount
        #[arg(short, long)]
        field: GoalField,
        /// New value
        #[arg(short, long, allow_hyphen_values = true)]
        value: String,
    },
    /// Show current totals alongside the goals
    Progress,
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> LedgerResult<()> {
    let service = GoalService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        GoalCommands::Add {
            name,
            target_date,
            amount,
        } => {
            let goal = service.add(&name, &target_date, &amount)?;
            println!(
                "Added goal #{}: {} by {} ({})",
                goal.id,
                goal.name,
                goal.target_date,
                goal.target_amount.format_with_symbol(symbol)
            );
        }
        GoalCommands::List => {
            println!("{}", format_goal_list(&service.list()?, symbol));
        }
        GoalCommands::Edit { id, field, value } => {
            let goal = service.update_field(id, field, &value)?;
            println!("Updated {} of goal #{}", field, goal.id);
            println!("{}", format_goal_list(std::slice::from_ref(&goal), symbol));
        }
        GoalCommands::Progress => {
            let snapshot = service.progress_snapshot(Local::now().date_naive())?;
            print!("{}", format_progress(&snapshot, &service.list()?, symbol));
        }
    }

    Ok(())
}
