//! Budget CLI commands
//!
//! Implements CLI commands for setting category limits and checking a
//! month's spending against them.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_list, format_budget_outcome, format_evaluation, format_evaluations};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetPeriod, ConflictPolicy};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::confirm;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit for a category
    Set {
        /// Category name
        category: String,
        /// Monthly limit (e.g., "300" or "99.99")
        #[arg(allow_hyphen_values = true)]
        limit: String,
        /// Replace an existing limit without asking
        #[arg(long, conflicts_with = "keep")]
        replace: bool,
        /// Keep an existing limit without asking
        #[arg(long)]
        keep: bool,
    },

    /// Show one category's spending against its limit
    Show {
        /// Category name
        category: String,
        /// Month to check (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List all budgets
    List,

    /// Show every budget's status for a month
    Status {
        /// Month to check (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

fn parse_month(month: Option<&str>) -> LedgerResult<BudgetPeriod> {
    match month {
        Some(month) => BudgetPeriod::parse(month)
            .map_err(|e| LedgerError::Validation(format!("Invalid month: {}", e))),
        None => Ok(BudgetPeriod::current_month()),
    }
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            replace,
            keep,
        } => {
            let outcome = if replace || keep {
                let policy = if replace {
                    ConflictPolicy::Overwrite
                } else {
                    ConflictPolicy::Keep
                };
                service.set(&category, &limit, policy)?
            } else {
                service.set_with(&category, &limit, |existing| {
                    println!(
                        "A budget for {} already exists ({} per month).",
                        existing.category,
                        existing.monthly_limit.format_with_symbol(symbol)
                    );
                    Ok(if confirm("Replace it? (y/N) ")? {
                        ConflictPolicy::Overwrite
                    } else {
                        ConflictPolicy::Keep
                    })
                })?
            };

            println!("{}", format_budget_outcome(&outcome, symbol));
        }

        BudgetCommands::Show { category, month } => {
            let period = parse_month(month.as_deref())?;
            let eval = service.evaluate(&category, period)?;
            print!("{}", format_evaluation(&eval, symbol));
        }

        BudgetCommands::List => {
            let budgets = service.list()?;
            println!("{}", format_budget_list(&budgets, symbol));
        }

        BudgetCommands::Status { month } => {
            let period = parse_month(month.as_deref())?;
            let evals = service.evaluate_all(period)?;
            println!("{}", format_evaluations(period, &evals, symbol));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        let period = parse_month(Some("2024-05")).unwrap();
        assert_eq!((period.year(), period.month()), (2024, 5));
        assert!(parse_month(Some("2024-13")).unwrap_err().is_validation());
        assert!(parse_month(None).is_ok());
    }
}
