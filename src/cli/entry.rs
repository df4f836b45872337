//! Expense and income CLI commands
//!
//! Both collections take the same subcommands; the handler is told which
//! collection it is driving.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_category_list, format_entry_details, format_entry_list, format_total,
};
use crate::error::LedgerResult;
use crate::models::{EntryField, EntryId, LedgerKind};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Expense/income subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Record a new entry
    Add {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Description
        description: String,
        /// Category name
        category: String,
        /// Amount (e.g., "50" or "42.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// List all entries
    List,
    /// Show one entry
    Show {
        /// Entry ID
        id: EntryId,
    },
    /// Change one field of an entry
    Edit {
        /// Entry ID
        id: EntryId,
        /// Field to change: date, description, category or amount
        #[arg(short, long)]
        field: EntryField,
        /// New value
        #[arg(short, long, allow_hyphen_values = true)]
        value: String,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: EntryId,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// List the categories in use
    Categories,
    /// List the entries in one category
    Category {
        /// Category name
        name: String,
    },
    /// Move every entry in one category to another
    RenameCategory {
        /// Current category name
        old: String,
        /// New category name
        new: String,
    },
    /// Show the sum of all entries
    Total,
}

/// Handle an expense or income command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    kind: LedgerKind,
    cmd: EntryCommands,
) -> LedgerResult<()> {
    let service = LedgerService::new(storage, kind);
    let symbol = settings.currency_symbol.as_str();
    let label = kind.label().to_lowercase();

    match cmd {
        EntryCommands::Add {
            date,
            description,
            category,
            amount,
        } => {
            let entry = service.add(&date, &description, &category, &amount)?;
            println!("Added {} #{}", label, entry.id);
            print!("{}", format_entry_details(&entry, symbol));
        }

        EntryCommands::List => {
            let entries = service.list()?;
            println!("{}", format_entry_list(kind, &entries, symbol));
        }

        EntryCommands::Show { id } => {
            let entry = service.get(id)?;
            print!("{}", format_entry_details(&entry, symbol));
        }

        EntryCommands::Edit { id, field, value } => {
            let entry = service.update_field(id, field, &value)?;
            println!("Updated {} of {} #{}", field, label, entry.id);
            print!("{}", format_entry_details(&entry, symbol));
        }

        EntryCommands::Delete { id, yes } => {
            let entry = service.get(id)?;

            if !yes {
                println!("About to delete {}:", label);
                print!("{}", format_entry_details(&entry, symbol));
                println!();
                println!("Use --yes to confirm deletion");
                return Ok(());
            }

            let removed = service.delete(id)?;
            println!(
                "Deleted {} #{}: {} ({})",
                label,
                removed.id,
                removed.description,
                removed.amount.format_with_symbol(symbol)
            );
        }

        EntryCommands::Categories => {
            let categories = service.list_categories()?;
            print!("{}", format_category_list(kind, &categories));
        }

        EntryCommands::Category { name } => {
            let entries = service.filter_by_category(&name)?;
            println!("{}", format_entry_list(kind, &entries, symbol));
        }

        EntryCommands::RenameCategory { old, new } => {
            let count = service.rename_category(&old, &new)?;
            if count == 0 {
                println!("No {} entries in category '{}'", label, old);
            } else {
                println!("Moved {} {} entries from '{}' to '{}'", count, label, old, new);
            }
        }

        EntryCommands::Total => {
            let total = service.total()?;
            println!("Total {}: {}", label, format_total(total, symbol));
        }
    }

    Ok(())
}

