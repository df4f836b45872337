//! Summary and history commands

use crate::config::settings::Settings;
use crate::display::format_total;
use crate::error::LedgerResult;
use crate::services::SummaryService;
use crate::storage::Storage;

/// Print ledger-wide totals
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let totals = SummaryService::new(storage).totals()?;

    println!("Ledger Summary");
    println!("==============");
    println!("Total expenses: {}", format_total(totals.expenses, symbol));
    println!("Total income:   {}", format_total(totals.income, symbol));
    println!("Net income:     {}", format_total(totals.net, symbol));

    Ok(())
}

/// Print the most recent audit log entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> LedgerResult<()> {
    let Some(logger) = storage.audit_logger() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }

    Ok(())
}
