//! Entry display formatting

use std::collections::BTreeSet;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Entry, LedgerKind};

use super::format_money;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format entries as a table
pub fn format_entry_list(kind: LedgerKind, entries: &[Entry], symbol: &str) -> String {
    if entries.is_empty() {
        return format!("No {} entries found.", kind.label().to_lowercase());
    }

    let rows = entries.iter().map(|entry| EntryRow {
        id: entry.id.value(),
        date: entry.date.to_string(),
        description: entry.description.clone(),
        category: entry.category.clone(),
        amount: format_money(entry.amount, symbol),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format a single entry
pub fn format_entry_details(entry: &Entry, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} #{}\n", entry.kind, entry.id));
    output.push_str(&format!("  Date:        {}\n", entry.date));
    output.push_str(&format!("  Description: {}\n", entry.description));
    output.push_str(&format!("  Category:    {}\n", entry.category));
    output.push_str(&format!("  Amount:      {}\n", format_money(entry.amount, symbol)));

    output
}

pub fn format_category_list(kind: LedgerKind, categories: &BTreeSet<String>) -> String {
    if categories.is_empty() {
        return format!("No {} categories found.", kind.label().to_lowercase());
    }

    let mut output = format!("{} categories:\n", kind);
    for category in categories {
        output.push_str(&format!("  {}\n", category));
    }
    output
}
