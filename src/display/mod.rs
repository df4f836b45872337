//! Display formatting for terminal output
//!
//! Renders ledger records as tables and money as currency strings. Nothing
//! here touches storage.

pub mod budget;
pub mod entry;
pub mod goal;

pub use budget::{format_budget_list, format_budget_outcome, format_evaluation, format_evaluations};
pub use entry::{format_category_list, format_entry_details, format_entry_list};
pub use goal::{format_goal_list, format_progress};

use crate::models::Money;

/// Text shown for a total over an empty collection
pub const UNAVAILABLE: &str = "unavailable";

/// Format an amount with the configured currency symbol
pub fn format_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format an optional total, printing [`UNAVAILABLE`] for `None`
pub fn format_total(amount: Option<Money>, symbol: &str) -> String {
    amount
        .map(|a| format_money(a, symbol))
        .unwrap_or_else(|| UNAVAILABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(Some(Money::from_cents(3000)), "£"), "£30.00");
        assert_eq!(format_total(Some(Money::from_cents(-150)), "$"), "-$1.50");
        assert_eq!(format_total(None, "£"), "unavailable");
    }
}
