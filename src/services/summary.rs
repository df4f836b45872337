//! Summary service
//!
//! Derived totals across the expense and income collections.

use serde::Serialize;

use crate::error::LedgerResult;
use crate::models::Money;
use crate::storage::Storage;

use super::ledger::LedgerService;

/// Totals across both collections
///
/// `None` means the collection is empty; `net` is only present when both
/// totals are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub expenses: Option<Money>,
    pub income: Option<Money>,
    pub net: Option<Money>,
}

/// Service for ledger-wide totals
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn totals(&self) -> LedgerResult<Totals> {
        let expenses = LedgerService::expenses(self.storage).total()?;
        let income = LedgerService::income(self.storage).total()?;
        let net = match (income, expenses) {
            (Some(income), Some(expenses)) => Some(income - expenses),
            _ => None,
        };
        Ok(Totals {
            expenses,
            income,
            net,
        })
    }

    /// Income minus expenses, when both collections have entries
    pub fn net_income(&self) -> LedgerResult<Option<Money>> {
        Ok(self.totals()?.net)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{seed_demo_data, test_storage};

    #[test]
    fn test_empty_ledger_has_no_totals() {
        let storage = test_storage();
        let totals = SummaryService::new(&storage).totals().unwrap();

        assert_eq!(
            totals,
            Totals {
                expenses: None,
                income: None,
                net: None
            }
        );
    }

    #[test]
    fn test_seeded_totals() {
        let storage = test_storage();
        seed_demo_data(&storage).unwrap();
        let service = SummaryService::new(&storage);

        let totals = service.totals().unwrap();

        assert_eq!(totals.expenses, Some(Money::from_cents(12500)));
        assert_eq!(totals.income, Some(Money::from_cents(380000)));
        assert_eq!(service.net_income().unwrap(), Some(Money::from_cents(367500)));
    }

    #[test]
    fn test_net_can_be_negative() {
        let storage = test_storage();
        LedgerService::income(&storage)
            .add("2024-05-01", "Gift", "Other", "10")
            .unwrap();
        LedgerService::expenses(&storage)
            .add("2024-05-01", "Rent", "Housing", "800")
            .unwrap();

        let net = SummaryService::new(&storage).net_income().unwrap();

        assert_eq!(net, Some(Money::from_cents(-79000)));
    }
}
