//! Budget repository
//!
//! The `budgets.category` column is `UNIQUE COLLATE NOCASE`, so lookups by
//! category ignore ASCII case and a second row for the same category is
//! refused by the database itself.

use rusqlite::{ffi, params, Connection, OptionalExtension, Row};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, BudgetId, Money};

use super::next_row_id;

const SELECT_BUDGET: &str = "SELECT id, category, limit_cents FROM budgets";

/// Repository for budget persistence
#[derive(Debug, Clone, Copy)]
pub struct BudgetRepository;

impl BudgetRepository {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Budget> {
        Ok(Budget {
            id: row.get(0)?,
            category: row.get(1)?,
            monthly_limit: row.get(2)?,
        })
    }

    /// Id the next inserted budget will receive
    pub fn next_id(&self, conn: &Connection) -> LedgerResult<BudgetId> {
        Ok(BudgetId::new(next_row_id(conn, "budgets")?))
    }

    /// Insert a budget; a category that already has one is a conflict
    pub fn insert(&self, conn: &Connection, budget: &Budget) -> LedgerResult<()> {
        conn.execute(
            "INSERT INTO budgets (id, category, limit_cents) VALUES (?1, ?2, ?3)",
            params![budget.id, budget.category, budget.monthly_limit],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _) if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE => {
                LedgerError::budget_conflict(budget.category.clone())
            }
            other => other.into(),
        })?;
        Ok(())
    }

    /// Get the budget for a category, ignoring case
    pub fn get_by_category(&self, conn: &Connection, category: &str) -> LedgerResult<Option<Budget>> {
        Ok(conn
            .query_row(
                &format!("{} WHERE category = ?1", SELECT_BUDGET),
                [category],
                Self::from_row,
            )
            .optional()?)
    }

    /// All budgets in id order
    pub fn get_all(&self, conn: &Connection) -> LedgerResult<Vec<Budget>> {
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_BUDGET))?;
        let budgets = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(budgets)
    }

    /// Change the limit of an existing budget; false if the id is absent
    pub fn update_limit(&self, conn: &Connection, id: BudgetId, limit: Money) -> LedgerResult<bool> {
        let changed = conn.execute(
            "UPDATE budgets SET limit_cents = ?2 WHERE id = ?1",
            params![id, limit],
        )?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_storage;

    fn budget(conn: &Connection, category: &str, cents: i64) -> Budget {
        let repo = BudgetRepository;
        Budget::new(repo.next_id(conn).unwrap(), category, Money::from_cents(cents))
    }

    #[test]
    fn test_insert_and_lookup_ignores_case() {
        let storage = test_storage();
        let repo = storage.budgets;

        storage
            .with_transaction(|tx| {
                let food = budget(tx, "food", 30000);
                repo.insert(tx, &food)?;

                let found = repo.get_by_category(tx, "FOOD")?.unwrap();
                assert_eq!(found.category, "Food");
                assert_eq!(found.monthly_limit.cents(), 30000);
                assert!(repo.get_by_category(tx, "Housing")?.is_none());
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_duplicate_category_is_conflict() {
        let storage = test_storage();
        let repo = storage.budgets;

        let err = storage
            .with_transaction(|tx| {
                repo.insert(tx, &budget(tx, "Food", 100))?;
                repo.insert(tx, &budget(tx, "food", 200))
            })
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(storage.count_rows("budgets").unwrap(), 0);
    }

    #[test]
    fn test_update_limit() {
        let storage = test_storage();
        let repo = storage.budgets;

        storage
            .with_transaction(|tx| {
                let food = budget(tx, "Food", 100);
                repo.insert(tx, &food)?;
                assert!(repo.update_limit(tx, food.id, Money::from_cents(250))?);
                assert!(!repo.update_limit(tx, BudgetId::new(42), Money::zero())?);

                let all = repo.get_all(tx)?;
                assert_eq!(all.len(), 1);
                assert_eq!(all[0].monthly_limit.cents(), 250);
                Ok(())
            })
            .unwrap();
    }
}
