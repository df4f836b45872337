//! Goal repository

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::LedgerResult;
use crate::models::{Goal, GoalId};

use super::next_row_id;

const SELECT_GOAL: &str = "SELECT id, name, target_date, target_cents FROM goals";

/// Repository for goal persistence
#[derive(Debug, Clone, Copy)]
pub struct GoalRepository;

impl GoalRepository {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Goal> {
        Ok(Goal {
            id: row.get(0)?,
            name: row.get(1)?,
            target_date: row.get(2)?,
            target_amount: row.get(3)?,
        })
    }

    pub fn next_id(&self, conn: &Connection) -> LedgerResult<GoalId> {
        Ok(GoalId::new(next_row_id(conn, "goals")?))
    }

    pub fn insert(&self, conn: &Connection, goal: &Goal) -> LedgerResult<()> {
        conn.execute(
            "INSERT INTO goals (id, name, target_date, target_cents) VALUES (?1, ?2, ?3, ?4)",
            params![goal.id, goal.name, goal.target_date, goal.target_amount],
        )?;
        Ok(())
    }

    pub fn get(&self, conn: &Connection, id: GoalId) -> LedgerResult<Option<Goal>> {
        Ok(conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_GOAL), [id], Self::from_row)
            .optional()?)
    }

    /// All goals in id order
    pub fn get_all(&self, conn: &Connection) -> LedgerResult<Vec<Goal>> {
        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_GOAL))?;
        let goals = stmt
            .query_map([], Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(goals)
    }

    /// Overwrite every field of an existing goal; false if the id is absent
    pub fn update(&self, conn: &Connection, goal: &Goal) -> LedgerResult<bool> {
        let changed = conn.execute(
            "UPDATE goals SET name = ?2, target_date = ?3, target_cents = ?4 WHERE id = ?1",
            params![goal.id, goal.name, goal.target_date, goal.target_amount],
        )?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::test_storage;
    use chrono::NaiveDate;

    #[test]
    fn test_insert_get_update() {
        let storage = test_storage();
        let repo = storage.goals;

        storage
            .with_transaction(|tx| {
                let mut goal = Goal::new(
                    repo.next_id(tx)?,
                    "new car",
                    NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
                    Money::from_cents(2_000_000),
                );
                repo.insert(tx, &goal)?;
                assert_eq!(repo.get(tx, goal.id)?.as_ref(), Some(&goal));
                assert_eq!(repo.next_id(tx)?, goal.id.next());

                goal.target_amount = Money::from_cents(2_500_000);
                assert!(repo.update(tx, &goal)?);
                assert_eq!(repo.get_all(tx)?, vec![goal]);
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_missing_goal() {
        let storage = test_storage();
        let repo = storage.goals;

        storage
            .with_transaction(|tx| {
                assert!(repo.get(tx, GoalId::new(7))?.is_none());
                assert!(repo.get_all(tx)?.is_empty());
                Ok(())
            })
            .unwrap();
    }
}
