//! Goal service
//!
//! Savings goals and a snapshot of the ledger totals for judging progress
//! towards them.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::input::{parse_amount, parse_date, title_case};
use crate::models::{Goal, GoalField, GoalId, ProgressSnapshot};
use crate::storage::Storage;

use super::summary::SummaryService;

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

fn validated(goal: Goal) -> LedgerResult<Goal> {
    goal.validate()
        .map_err(|e| LedgerError::Validation(e.to_string()))?;
    Ok(goal)
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a goal
    pub fn add(&self, name: &str, target_date: &str, target_amount: &str) -> LedgerResult<Goal> {
        let target_date = parse_date(target_date)?;
        let target_amount = parse_amount(target_amount)?;
        let goals = self.storage.goals;

        let goal = self.storage.with_transaction(|tx| {
            let goal = validated(Goal::new(goals.next_id(tx)?, name, target_date, target_amount))?;
            goals.insert(tx, &goal)?;
            Ok(goal)
        })?;

        self.storage
            .log_create(EntityType::Goal, goal.id, Some(goal.name.clone()), &goal);

        Ok(goal)
    }

    /// All goals in creation order
    pub fn list(&self) -> LedgerResult<Vec<Goal>> {
        self.storage.with_transaction(|tx| self.storage.goals.get_all(tx))
    }

    pub fn get(&self, id: GoalId) -> LedgerResult<Goal> {
        self.storage
            .with_transaction(|tx| self.storage.goals.get(tx, id))?
            .ok_or_else(|| LedgerError::goal_not_found(id))
    }

    /// Change a single field of a goal
    pub fn update_field(&self, id: GoalId, field: GoalField, value: &str) -> LedgerResult<Goal> {
        let goals = self.storage.goals;

        let (before, after) = self.storage.with_transaction(|tx| {
            let before = goals
                .get(tx, id)?
                .ok_or_else(|| LedgerError::goal_not_found(id))?;

            let mut after = before.clone();
            match field {
                GoalField::Name => after.name = title_case(value),
                GoalField::TargetDate => after.target_date = parse_date(value)?,
                GoalField::TargetAmount => after.target_amount = parse_amount(value)?,
            }
            let after = validated(after)?;

            goals.update(tx, &after)?;
            Ok((before, after))
        })?;

        self.storage.log_update(
            EntityType::Goal,
            id,
            Some(after.name.clone()),
            &before,
            &after,
        );

        Ok(after)
    }

    /// Ledger totals as of `as_of`
    ///
    /// The totals are read live; `as_of` only labels the snapshot.
    pub fn progress_snapshot(&self, as_of: NaiveDate) -> LedgerResult<ProgressSnapshot> {
        let totals = SummaryService::new(self.storage).totals()?;
        Ok(ProgressSnapshot {
            as_of,
            total_expenses: totals.expenses,
            total_income: totals.income,
            net_income: totals.net,
        })
    }
}
