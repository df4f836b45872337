//! Budget service
//!
//! Setting per-category monthly limits and measuring a month's spending
//! against them.

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::input::{normalize_category, parse_amount};
use crate::models::{Budget, BudgetEvaluation, BudgetPeriod, BudgetSetOutcome, ConflictPolicy};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the monthly limit for a category
    ///
    /// A category without a budget gets a new one. For a category that
    /// already has one, `policy` decides: `Reject` fails with a conflict,
    /// `Overwrite` replaces the limit and `Keep` leaves it as it was.
    pub fn set(
        &self,
        category: &str,
        monthly_limit: &str,
        policy: ConflictPolicy,
    ) -> LedgerResult<BudgetSetOutcome> {
        self.set_with(category, monthly_limit, |_| Ok(policy))
    }

    /// Like [`set`], but `decide` picks the policy after seeing the budget
    /// already stored for the category
    ///
    /// `decide` is only called on a conflict, inside the same transaction as
    /// the lookup and the write. An error from it aborts with nothing stored.
    ///
    /// [`set`]: Self::set
    pub fn set_with<F>(
        &self,
        category: &str,
        monthly_limit: &str,
        decide: F,
    ) -> LedgerResult<BudgetSetOutcome>
    where
        F: FnOnce(&Budget) -> LedgerResult<ConflictPolicy>,
    {
        let category = normalize_category(category)?;
        let limit = parse_amount(monthly_limit)?;
        let budgets = self.storage.budgets;

        let outcome = self.storage.with_transaction(|tx| {
            let Some(existing) = budgets.get_by_category(tx, &category)? else {
                let budget = Budget::new(budgets.next_id(tx)?, &category, limit);
                budget
                    .validate()
                    .map_err(|e| LedgerError::Validation(e.to_string()))?;
                budgets.insert(tx, &budget)?;
                return Ok(BudgetSetOutcome::Created(budget));
            };

            match decide(&existing)? {
                ConflictPolicy::Reject => Err(LedgerError::budget_conflict(existing.category)),
                ConflictPolicy::Keep => Ok(BudgetSetOutcome::Kept(existing)),
                ConflictPolicy::Overwrite => {
                    let mut after = existing.clone();
                    after.set_limit(limit);
                    budgets.update_limit(tx, after.id, limit)?;
                    Ok(BudgetSetOutcome::Replaced {
                        before: existing,
                        after,
                    })
                }
            }
        })?;

        match &outcome {
            BudgetSetOutcome::Created(budget) => self.storage.log_create(
                EntityType::Budget,
                budget.id,
                Some(budget.category.clone()),
                budget,
            ),
            BudgetSetOutcome::Replaced { before, after } => self.storage.log_update(
                EntityType::Budget,
                after.id,
                Some(after.category.clone()),
                before,
                after,
            ),
            BudgetSetOutcome::Kept(_) => {}
        }

        Ok(outcome)
    }

    /// Get the budget for a category (case-insensitive)
    pub fn get(&self, category: &str) -> LedgerResult<Budget> {
        let category = normalize_category(category)?;
        self.storage
            .with_transaction(|tx| self.storage.budgets.get_by_category(tx, &category))?
            .ok_or_else(|| LedgerError::budget_not_found(category))
    }

    /// All budgets in creation order
    pub fn list(&self) -> LedgerResult<Vec<Budget>> {
        self.storage
            .with_transaction(|tx| self.storage.budgets.get_all(tx))
    }

    /// Compare a category's spending in `period` with its limit
    ///
    /// Spending is the sum of expenses whose category matches ignoring case
    /// and whose date falls in the period; zero when there are none.
    pub fn evaluate(&self, category: &str, period: BudgetPeriod) -> LedgerResult<BudgetEvaluation> {
        let category = normalize_category(category)?;
        self.storage.with_transaction(|tx| {
            let budget = self
                .storage
                .budgets
                .get_by_category(tx, &category)?
                .ok_or_else(|| LedgerError::budget_not_found(category.clone()))?;
            let spent = self
                .storage
                .expenses
                .total_for_category_in(tx, &budget.category, period)?;
            Ok(BudgetEvaluation::new(&budget, period, spent))
        })
    }

    /// Evaluate every budget for `period`
    pub fn evaluate_all(&self, period: BudgetPeriod) -> LedgerResult<Vec<BudgetEvaluation>> {
        self.storage.with_transaction(|tx| {
            self.storage
                .budgets
                .get_all(tx)?
                .into_iter()
                .map(|budget| {
                    let spent = self
                        .storage
                        .expenses
                        .total_for_category_in(tx, &budget.category, period)?;
                    Ok(BudgetEvaluation::new(&budget, period, spent))
                })
                .collect()
        })
    }
}
