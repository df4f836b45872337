//! Category budget model
//!
//! One monthly spending limit per category, and the status of a category's
//! spending against that limit in a given month.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::input::title_case;
use super::money::Money;
use super::period::BudgetPeriod;

/// A monthly spending limit for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    /// Title-cased category name, unique across budgets
    pub category: String,

    /// Spending limit per calendar month
    pub monthly_limit: Money,
}

impl Budget {
    /// Create a new budget, title-casing the category
    pub fn new(id: BudgetId, category: &str, monthly_limit: Money) -> Self {
        Self {
            id,
            category: title_case(category),
            monthly_limit,
        }
    }

    /// Set the monthly limit
    pub fn set_limit(&mut self, monthly_limit: Money) {
        self.monthly_limit = monthly_limit;
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }
        if self.monthly_limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit);
        }
        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} per month", self.category, self.monthly_limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NegativeLimit => write!(f, "Monthly limit cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

/// Spending relative to a limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetStatus {
    Under,
    On,
    Over,
}

impl BudgetStatus {
    /// Compare spending against a limit
    pub fn evaluate(spent: Money, limit: Money) -> Self {
        match spent.cmp(&limit) {
            std::cmp::Ordering::Less => Self::Under,
            std::cmp::Ordering::Equal => Self::On,
            std::cmp::Ordering::Greater => Self::Over,
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "UNDER"),
            Self::On => write!(f, "ON"),
            Self::Over => write!(f, "OVER"),
        }
    }
}

/// A category's spending for one month measured against its budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetEvaluation {
    pub category: String,
    pub period: BudgetPeriod,
    pub limit: Money,
    pub spent: Money,
    pub status: BudgetStatus,
}

impl BudgetEvaluation {
    pub fn new(budget: &Budget, period: BudgetPeriod, spent: Money) -> Self {
        Self {
            category: budget.category.clone(),
            period,
            limit: budget.monthly_limit,
            spent,
            status: BudgetStatus::evaluate(spent, budget.monthly_limit),
        }
    }

    /// Limit minus spending; negative when over budget
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }
}

/// What to do when setting a budget for a category that already has one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Fail with a conflict error
    #[default]
    Reject,
    /// Replace the existing limit
    Overwrite,
    /// Leave the existing limit untouched
    Keep,
}

/// Result of setting a budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetSetOutcome {
    Created(Budget),
    Replaced { before: Budget, after: Budget },
    Kept(Budget),
}

impl BudgetSetOutcome {
    /// The budget as stored after the operation
    pub fn budget(&self) -> &Budget {
        match self {
            Self::Created(budget) | Self::Kept(budget) => budget,
            Self::Replaced { after, .. } => after,
        }
    }
}
