//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::GoalId;
use super::input::title_case;
use super::money::Money;

/// A named savings target with a deadline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub target_date: NaiveDate,
    pub target_amount: Money,
}

impl Goal {
    /// Create a new goal, title-casing the name
    pub fn new(id: GoalId, name: &str, target_date: NaiveDate, target_amount: Money) -> Self {
        Self {
            id,
            name: title_case(name),
            target_date,
            target_amount,
        }
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if self.target_amount.is_negative() {
            return Err(GoalValidationError::NegativeTarget);
        }
        Ok(())
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NegativeTarget,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NegativeTarget => write!(f, "Target amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

/// A single editable field of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalField {
    Name,
    TargetDate,
    TargetAmount,
}

impl fmt::Display for GoalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::TargetDate => write!(f, "target-date"),
            Self::TargetAmount => write!(f, "target-amount"),
        }
    }
}

impl FromStr for GoalField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "name" => Ok(Self::Name),
            "target-date" | "date" => Ok(Self::TargetDate),
            "target-amount" | "amount" => Ok(Self::TargetAmount),
            other => Err(format!(
                "Unknown field '{}': expected name, target-date or target-amount",
                other
            )),
        }
    }
}

/// Totals at a point in time, for judging progress towards goals
///
/// A `None` total means the underlying collection is empty. Net income is
/// only computed when both totals are available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub as_of: NaiveDate,
    pub total_expenses: Option<Money>,
    pub total_income: Option<Money>,
    pub net_income: Option<Money>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal() {
        let goal = Goal::new(
            GoalId::first(),
            "italy (holiday)",
            NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            Money::from_cents(200000),
        );
        assert_eq!(goal.name, "Italy (Holiday)");
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let goal = Goal::new(
            GoalId::first(),
            " ",
            NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            Money::zero(),
        );
        assert_eq!(goal.validate(), Err(GoalValidationError::EmptyName));
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("target_date".parse::<GoalField>().unwrap(), GoalField::TargetDate);
        assert_eq!("amount".parse::<GoalField>().unwrap(), GoalField::TargetAmount);
        assert!("colour".parse::<GoalField>().is_err());
    }
}
