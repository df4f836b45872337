//! Core data models for the ledger
//!
//! This module contains the data structures that represent the finance
//! domain: expense and income entries, category budgets and savings goals.

pub mod budget;
pub mod entry;
pub mod goal;
pub mod ids;
pub mod input;
pub mod money;
pub mod period;

pub use budget::{Budget, BudgetEvaluation, BudgetSetOutcome, BudgetStatus, ConflictPolicy};
pub use entry::{Entry, EntryField, LedgerKind};
pub use goal::{Goal, GoalField, ProgressSnapshot};
pub use ids::{BudgetId, EntryId, GoalId};
pub use money::Money;
pub use period::BudgetPeriod;
