//! Business logic layer
//!
//! Services sit between the CLI and storage. Each operation validates its
//! input, runs in one storage transaction and writes the audit log after
//! the transaction commits.

pub mod budget;
pub mod goal;
pub mod ledger;
pub mod summary;

pub use budget::BudgetService;
pub use goal::GoalService;
pub use ledger::LedgerService;
pub use summary::{SummaryService, Totals};
