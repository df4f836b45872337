//! Audit logging for the ledger
//!
//! Records every create, update and delete of an expense, income entry,
//! budget or goal with before/after values in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, entity
//!   information, and optional before/after values.
//! - `AuditLogger`: appends entries to the audit log file as line-delimited
//!   JSON (JSONL) and reads them back.
//! - `generate_diff`: creates the human-readable change summary attached to
//!   update entries.
//!
//! Entries are written by [`crate::storage::Storage`] only after the
//! enclosing database transaction has committed.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
