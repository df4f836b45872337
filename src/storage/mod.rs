//! Storage layer for the ledger
//!
//! A single SQLite connection, opened once and closed when [`Storage`] is
//! dropped. Every ledger operation runs inside [`Storage::with_transaction`],
//! which commits when the closure succeeds and rolls back when it fails.

pub mod budgets;
pub mod entries;
pub mod goals;
pub mod schema;
pub mod seed;

pub use budgets::BudgetRepository;
pub use entries::EntryRepository;
pub use goals::GoalRepository;
pub use schema::initialize_schema;
pub use seed::{seed_demo_data, SeedReport};

use std::path::{Path, PathBuf};

use log::{debug, warn};
use rusqlite::{Connection, Transaction};
use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::LedgerKind;

/// Storage gateway: owns the connection and the repositories over it
pub struct Storage {
    conn: Connection,
    audit: Option<AuditLogger>,
    pub expenses: EntryRepository,
    pub income: EntryRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Open (or create) the database at `path`
    pub fn open(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            LedgerError::Storage(format!("Failed to open database {}: {}", path.display(), e))
        })?;
        debug!("Opened database at {}", path.display());
        Ok(Self::from_connection(conn))
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> LedgerResult<Self> {
        Ok(Self::from_connection(Connection::open_in_memory()?))
    }

    /// Open the database under the configured data directory
    pub fn open_paths(paths: &LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Self::open(paths.database_file())
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            audit: None,
            expenses: EntryRepository::new(LedgerKind::Expense),
            income: EntryRepository::new(LedgerKind::Income),
            budgets: BudgetRepository,
            goals: GoalRepository,
        }
    }

    /// Record every change in the audit log at `path`
    pub fn with_audit_log(mut self, path: PathBuf) -> Self {
        self.audit = Some(AuditLogger::new(path));
        self
    }

    /// The audit logger, when auditing is enabled
    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Create any missing tables
    pub fn initialize(&self) -> LedgerResult<()> {
        schema::initialize_schema(&self.conn)
    }

    /// The repository for one ledger collection
    pub fn entries(&self, kind: LedgerKind) -> &EntryRepository {
        match kind {
            LedgerKind::Expense => &self.expenses,
            LedgerKind::Income => &self.income,
        }
    }

    /// Run `f` inside one transaction
    ///
    /// Commits when `f` returns `Ok`; rolls back and returns the error
    /// otherwise. No partial writes survive a failed operation.
    pub fn with_transaction<T, F>(&self, f: F) -> LedgerResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> LedgerResult<T>,
    {
        let tx = self.conn.unchecked_transaction()?;
        debug!("Transaction started");

        match f(&tx) {
            Ok(value) => {
                tx.commit()?;
                debug!("Transaction committed");
                Ok(value)
            }
            Err(err) => {
                warn!("Rolling back transaction: {}", err);
                if let Err(rollback_err) = tx.rollback() {
                    warn!("Rollback failed: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    /// Count the rows in one of the ledger's tables
    pub fn count_rows(&self, table: &str) -> LedgerResult<usize> {
        if !schema::TABLES.contains(&table) {
            return Err(LedgerError::Storage(format!("Unknown table: {}", table)));
        }
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // === Audit helpers ===
    //
    // These run after the change has committed. A failed audit write is
    // logged and dropped; the stored change stands and the caller sees Ok.

    /// Log a create after a committed insert
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl ToString,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.write_audit(&[AuditEntry::create(
            entity_type,
            entity_id.to_string(),
            entity_name,
            entity,
        )])
    }

    /// Log an update after a committed change
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl ToString,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) {
        self.write_audit(&[AuditEntry::update(
            entity_type,
            entity_id.to_string(),
            entity_name,
            before,
            after,
        )])
    }

    /// Log a delete after a committed removal
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl ToString,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.write_audit(&[AuditEntry::delete(
            entity_type,
            entity_id.to_string(),
            entity_name,
            entity,
        )])
    }

    /// Log several entries at once
    pub fn log_batch(&self, entries: &[AuditEntry]) {
        self.write_audit(entries)
    }

    fn write_audit(&self, entries: &[AuditEntry]) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log_batch(entries) {
            warn!(
                "Failed to write {} audit entries to {}: {}",
                entries.len(),
                logger.path().display(),
                e
            );
        }
    }
}

/// Next id for `table`: one past both the largest live id and the highest id
/// ever handed out, so ids of deleted rows are never reissued
pub(crate) fn next_row_id(conn: &Connection, table: &str) -> LedgerResult<i64> {
    let sql = format!(
        "SELECT MAX(
             COALESCE((SELECT seq FROM sqlite_sequence WHERE name = ?1), 0),
             COALESCE((SELECT MAX(id) FROM {}), 0)
         ) + 1",
        table
    );
    Ok(conn.query_row(&sql, [table], |row| row.get(0))?)
}

#[cfg(test)]
pub(crate) fn test_storage() -> Storage {
    let storage = Storage::open_in_memory().unwrap();
    storage.initialize().unwrap();
    storage
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::open_paths(&paths).unwrap();
        storage.initialize().unwrap();

        assert!(paths.is_initialized());
        assert_eq!(storage.count_rows("expenses").unwrap(), 0);
    }

    #[test]
    fn test_transaction_commits_on_success() {
        let storage = test_storage();

        storage
            .with_transaction(|tx| {
                tx.execute(
                    "INSERT INTO budgets (category, limit_cents) VALUES ('Food', 100)",
                    [],
                )?;
                Ok(())
            })
            .unwrap();

        assert_eq!(storage.count_rows("budgets").unwrap(), 1);
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let storage = test_storage();

        let result: LedgerResult<()> = storage.with_transaction(|tx| {
            tx.execute(
                "INSERT INTO budgets (category, limit_cents) VALUES ('Food', 100)",
                [],
            )?;
            Err(LedgerError::Validation("abort".into()))
        });

        assert!(result.unwrap_err().is_validation());
        assert_eq!(storage.count_rows("budgets").unwrap(), 0);
    }

    #[test]
    fn test_next_row_id_skips_deleted_ids() {
        let storage = test_storage();
        let conn = &storage.conn;

        assert_eq!(next_row_id(conn, "goals").unwrap(), 1);
        conn.execute(
            "INSERT INTO goals (id, name, target_date, target_cents) VALUES (1, 'A', '2030-01-01', 0)",
            [],
        )
        .unwrap();
        assert_eq!(next_row_id(conn, "goals").unwrap(), 2);

        conn.execute("DELETE FROM goals WHERE id = 1", []).unwrap();
        assert_eq!(next_row_id(conn, "goals").unwrap(), 2);
    }

    #[test]
    fn test_count_rows_rejects_unknown_table() {
        let storage = test_storage();
        assert!(storage.count_rows("sqlite_master").is_err());
    }

    #[test]
    fn test_audit_written_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let storage = test_storage().with_audit_log(log_path.clone());

        storage.log_create(EntityType::Goal, 1, None, &serde_json::json!({"name": "New Car"}));

        let entries = AuditLogger::new(log_path).read_all().unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_audit_skipped_when_disabled() {
        let storage = test_storage();
        assert!(storage.audit_logger().is_none());
        storage.log_delete(EntityType::Goal, 1, None, &serde_json::json!({}));
    }

    #[test]
    fn test_audit_failure_does_not_fail_the_caller() {
        let temp_dir = TempDir::new().unwrap();
        let storage = test_storage().with_audit_log(temp_dir.path().to_path_buf());

        storage.log_create(EntityType::Goal, 1, None, &serde_json::json!({}));

        assert!(temp_dir.path().is_dir());
    }
}
