//! Database schema
//!
//! Creation is idempotent: every statement is `IF NOT EXISTS`, so running
//! the initializer against an existing database changes nothing.

use log::debug;
use rusqlite::Connection;

use crate::error::LedgerResult;

pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    date             TEXT NOT NULL,
    description      TEXT NOT NULL,
    expense_category TEXT NOT NULL,
    amount_cents     INTEGER NOT NULL CHECK (amount_cents >= 0)
);

CREATE TABLE IF NOT EXISTS income (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    date             TEXT NOT NULL,
    description      TEXT NOT NULL,
    income_category  TEXT NOT NULL,
    amount_cents     INTEGER NOT NULL CHECK (amount_cents >= 0)
);

CREATE TABLE IF NOT EXISTS budgets (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    category     TEXT NOT NULL UNIQUE COLLATE NOCASE,
    limit_cents  INTEGER NOT NULL CHECK (limit_cents >= 0)
);

CREATE TABLE IF NOT EXISTS goals (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    target_date   TEXT NOT NULL,
    target_cents  INTEGER NOT NULL CHECK (target_cents >= 0)
);

CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(expense_category);
CREATE INDEX IF NOT EXISTS idx_income_date ON income(date);
CREATE INDEX IF NOT EXISTS idx_income_category ON income(income_category);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// Tables the ledger owns, in seeding order
pub const TABLES: [&str; 4] = ["expenses", "income", "budgets", "goals"];

/// Create any missing tables and record the schema version
pub fn initialize_schema(conn: &Connection) -> LedgerResult<()> {
    conn.execute_batch(SCHEMA_V1)?;

    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    if version < CURRENT_VERSION {
        conn.pragma_update(None, "user_version", CURRENT_VERSION)?;
        debug!("Schema version {} -> {}", version, CURRENT_VERSION);
    }

    Ok(())
}

/// Read the recorded schema version (0 for a fresh database)
pub fn schema_version(conn: &Connection) -> LedgerResult<i32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
