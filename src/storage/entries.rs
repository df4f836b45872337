//! Entry repository for the expense and income tables
//!
//! Both tables share one row shape; the repository's [`LedgerKind`] picks
//! the table and category column.

use std::collections::BTreeSet;

use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};

use crate::error::LedgerResult;
use crate::models::{BudgetPeriod, Entry, EntryId, LedgerKind, Money};

use super::next_row_id;

/// Repository for one ledger collection
#[derive(Debug, Clone, Copy)]
pub struct EntryRepository {
    kind: LedgerKind,
}

impl EntryRepository {
    pub fn new(kind: LedgerKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> LedgerKind {
        self.kind
    }

    fn select_sql(&self) -> String {
        format!(
            "SELECT id, date, description, {}, amount_cents FROM {}",
            self.kind.category_column(),
            self.kind.table()
        )
    }

    fn from_row(&self, row: &Row<'_>) -> rusqlite::Result<Entry> {
        Ok(Entry {
            id: row.get(0)?,
            kind: self.kind,
            date: row.get(1)?,
            description: row.get(2)?,
            category: row.get(3)?,
            amount: row.get(4)?,
        })
    }

    fn collect(&self, conn: &Connection, sql: &str, params: &[&dyn ToSql]) -> LedgerResult<Vec<Entry>> {
        let mut stmt = conn.prepare(sql)?;
        let entries = stmt
            .query_map(params, |row| self.from_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Id the next inserted entry will receive
    pub fn next_id(&self, conn: &Connection) -> LedgerResult<EntryId> {
        Ok(EntryId::new(next_row_id(conn, self.kind.table())?))
    }

    /// Insert an entry under its own id
    pub fn insert(&self, conn: &Connection, entry: &Entry) -> LedgerResult<()> {
        conn.execute(
            &format!(
                "INSERT INTO {} (id, date, description, {}, amount_cents) VALUES (?1, ?2, ?3, ?4, ?5)",
                self.kind.table(),
                self.kind.category_column()
            ),
            params![entry.id, entry.date, entry.description, entry.category, entry.amount],
        )?;
        Ok(())
    }

    /// Get an entry by ID
    pub fn get(&self, conn: &Connection, id: EntryId) -> LedgerResult<Option<Entry>> {
        let sql = format!("{} WHERE id = ?1", self.select_sql());
        Ok(conn
            .query_row(&sql, [id], |row| self.from_row(row))
            .optional()?)
    }

    /// All entries in id order
    pub fn get_all(&self, conn: &Connection) -> LedgerResult<Vec<Entry>> {
        let sql = format!("{} ORDER BY id", self.select_sql());
        self.collect(conn, &sql, &[])
    }

    /// Entries whose category equals `category` exactly
    pub fn get_by_category(&self, conn: &Connection, category: &str) -> LedgerResult<Vec<Entry>> {
        let sql = format!(
            "{} WHERE {} = ?1 ORDER BY id",
            self.select_sql(),
            self.kind.category_column()
        );
        self.collect(conn, &sql, &[&category])
    }

    /// Overwrite every field of an existing entry; false if the id is absent
    pub fn update(&self, conn: &Connection, entry: &Entry) -> LedgerResult<bool> {
        let changed = conn.execute(
            &format!(
                "UPDATE {} SET date = ?2, description = ?3, {} = ?4, amount_cents = ?5 WHERE id = ?1",
                self.kind.table(),
                self.kind.category_column()
            ),
            params![entry.id, entry.date, entry.description, entry.category, entry.amount],
        )?;
        Ok(changed > 0)
    }

    /// Delete an entry; false if the id is absent
    pub fn delete(&self, conn: &Connection, id: EntryId) -> LedgerResult<bool> {
        let changed = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", self.kind.table()),
            [id],
        )?;
        Ok(changed > 0)
    }

    /// Distinct categories, sorted
    pub fn categories(&self, conn: &Connection) -> LedgerResult<BTreeSet<String>> {
        let column = self.kind.category_column();
        let mut stmt = conn.prepare(&format!(
            "SELECT DISTINCT {} FROM {}",
            column,
            self.kind.table()
        ))?;
        let categories = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<BTreeSet<_>>>()?;
        Ok(categories)
    }

    /// Move every entry in `old` to `new`, returning the number of rows changed
    pub fn rename_category(&self, conn: &Connection, old: &str, new: &str) -> LedgerResult<usize> {
        let column = self.kind.category_column();
        Ok(conn.execute(
            &format!(
                "UPDATE {} SET {col} = ?2 WHERE {col} = ?1",
                self.kind.table(),
                col = column
            ),
            [old, new],
        )?)
    }

    /// Sum of all amounts, or `None` when the table is empty
    pub fn total(&self, conn: &Connection) -> LedgerResult<Option<Money>> {
        let (count, cents): (i64, i64) = conn.query_row(
            &format!(
                "SELECT COUNT(*), COALESCE(SUM(amount_cents), 0) FROM {}",
                self.kind.table()
            ),
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok((count > 0).then(|| Money::from_cents(cents)))
    }

    /// Sum of amounts in a category during one month
    ///
    /// The category comparison ignores ASCII case.
    pub fn total_for_category_in(
        &self,
        conn: &Connection,
        category: &str,
        period: BudgetPeriod,
    ) -> LedgerResult<Money> {
        let cents: i64 = conn.query_row(
            &format!(
                "SELECT COALESCE(SUM(amount_cents), 0) FROM {} \
                 WHERE {} = ?1 COLLATE NOCASE AND strftime('%Y-%m', date) = ?2",
                self.kind.table(),
                self.kind.category_column()
            ),
            params![category, period.key()],
            |row| row.get(0),
        )?;
        Ok(Money::from_cents(cents))
    }
}
