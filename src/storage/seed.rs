//! Demonstration data
//!
//! Each table is seeded only while it is empty, so seeding an already
//! populated database inserts nothing.

use chrono::NaiveDate;
use log::info;
use rusqlite::Connection;
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Budget, Entry, Goal, LedgerKind, Money};

use super::Storage;

const EXPENSES: [(&str, &str, &str, i64); 3] = [
    ("2024-05-01", "Tesco shopping", "Food", 5000),
    ("2024-05-02", "Dinner with friends", "Entertainment", 3500),
    ("2024-05-03", "Petrol refill", "Transportation", 4000),
];

const INCOME: [(&str, &str, &str, i64); 3] = [
    ("2024-05-01", "Salary", "Job", 320000),
    ("2024-05-15", "Freelance work", "Freelance", 50000),
    ("2024-05-20", "Investment dividends", "Investment", 10000),
];

const BUDGETS: [(&str, i64); 4] = [
    ("Food", 30000),
    ("Entertainment", 10000),
    ("Transportation", 20000),
    ("Housing", 80000),
];

const GOALS: [(&str, &str, i64); 3] = [
    ("Emergency Fund", "2025-12-31", 1_000_000),
    ("Italy (Holiday)", "2026-06-30", 200_000),
    ("New Car", "2027-01-01", 2_000_000),
];

/// Rows inserted by one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub expenses: usize,
    pub income: usize,
    pub budgets: usize,
    pub goals: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.expenses + self.income + self.budgets + self.goals
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn is_empty(conn: &Connection, table: &str) -> LedgerResult<bool> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })?;
    Ok(count == 0)
}

fn seed_date(value: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| LedgerError::Storage(format!("Bad seed date {}: {}", value, e)))
}

/// Populate every empty table with the demonstration rows
///
/// Runs in a single transaction; tables that already hold rows are left
/// alone.
pub fn seed_demo_data(storage: &Storage) -> LedgerResult<SeedReport> {
    let report = storage.with_transaction(|tx| {
        let mut report = SeedReport::default();

        for (kind, rows) in [(LedgerKind::Expense, &EXPENSES), (LedgerKind::Income, &INCOME)] {
            let repo = storage.entries(kind);
            if !is_empty(tx, kind.table())? {
                continue;
            }
            for (date, description, category, cents) in rows.iter() {
                let entry = Entry::new(
                    kind,
                    repo.next_id(tx)?,
                    seed_date(date)?,
                    description,
                    category,
                    Money::from_cents(*cents),
                );
                repo.insert(tx, &entry)?;
            }
            match kind {
                LedgerKind::Expense => report.expenses = rows.len(),
                LedgerKind::Income => report.income = rows.len(),
            }
        }

        if is_empty(tx, "budgets")? {
            for (category, cents) in BUDGETS {
                let budget = Budget::new(
                    storage.budgets.next_id(tx)?,
                    category,
                    Money::from_cents(cents),
                );
                storage.budgets.insert(tx, &budget)?;
            }
            report.budgets = BUDGETS.len();
        }

        if is_empty(tx, "goals")? {
            for (name, date, cents) in GOALS {
                let goal = Goal::new(
                    storage.goals.next_id(tx)?,
                    name,
                    seed_date(date)?,
                    Money::from_cents(cents),
                );
                storage.goals.insert(tx, &goal)?;
            }
            report.goals = GOALS.len();
        }

        Ok(report)
    })?;

    if !report.is_empty() {
        info!(
            "Seeded {} expenses, {} income entries, {} budgets, {} goals",
            report.expenses, report.income, report.budgets, report.goals
        );
    }

    Ok(report)
}
