//! Expense and income entries
//!
//! Expenses and income share one record shape. [`LedgerKind`] selects the
//! table, the category column and the casing rules for each collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::EntryId;
use super::input::{capitalize, title_case};
use super::money::Money;

/// Which ledger collection an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    Expense,
    Income,
}

impl LedgerKind {
    /// Storage table for this collection
    pub const fn table(&self) -> &'static str {
        match self {
            Self::Expense => "expenses",
            Self::Income => "income",
        }
    }

    /// Name of the category column in this collection's table
    pub const fn category_column(&self) -> &'static str {
        match self {
            Self::Expense => "expense_category",
            Self::Income => "income_category",
        }
    }

    /// Human-readable singular name
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    /// Apply this collection's casing rule to a description
    ///
    /// Expense descriptions are sentence-cased, income descriptions
    /// title-cased.
    pub fn normalize_description(&self, description: &str) -> String {
        match self {
            Self::Expense => capitalize(description),
            Self::Income => title_case(description),
        }
    }
}

impl fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single expense or income row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub kind: LedgerKind,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: Money,
}

impl Entry {
    /// Create an entry, normalizing description and category casing
    pub fn new(
        kind: LedgerKind,
        id: EntryId,
        date: NaiveDate,
        description: &str,
        category: &str,
        amount: Money,
    ) -> Self {
        Self {
            id,
            kind,
            date,
            description: kind.normalize_description(description),
            category: title_case(category),
            amount,
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.category.trim().is_empty() {
            return Err(EntryValidationError::EmptyCategory);
        }
        if self.amount.is_negative() {
            return Err(EntryValidationError::NegativeAmount);
        }
        Ok(())
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyCategory,
    NegativeAmount,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// A single editable field of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Date,
    Description,
    Category,
    Amount,
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => write!(f, "date"),
            Self::Description => write!(f, "description"),
            Self::Category => write!(f, "category"),
            Self::Amount => write!(f, "amount"),
        }
    }
}

impl FromStr for EntryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "description" | "desc" => Ok(Self::Description),
            "category" => Ok(Self::Category),
            "amount" => Ok(Self::Amount),
            other => Err(format!(
                "Unknown field '{}': expected date, description, category or amount",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_expense_normalizes_casing() {
        let entry = Entry::new(
            LedgerKind::Expense,
            EntryId::first(),
            date("2024-05-01"),
            "tesco SHOPPING",
            "food",
            Money::from_cents(5000),
        );

        assert_eq!(entry.description, "Tesco shopping");
        assert_eq!(entry.category, "Food");
    }

    #[test]
    fn test_new_income_title_cases_description() {
        let entry = Entry::new(
            LedgerKind::Income,
            EntryId::first(),
            date("2024-05-15"),
            "freelance work",
            "freelance",
            Money::from_cents(50000),
        );

        assert_eq!(entry.description, "Freelance Work");
        assert_eq!(entry.category, "Freelance");
    }

    #[test]
    fn test_validation() {
        let mut entry = Entry::new(
            LedgerKind::Expense,
            EntryId::first(),
            date("2024-05-01"),
            "x",
            "",
            Money::zero(),
        );
        assert_eq!(entry.validate(), Err(EntryValidationError::EmptyCategory));

        entry.category = "Food".into();
        entry.amount = Money::from_cents(-1);
        assert_eq!(entry.validate(), Err(EntryValidationError::NegativeAmount));
    }

    #[test]
    fn test_kind_columns() {
        assert_eq!(LedgerKind::Expense.table(), "expenses");
        assert_eq!(LedgerKind::Income.category_column(), "income_category");
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("Amount".parse::<EntryField>().unwrap(), EntryField::Amount);
        assert_eq!("desc".parse::<EntryField>().unwrap(), EntryField::Description);
        assert!("payee".parse::<EntryField>().is_err());
    }
}
