//! Ledger service
//!
//! Business logic shared by the expense and income collections: adding,
//! listing, editing and deleting entries, category maintenance and totals.

use std::collections::BTreeSet;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{LedgerError, LedgerResult};
use crate::models::input::{normalize_category, parse_amount, parse_date, title_case};
use crate::models::{Entry, EntryField, EntryId, LedgerKind, Money};
use crate::storage::{EntryRepository, Storage};

/// Service for one ledger collection (expenses or income)
pub struct LedgerService<'a> {
    storage: &'a Storage,
    kind: LedgerKind,
}

impl<'a> LedgerService<'a> {
    pub fn new(storage: &'a Storage, kind: LedgerKind) -> Self {
        Self { storage, kind }
    }

    pub fn expenses(storage: &'a Storage) -> Self {
        Self::new(storage, LedgerKind::Expense)
    }

    pub fn income(storage: &'a Storage) -> Self {
        Self::new(storage, LedgerKind::Income)
    }

    pub fn kind(&self) -> LedgerKind {
        self.kind
    }

    fn repo(&self) -> &EntryRepository {
        self.storage.entries(self.kind)
    }

    /// Record a new entry
    ///
    /// The date must be a real `YYYY-MM-DD` calendar date and the amount a
    /// non-negative number. Description and category are re-cased before
    /// storing.
    pub fn add(
        &self,
        date: &str,
        description: &str,
        category: &str,
        amount: &str,
    ) -> LedgerResult<Entry> {
        let date = parse_date(date)?;
        let category = normalize_category(category)?;
        let amount = parse_amount(amount)?;

        let repo = self.repo();
        let entry = self.storage.with_transaction(|tx| {
            let entry = Entry::new(self.kind, repo.next_id(tx)?, date, description, &category, amount);
            entry
                .validate()
                .map_err(|e| LedgerError::Validation(e.to_string()))?;
            repo.insert(tx, &entry)?;
            Ok(entry)
        })?;

        self.storage.log_create(
            EntityType::from(self.kind),
            entry.id,
            Some(entry.category.clone()),
            &entry,
        );

        Ok(entry)
    }

    /// All entries in insertion order
    pub fn list(&self) -> LedgerResult<Vec<Entry>> {
        self.storage.with_transaction(|tx| self.repo().get_all(tx))
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> LedgerResult<Entry> {
        self.storage
            .with_transaction(|tx| self.repo().get(tx, id))?
            .ok_or_else(|| LedgerError::entry_not_found(self.kind, id))
    }

    /// Change a single field of an entry
    ///
    /// The new value goes through the same parsing and casing as [`add`].
    ///
    /// [`add`]: Self::add
    pub fn update_field(&self, id: EntryId, field: EntryField, value: &str) -> LedgerResult<Entry> {
        let repo = self.repo();
        let (before, after) = self.storage.with_transaction(|tx| {
            let before = repo
                .get(tx, id)?
                .ok_or_else(|| LedgerError::entry_not_found(self.kind, id))?;

            let mut after = before.clone();
            match field {
                EntryField::Date => after.date = parse_date(value)?,
                EntryField::Description => {
                    after.description = self.kind.normalize_description(value)
                }
                EntryField::Category => after.category = normalize_category(value)?,
                EntryField::Amount => after.amount = parse_amount(value)?,
            }

            repo.update(tx, &after)?;
            Ok((before, after))
        })?;

        self.storage.log_update(
            EntityType::from(self.kind),
            id,
            Some(after.category.clone()),
            &before,
            &after,
        );

        Ok(after)
    }

    /// Delete an entry, returning the removed row
    pub fn delete(&self, id: EntryId) -> LedgerResult<Entry> {
        let repo = self.repo();
        let removed = self.storage.with_transaction(|tx| {
            let entry = repo
                .get(tx, id)?
                .ok_or_else(|| LedgerError::entry_not_found(self.kind, id))?;
            repo.delete(tx, id)?;
            Ok(entry)
        })?;

        self.storage.log_delete(
            EntityType::from(self.kind),
            id,
            Some(removed.category.clone()),
            &removed,
        );

        Ok(removed)
    }

    /// Distinct categories in use, sorted
    pub fn list_categories(&self) -> LedgerResult<BTreeSet<String>> {
        self.storage.with_transaction(|tx| self.repo().categories(tx))
    }

    /// Entries in one category
    ///
    /// The category is title-cased first, then matched exactly.
    pub fn filter_by_category(&self, category: &str) -> LedgerResult<Vec<Entry>> {
        let category = normalize_category(category)?;
        self.storage
            .with_transaction(|tx| self.repo().get_by_category(tx, &category))
    }

    /// Move every entry in `old` to `new`, returning how many moved
    ///
    /// Both names are title-cased but not otherwise checked, so a blank
    /// `new` empties the category. No matching entries is not an error.
    /// All entries move or none do.
    pub fn rename_category(&self, old: &str, new: &str) -> LedgerResult<usize> {
        let old = title_case(old);
        let new = title_case(new);

        let repo = self.repo();
        let changes = self.storage.with_transaction(|tx| {
            let before = repo.get_by_category(tx, &old)?;
            let count = repo.rename_category(tx, &old, &new)?;
            if count != before.len() {
                return Err(LedgerError::Storage(format!(
                    "Expected to rename {} entries but renamed {}",
                    before.len(),
                    count
                )));
            }
            Ok(before)
        })?;

        let entity_type = EntityType::from(self.kind);
        let audit: Vec<AuditEntry> = changes
            .iter()
            .map(|before| {
                let mut after = before.clone();
                after.category = new.clone();
                AuditEntry::update(
                    entity_type,
                    before.id.to_string(),
                    Some(new.clone()),
                    before,
                    &after,
                )
            })
            .collect();
        self.storage.log_batch(&audit);

        Ok(changes.len())
    }

    /// Sum of all amounts, or `None` when there are no entries
    pub fn total(&self) -> LedgerResult<Option<Money>> {
        self.storage.with_transaction(|tx| self.repo().total(tx))
    }
}
