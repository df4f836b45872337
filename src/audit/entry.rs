//! Audit log records
//!
//! One [`AuditEntry`] per changed row, serialized as a single JSON line.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::LedgerKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        })
    }
}

/// The kind of row an entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Income,
    Budget,
    Goal,
}

impl From<LedgerKind> for EntityType {
    fn from(kind: LedgerKind) -> Self {
        match kind {
            LedgerKind::Expense => EntityType::Expense,
            LedgerKind::Income => EntityType::Income,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityType::Expense => LedgerKind::Expense.label(),
            EntityType::Income => LedgerKind::Income.label(),
            EntityType::Budget => "Budget",
            EntityType::Goal => "Goal",
        };
        f.write_str(label)
    }
}

/// A single change to a stored row
///
/// `before` is absent for creates and `after` for deletes. Updates carry
/// both plus a `field: old -> new` summary of what differs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,
    /// Category or goal name, shown next to the id in `history`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Self {
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => super::generate_diff(b, a),
            _ => None,
        };
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before,
            after,
            diff_summary,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let after = serde_json::to_value(entity).ok();
        Self::record(Operation::Create, entity_type, entity_id, entity_name, None, after)
    }

    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        Self::record(
            Operation::Update,
            entity_type,
            entity_id,
            entity_name,
            serde_json::to_value(before).ok(),
            serde_json::to_value(after).ok(),
        )
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let before = serde_json::to_value(entity).ok();
        Self::record(Operation::Delete, entity_type, entity_id, entity_name, before, None)
    }
}

/// `[2024-05-01 12:00:00 UTC] UPDATE Expense #3 (Food)`, plus a
/// `Changes:` line for updates
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} #{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        )?;
        if let Some(name) = &self.entity_name {
            write!(f, " ({})", name)?;
        }
        if let Some(diff) = &self.diff_summary {
            write!(f, "\n  Changes: {}", diff)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_type_from_kind() {
        assert_eq!(EntityType::from(LedgerKind::Expense), EntityType::Expense);
        assert_eq!(EntityType::from(LedgerKind::Income), EntityType::Income);
    }

    #[test]
    fn test_budget_created() {
        let entry = AuditEntry::create(
            EntityType::Budget,
            "1",
            Some("Food".to_string()),
            &json!({"category": "Food", "monthly_limit": 30000}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["monthly_limit"], 30000);
        assert!(entry.diff_summary.is_none());
    }

    #[test]
    fn test_amount_edit_has_diff() {
        let entry = AuditEntry::update(
            EntityType::Expense,
            "3",
            None,
            &json!({"amount": 4000, "category": "Transportation"}),
            &json!({"amount": 4250, "category": "Transportation"}),
        );

        assert_eq!(entry.diff_summary.as_deref(), Some("amount: 4000 -> 4250"));
    }

    #[test]
    fn test_display_deleted_income() {
        let entry = AuditEntry::delete(
            EntityType::Income,
            "2",
            Some("Freelance".to_string()),
            &json!({"amount": 50000}),
        );

        assert!(entry.to_string().contains("DELETE Income #2 (Freelance)"));
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create(EntityType::Goal, "1", None, &json!({"name": "New Car"}));
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"entity_type\":\"goal\""));
        assert!(!json.contains("before"));
        assert!(!json.contains("entity_name"));
    }
}
