//! Audit entry records
//!
//! One line of the audit log: what happened, to which record, and the
//! record's JSON before and after.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::summarize_changes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        };
        f.write_str(label)
    }
}

/// Kinds of record that get audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    BudgetConfig,
    Expense,
    Infusion,
    Goal,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityType::BudgetConfig => "Budget",
            EntityType::Expense => "Expense",
            EntityType::Infusion => "Infusion",
            EntityType::Goal => "Goal",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    /// Short human label such as an expense name or goal title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn blank(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::blank(Operation::Create, entity_type, entity_id, entity_name)
        }
    }

    /// An update entry; the change summary is derived from the two snapshots
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => summarize_changes(b, a),
            _ => None,
        };

        Self {
            before,
            after,
            diff_summary,
            ..Self::blank(Operation::Update, entity_type, entity_id, entity_name)
        }
    }

    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::blank(Operation::Delete, entity_type, entity_id, entity_name)
        }
    }

    /// One line per entry, plus an indented diff line for updates
    pub fn format_human_readable(&self) -> String {
        let label = match &self.entity_name {
            Some(name) => format!("{} {} ({})", self.entity_type, self.entity_id, name),
            None => format!("{} {}", self.entity_type, self.entity_id),
        };

        let mut line = format!(
            "{}  {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M UTC"),
            self.operation,
            label
        );
        if let Some(diff) = self.diff_summary.as_deref() {
            line.push_str("\n    ");
            line.push_str(diff);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_labels() {
        assert_eq!(Operation::Delete.to_string(), "DELETE");
        assert_eq!(EntityType::BudgetConfig.to_string(), "Budget");
        assert_eq!(
            serde_json::to_string(&EntityType::BudgetConfig).unwrap(),
            "\"budget_config\""
        );
    }

    #[test]
    fn test_create_has_only_after() {
        let entry = AuditEntry::create(
            EntityType::Expense,
            "exp-1234abcd",
            Some("Coffee".into()),
            &json!({"name": "Coffee", "amount": 450}),
        );
        assert_eq!(entry.operation, Operation::Create);
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], 450);
    }

    #[test]
    fn test_update_computes_summary() {
        let entry = AuditEntry::update(
            EntityType::Goal,
            "goal-00000001",
            Some("Bike".into()),
            &json!({"title": "Bike", "funded_amount": 0}),
            &json!({"title": "Bike", "funded_amount": 2500}),
        );
        assert_eq!(entry.diff_summary.as_deref(), Some("funded_amount: 0 -> 2500"));
    }

    #[test]
    fn test_delete_has_only_before() {
        let entry = AuditEntry::delete(EntityType::Infusion, "inf-1", None, &json!({"amount": 5000}));
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
        assert!(entry.diff_summary.is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Expense,
            "exp-1234abcd",
            Some("Coffee".into()),
            &json!({"amount": 450}),
            &json!({"amount": 500}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Expense exp-1234abcd (Coffee)"));
        assert!(formatted.ends_with("\n    amount: 450 -> 500"));
    }
}
