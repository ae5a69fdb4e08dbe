//! Strongly-typed ID wrappers for all entity types
//!
//! Expenses, infusions and goals are independent records with no foreign
//! keys between them; the newtypes still keep a goal ID from being passed
//! where an expense ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short prefix shown in listings (e.g. "exp-")
            pub const fn prefix() -> &'static str {
                $display_prefix
            }

            /// Whether a user-typed identifier refers to this ID
            ///
            /// Accepts the full UUID, the display form, or any prefix of
            /// the hyphenated UUID (with or without the display prefix).
            pub fn matches(&self, needle: &str) -> bool {
                let lowered = needle.trim().to_ascii_lowercase();
                let bare = lowered
                    .strip_prefix($display_prefix)
                    .unwrap_or(lowered.as_str());
                !bare.is_empty() && self.0.to_string().starts_with(bare)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ExpenseId, "exp-");
define_id!(InfusionId, "inf-");
define_id!(GoalId, "goal-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ExpenseId::new();
        let display = id.to_string();
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12);

        assert!(GoalId::new().to_string().starts_with("goal-"));
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(InfusionId::new(), InfusionId::new());
    }

    #[test]
    fn test_parse_full_and_prefixed() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let plain: ExpenseId = uuid_str.parse().unwrap();
        let prefixed: ExpenseId = format!("exp-{}", uuid_str).parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.as_uuid().to_string(), uuid_str);
        assert!("exp-550e8400".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_matches_short_forms() {
        let id = GoalId::from(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap());
        assert!(id.matches("goal-550e8400"));
        assert!(id.matches("550e"));
        assert!(id.matches("550E8400-E29B"));
        assert!(!id.matches("goal-"));
        assert!(!id.matches("660e"));
        assert!(!id.matches(""));
    }

    #[test]
    fn test_id_serialization() {
        let id = InfusionId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: InfusionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
