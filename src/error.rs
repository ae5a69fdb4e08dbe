//! Custom error types for Spendable
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The calculation engine itself never
//! fails; these errors come from storage, validation at the service boundary,
//! and the reactive read model.

use thiserror::Error;

/// The main error type for Spendable operations
#[derive(Error, Debug)]
pub enum SpendableError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A short ID matched more than one entity
    #[error("{entity_type} identifier '{identifier}' is ambiguous ({matches} matches)")]
    Ambiguous {
        entity_type: &'static str,
        identifier: String,
        matches: usize,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The publisher behind a subscription has gone away
    #[error("Feed closed: {0}")]
    FeedClosed(&'static str),
}

impl SpendableError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for infusions
    pub fn infusion_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Infusion",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// No budget configuration exists yet
    pub fn budget_not_configured() -> Self {
        Self::Config("No budget configured; run `spendable init <weekly-amount>` first".into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SpendableError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendableError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SpendableError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Spendable operations
pub type SpendableResult<T> = Result<T, SpendableError>;
