//! Custom error types for CardBank
//!
//! This module defines the error hierarchy for the simulator using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for CardBank operations
#[derive(Error, Debug)]
pub enum BankError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for operation inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Withdrawal or transfer would take the balance below zero
    #[error("Insufficient funds on card {card}: need {needed:.2}, have {available:.2}")]
    InsufficientFunds {
        card: String,
        needed: f64,
        available: f64,
    },

    /// Deposit amount does not cover its own tax
    #[error("Amount {amount:.2} is below the tax of {tax:.2}")]
    AmountBelowTax { amount: f64, tax: f64 },

    /// No persisted account owns the transfer's destination card
    #[error("No account owns recipient card {0}")]
    RecipientAccountNotFound(String),

    /// The snapshot file exists but cannot be parsed
    #[error("Corrupt snapshot at {path}: {reason}")]
    CorruptSnapshot { path: String, reason: String },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BankError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for cards
    pub fn card_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Card",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error was raised by a card balance rule
    pub fn is_rejected_by_card(&self) -> bool {
        matches!(
            self,
            Self::InsufficientFunds { .. } | Self::AmountBelowTax { .. }
        )
    }
}

impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for CardBank operations
pub type BankResult<T> = Result<T, BankError>;
