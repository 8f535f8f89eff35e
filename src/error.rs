//! Custom error types for ynab-sms
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ynab-sms operations
#[derive(Error, Debug)]
pub enum YnabSmsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Structural validation errors for config files
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single budget could not be fetched from YNAB
    #[error("Failed to fetch budget [{budget_id}]: {reason}")]
    Fetch { budget_id: String, reason: String },

    /// A message could not be delivered to a phone number
    #[error("Failed to send message to {phone_number}: {reason}")]
    Send {
        phone_number: String,
        reason: String,
    },

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(String),
}

impl YnabSmsError {
    /// Create a fetch error for a budget id
    pub fn fetch(budget_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            budget_id: budget_id.into(),
            reason: reason.into(),
        }
    }

    /// Create a send error for a phone number
    pub fn send(phone_number: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Send {
            phone_number: phone_number.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for YnabSmsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for YnabSmsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for YnabSmsError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for ynab-sms operations
pub type YnabSmsResult<T> = Result<T, YnabSmsError>;
