//! Error types for the Sphone dialer.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user by dialer and contact operations.
///
/// Every variant is recoverable: the caller renders the message and the
/// action is aborted.
#[derive(Error, Debug)]
pub enum PhoneError {
    /// The user entered a malformed phone number
    #[error("{0}")]
    InvalidPhoneNumber(#[from] ValidationError),

    /// A contact with this name already holds this number
    #[error("A contact with name '{name}' and number '{number}' already exists!")]
    DuplicateContact { name: String, number: String },

    /// The requested action is not available in this build or configuration
    #[error("{0}")]
    FeatureNotAvailable(String),

    /// A contact was submitted without a name
    #[error("Name cannot be empty!")]
    EmptyContactName,

    /// No contact matches the given name
    #[error("Contact '{0}' was not found!")]
    ContactNotFound(String),

    /// The contact has no numbers to dial
    #[error("Contact '{0}' has no phone numbers!")]
    NoPhoneNumbers(String),

    /// A menu-style selection was out of range or missing
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Export was requested with an empty contact list
    #[error("No contacts available to export.")]
    NothingToExport,

    /// Reading or writing a backing file failed
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Errors that can occur while loading or saving a backing file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// File system access failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PhoneError
pub type PhoneResult<T> = Result<T, PhoneError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
