//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with records and the address book.
#[derive(Error, Debug)]
pub enum ContactBookError {
    /// A field failed its validation predicate
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] ValidationError),

    /// A phone was supplied as a value that cannot become a phone field
    #[error("Invalid phone type: {0}")]
    InvalidType(String),

    /// Lookup by key or by value found no match
    #[error("Not found: {0}")]
    NotFound(String),

    /// The persisted contacts file does not exist
    #[error("File not found: {}", .0.display())]
    PersistenceMissing(PathBuf),

    /// The persisted document uses a schema this build does not understand
    #[error("Unsupported contacts file version: {0}")]
    UnsupportedVersion(u32),

    /// Reading or writing the contacts file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The contacts file is not valid JSON for the schema
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContactBookError {
    /// Whether the caller can carry on with the book in its prior state.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::PersistenceMissing(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
