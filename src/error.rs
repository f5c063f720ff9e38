//! Error types for cloudstatus operations.
//!
//! This module defines [`StatusError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `StatusError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `StatusError::Other`) for unexpected errors
//! - Validation problems are collected, never raised one at a time

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ValidationError;

/// Core error type for cloudstatus operations.
#[derive(Debug, Error)]
pub enum StatusError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The status block violates the schema. Carries every violation found.
    #[error("Invalid status configuration: {}", join_violations(.violations))]
    ConfigValidationError { violations: Vec<ValidationError> },

    /// A provider entry lacks a field the caller asked for.
    #[error("Status provider is missing field '{field}'")]
    MissingField { field: &'static str },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn join_violations(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for cloudstatus operations.
pub type Result<T> = std::result::Result<T, StatusError>;
