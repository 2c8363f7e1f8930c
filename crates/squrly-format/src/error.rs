/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for building template arguments from text.
//!
//! Substitution itself never fails. These errors only come from the helpers in
//! [`crate::args`] that turn command-line style input into argument values.

use thiserror::Error;

/// Errors that can occur while building template arguments.
#[derive(Debug, Error)]
pub enum SqurlyError {
    /// A `KEY=VALUE` assignment was missing its `=` or had a non-alphanumeric key.
    #[error("Invalid assignment '{text}': expected KEY=VALUE with an alphanumeric key")]
    InvalidAssignment { text: String },

    /// Argument data was not valid JSON.
    #[error("Invalid JSON data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// Result type for argument helpers.
pub type SqurlyResult<T> = Result<T, SqurlyError>;
