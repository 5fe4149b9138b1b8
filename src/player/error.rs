//! Error types for mover settings loading.

use thiserror::Error;

/// Errors that can occur when loading `mover.ron`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A tunable is NaN, infinite, or out of its allowed range.
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: &'static str, value: f32 },
}
