//! Schema registry error types.

use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {}", errors.join("; "))]
    ValidationFailed {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// One element of a JSON array did not pass schema validation.
    #[error("Element {index} failed validation: {}", errors.join("; "))]
    ElementInvalid { index: usize, errors: Vec<String> },

    /// Expected a JSON array of instances.
    #[error("Expected a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}
