//! Unified error types for the domain layer
//!
//! The character model itself has no failure modes once a base record exists.
//! Errors only arise at the edges: parsing vocabulary names and validating
//! records that come from outside.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for vocabulary types)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for records that break a model invariant.
    ///
    /// # Example
    /// ```ignore
    /// if base.classes.iter().any(|c| c.hit_dice < 1) {
    ///     return Err(DomainError::validation("hit die must have at least one side"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
