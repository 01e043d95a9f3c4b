//! Error types for sqlfrag

use thiserror::Error;

/// Result type alias for sqlfrag operations
pub type FragResult<T> = Result<T, FragError>;

/// Errors surfaced by the fallible edges of fragment composition.
///
/// Misusing a fragment (appending bound arguments to an inline-only
/// resolution, or asking a raw selection for its column structure) is a
/// bug at the call site and panics instead; see the crate docs.
#[derive(Debug, Error)]
pub enum FragError {
    /// Identifier rejected by [`Ident::new`](crate::Ident::new)
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Rendered placeholders disagree with the bound argument count
    #[error(
        "Placeholder arity mismatch: sql references {placeholders} placeholder(s) \
         but {arguments} argument(s) are bound"
    )]
    ArityMismatch {
        /// Placeholders found in the SQL text
        placeholders: usize,
        /// Positional values held by the argument container
        arguments: usize,
    },
}

impl FragError {
    /// Create an invalid-identifier error with a custom message
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    /// Check if this error is a placeholder arity mismatch
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::ArityMismatch { .. })
    }
}
