//! Error types for sqlweave

use thiserror::Error;

/// Result type alias for rendering operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors surfaced while rendering an expression or statement.
///
/// A failure from a nested expression is returned as-is, so the kind seen by
/// the caller is always the kind of the node that actually failed.
#[derive(Debug, Error)]
pub enum SqlError {
    /// A structurally required clause is absent
    #[error("Missing clause: {0}")]
    MissingClause(String),

    /// An operator has no rendering in this position
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// Negating a node that has no inverse
    #[error("Unsupported inversion: {0}")]
    UnsupportedInversion(String),

    /// An operand outside what its operator accepts
    #[error("Malformed operand: {0}")]
    MalformedOperand(String),

    /// The output buffer refused a write
    #[error("Write error: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Error kinds, independent of the message payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingClause,
    UnsupportedOperator,
    UnsupportedInversion,
    MalformedOperand,
    Write,
}

impl SqlError {
    /// Create a missing clause error
    pub fn missing_clause(message: impl Into<String>) -> Self {
        Self::MissingClause(message.into())
    }

    /// Create an unsupported operator error
    pub fn unsupported_operator(message: impl Into<String>) -> Self {
        Self::UnsupportedOperator(message.into())
    }

    /// Create an unsupported inversion error
    pub fn unsupported_inversion(message: impl Into<String>) -> Self {
        Self::UnsupportedInversion(message.into())
    }

    /// Create a malformed operand error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedOperand(message.into())
    }

    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingClause(_) => ErrorKind::MissingClause,
            Self::UnsupportedOperator(_) => ErrorKind::UnsupportedOperator,
            Self::UnsupportedInversion(_) => ErrorKind::UnsupportedInversion,
            Self::MalformedOperand(_) => ErrorKind::MalformedOperand,
            Self::Write(_) => ErrorKind::Write,
        }
    }

    /// Check if this is a missing clause error
    pub fn is_missing_clause(&self) -> bool {
        matches!(self, Self::MissingClause(_))
    }

    /// Check if this is a malformed operand error
    pub fn is_malformed_operand(&self) -> bool {
        matches!(self, Self::MalformedOperand(_))
    }

    /// Check if this is an unsupported operator error
    pub fn is_unsupported_operator(&self) -> bool {
        matches!(self, Self::UnsupportedOperator(_))
    }

    /// Check if this is an unsupported inversion error
    pub fn is_unsupported_inversion(&self) -> bool {
        matches!(self, Self::UnsupportedInversion(_))
    }
}
