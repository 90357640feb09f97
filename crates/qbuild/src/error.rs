//! Error types for qbuild

use thiserror::Error;

/// Result type alias for query building operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for query building
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A numeric clause argument (LIMIT, OFFSET, id) could not be
    /// interpreted as a whole number
    #[error("Type conversion error: {0}")]
    TypeConversion(String),

    /// A placeholder argument was supplied but is not a key/value mapping
    #[error("Type argument error: {0}")]
    TypeArgument(String),
}

impl QueryError {
    /// Create a type conversion error
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion(message.into())
    }

    /// Create a type argument error
    pub fn argument(message: impl Into<String>) -> Self {
        Self::TypeArgument(message.into())
    }

    /// Check if this is a type conversion error
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::TypeConversion(_))
    }

    /// Check if this is a type argument error
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::TypeArgument(_))
    }
}
