//! Error types for trifuzzy

use thiserror::Error;

use crate::number::FuzzyParseError;

/// Main error type for fuzzy number operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    /// An aggregate was requested over a collection with no elements
    #[error("{operation}: the set is empty")]
    EmptyCollection {
        /// Name of the operation that needed at least one element
        operation: &'static str,
    },

    /// Text could not be read as a fuzzy number
    #[error(transparent)]
    Parse(#[from] FuzzyParseError),
}

/// Result type alias for fuzzy number operations
pub type Result<T> = std::result::Result<T, FuzzyError>;
