//! Error types for screen queries.

use thiserror::Error;

/// Failure of a [`Screen`](crate::Screen) query.
///
/// Every variant carries the pretty-printed tree that was searched so a
/// failing assertion shows what was actually rendered.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QueryError {
    /// Nothing matched.
    #[error("unable to find {query}\n\nrendered tree:\n{tree}")]
    NotFound {
        /// Human-readable description of the query.
        query: String,
        /// The searched tree.
        tree: String,
    },

    /// More than one element matched a query that expects exactly one.
    #[error("found {count} elements for {query}, expected exactly one\n\nrendered tree:\n{tree}")]
    Multiple {
        /// Human-readable description of the query.
        query: String,
        /// Number of matches.
        count: usize,
        /// The searched tree.
        tree: String,
    },

    /// Heading levels run from 1 to 6.
    #[error("heading level must be between 1 and 6, got {0}")]
    InvalidHeadingLevel(u8),
}

/// Result type for screen queries.
pub type QueryResult<T> = Result<T, QueryError>;
