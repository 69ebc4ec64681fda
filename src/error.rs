//! Error types for rs-article-text.
//!
//! This module defines the error types returned by formatting and
//! configuration operations.

use std::num::ParseIntError;

/// Error type for formatting operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A score attribute carried a value that is not an integer.
    ///
    /// Scores are written by the upstream scorer, so this signals a broken
    /// scoring pass rather than messy input.
    #[error("malformed score attribute value {value:?}: {source}")]
    MalformedScore {
        /// The raw attribute value.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The unlikely pattern failed to compile.
    #[error("invalid unlikely pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The nodes-to-keep selector failed to compile.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

/// Result type alias for formatting operations.
pub type Result<T> = std::result::Result<T, Error>;
