//! Error types for search provider operations.

use thiserror::Error;

/// Errors that can occur while querying a tracker and scanning its response.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Search request was answered with a non-success HTTP status.
    #[error("Search failed for query '{query}': {reason}")]
    SearchFailed {
        /// The search query that failed
        query: String,
        /// The reason for the failure
        reason: String,
    },

    /// Network communication error occurred during the request or transfer.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// A response line did not match the expected tab-delimited layout.
    ///
    /// Scanning stops at the offending line; later lines in the same
    /// response are not processed.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// Response bytes or the incoming query were not valid UTF-8.
    #[error("Decode error: {reason}")]
    DecodeError {
        /// The reason for the decode error
        reason: String,
    },
}
