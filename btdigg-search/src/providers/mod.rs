//! Provider implementations for torrent search functionality.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::sink::ResultSink;

pub mod btdigg;

pub use btdigg::BtDiggProvider;

/// Trait for torrent search providers.
///
/// Implementations issue one request per call and stream each normalized
/// result to the sink as soon as its response line is parsed; results are
/// never buffered into a collection inside the provider.
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Search for torrents by query and category, emitting results via `sink`.
    ///
    /// # Errors
    /// - `SearchError::NetworkError` - Request or transfer failed
    /// - `SearchError::SearchFailed` - Non-success HTTP status
    /// - `SearchError::ParseError` - Malformed response line (aborts the scan)
    /// - `SearchError::DecodeError` - Response bytes were not valid UTF-8
    async fn search(
        &self,
        query: &str,
        category: &str,
        sink: &mut dyn ResultSink,
    ) -> Result<(), SearchError>;
}
