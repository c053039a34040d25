//! BTDigg Search - search provider plugin for torrent search hosts

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Queries BTDigg's public tab-delimited API and streams normalized result
//! records to a host-supplied sink, one record per response line, in server
//! order.

pub mod errors;
pub mod providers;
pub mod sink;
pub mod types;

// Re-export main types
pub use errors::SearchError;
pub use providers::{BtDiggProvider, SearchProvider};
pub use sink::{JsonSink, ResultSink, StdoutSink};
pub use types::TorrentResult;

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
