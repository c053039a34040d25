//! Data types for search results.

use serde::{Deserialize, Serialize};

/// Normalized search result, one per valid response line.
///
/// Field names are the contract with the host framework's result printer;
/// they serialize as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentResult {
    /// Magnet URI built from the line's info-hash and display name.
    pub link: String,
    /// Display name with pipe characters stripped.
    pub name: String,
    /// Size string, passed through from the source unmodified.
    pub size: String,
    /// Peer count reported by the source.
    pub seeds: u32,
    /// Same value as `seeds`; the source reports a single count.
    pub leech: u32,
    /// Constant identifying this provider.
    pub engine_url: String,
    /// Detail-page URL embedding the info-hash and the original query.
    pub desc_link: String,
}
