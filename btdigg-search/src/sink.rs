//! Result sinks: where parsed records go.
//!
//! The provider hands each record to a [`ResultSink`] as soon as its line is
//! parsed. The sink is the host framework's collaborator; the stock
//! implementations here cover the standalone CLI and in-memory collection.

use crate::types::TorrentResult;

/// Receives normalized results one at a time, in server-line order.
pub trait ResultSink: Send {
    /// Consume one parsed result.
    fn emit(&mut self, result: TorrentResult);
}

/// Collecting sink for hosts and tests that want the full list.
impl ResultSink for Vec<TorrentResult> {
    fn emit(&mut self, result: TorrentResult) {
        self.push(result);
    }
}

/// Prints one pipe-delimited line per result on stdout.
///
/// Matches the line format torrent-search host frameworks expect from their
/// engine plugins: `link|name|size|seeds|leech|engine_url`. The `name` field
/// has pipes stripped upstream, so the delimiter is unambiguous.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Creates a new stdout sink.
    pub fn new() -> Self {
        Self
    }
}

impl ResultSink for StdoutSink {
    fn emit(&mut self, result: TorrentResult) {
        println!(
            "{}|{}|{}|{}|{}|{}",
            result.link, result.name, result.size, result.seeds, result.leech, result.engine_url
        );
    }
}

/// Prints one JSON object per result on stdout.
#[derive(Debug, Default)]
pub struct JsonSink;

impl JsonSink {
    /// Creates a new JSON-lines sink.
    pub fn new() -> Self {
        Self
    }
}

impl ResultSink for JsonSink {
    fn emit(&mut self, result: TorrentResult) {
        match serde_json::to_string(&result) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::warn!("failed to serialize result '{}': {e}", result.name),
        }
    }
}
