//! BTDigg search provider.
//!
//! Talks to BTDigg's public plain-text API: one record per line, fields
//! separated by tabs, `#`-prefixed lines are comments. Records are emitted
//! to the sink as they are parsed; a malformed line aborts the scan and the
//! remainder of the response is discarded.

use async_trait::async_trait;
use futures::StreamExt;

use super::SearchProvider;
use crate::errors::SearchError;
use crate::sink::ResultSink;
use crate::types::TorrentResult;

/// BTDigg search provider.
///
/// Holds the HTTP client and the API base URL. The public endpoint is fixed;
/// `with_api_base` exists so hosts and tests can point the provider at a
/// different server.
#[derive(Debug)]
pub struct BtDiggProvider {
    client: reqwest::Client,
    api_base: String,
}

impl BtDiggProvider {
    /// Display name advertised to hosts.
    pub const ENGINE_NAME: &'static str = "BTDigg";

    /// Engine URL constant, reported in every emitted record.
    pub const ENGINE_URL: &'static str = "http://btdigg.org";

    const API_BASE: &'static str = "http://api.btdigg.org/api/public-8e9a50f8335b964f";

    /// Creates a provider against the fixed public BTDigg endpoint.
    pub fn new() -> Self {
        Self::with_api_base(Self::API_BASE.to_string())
    }

    /// Creates a provider against a custom API base URL.
    pub fn with_api_base(api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
        }
    }

    /// Category mapping advertised for host introspection.
    ///
    /// BTDigg has no category filtering; the only entry is `all`, mapped to
    /// an empty API token.
    pub fn supported_categories() -> &'static [(&'static str, &'static str)] {
        &[("all", "")]
    }

    /// Undo the host's double-encoding: percent-decode the incoming query,
    /// then turn literal `+` into spaces.
    fn normalize_query(query: &str) -> Result<String, SearchError> {
        let decoded = urlencoding::decode(query).map_err(|e| SearchError::DecodeError {
            reason: format!("query is not valid UTF-8 after percent-decoding: {e}"),
        })?;
        Ok(decoded.replace('+', " "))
    }

    /// Build the outbound request URL for a normalized query.
    ///
    /// The query is percent-encoded with spaces as `%20`, never `+`.
    fn search_url(&self, query: &str) -> String {
        format!("{}/s01?q={}", self.api_base, urlencoding::encode(query))
    }

    /// Parse one response line into a result.
    ///
    /// Returns `Ok(None)` for comment lines. Requires at least six tab
    /// fields: info_hash, name, files, size, peer count, last-seen (files
    /// and last-seen are read but unused; extra fields are ignored).
    fn parse_line(line: &str, query: &str) -> Result<Option<TorrentResult>, SearchError> {
        if line.starts_with('#') {
            return Ok(None);
        }

        let line = line.trim();
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 6 {
            return Err(SearchError::ParseError {
                reason: format!(
                    "expected at least 6 tab-separated fields, got {}",
                    fields.len()
                ),
            });
        }

        let info_hash = fields[0];
        let name = fields[1].replace('|', "");
        let size = fields[3];
        let seeds = fields[4]
            .parse::<u32>()
            .map_err(|_| SearchError::ParseError {
                reason: format!("invalid peer count '{}'", fields[4]),
            })?;

        Ok(Some(TorrentResult {
            link: format!(
                "magnet:?xt=urn:btih:{}&dn={}",
                info_hash,
                urlencoding::encode(&name)
            ),
            name,
            size: size.to_string(),
            seeds,
            leech: seeds,
            engine_url: Self::ENGINE_URL.to_string(),
            desc_link: format!(
                "{}/search?info_hash={}&q={}",
                Self::ENGINE_URL,
                urlencoding::encode(info_hash),
                urlencoding::encode(query)
            ),
        }))
    }

    /// Decode one buffered line and emit it if it parses to a record.
    fn emit_line(
        line_bytes: &[u8],
        query: &str,
        sink: &mut dyn ResultSink,
    ) -> Result<(), SearchError> {
        let line = std::str::from_utf8(line_bytes).map_err(|e| SearchError::DecodeError {
            reason: format!("response line is not valid UTF-8: {e}"),
        })?;
        if let Some(result) = Self::parse_line(line, query)? {
            tracing::trace!(name = %result.name, seeds = result.seeds, "emitting result");
            sink.emit(result);
        }
        Ok(())
    }
}

impl Default for BtDiggProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for BtDiggProvider {
    async fn search(
        &self,
        query: &str,
        _category: &str,
        sink: &mut dyn ResultSink,
    ) -> Result<(), SearchError> {
        let query = Self::normalize_query(query)?;
        let url = self.search_url(&query);
        tracing::debug!(%url, "requesting BTDigg search");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::NetworkError {
                reason: format!("BTDigg request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(SearchError::SearchFailed {
                query,
                reason: format!("BTDigg HTTP {}", response.status()),
            });
        }

        // The body streams chunk by chunk; lines can span chunk boundaries,
        // so carry the unterminated tail in `buf`. Any early return drops
        // the stream and with it the connection.
        let mut stream = response.bytes_stream();
        let mut buf: Vec<u8> = Vec::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| SearchError::NetworkError {
                reason: format!("BTDigg transfer failed: {e}"),
            })?;
            buf.extend_from_slice(&chunk);

            while let Some(pos) = buf.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buf.drain(..=pos).collect();
                Self::emit_line(&line, &query, sink)?;
            }
        }

        // Final line without a trailing newline.
        if !buf.is_empty() {
            Self::emit_line(&buf, &query, sink)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUERY: &str = "foo bar";

    #[test]
    fn parse_line_builds_full_record() {
        let line = "abc123\tMy|Movie\t10\t700MB\t42\t2023-01-01";
        let result = BtDiggProvider::parse_line(line, QUERY).unwrap().unwrap();

        assert_eq!(result.name, "MyMovie");
        assert_eq!(result.size, "700MB");
        assert_eq!(result.seeds, 42);
        assert_eq!(result.leech, 42);
        assert_eq!(result.link, "magnet:?xt=urn:btih:abc123&dn=MyMovie");
        assert_eq!(result.engine_url, "http://btdigg.org");
        assert_eq!(
            result.desc_link,
            "http://btdigg.org/search?info_hash=abc123&q=foo%20bar"
        );
    }

    #[test]
    fn parse_line_seeds_and_leech_are_equal() {
        let line = "hash\tName\t1\t1GB\t7\t2023-05-05";
        let result = BtDiggProvider::parse_line(line, QUERY).unwrap().unwrap();
        assert_eq!(result.seeds, result.leech);
    }

    #[test]
    fn parse_line_skips_comments() {
        assert!(
            BtDiggProvider::parse_line("# ping", QUERY)
                .unwrap()
                .is_none()
        );
        assert!(
            BtDiggProvider::parse_line("#hash\tname\t1\t1GB\t2\tseen", QUERY)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn parse_line_strips_pipes_from_name_and_magnet() {
        let line = "hash\t|a|b|c|\t1\t1GB\t2\t2023-01-01";
        let result = BtDiggProvider::parse_line(line, QUERY).unwrap().unwrap();
        assert_eq!(result.name, "abc");
        assert!(!result.link.contains('|'));
    }

    #[test]
    fn parse_line_percent_encodes_name_in_magnet() {
        let line = "hash\tTwo Words\t1\t1GB\t2\t2023-01-01";
        let result = BtDiggProvider::parse_line(line, QUERY).unwrap().unwrap();
        assert_eq!(result.link, "magnet:?xt=urn:btih:hash&dn=Two%20Words");
    }

    #[test]
    fn parse_line_link_and_desc_link_share_info_hash() {
        let line = "deadbeef\tName\t3\t1GB\t9\t2023-01-01";
        let result = BtDiggProvider::parse_line(line, QUERY).unwrap().unwrap();
        assert!(result.link.contains("urn:btih:deadbeef"));
        assert!(result.desc_link.contains("info_hash=deadbeef"));
    }

    #[test]
    fn parse_line_ignores_extra_fields() {
        let line = "hash\tName\t1\t1GB\t2\t2023-01-01\textra\tfields";
        let result = BtDiggProvider::parse_line(line, QUERY).unwrap().unwrap();
        assert_eq!(result.name, "Name");
    }

    #[test]
    fn parse_line_rejects_short_lines() {
        let err = BtDiggProvider::parse_line("hash\tName\t1GB", QUERY).unwrap_err();
        assert!(matches!(err, SearchError::ParseError { .. }));

        let err = BtDiggProvider::parse_line("", QUERY).unwrap_err();
        assert!(matches!(err, SearchError::ParseError { .. }));
    }

    #[test]
    fn parse_line_rejects_non_numeric_peer_count() {
        let line = "hash\tName\t1\t1GB\tmany\t2023-01-01";
        let err = BtDiggProvider::parse_line(line, QUERY).unwrap_err();
        assert!(matches!(err, SearchError::ParseError { .. }));
    }

    #[test]
    fn normalize_query_undoes_double_encoding() {
        assert_eq!(
            BtDiggProvider::normalize_query("foo%20bar+baz").unwrap(),
            "foo bar baz"
        );
        assert_eq!(BtDiggProvider::normalize_query("plain").unwrap(), "plain");
    }

    #[test]
    fn search_url_encodes_spaces_as_percent20() {
        let provider = BtDiggProvider::with_api_base("http://example.test/api/x".to_string());
        assert_eq!(
            provider.search_url("foo bar"),
            "http://example.test/api/x/s01?q=foo%20bar"
        );
    }

    #[test]
    fn supported_categories_contains_only_all() {
        assert_eq!(BtDiggProvider::supported_categories(), [("all", "")]);
    }
}
