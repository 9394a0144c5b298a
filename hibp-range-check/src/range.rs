use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::digest::PasswordDigest;
use crate::error::Error;

/// Base URL of the Pwned Passwords range endpoint. The prefix is appended as a path segment.
pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com/range";

/// Default whole-request timeout for range lookups.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Settings for [`RangeClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_url: DEFAULT_API_URL.to_string(), timeout: DEFAULT_TIMEOUT }
    }
}

/// Client for the k-anonymity range API.
///
/// Only the 5 character hash prefix is sent; every suffix sharing that prefix
/// comes back and the match is made locally by [`parse_range_body`].
#[derive(Debug, Clone)]
pub struct RangeClient {
    http: reqwest::Client,
    api_url: String,
}

impl RangeClient {
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self { http, api_url: config.api_url.trim_end_matches('/').to_string() })
    }

    /// Downloads the range body for `prefix`.
    ///
    /// Anything other than `200 OK` is reported as [`Error::HttpStatus`]; transport
    /// failures, including the timeout, as [`Error::HttpRequest`].
    #[instrument(skip_all, fields(prefix = %prefix))]
    pub async fn fetch_range(&self, prefix: &str) -> Result<String, Error> {
        let url = format!("{}/{}", self.api_url, prefix);
        debug!(%url, "requesting range");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        let status = response.status();
        debug!(status = status.as_u16(), "range response");
        if status != StatusCode::OK {
            return Err(Error::HttpStatus { prefix: prefix.to_string(), status: status.as_u16() });
        }

        response
            .text()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })
    }

    /// Returns how many times the password behind `digest` was seen in breaches, or 0.
    pub async fn breach_count(&self, digest: &PasswordDigest) -> Result<u64, Error> {
        let body = self.fetch_range(digest.prefix()).await?;
        parse_range_body(&body, digest.suffix())
    }
}

/// Scans a range response for `suffix` and returns its count, or 0 if absent.
///
/// The body is newline separated `SUFFIX:COUNT` records. Blank lines are
/// skipped. Records are checked in order up to the first match; a record
/// without a `:` or with a non-numeric count fails with
/// [`Error::MalformedRecord`] instead of being skipped.
pub fn parse_range_body(body: &str, suffix: &str) -> Result<u64, Error> {
    let mut scanned = 0usize;

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        scanned += 1;

        let Some((record_suffix, count)) = line.split_once(':') else {
            return Err(malformed(line, "missing ':' delimiter"));
        };
        let count: u64 =
            count.trim().parse().map_err(|_| malformed(line, "count is not an unsigned integer"))?;

        if record_suffix.eq_ignore_ascii_case(suffix) {
            debug!(scanned, "suffix found in range");
            return Ok(count);
        }
    }

    debug!(scanned, "suffix not found in range");
    Ok(0)
}

fn malformed(line: &str, reason: &'static str) -> Error {
    Error::MalformedRecord { line: line.to_string(), reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Suffix of SHA1("password") = 5BAA6|1E4C9B93F3F0682250B6CF8331B7EE68FD8
    const PASSWORD_SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

    #[test]
    fn test_match_returns_count() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3\r\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:9545824\r\n\
                    1E4FE2C34D1B73F4E6C3E3C5D7E7A1C0C3A:1\r\n";
        assert_eq!(parse_range_body(body, PASSWORD_SUFFIX).unwrap(), 9545824);
    }

    #[test]
    fn test_no_match_returns_zero() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3\n\
                    1E4FE2C34D1B73F4E6C3E3C5D7E7A1C0C3A:1\n";
        assert_eq!(parse_range_body(body, PASSWORD_SUFFIX).unwrap(), 0);
    }

    #[test]
    fn test_empty_body_returns_zero() {
        assert_eq!(parse_range_body("", PASSWORD_SUFFIX).unwrap(), 0);
        assert_eq!(parse_range_body("\r\n\n", PASSWORD_SUFFIX).unwrap(), 0);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let body = "1e4c9b93f3f0682250b6cf8331b7ee68fd8:42\n";
        assert_eq!(parse_range_body(body, PASSWORD_SUFFIX).unwrap(), 42);
    }

    #[test]
    fn test_suffix_must_match_exactly() {
        // A longer record that merely starts with the suffix is not a match.
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD80:7\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD:8\n";
        assert_eq!(parse_range_body(body, PASSWORD_SUFFIX).unwrap(), 0);
    }

    #[test]
    fn test_first_match_wins() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:1\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:2\n";
        assert_eq!(parse_range_body(body, PASSWORD_SUFFIX).unwrap(), 1);
    }

    #[test]
    fn test_missing_delimiter_fails() {
        let body = "003D68EB55068C33ACE09247EE4C639306B3\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:9545824\n";
        match parse_range_body(body, PASSWORD_SUFFIX) {
            Err(Error::MalformedRecord { line, .. }) => {
                assert_eq!(line, "003D68EB55068C33ACE09247EE4C639306B3");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_count_fails() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:lots\n";
        assert!(matches!(
            parse_range_body(body, PASSWORD_SUFFIX),
            Err(Error::MalformedRecord { reason: "count is not an unsigned integer", .. })
        ));
    }

    #[test]
    fn test_lines_after_match_are_not_inspected() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:5\ngarbage\n";
        assert_eq!(parse_range_body(body, PASSWORD_SUFFIX).unwrap(), 5);
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "https://api.pwnedpasswords.com/range");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
