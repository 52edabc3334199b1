//! Errors from fetching and decoding papers.

use thiserror::Error;

/// Anything that can go wrong between asking a source for papers and
/// holding a `Vec<Paper>`.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Transport failure: DNS, TLS, connect, timeout, body read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with success.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The body was not a feed we understand, or the API reported an error
    /// inside one.
    #[error("malformed feed: {0}")]
    Feed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        assert_eq!(ScanError::Status(503).to_string(), "server returned HTTP 503");
        assert_eq!(
            ScanError::Feed("no entries".into()).to_string(),
            "malformed feed: no entries"
        );
    }
}
