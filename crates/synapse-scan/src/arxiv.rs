//! arXiv client — one blocking GET against the export API, Atom decoded
//! with a handful of regexes.
//!
//! The Atom the export API returns is flat and regular (`<entry>` blocks
//! with `<id>`, `<title>`, `<summary>` children), so a full XML parser
//! would buy nothing here. What does matter:
//!
//! - arXiv reports query errors as a 200 response containing a single
//!   entry whose `<id>` points at `/api/errors`; that is surfaced as
//!   [`ScanError::Feed`], not as a paper titled "Error".
//! - Titles and summaries are hard-wrapped in the feed; whitespace runs are
//!   collapsed so they render on one line.
//! - Text is unescaped the way an XML parser would: named and numeric
//!   character references are decoded in a single pass, CDATA is taken
//!   literally.

use std::borrow::Cow;
use std::sync::LazyLock;
use std::time::Duration;

use regex::{Captures, Regex};
use reqwest::blocking::Client;

use crate::error::ScanError;
use crate::paper::Paper;
use crate::source::{PaperSource, Query};

/// Export API endpoint.
pub const ARXIV_ENDPOINT: &str = "https://export.arxiv.org/api/query";

/// Domain recorded on every paper from this client.
pub const ARXIV_DOMAIN: &str = "arxiv.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<entry\b[^>]*>(.*?)</entry>").expect("valid regex"));
static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<id\b[^>]*>(.*?)</id>").expect("valid regex"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<title\b[^>]*>(.*?)</title>").expect("valid regex"));
static SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<summary\b[^>]*>(.*?)</summary>").expect("valid regex"));
static CDATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("valid regex"));
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[xX]([0-9A-Fa-f]+)|#([0-9]+)|(lt|gt|quot|apos|amp));").expect("valid regex")
});

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Blocking arXiv export API client.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    http: Client,
    endpoint: String,
}

impl ArxivClient {
    /// Client for the public endpoint.
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, ScanError> {
        Self::with_endpoint(ARXIV_ENDPOINT)
    }

    /// Client for a custom endpoint (mirrors, local fixtures).
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialized.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, ScanError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("synapse-scanner/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

/// The `search_query` parameter for `terms`.
#[must_use]
pub fn search_query(terms: Option<&str>) -> String {
    terms.map_or_else(|| "all".to_owned(), |t| format!("all:{t}"))
}

impl PaperSource for ArxivClient {
    fn domain(&self) -> &str {
        ARXIV_DOMAIN
    }

    fn fetch(&self, query: &Query) -> Result<Vec<Paper>, ScanError> {
        let search = search_query(query.terms.as_deref());
        let max_results = query.max_results.to_string();
        tracing::debug!(endpoint = %self.endpoint, %search, %max_results, "querying arXiv");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("search_query", search.as_str()),
                ("start", "0"),
                ("max_results", max_results.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "arXiv returned an error status");
            return Err(ScanError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let papers = parse_feed(&body, ARXIV_DOMAIN)?;
        tracing::info!(count = papers.len(), "fetched papers");
        Ok(papers)
    }
}

// ---------------------------------------------------------------------------
// Atom decoding
// ---------------------------------------------------------------------------

/// Decode an Atom feed body into papers tagged with `domain`.
///
/// A feed with no entries is an empty result, not an error.
///
/// # Errors
///
/// - the body has no `<feed` element at all
/// - an entry lacks `<id>`, `<title>`, or `<summary>`
/// - the feed carries an arXiv API error entry
pub fn parse_feed(xml: &str, domain: &str) -> Result<Vec<Paper>, ScanError> {
    if !xml.contains("<feed") {
        return Err(ScanError::Feed("response is not an Atom feed".into()));
    }

    let mut papers = Vec::new();
    for (n, caps) in ENTRY_RE.captures_iter(xml).enumerate() {
        let entry = caps.get(1).map_or("", |m| m.as_str());
        let field = |re: &Regex, tag: &str| {
            re.captures(entry)
                .and_then(|c| c.get(1))
                .map(|m| clean_text(m.as_str()))
                .ok_or_else(|| ScanError::Feed(format!("entry {} has no <{tag}>", n + 1)))
        };

        let url = field(&ID_RE, "id")?;
        let summary = field(&SUMMARY_RE, "summary")?;
        if url.contains("/api/errors") {
            return Err(ScanError::Feed(summary));
        }
        let title = field(&TITLE_RE, "title")?;

        papers.push(Paper::new(title, summary, url, domain));
    }
    Ok(papers)
}

/// Unescape element text and collapse whitespace runs.
fn clean_text(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut last = 0;
    for caps in CDATA_RE.captures_iter(raw) {
        let (Some(section), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        text.push_str(&unescape(&raw[last..section.start()]));
        text.push_str(inner.as_str());
        last = section.end();
    }
    text.push_str(&unescape(&raw[last..]));
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode character and predefined entity references in one pass.
///
/// A numeric reference naming no valid scalar value is left as written.
fn unescape(text: &str) -> Cow<'_, str> {
    REFERENCE_RE.replace_all(text, |caps: &Captures<'_>| {
        let decoded = if let Some(hex) = caps.get(1) {
            u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
        } else if let Some(dec) = caps.get(2) {
            dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
        } else {
            match caps.get(3).map(|m| m.as_str()) {
                Some("lt") => Some('<'),
                Some("gt") => Some('>'),
                Some("quot") => Some('"'),
                Some("apos") => Some('\''),
                Some("amp") => Some('&'),
                _ => None,
            }
        };
        decoded.map_or_else(|| caps[0].to_owned(), String::from)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
