//! Blocking HTTP client for the upstream tab site.
//!
//! One request per operation, no retries; callers decide whether to try
//! again. The site serves real pages only to browser-looking agents.

use std::time::Duration;

use serde_json::Value;

use crate::model::{Search, SongDetail};
use crate::store::extract_store;
use crate::FetchError;

const SEARCH_URL: &str = "https://www.ultimate-guitar.com/search.php";
const TAB_BASE_URL: &str = "https://tabs.ultimate-guitar.com/tab/";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.3";
const TIMEOUT: Duration = Duration::from_secs(30);

/// Synchronous fetch adapter for search and tab pages.
pub struct UgClient {
    http: reqwest::blocking::Client,
}

impl UgClient {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// Title search, one result page at a time (pages start at 1).
    pub fn search(&self, term: &str, page: u32) -> Result<Search, FetchError> {
        tracing::debug!(term, page, "searching");
        let page = page.max(1).to_string();
        let store = self
            .fetch_store(
                SEARCH_URL,
                &[("search_type", "title"), ("value", term), ("page", page.as_str())],
            )
            .map_err(|e| {
                tracing::debug!(error = %e, "search fetch failed");
                FetchError::new(format!("could not find any chords for '{term}'"))
            })?;
        Search::from_value(&store)
    }

    /// Fetch and parse one tab page by its URL path.
    pub fn tab(&self, url_path: &str) -> Result<SongDetail, FetchError> {
        let url = format!("{TAB_BASE_URL}{}", tab_request_path(url_path));
        tracing::debug!(%url, "fetching tab");
        let store = self.fetch_store(&url, &[]).map_err(|e| {
            tracing::debug!(error = %e, "tab fetch failed");
            FetchError::new(format!("could not load tab '{url_path}'"))
        })?;
        SongDetail::from_value(&store)
    }

    fn fetch_store(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        let body = self
            .http
            .get(url)
            .query(query)
            .send()?
            .error_for_status()?
            .text()?;
        extract_store(&body)
    }
}

/// Accept both the bare `artist/song-123` form and the `/tab/...` path
/// that search results carry.
fn tab_request_path(url_path: &str) -> &str {
    let path = url_path.trim_start_matches('/');
    path.strip_prefix("tab/").unwrap_or(path)
}
