//! Song and search data model.
//!
//! The upstream payload is one sprawling JSON document; only a thin slice
//! of it matters here, so the model is built by walking `serde_json::Value`
//! rather than deserializing the whole shape. Any missing or mistyped
//! field aborts the parse with a `FetchError` naming the field.

use serde::Serialize;
use serde_json::Value;

use crate::diagrams::{self, ChordShapes, Fingerings};
use crate::FetchError;

/// One row of a search (or alternative-versions) listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub artist_name: String,
    pub song_name: String,
    /// Path component of the tab page URL, e.g. `/tab/artist/song-123`.
    pub tab_url: String,
    pub artist_url: String,
    /// Upstream type tag (`Chords`, `Tabs`, ...). Opaque here.
    pub kind: String,
    pub version: u32,
    pub votes: u64,
    /// Rounded to one decimal.
    pub rating: f64,
}

impl SearchResult {
    pub fn from_value(value: &Value) -> Result<Self, FetchError> {
        Ok(Self {
            artist_name: required_str(value, "artist_name")?,
            song_name: required_str(value, "song_name")?,
            tab_url: url_path(&required_str(value, "tab_url")?),
            artist_url: optional_str(value, "artist_url").unwrap_or_default(),
            kind: required_str(value, "type")?,
            version: value.get("version").and_then(as_u64).unwrap_or(1) as u32,
            votes: value.get("votes").and_then(as_u64).unwrap_or(0),
            rating: round1(value.get("rating").and_then(Value::as_f64).unwrap_or(0.0)),
        })
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Search {
    pub results: Vec<SearchResult>,
    pub current_page: u32,
    pub total_pages: u32,
}

impl Search {
    /// Build from a decoded search-page store payload.
    pub fn from_value(store: &Value) -> Result<Self, FetchError> {
        let data = walk(store, &["store", "page", "data"])?;
        let raw_results = walk(data, &["results"])?
            .as_array()
            .ok_or_else(|| shape_error("results"))?;

        let mut results = Vec::with_capacity(raw_results.len());
        for raw in raw_results {
            if listed_kind(raw) {
                results.push(SearchResult::from_value(raw)?);
            }
        }

        let pagination = walk(data, &["pagination"])?;
        Ok(Self {
            results,
            current_page: pagination.get("current").and_then(as_u64).unwrap_or(1) as u32,
            total_pages: pagination.get("total").and_then(as_u64).unwrap_or(1) as u32,
        })
    }
}

/// A fully parsed tab page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SongDetail {
    pub artist_name: String,
    pub song_name: String,
    pub version: u32,
    pub kind: String,
    pub rating: f64,
    pub difficulty: Option<String>,
    pub capo: Option<String>,
    pub key: Option<String>,
    /// `VALUE (NAME)`, e.g. `E A D G B E (Standard)`.
    pub tuning: Option<String>,
    pub tab_url: String,
    pub tab_url_path: String,
    /// Raw transcript with CRLF normalized to LF, markup intact.
    pub raw_tab: String,
    /// Alternative versions of the same song.
    pub versions: Vec<SearchResult>,
    pub chords: ChordShapes,
    pub fingerings: Fingerings,
}

impl SongDetail {
    /// Build from a decoded tab-page store payload.
    pub fn from_value(store: &Value) -> Result<Self, FetchError> {
        let data = walk(store, &["store", "page", "data"])?;
        let tab = walk(data, &["tab"])?;
        let tab_view = walk(data, &["tab_view"])?;

        let raw_tab = walk(tab_view, &["wiki_tab", "content"])?
            .as_str()
            .ok_or_else(|| shape_error("wiki_tab.content"))?
            .replace("\r\n", "\n");

        // `meta` is sometimes an empty array instead of an object.
        let meta = tab_view.get("meta").filter(|m| m.is_object());
        let capo = meta
            .and_then(|m| m.get("capo"))
            .and_then(value_to_display);
        let tuning = meta
            .and_then(|m| m.get("tuning"))
            .filter(|t| t.is_object())
            .and_then(|t| {
                let value = t.get("value")?.as_str()?;
                let name = t.get("name")?.as_str()?;
                Some(format!("{value} ({name})"))
            });

        let mut versions = Vec::new();
        if let Some(raw_versions) = tab_view.get("versions").and_then(Value::as_array) {
            for raw in raw_versions {
                if listed_kind(raw) {
                    versions.push(SearchResult::from_value(raw)?);
                }
            }
        }

        let (chords, fingerings) = match tab_view.get("applicature") {
            Some(applicature) => diagrams::derive(applicature),
            None => Default::default(),
        };

        let tab_url = required_str(tab, "tab_url")?;
        Ok(Self {
            artist_name: required_str(tab, "artist_name")?,
            song_name: required_str(tab, "song_name")?,
            version: tab.get("version").and_then(as_u64).unwrap_or(1) as u32,
            kind: optional_str(tab, "type").unwrap_or_default(),
            rating: round1(tab.get("rating").and_then(Value::as_f64).unwrap_or(0.0)),
            difficulty: optional_str(tab_view, "ug_difficulty"),
            capo,
            key: optional_str(tab, "tonality_name"),
            tuning,
            tab_url_path: url_path(&tab_url),
            tab_url,
            raw_tab,
            versions,
            chords,
            fingerings,
        })
    }
}

/// Listing filter: drop entries without a type tag and the paid
/// `Pro`/`Official` renditions, which carry no transcript.
fn listed_kind(value: &Value) -> bool {
    match value.get("type").and_then(Value::as_str) {
        Some(kind) => !kind.is_empty() && kind != "Pro" && kind != "Official",
        None => false,
    }
}

// =========================================================================
// Value helpers
// =========================================================================

fn walk<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value, FetchError> {
    let mut current = value;
    for key in path {
        current = current.get(key).ok_or_else(|| shape_error(key))?;
    }
    Ok(current)
}

fn shape_error(field: &str) -> FetchError {
    FetchError::new(format!("unexpected page data: missing '{field}'"))
}

fn required_str(value: &Value, key: &str) -> Result<String, FetchError> {
    optional_str(value, key).ok_or_else(|| shape_error(key))
}

fn optional_str(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Accept numbers or numeric strings; the upstream payload mixes both.
fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Render a scalar metadata value (capo is a number, sometimes a string).
fn value_to_display(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Path component of an absolute URL (scheme-less inputs pass through).
fn url_path(url: &str) -> String {
    match url.find("://") {
        Some(scheme_end) => {
            let rest = &url[scheme_end + 3..];
            match rest.find('/') {
                Some(slash) => rest[slash..].to_string(),
                None => "/".to_string(),
            }
        }
        None => url.to_string(),
    }
}
