//! Embedded JSON extraction.
//!
//! Tab and search pages carry their whole state as an HTML-entity-encoded
//! JSON blob in `<div class="js-store" data-content="...">`. This module
//! finds the attribute, decodes the entities, and parses the JSON.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::FetchError;

static STORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<div[^>]*class="js-store"[^>]*data-content="([^"]*)""#)
        .expect("store pattern compiles")
});

/// Extract and parse the embedded page state from a raw HTML body.
pub fn extract_store(html: &str) -> Result<Value, FetchError> {
    let captures = STORE_RE
        .captures(html)
        .ok_or_else(|| FetchError::new("page contains no js-store data"))?;
    let raw = unescape_attr(&captures[1]);
    tracing::debug!(bytes = raw.len(), "decoded js-store payload");
    Ok(serde_json::from_str(&raw)?)
}

/// Decode the HTML entities used in attribute values. `&amp;` must go
/// last so it cannot manufacture new entities.
fn unescape_attr(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_and_decodes_store() {
        let html = r#"<html><body>
            <div class="js-store" data-content="{&quot;store&quot;:{&quot;n&quot;:1}}"></div>
        </body></html>"#;
        assert_eq!(extract_store(html).unwrap(), json!({"store": {"n": 1}}));
    }

    #[test]
    fn test_extra_attributes_before_data_content() {
        let html = r#"<div id="x" class="js-store" data-style="dark" data-content="{&quot;a&quot;:true}">"#;
        assert_eq!(extract_store(html).unwrap(), json!({"a": true}));
    }

    #[test]
    fn test_missing_store_is_an_error() {
        let err = extract_store("<html></html>").unwrap_err();
        assert!(err.message.contains("js-store"));
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let html = r#"<div class="js-store" data-content="not json">"#;
        assert!(extract_store(html).is_err());
    }

    #[test]
    fn test_unescape_order_keeps_literal_entities() {
        // `&amp;quot;` is a literal `&quot;` in the payload, not a quote.
        assert_eq!(unescape_attr("a &amp;quot; b"), "a &quot; b");
        assert_eq!(unescape_attr("x &lt;br&gt; &#039;y&#039;"), "x <br> 'y'");
    }
}
