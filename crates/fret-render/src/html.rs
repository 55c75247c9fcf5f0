//! HTML and plain-text rendering.
//!
//! The HTML path works on the raw transcript string rather than the token
//! stream: whitespace is made display-safe first, then chord markers are
//! expanded in place. The canonical chord contract is a root letter A-G
//! with optional sharp/flat, a quality running up to the next `[` or `/`,
//! and an optional `/bass` with a root-shaped note.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CHORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[ch\](?P<root>[A-Ga-g][#b]?)(?P<quality>[^\[/]+)?(?P<bass>/[A-Ga-g][#b]?)?\[/ch\]")
        .expect("chord pattern compiles")
});

static BARE_CHORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[ch\]([^\[]*)\[/ch\]").expect("bare chord pattern compiles"));

/// Render the transcript as an annotated HTML fragment.
///
/// Newlines become `<br/>`, spaces become `&nbsp;` so the tab's column
/// alignment survives proportional rendering, and each chord marker
/// expands to nested spans for root, quality, and bass.
pub fn render_html(raw: &str) -> String {
    let tab = raw
        .replace("\r\n", "\n")
        .replace('\n', "<br/>")
        .replace(' ', "&nbsp;")
        .replace("[tab]", "")
        .replace("[/tab]", "");
    CHORD_RE.replace_all(&tab, chord_spans).into_owned()
}

/// Render the transcript as plain text with chord markers stripped down
/// to their bare chord names.
pub fn render_plain(raw: &str) -> String {
    let tab = raw
        .replace("\r\n", "\n")
        .replace("[tab]", "")
        .replace("[/tab]", "");
    BARE_CHORD_RE.replace_all(&tab, "$1").into_owned()
}

fn chord_spans(caps: &Captures) -> String {
    let root = format!("<span class=\"chord-root\">{}</span>", &caps["root"]);
    let quality = match caps.name("quality") {
        Some(m) => format!("<span class=\"chord-quality\">{}</span>", m.as_str()),
        None => String::new(),
    };
    let bass = match caps.name("bass") {
        // Skip the slash; it is rendered outside the span.
        Some(m) => format!("/<span class=\"chord-bass\">{}</span>", &m.as_str()[1..]),
        None => String::new(),
    };
    format!("<span class=\"chord fw-bold\">{root}{quality}{bass}</span>")
}
