//! ChordPro document rendering.
//!
//! Consumes the fully processed line stream (tokenize → interleave →
//! normalize) plus song metadata, and emits a ChordPro document: a header
//! of metadata directives followed by the tab body with inline `[chord]`
//! markers and paired section directives.

use fret_fetch::SongDetail;
use fret_tokenizer::{tokenize, Line, Token};
use fret_transform::process;

/// Render a fetched song as a ChordPro document.
pub fn render_chordpro(song: &SongDetail) -> String {
    let mut lines = vec![directive(
        "title",
        &format!("{} - {}", song.artist_name, song.song_name),
    )];

    push_meta(&mut lines, "artist", Some(&song.artist_name));
    push_meta(&mut lines, "capo", song.capo.as_deref());
    push_meta(&mut lines, "key", song.key.as_deref());
    push_meta(&mut lines, "tuning", song.tuning.as_deref());
    push_meta(&mut lines, "version", Some(&song.version.to_string()));
    push_meta(&mut lines, "difficulty", song.difficulty.as_deref());

    for line in process(tokenize(&song.raw_tab)) {
        lines.push(render_line(&line));
    }

    let mut out = String::new();
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out
}

fn render_line(line: &Line) -> String {
    match line {
        Line::Tokens(tokens) => flatten(tokens),
        Line::SectionStart(s) => directive(&format!("start_of_{}", s.id()), s.label()),
        Line::SectionEnd(s) => directive(&format!("end_of_{}", s.id()), s.label()),
        Line::Instrumental(tokens) => directive("c", &flatten(tokens)),
    }
}

fn flatten(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Char(c) => out.push(*c),
            Token::Chord(chord) => {
                out.push('[');
                out.push_str(&chord.text);
                out.push(']');
            }
        }
    }
    out
}

/// `{name: value}`, or `{name}` when the value is empty.
fn directive(name: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{{{name}}}")
    } else {
        format!("{{{name}: {value}}}")
    }
}

fn push_meta(lines: &mut Vec<String>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        lines.push(directive("meta", &format!("{key} {value}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fret_fetch::SongDetail;
    use pretty_assertions::assert_eq;

    fn song(raw_tab: &str) -> SongDetail {
        SongDetail {
            artist_name: "Rise Against".into(),
            song_name: "Swing Life Away".into(),
            version: 1,
            kind: "Chords".into(),
            rating: 4.8,
            difficulty: None,
            capo: None,
            key: None,
            tuning: None,
            tab_url: String::new(),
            tab_url_path: String::new(),
            raw_tab: raw_tab.into(),
            versions: vec![],
            chords: Default::default(),
            fingerings: Default::default(),
        }
    }

    fn body(raw_tab: &str) -> Vec<String> {
        // Header is title + artist + version for the fixture above.
        let mut lines: Vec<String> = render_chordpro(&song(raw_tab))
            .lines()
            .skip(3)
            .map(str::to_owned)
            .collect();
        assert_eq!(lines.pop().as_deref(), Some(""), "document ends blank");
        lines
    }

    // =========================================================================
    // Header
    // =========================================================================

    #[test]
    fn test_header_minimal() {
        let out = render_chordpro(&song("hello"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "{title: Rise Against - Swing Life Away}",
                "{meta: artist Rise Against}",
                "{meta: version 1}",
                "hello",
                "",
            ]
        );
    }

    #[test]
    fn test_header_with_all_metadata() {
        let mut s = song("x");
        s.capo = Some("3".into());
        s.key = Some("C".into());
        s.tuning = Some("E A D G B E (Standard)".into());
        s.difficulty = Some("novice".into());

        let out = render_chordpro(&s);
        assert!(out.contains("{meta: capo 3}\n"));
        assert!(out.contains("{meta: key C}\n"));
        assert!(out.contains("{meta: tuning E A D G B E (Standard)}\n"));
        assert!(out.contains("{meta: difficulty novice}\n"));
    }

    #[test]
    fn test_document_ends_with_blank_line() {
        assert!(render_chordpro(&song("x")).ends_with("x\n\n"));
    }

    // =========================================================================
    // Body
    // =========================================================================

    #[test]
    fn test_merged_chord_renders_inline() {
        assert_eq!(body("[ch]C[/ch]  \nhello"), vec!["[C]hello"]);
    }

    #[test]
    fn test_lone_chord_line_renders_as_comment() {
        assert_eq!(body("[ch]Am[/ch]"), vec!["{c: [Am]}"]);
    }

    #[test]
    fn test_section_directives_use_id_and_label() {
        assert_eq!(
            body("[Verse 2]\nla la"),
            vec!["{start_of_verse: Verse 2}", "la la", "{end_of_verse: Verse 2}"]
        );
    }

    #[test]
    fn test_sections_close_before_next_start() {
        assert_eq!(
            body("[Verse 1]\nla\n\n[Chorus]\nlo"),
            vec![
                "{start_of_verse: Verse 1}",
                "la",
                "{end_of_verse: Verse 1}",
                "",
                "{start_of_chorus: Chorus}",
                "lo",
                "{end_of_chorus: Chorus}",
            ]
        );
    }

    #[test]
    fn test_markerless_text_round_trips() {
        let raw = "line one\n  line two\n\nline three";
        assert_eq!(body(raw), vec!["line one", "  line two", "", "line three"]);
    }

    #[test]
    fn test_directive_with_empty_value() {
        assert_eq!(directive("start_of_", ""), "{start_of_}");
        assert_eq!(directive("comment", "hi"), "{comment: hi}");
    }

    #[test]
    fn test_full_song() {
        let raw = "[tab][Intro]\n[ch]Am[/ch] [ch]F[/ch]\n\n[Verse 1]\n\
                   [ch]C[/ch]  [ch]G[/ch]\nhello world[/tab]";
        let out = render_chordpro(&song(raw));
        let expected = "\
{title: Rise Against - Swing Life Away}
{meta: artist Rise Against}
{meta: version 1}
{start_of_intro: Intro}
{c: [Am] [F]}
{end_of_intro: Intro}

{start_of_verse: Verse 1}
[C]hel[G]lo world
{end_of_verse: Verse 1}

";
        assert_eq!(out, expected);
    }
}
