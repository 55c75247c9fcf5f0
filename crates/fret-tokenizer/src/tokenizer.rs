//! Line-level scanner for tab transcripts.
//!
//! The tokenizer is total: any input produces a line stream, so there is
//! no error type here. Offsets count lyric characters, with a chord
//! advancing the count by the length of its own text.

use crate::token::{Chord, Line, Section, Token};

/// Tokenize a raw transcript into lines.
///
/// `[tab]`/`[/tab]` wrappers are stripped before splitting on `\n`.
/// Each line is either a single `SectionStart` marker or a token sequence.
pub fn tokenize(transcript: &str) -> Vec<Line> {
    let stripped = transcript.replace("[tab]", "").replace("[/tab]", "");
    stripped.split('\n').map(tokenize_line).collect()
}

fn tokenize_line(line: &str) -> Line {
    if let Some(section) = section_header(line) {
        return Line::SectionStart(section);
    }
    Line::Tokens(scan_symbols(line))
}

/// A line that is exactly one bracketed header, ignoring surrounding
/// whitespace and with no nested brackets, reduces to a section marker.
fn section_header(line: &str) -> Option<Section> {
    let inner = line.trim().strip_prefix('[')?.strip_suffix(']')?;
    if inner.contains('[') || inner.contains(']') {
        return None;
    }
    Some(Section::new(inner))
}

/// Left-to-right scan of one line into `Char` and `Chord` tokens.
///
/// Literal `[` and `]` outside chord markers are replaced with parens so
/// they can never be mistaken for markup downstream.
fn scan_symbols(line: &str) -> Vec<Token> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut pos = 0;
    let mut offset = 0;

    while pos < chars.len() {
        if let Some((text, end)) = chord_marker(&chars, pos) {
            let width = text.chars().count();
            tokens.push(Token::Chord(Chord::new(text, offset)));
            offset += width;
            pos = end;
        } else {
            let c = match chars[pos] {
                '[' => '(',
                ']' => ')',
                c => c,
            };
            tokens.push(Token::Char(c));
            offset += 1;
            pos += 1;
        }
    }

    tokens
}

const CHORD_OPEN: &[char] = &['[', 'c', 'h', ']'];
const CHORD_CLOSE: &[char] = &['[', '/', 'c', 'h', ']'];

/// Match a literal `[ch]TEXT[/ch]` starting at `pos`, where TEXT contains
/// no `[`. Returns the chord text and the scan position past the marker.
fn chord_marker(chars: &[char], pos: usize) -> Option<(String, usize)> {
    if !chars[pos..].starts_with(CHORD_OPEN) {
        return None;
    }
    let start = pos + CHORD_OPEN.len();
    let mut end = start;
    while end < chars.len() && chars[end] != '[' {
        end += 1;
    }
    if !chars[end..].starts_with(CHORD_CLOSE) {
        return None;
    }
    Some((chars[start..end].iter().collect(), end + CHORD_CLOSE.len()))
}
