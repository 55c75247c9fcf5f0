//! Chord interleaver.
//!
//! Tab transcripts put chords on their own line above the lyrics they
//! belong to. This pass folds such a chord line into the lyric line below
//! it, placing each chord at the token position matching its original
//! column. A chord line with no lyric line to merge into is kept as an
//! instrumental line.

use fret_tokenizer::{Chord, Line, Token};

/// Merge chords-only lines into their successor lyric lines.
///
/// Index-based walk over the stream: when line `i` is chords-only and line
/// `i + 1` is plain lyrics, both are consumed and replaced by the merged
/// line; a consumed successor is never revisited. Any other line carrying
/// chords (mixed chords and lyrics, or chords with no lyric successor)
/// becomes an `Instrumental`. Everything else passes through unchanged.
pub fn interleave_chords(lines: Vec<Line>) -> Vec<Line> {
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        let this = &lines[i];

        if this.has_chords() {
            if this.only_chords() {
                if let (Line::Tokens(chords), Some(Line::Tokens(next))) =
                    (this, lines.get(i + 1))
                {
                    if lines[i + 1].has_lyrics_and_nothing_else() {
                        out.push(merge(chord_tokens(chords), next));
                        i += 2;
                        continue;
                    }
                }
            }
            if let Line::Tokens(tokens) = this {
                out.push(Line::Instrumental(tokens.clone()));
                i += 1;
                continue;
            }
        }

        out.push(this.clone());
        i += 1;
    }

    out
}

fn chord_tokens(tokens: &[Token]) -> Vec<Chord> {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Chord(c) => Some(c.clone()),
            Token::Char(_) => None,
        })
        .collect()
}

/// Insert each chord immediately before the first lyric token whose
/// running index is at or past the chord's offset. Chords keep their
/// relative order; chords past the end of the lyrics are appended.
fn merge(chords: Vec<Chord>, lyrics: &[Token]) -> Line {
    let mut merged = Vec::with_capacity(chords.len() + lyrics.len());
    let mut pending = chords.into_iter().peekable();

    for (i, token) in lyrics.iter().enumerate() {
        while pending.peek().is_some_and(|c| c.offset <= i) {
            merged.push(Token::Chord(pending.next().expect("peeked")));
        }
        merged.push(token.clone());
    }
    merged.extend(pending.map(Token::Chord));

    Line::Tokens(merged)
}
