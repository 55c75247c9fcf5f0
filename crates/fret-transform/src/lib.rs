//! Line-stream transforms for tokenized tab transcripts.
//!
//! Two passes run between the tokenizer and the renderer:
//!
//! 1. **Chord interleaving** merges a chords-only line into the lyric line
//!    below it (or wraps it as an instrumental line when there is none).
//! 2. **Section normalization** pairs every `SectionStart` with a
//!    `SectionEnd` and pulls blank separator lines outside the section
//!    boundaries.
//!
//! ```text
//! tokenize() → interleave_chords() → normalize_sections() → renderer
//! ```

pub mod interleave;
pub mod sections;

pub use interleave::interleave_chords;
pub use sections::{insert_section_ends, move_section_borders, normalize_sections};

use fret_tokenizer::Line;

/// Run the full transform pipeline over a tokenized line stream.
pub fn process(lines: Vec<Line>) -> Vec<Line> {
    normalize_sections(interleave_chords(lines))
}
