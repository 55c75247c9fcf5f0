//! Tab transcript tokenizer.
//!
//! Splits a raw guitar-tab transcript into per-line token sequences.
//! Recognizes the source markup: `[tab]`/`[/tab]` wrappers (stripped),
//! inline `[ch]NAME[/ch]` chord markers, and whole-line `[Section]`
//! headers. Everything else becomes literal characters.
//!
//! # Example
//!
//! ```
//! use fret_tokenizer::{tokenize, Line};
//!
//! let lines = tokenize("[Verse 1]\nhello");
//! assert_eq!(lines.len(), 2);
//! assert!(matches!(lines[0], Line::SectionStart(_)));
//! ```

pub mod token;
pub mod tokenizer;

pub use token::{Chord, Line, Section, Token};
pub use tokenizer::tokenize;
