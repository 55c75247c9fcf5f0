//! Output renderers for tab transcripts.
//!
//! Three renderings of the same source material:
//!
//! - [`render_html`] — the raw transcript with chord markers expanded to
//!   styled spans (legacy string path, no tokenization).
//! - [`render_plain`] — chord markers reduced to bare chord names.
//! - [`render_chordpro`] — a ChordPro document built from the fully
//!   processed token stream plus song metadata.
//!
//! Rendering is total: any well-formed token stream renders without
//! error, so nothing here returns a `Result`.

pub mod chordpro;
pub mod html;

pub use chordpro::render_chordpro;
pub use html::{render_html, render_plain};
