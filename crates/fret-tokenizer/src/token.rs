/// A chord name lifted from a `[ch]NAME[/ch]` marker.
///
/// `offset` is the lyric-character index the chord occupied in its
/// original line at tokenization time. Offsets within a line are
/// monotonically non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub text: String,
    pub offset: usize,
}

impl Chord {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }
}

/// A section header lifted from a whole-line `[Name]` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub text: String,
}

impl Section {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Normalized directive identifier: lowercased with everything but
    /// ASCII letters stripped. Dropping the digits is what collapses a
    /// numbered verse header (`Verse 2`) to the bare identifier `verse`.
    pub fn id(&self) -> String {
        self.text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase())
            .collect()
    }

    /// Display label: the original header text.
    pub fn label(&self) -> &str {
        &self.text
    }
}

/// One lexical unit of a tab line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A literal lyric/tab character (brackets already escaped to parens).
    Char(char),
    /// An inline chord marker.
    Chord(Chord),
}

impl Token {
    pub fn is_chord(&self) -> bool {
        matches!(self, Token::Chord(_))
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Char(c) if c.is_whitespace())
    }
}

/// One transcript row: a token sequence or a bare marker.
///
/// `Instrumental` and `SectionEnd` never come out of the tokenizer; they
/// are introduced by the chord interleaver and the section normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Tokens(Vec<Token>),
    SectionStart(Section),
    SectionEnd(Section),
    Instrumental(Vec<Token>),
}

impl Line {
    /// Token line whose tokens are all whitespace characters.
    /// An empty line counts as whitespace.
    pub fn only_whitespace(&self) -> bool {
        matches!(self, Line::Tokens(tokens) if tokens.iter().all(Token::is_whitespace))
    }

    /// Token line containing nothing but chords and whitespace.
    pub fn only_chords(&self) -> bool {
        matches!(
            self,
            Line::Tokens(tokens)
                if tokens.iter().all(|t| t.is_chord() || t.is_whitespace())
        )
    }

    /// Token line containing at least one chord.
    pub fn has_chords(&self) -> bool {
        matches!(self, Line::Tokens(tokens) if tokens.iter().any(Token::is_chord))
    }

    /// Token line with lyric content and no chords. Marker lines are
    /// excluded: chords are never merged into a section header.
    pub fn has_lyrics_and_nothing_else(&self) -> bool {
        matches!(self, Line::Tokens(_)) && !self.has_chords() && !self.only_whitespace()
    }
}
