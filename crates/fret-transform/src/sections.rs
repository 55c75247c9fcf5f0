//! Section normalizer.
//!
//! Transcripts mark only the start of a section. The normalizer closes
//! every section explicitly, then bubbles blank separator lines outside
//! the section boundaries so the markers hug their content.

use fret_tokenizer::Line;

/// Insert the missing `SectionEnd` markers.
///
/// One pass tracking the open section: a new `SectionStart` closes the
/// previous section first, and a section still open at stream end is
/// closed there. Starts and ends balance one-to-one in the output.
pub fn insert_section_ends(lines: Vec<Line>) -> Vec<Line> {
    let mut out = Vec::with_capacity(lines.len() + 1);
    let mut open = None;

    for line in lines {
        if let Line::SectionStart(section) = &line {
            if let Some(previous) = open.replace(section.clone()) {
                out.push(Line::SectionEnd(previous));
            }
        }
        out.push(line);
    }

    if let Some(section) = open {
        out.push(Line::SectionEnd(section));
    }

    out
}

/// Bubble blank lines across section borders until a fixed point.
///
/// A whitespace line directly before a `SectionEnd` swaps with it, and a
/// whitespace line directly after a `SectionStart` swaps with it. Each
/// swap restarts the scan; the pass terminates because every swap moves a
/// marker strictly toward its content, bounding the work by O(n²).
pub fn move_section_borders(mut lines: Vec<Line>) -> Vec<Line> {
    'rescan: loop {
        for i in 0..lines.len().saturating_sub(1) {
            let end_after_blank =
                lines[i].only_whitespace() && matches!(lines[i + 1], Line::SectionEnd(_));
            let blank_after_start =
                matches!(lines[i], Line::SectionStart(_)) && lines[i + 1].only_whitespace();

            if end_after_blank || blank_after_start {
                lines.swap(i, i + 1);
                continue 'rescan;
            }
        }
        return lines;
    }
}

/// Full section normalization: end insertion, then border fixup.
pub fn normalize_sections(lines: Vec<Line>) -> Vec<Line> {
    move_section_borders(insert_section_ends(lines))
}
