//! Chord-diagram derivation.
//!
//! The payload's applicature maps each chord name to fingering variants
//! with per-string fret numbers (low to high; `0` open, `-1` muted). This
//! turns them into drawable diagrams: fret rows from the first fretted
//! fret onward, padded to exactly six rows, plus per-string finger labels
//! with `x` for unstrummed strings.
//!
//! The heuristics are tied to the upstream JSON shape, so this stays a
//! pure best-effort adapter: malformed entries are skipped, never fatal.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// One fret of a diagram: which of the six strings (high to low) are
/// pressed at this fret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FretRow {
    pub fret: u32,
    pub strings: [u8; 6],
}

/// Diagram variants per chord name. Each variant has zero rows filtered
/// away, so present variants hold exactly six rows.
pub type ChordShapes = BTreeMap<String, Vec<Vec<FretRow>>>;

/// Per-variant finger labels, one per string (high to low), `x` when the
/// string is not strummed.
pub type Fingerings = BTreeMap<String, Vec<Vec<String>>>;

const DIAGRAM_ROWS: usize = 6;

/// Derive diagrams and fingerings from an applicature payload.
pub fn derive(applicature: &Value) -> (ChordShapes, Fingerings) {
    let mut shapes = ChordShapes::new();
    let mut fingerings = Fingerings::new();

    let Some(chords) = applicature.as_object() else {
        return (shapes, fingerings);
    };

    for (name, variants) in chords {
        let Some(variants) = variants.as_array() else {
            continue;
        };
        for variant in variants {
            if let Some((rows, fingers)) = derive_variant(variant) {
                shapes.entry(name.clone()).or_default().push(rows);
                fingerings.entry(name.clone()).or_default().push(fingers);
            }
        }
    }

    (shapes, fingerings)
}

fn derive_variant(variant: &Value) -> Option<(Vec<FretRow>, Vec<String>)> {
    let frets = int_array(variant.get("frets")?)?;
    let fingers = int_array(variant.get("fingers")?)?;
    if frets.len() != 6 || fingers.len() != 6 {
        return None;
    }

    let min = *frets.iter().min()?;
    let max = *frets.iter().max()?;

    // Rows for every positive fret in range, strings reversed so the
    // first entry is the high string. Rows above the first fretted one
    // are dropped.
    let mut rows: Vec<FretRow> = Vec::new();
    let mut found = false;
    for fret in min.max(1)..=max {
        let mut strings = [0u8; 6];
        for (string, &fretted) in frets.iter().rev().enumerate() {
            strings[string] = u8::from(fretted == fret);
        }
        found = found || strings.contains(&1);
        if found {
            rows.push(FretRow {
                fret: fret as u32,
                strings,
            });
        }
    }

    // Nothing fretted at all (open or muted strings only).
    if rows.is_empty() {
        return None;
    }

    // Pad with not-fretted rows up to the fixed diagram height.
    while rows.len() < DIAGRAM_ROWS {
        let next = rows.last().map_or(1, |row| row.fret + 1);
        rows.push(FretRow {
            fret: next,
            strings: [0; 6],
        });
    }

    // A string never pressed in any kept row is shown as unstrummed.
    let mut labels = Vec::with_capacity(6);
    for (string, finger) in fingers.iter().rev().enumerate() {
        let pressed = rows.iter().any(|row| row.strings[string] == 1);
        labels.push(if pressed {
            finger.to_string()
        } else {
            "x".to_string()
        });
    }

    Some((rows, labels))
}

fn int_array(value: &Value) -> Option<Vec<i64>> {
    value
        .as_array()?
        .iter()
        .map(Value::as_i64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn variant(frets: [i64; 6], fingers: [i64; 6]) -> Value {
        json!({ "frets": frets, "fingers": fingers })
    }

    // =========================================================================
    // Row derivation
    // =========================================================================

    #[test]
    fn test_open_c_major_shape() {
        // C major: x 3 2 0 1 0 (low to high).
        let applicature = json!({ "C": [variant([-1, 3, 2, 0, 1, 0], [0, 3, 2, 0, 1, 0])] });
        let (shapes, fingerings) = derive(&applicature);

        let rows = &shapes["C"][0];
        assert_eq!(rows.len(), 6);
        // Fret 1 presses the B string (second from high).
        assert_eq!(rows[0].fret, 1);
        assert_eq!(rows[0].strings, [0, 1, 0, 0, 0, 0]);
        // Fret 2 presses the D string, fret 3 the A string.
        assert_eq!(rows[1].strings, [0, 0, 0, 1, 0, 0]);
        assert_eq!(rows[2].strings, [0, 0, 0, 0, 1, 0]);
        // Padding rows are empty.
        assert_eq!(rows[3].strings, [0; 6]);
        assert_eq!(rows[5].fret, 6);

        // Strings never pressed in a row (muted low E, open e and G)
        // all read as unstrummed.
        assert_eq!(fingerings["C"][0], vec!["x", "1", "x", "2", "3", "x"]);
    }

    #[test]
    fn test_rows_start_at_first_fretted_fret() {
        // Barre shape at fret 3: rows below fret 3 carry no press and
        // are dropped, so the first row is the barre itself.
        let applicature = json!({ "G": [variant([3, 5, 5, 4, 3, 3], [1, 3, 4, 2, 1, 1])] });
        let (shapes, _) = derive(&applicature);
        let rows = &shapes["G"][0];
        assert_eq!(rows[0].fret, 3);
        assert_eq!(rows.len(), 6);
    }

    #[test]
    fn test_padding_invariant_six_rows() {
        let applicature = json!({
            "C": [variant([-1, 3, 2, 0, 1, 0], [0, 3, 2, 0, 1, 0])],
            "G": [variant([3, 2, 0, 0, 0, 3], [2, 1, 0, 0, 0, 3])]
        });
        let (shapes, _) = derive(&applicature);
        for variants in shapes.values() {
            for rows in variants {
                assert_eq!(rows.len(), 6);
            }
        }
    }

    // =========================================================================
    // Skips
    // =========================================================================

    #[test]
    fn test_unfretted_variant_is_skipped() {
        // Nothing above fret 0: no diagram to draw.
        let applicature = json!({ "Em?": [variant([0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0, 0])] });
        let (shapes, fingerings) = derive(&applicature);
        assert!(shapes.is_empty());
        assert!(fingerings.is_empty());
    }

    #[test]
    fn test_malformed_variant_is_skipped() {
        let applicature = json!({
            "A": [{ "frets": [1, 2] }],
            "B": "nonsense",
            "C": [variant([-1, 3, 2, 0, 1, 0], [0, 3, 2, 0, 1, 0])]
        });
        let (shapes, _) = derive(&applicature);
        assert_eq!(shapes.keys().collect::<Vec<_>>(), vec!["C"]);
    }

    #[test]
    fn test_null_applicature() {
        let (shapes, fingerings) = derive(&Value::Null);
        assert!(shapes.is_empty());
        assert!(fingerings.is_empty());
    }
}
