//! Notation parser — converts note text into the Score data model.
//!
//! Measures are separated by blank lines. Inside a measure the first line
//! is the treble part and the second the bass part; note-strings are
//! comma-separated and look like `E♭4-q`, `C#-d-h` or `(sus)-w`.
//!
//! Parsing is lenient: the first grammar match inside a note-string is
//! taken, so `D4-q.` reads as `D4-q`. A note-string with no match at all
//! is dropped and reported in [`ParsedScore::discarded`], never raised.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::*;

static NOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<note>\(sus\)|[A-G])(?P<accidental>[♭♮♯b#]?)(?P<octave>[0-9])?-(?P<dotted>d-)?(?P<duration>[whqei])")
        .expect("note grammar is a valid regex")
});

/// Parser output: the score plus every note-string it had to skip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedScore {
    pub score: Score,
    pub discarded: Vec<DiscardedToken>,
}

impl ParsedScore {
    pub fn into_score(self) -> Score {
        self.score
    }
}

/// A note-string that did not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardedToken {
    /// Index of the measure it appeared in
    pub measure: usize,
    pub clef: Clef,
    pub text: String,
}

/// Parse note text, keeping a record of skipped note-strings.
pub fn parse(text: &str) -> ParsedScore {
    let mut parsed = ParsedScore::default();

    for block in measure_blocks(text) {
        let index = parsed.score.measures.len();
        let mut measure = Measure::default();

        for (clef, line) in Clef::ALL.iter().zip(block.iter()) {
            let notes = parse_line(line, index, *clef, &mut parsed.discarded);
            *measure.line_mut(*clef) = notes;
        }
        if block.len() > Clef::ALL.len() {
            log::debug!(
                "measure {}: ignoring {} extra line(s)",
                index + 1,
                block.len() - Clef::ALL.len()
            );
        }

        parsed.score.measures.push(measure);
    }

    parsed
}

/// Parse note text, dropping the discard report.
pub fn parse_score(text: &str) -> Score {
    parse(text).into_score()
}

/// Parse one note-string such as `B♭2-h`, using the first match in it.
pub fn parse_note(token: &str) -> Option<NoteToken> {
    let caps = NOTE_RE.captures(token)?;

    let duration = caps
        .name("duration")
        .and_then(|m| m.as_str().chars().next())
        .and_then(Duration::from_letter)?;
    let dotted = caps.name("dotted").is_some();

    let note = caps.name("note")?.as_str();
    let kind = if note == REST_MARKER {
        NoteKind::Rest
    } else {
        let step = note.chars().next().and_then(Step::from_char)?;
        let accidental = caps
            .name("accidental")
            .and_then(|m| m.as_str().chars().next())
            .and_then(Accidental::from_char);
        let octave = caps.name("octave").and_then(|m| m.as_str().parse::<u8>().ok());
        NoteKind::Pitched { step, accidental, octave }
    };

    Some(NoteToken { kind, duration, dotted })
}

// ─── Helpers ─────────────────────────────────────────────────────────

/// Group non-blank lines into measures. Whitespace-only lines count as
/// blank, and runs of them collapse into a single separator.
fn measure_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_line(
    line: &str,
    measure: usize,
    clef: Clef,
    discarded: &mut Vec<DiscardedToken>,
) -> Vec<NoteToken> {
    let mut notes = Vec::new();

    for token in line.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match parse_note(token) {
            Some(note) => notes.push(note),
            None => {
                log::debug!("measure {} ({clef}): skipping '{token}'", measure + 1);
                discarded.push(DiscardedToken {
                    measure,
                    clef,
                    text: token.to_string(),
                });
            }
        }
    }

    notes
}
