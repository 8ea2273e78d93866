//! Data model for a parsed grand-staff score.
//!
//! A [`Score`] is a list of [`Measure`]s; each measure carries one line of
//! [`NoteToken`]s for the treble staff and one for the bass staff.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal used in the input text for a rest.
pub const REST_MARKER: &str = "(sus)";

/// Literal placed before the duration letter of a dotted note.
pub const DOT_MARKER: &str = "d-";

/// A complete score: measures in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub measures: Vec<Measure>,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn measure_count(&self) -> usize {
        self.measures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }
}

/// One measure of the grand staff.
///
/// The two lines are timed independently; nothing checks that they add up
/// to the same number of beats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    /// Treble staff line
    pub top: Vec<NoteToken>,
    /// Bass staff line
    pub bottom: Vec<NoteToken>,
}

impl Measure {
    pub fn line(&self, clef: Clef) -> &[NoteToken] {
        match clef {
            Clef::Treble => &self.top,
            Clef::Bass => &self.bottom,
        }
    }

    pub fn line_mut(&mut self, clef: Clef) -> &mut Vec<NoteToken> {
        match clef {
            Clef::Treble => &mut self.top,
            Clef::Bass => &mut self.bottom,
        }
    }

    /// Total beat length of one line.
    pub fn beats(&self, clef: Clef) -> f64 {
        self.line(clef).iter().map(NoteToken::duration_value).sum()
    }
}

/// The two staves of the grand staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    Treble,
    Bass,
}

impl Clef {
    pub const ALL: [Clef; 2] = [Clef::Treble, Clef::Bass];

    /// Octave assumed when a note omits one.
    pub fn reference_octave(self) -> u8 {
        match self {
            Clef::Treble => 4,
            Clef::Bass => 2,
        }
    }
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clef::Treble => f.write_str("treble"),
            Clef::Bass => f.write_str("bass"),
        }
    }
}

/// Diatonic letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Step::C),
            'D' => Some(Step::D),
            'E' => Some(Step::E),
            'F' => Some(Step::F),
            'G' => Some(Step::G),
            'A' => Some(Step::A),
            'B' => Some(Step::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Step::C => 'C',
            Step::D => 'D',
            Step::E => 'E',
            Step::F => 'F',
            Step::G => 'G',
            Step::A => 'A',
            Step::B => 'B',
        }
    }

    /// Position within the octave, C = 0 .. B = 6.
    pub fn index(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 1,
            Step::E => 2,
            Step::F => 3,
            Step::G => 4,
            Step::A => 5,
            Step::B => 6,
        }
    }
}

/// Accidental, always stored in glyph form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}

impl Accidental {
    /// Accepts both the glyphs and the ASCII shorthand (`b`, `#`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '♭' | 'b' => Some(Accidental::Flat),
            '♮' => Some(Accidental::Natural),
            '♯' | '#' => Some(Accidental::Sharp),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Accidental::Flat => '♭',
            Accidental::Natural => '♮',
            Accidental::Sharp => '♯',
        }
    }
}

/// Written duration.
///
/// `AltEighth` is the `i` spelling of an eighth: it lasts and draws exactly
/// like `Eighth` but keeps its own letter so the text form survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Duration {
    Whole,
    Half,
    Quarter,
    Eighth,
    AltEighth,
}

impl Duration {
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'w' => Some(Duration::Whole),
            'h' => Some(Duration::Half),
            'q' => Some(Duration::Quarter),
            'e' => Some(Duration::Eighth),
            'i' => Some(Duration::AltEighth),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Duration::Whole => 'w',
            Duration::Half => 'h',
            Duration::Quarter => 'q',
            Duration::Eighth => 'e',
            Duration::AltEighth => 'i',
        }
    }

    /// Length in quarter-note beats, before any dot.
    pub fn base_value(self) -> f64 {
        match self {
            Duration::Whole => 4.0,
            Duration::Half => 2.0,
            Duration::Quarter => 1.0,
            Duration::Eighth | Duration::AltEighth => 0.5,
        }
    }

    pub fn is_eighth(self) -> bool {
        matches!(self, Duration::Eighth | Duration::AltEighth)
    }

    /// Whole and half notes get an open notehead.
    pub fn is_open(self) -> bool {
        matches!(self, Duration::Whole | Duration::Half)
    }
}

/// What a token sounds: a pitch or silence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NoteKind {
    Pitched {
        step: Step,
        accidental: Option<Accidental>,
        /// `None` when the input left the octave out.
        octave: Option<u8>,
    },
    Rest,
}

/// A single parsed note or rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteToken {
    pub kind: NoteKind,
    pub duration: Duration,
    pub dotted: bool,
}

impl NoteToken {
    pub fn note(step: Step, accidental: Option<Accidental>, octave: Option<u8>, duration: Duration) -> Self {
        Self {
            kind: NoteKind::Pitched { step, accidental, octave },
            duration,
            dotted: false,
        }
    }

    pub fn rest(duration: Duration) -> Self {
        Self {
            kind: NoteKind::Rest,
            duration,
            dotted: false,
        }
    }

    pub fn with_dot(mut self) -> Self {
        self.dotted = true;
        self
    }

    pub fn is_rest(&self) -> bool {
        matches!(self.kind, NoteKind::Rest)
    }

    pub fn accidental(&self) -> Option<Accidental> {
        match self.kind {
            NoteKind::Pitched { accidental, .. } => accidental,
            NoteKind::Rest => None,
        }
    }

    /// Beat length: base value, times 1.5 when dotted.
    pub fn duration_value(&self) -> f64 {
        let base = self.duration.base_value();
        if self.dotted {
            base * 1.5
        } else {
            base
        }
    }
}

impl fmt::Display for NoteToken {
    /// Canonical text form, e.g. `E♭4-q`, `(sus)-d-h`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoteKind::Pitched { step, accidental, octave } => {
                write!(f, "{}", step.as_char())?;
                if let Some(acc) = accidental {
                    write!(f, "{}", acc.glyph())?;
                }
                if let Some(oct) = octave {
                    write!(f, "{oct}")?;
                }
            }
            NoteKind::Rest => f.write_str(REST_MARKER)?,
        }
        f.write_str("-")?;
        if self.dotted {
            f.write_str(DOT_MARKER)?;
        }
        write!(f, "{}", self.duration.letter())
    }
}
