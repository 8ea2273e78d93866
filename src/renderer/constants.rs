//! Shared constants for the score renderer (all in SVG user units).

// ── Staff dimensions ────────────────────────────────────────────────
pub(crate) const LINE_GAP: f64 = 10.0; // distance between staff lines
pub(crate) const STAFF_GAP: f64 = 70.0; // treble top line to bass top line
pub(crate) const STAFF_TOP_Y: f64 = 50.0;
pub(crate) const STAFF_LEFT_X: f64 = 10.0;
pub(crate) const STAFF_RIGHT_PAD: f64 = 10.0;

// ── Measure packing ─────────────────────────────────────────────────
pub(crate) const MEASURE_WIDTH: f64 = 250.0;
pub(crate) const MEASURE_MARGIN: f64 = 20.0;
pub(crate) const BARLINE_INSET: f64 = 10.0; // barline sits this far before the next measure
pub(crate) const FIRST_MEASURE_X: f64 = 80.0;
pub(crate) const DOCUMENT_PADDING_X: f64 = 100.0;
pub(crate) const BEATS_PER_MEASURE: f64 = 4.0;

// ── Note dimensions ─────────────────────────────────────────────────
pub(crate) const NOTEHEAD_RX: f64 = 5.5; // notehead ellipse x-radius
pub(crate) const NOTEHEAD_RY: f64 = 4.5; // notehead ellipse y-radius
pub(crate) const STEM_HEIGHT: f64 = 35.0;
pub(crate) const STEM_INSET: f64 = 1.0; // stem sits this far inside the notehead edge
pub(crate) const FLAG_BULGE: f64 = 8.0;
pub(crate) const FLAG_MID_DROP: f64 = 10.0;
pub(crate) const FLAG_TAIL_X: f64 = 2.0;
pub(crate) const FLAG_LENGTH: f64 = 20.0;
pub(crate) const ACCIDENTAL_OFFSET_X: f64 = 15.0;
pub(crate) const GLYPH_BASELINE_DROP: f64 = 5.0;
pub(crate) const DOT_OFFSET_X: f64 = 10.0;
pub(crate) const DOT_RADIUS: f64 = 2.0;
pub(crate) const REST_OFFSET_X: f64 = 5.0;

// ── Ledger lines ────────────────────────────────────────────────────
pub(crate) const LEDGER_TOLERANCE: f64 = 3.0;
pub(crate) const LEDGER_HALF_WIDTH: f64 = 10.0;
pub(crate) const MAX_LEDGER_LINES: u32 = 3;

// ── Skeleton glyph placement ────────────────────────────────────────
pub(crate) const BRACE_X: f64 = 5.0;
pub(crate) const BRACE_DROP: f64 = 25.0;
pub(crate) const BRACE_FONT_SIZE: f64 = 100.0;
pub(crate) const CLEF_X: f64 = 15.0;
pub(crate) const TREBLE_CLEF_DROP: f64 = 28.0;
pub(crate) const BASS_CLEF_DROP: f64 = 18.0;

// ── Glyphs (SMuFL / Unicode musical symbols) ────────────────────────
pub(crate) const TREBLE_CLEF_GLYPH: &str = "\u{1D11E}";
pub(crate) const BASS_CLEF_GLYPH: &str = "\u{1D122}";
pub(crate) const BRACE_GLYPH: &str = "{";
pub(crate) const WHOLE_REST_GLYPH: &str = "\u{1D13B}";
pub(crate) const HALF_REST_GLYPH: &str = "\u{1D13C}";
pub(crate) const QUARTER_REST_GLYPH: &str = "\u{1D13D}";
pub(crate) const EIGHTH_REST_GLYPH: &str = "\u{1D13E}";

// ── Colors ──────────────────────────────────────────────────────────
pub(crate) const NOTE_COLOR: &str = "black";
pub(crate) const OPEN_NOTE_FILL: &str = "white";
pub(crate) const BACKGROUND_COLOR: &str = "#fff";

/// Stylesheet embedded in every document; shapes refer to it by class.
pub(crate) const SVG_STYLES: &str = "
        .staff-line { stroke: black; stroke-width: 1; }
        .measure-line { stroke: black; stroke-width: 1.5; }
        .note-head { stroke: black; stroke-width: 1.5; }
        .note-stem { stroke: black; stroke-width: 1.5; }
        .note-flag { fill: black; stroke: black; stroke-width: 1.5; }
        .ledger-line { stroke: black; stroke-width: 1; }
        .note-dot { fill: black; }
        .clef-text, .accidental-text, .rest-text, text {
            font-family: 'Bravura', serif;
            fill: black;
        }
        .clef-text { font-size: 50px; }
        .accidental-text { font-size: 20px; }
        .rest-text { font-size: 30px; }
    ";
