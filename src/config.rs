//! Layout configuration.
//!
//! Every field defaults to the value in `renderer::constants`, so an empty
//! JSON object (or a file that sets only a few keys) is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Clef;
use crate::renderer::constants::*;

/// Geometry used by the layout engine and the staff skeleton (SVG user units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance between adjacent staff lines
    pub line_gap: f64,
    /// Distance from the treble staff top line to the bass staff top line
    pub staff_gap: f64,
    /// Y of the treble staff top line
    pub staff_top_y: f64,
    pub notehead_rx: f64,
    pub notehead_ry: f64,
    pub measure_width: f64,
    /// Horizontal space a measure keeps free after its last beat
    pub measure_margin: f64,
    /// X of the first measure's first beat
    pub first_measure_x: f64,
    pub stem_height: f64,
    /// How close a notehead must be to a ledger position to get a ledger line
    pub ledger_tolerance: f64,
    pub ledger_half_width: f64,
    /// Ledger positions checked above the staff; one more is checked below
    pub max_ledger_lines: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_gap: LINE_GAP,
            staff_gap: STAFF_GAP,
            staff_top_y: STAFF_TOP_Y,
            notehead_rx: NOTEHEAD_RX,
            notehead_ry: NOTEHEAD_RY,
            measure_width: MEASURE_WIDTH,
            measure_margin: MEASURE_MARGIN,
            first_measure_x: FIRST_MEASURE_X,
            stem_height: STEM_HEIGHT,
            ledger_tolerance: LEDGER_TOLERANCE,
            ledger_half_width: LEDGER_HALF_WIDTH,
            max_ledger_lines: MAX_LEDGER_LINES,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Y of the top line of a staff.
    pub fn staff_top(&self, clef: Clef) -> f64 {
        match clef {
            Clef::Treble => self.staff_top_y,
            Clef::Bass => self.staff_top_y + self.staff_gap,
        }
    }

    /// Height of one five-line staff (four gaps).
    pub fn staff_height(&self) -> f64 {
        self.line_gap * 4.0
    }

    /// Y of the bottom line of a staff.
    pub fn staff_bottom(&self, clef: Clef) -> f64 {
        self.staff_top(clef) + self.staff_height()
    }

    pub fn middle_line(&self, clef: Clef) -> f64 {
        self.staff_top(clef) + self.line_gap * 2.0
    }

    /// One diatonic step: half a line gap.
    pub fn step_height(&self) -> f64 {
        self.line_gap / 2.0
    }

    /// Seven diatonic steps.
    pub fn octave_height(&self) -> f64 {
        self.step_height() * 7.0
    }

    /// Horizontal span that four beats occupy.
    pub fn beat_span(&self) -> f64 {
        self.measure_width - self.measure_margin
    }

    pub fn document_width(&self, measure_count: usize) -> f64 {
        DOCUMENT_PADDING_X + measure_count as f64 * self.measure_width
    }

    pub fn document_height(&self) -> f64 {
        self.staff_top_y * 2.0 + self.staff_gap + self.staff_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_geometry() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.staff_top(Clef::Treble), 50.0);
        assert_eq!(cfg.staff_top(Clef::Bass), 120.0);
        assert_eq!(cfg.octave_height(), 35.0);
        assert_eq!(cfg.document_width(2), 600.0);
        assert_eq!(cfg.document_height(), 210.0);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = LayoutConfig::from_json(r#"{ "measure_width": 300 }"#).unwrap();
        assert_eq!(cfg.measure_width, 300.0);
        assert_eq!(cfg.line_gap, LINE_GAP);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = LayoutConfig::from_json("{ measure_width: }").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
