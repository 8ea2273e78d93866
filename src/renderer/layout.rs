//! Layout engine — turns one measure into absolute draw instructions.
//!
//! Time runs left to right: beat `t` of a line lands at
//! `start_x + t / 4 * (measure_width - measure_margin)`. Pitch runs bottom
//! to top: every diatonic step is half a line gap, so an octave is seven
//! half-gaps.

use crate::config::LayoutConfig;
use crate::model::*;
use super::constants::*;
use super::shape::{Shape, StyleClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemDirection {
    Up,
    Down,
}

// ═══════════════════════════════════════════════════════════════════════
// Coordinate mapping
// ═══════════════════════════════════════════════════════════════════════

/// Diatonic steps from the staff's bottom line to `step` in the clef's
/// reference octave (treble bottom line E4, bass bottom line G2).
pub fn steps_above_bottom_line(step: Step, clef: Clef) -> i32 {
    let bottom_line = match clef {
        Clef::Treble => Step::E,
        Clef::Bass => Step::G,
    };
    step.index() - bottom_line.index()
}

/// Vertical centre of a notehead. A missing octave means the clef's
/// reference octave.
///
/// Octaves start at C on both clefs, so bass C and D sit below G in the
/// same octave (C2 two steps under the staff, C3 in the second space). This
/// deliberately does not follow the older bass table that placed C and D
/// above B, one octave higher.
pub fn pitch_y(step: Step, octave: Option<u8>, clef: Clef, cfg: &LayoutConfig) -> f64 {
    let reference = clef.reference_octave();
    let octave = octave.unwrap_or(reference);
    let base_offset = -(steps_above_bottom_line(step, clef) as f64) * cfg.step_height();
    let octave_offset = (octave as f64 - reference as f64) * -cfg.octave_height();
    cfg.staff_bottom(clef) + base_offset + octave_offset
}

/// X of every token in a line, beat time accumulated from zero.
pub fn note_x_positions(line: &[NoteToken], start_x: f64, cfg: &LayoutConfig) -> Vec<f64> {
    let mut time = 0.0;
    line.iter()
        .map(|note| {
            let x = start_x + (time / BEATS_PER_MEASURE) * cfg.beat_span();
            time += note.duration_value();
            x
        })
        .collect()
}

/// Notes on or above the middle line stem down, the rest stem up.
pub fn stem_direction(y: f64, clef: Clef, cfg: &LayoutConfig) -> StemDirection {
    if y <= cfg.middle_line(clef) {
        StemDirection::Down
    } else {
        StemDirection::Up
    }
}

/// Ledger line positions for a notehead at `y`.
///
/// Above the staff `max_ledger_lines` positions are checked; below it one
/// more, reaching down to treble D3 and bass F1. Only the candidate position the notehead sits on is
/// drawn; a note in the space next to a ledger position gets none.
pub fn ledger_positions(y: f64, clef: Clef, cfg: &LayoutConfig) -> Vec<f64> {
    let top = cfg.staff_top(clef);
    let bottom = cfg.staff_bottom(clef);

    let above = (1..=cfg.max_ledger_lines).map(|k| top - k as f64 * cfg.line_gap);
    let below = (1..=cfg.max_ledger_lines + 1).map(|k| bottom + k as f64 * cfg.line_gap);

    above
        .chain(below)
        .filter(|line_y| (y - line_y).abs() < cfg.ledger_tolerance)
        .collect()
}

/// Y of an augmentation dot. A note on a line pushes its dot half a gap
/// up into the space above; a note in a space keeps the dot level.
///
/// This intentionally departs from always shifting the dot half a gap down,
/// which would put dots of space notes on a staff line.
pub fn dot_y(y: f64, clef: Clef, cfg: &LayoutConfig) -> f64 {
    let relative = y - cfg.staff_top(clef);
    let nearest_line = (relative / cfg.line_gap).round() * cfg.line_gap;
    if (relative - nearest_line).abs() < cfg.ledger_tolerance {
        y - cfg.step_height()
    } else {
        y
    }
}

/// Glyph and baseline for a rest.
pub fn rest_glyph(duration: Duration, clef: Clef, cfg: &LayoutConfig) -> (&'static str, f64) {
    let top = cfg.staff_top(clef);
    match duration {
        Duration::Whole => (WHOLE_REST_GLYPH, top + cfg.line_gap),
        Duration::Half => (HALF_REST_GLYPH, top + cfg.line_gap * 2.0),
        Duration::Quarter => (QUARTER_REST_GLYPH, top + cfg.line_gap * 2.0 + GLYPH_BASELINE_DROP),
        Duration::Eighth | Duration::AltEighth => {
            (EIGHTH_REST_GLYPH, top + cfg.line_gap * 2.0 + GLYPH_BASELINE_DROP)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Measure layout
// ═══════════════════════════════════════════════════════════════════════

/// Lay out both lines of a measure starting at `start_x`.
///
/// Never fails: lines longer than four beats simply run past the barline.
pub fn layout_measure(measure: &Measure, start_x: f64, cfg: &LayoutConfig) -> Vec<Shape> {
    let mut shapes = Vec::new();

    for clef in Clef::ALL {
        let line = measure.line(clef);
        let xs = note_x_positions(line, start_x, cfg);
        for (note, x) in line.iter().zip(xs) {
            layout_note(&mut shapes, note, x, clef, cfg);
        }
    }

    shapes
}

fn layout_note(shapes: &mut Vec<Shape>, note: &NoteToken, x: f64, clef: Clef, cfg: &LayoutConfig) {
    let (step, accidental, octave) = match note.kind {
        NoteKind::Rest => {
            let (glyph, y) = rest_glyph(note.duration, clef, cfg);
            shapes.push(Shape::text(x - REST_OFFSET_X, y, glyph, StyleClass::RestText));
            return;
        }
        NoteKind::Pitched { step, accidental, octave } => (step, accidental, octave),
    };

    let y = pitch_y(step, octave, clef, cfg);

    if note.duration != Duration::Whole {
        let direction = stem_direction(y, clef, cfg);
        let (stem_x, tip_y) = match direction {
            StemDirection::Up => (x + cfg.notehead_rx - STEM_INSET, y - cfg.stem_height),
            StemDirection::Down => (x - cfg.notehead_rx + STEM_INSET, y + cfg.stem_height),
        };
        shapes.push(Shape::line(stem_x, y, stem_x, tip_y, StyleClass::NoteStem));

        if note.duration.is_eighth() {
            shapes.push(flag(stem_x, tip_y, direction));
        }
    }

    if let Some(acc) = accidental {
        shapes.push(Shape::text(
            x - ACCIDENTAL_OFFSET_X,
            y + GLYPH_BASELINE_DROP,
            acc.glyph().to_string(),
            StyleClass::AccidentalText,
        ));
    }

    for line_y in ledger_positions(y, clef, cfg) {
        shapes.push(Shape::line(
            x - cfg.ledger_half_width,
            line_y,
            x + cfg.ledger_half_width,
            line_y,
            StyleClass::LedgerLine,
        ));
    }

    let fill = if note.duration.is_open() { OPEN_NOTE_FILL } else { NOTE_COLOR };
    shapes.push(Shape::ellipse(x, y, cfg.notehead_rx, cfg.notehead_ry, fill, StyleClass::NoteHead));

    if note.dotted {
        shapes.push(Shape::circle(
            x + DOT_OFFSET_X,
            dot_y(y, clef, cfg),
            DOT_RADIUS,
            StyleClass::NoteDot,
        ));
    }
}

/// Flag hanging off the stem tip, curving right and back toward the
/// notehead.
///
/// Down-stem flags mirror only vertically: they still curve to the right
/// of the stem, as engraved flags do, instead of also flipping to the left.
fn flag(stem_x: f64, tip_y: f64, direction: StemDirection) -> Shape {
    let toward_head = match direction {
        StemDirection::Up => 1.0,
        StemDirection::Down => -1.0,
    };
    Shape::quad(
        (stem_x, tip_y),
        (stem_x + FLAG_BULGE, tip_y + FLAG_MID_DROP * toward_head),
        (stem_x + FLAG_TAIL_X, tip_y + FLAG_LENGTH * toward_head),
        StyleClass::NoteFlag,
    )
}
