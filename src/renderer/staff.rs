//! Staff skeleton: staff lines, system line, brace, clefs and barlines.

use crate::config::LayoutConfig;
use crate::model::Clef;
use super::constants::*;
use super::shape::{Shape, StyleClass};

/// The fixed grand-staff scaffold for a document `width` units wide.
pub fn render_grand_staff(width: f64, cfg: &LayoutConfig) -> Vec<Shape> {
    let mut shapes = Vec::new();

    for i in 0..5 {
        for clef in Clef::ALL {
            let y = cfg.staff_top(clef) + i as f64 * cfg.line_gap;
            shapes.push(Shape::line(STAFF_LEFT_X, y, width - STAFF_RIGHT_PAD, y, StyleClass::StaffLine));
        }
    }

    shapes.push(system_line(STAFF_LEFT_X, cfg));

    shapes.push(Shape::sized_text(
        BRACE_X,
        cfg.staff_top_y + cfg.staff_gap / 2.0 + BRACE_DROP,
        BRACE_GLYPH,
        BRACE_FONT_SIZE,
        StyleClass::Plain,
    ));
    shapes.push(Shape::text(
        CLEF_X,
        cfg.staff_top(Clef::Treble) + TREBLE_CLEF_DROP,
        TREBLE_CLEF_GLYPH,
        StyleClass::ClefText,
    ));
    shapes.push(Shape::text(
        CLEF_X,
        cfg.staff_top(Clef::Bass) + BASS_CLEF_DROP,
        BASS_CLEF_GLYPH,
        StyleClass::ClefText,
    ));

    shapes
}

/// Barline closing the measure that starts at `start_x`.
pub fn render_barline(start_x: f64, cfg: &LayoutConfig) -> Shape {
    system_line(start_x + cfg.measure_width - BARLINE_INSET, cfg)
}

/// Vertical line from the treble top line to the bass bottom line.
fn system_line(x: f64, cfg: &LayoutConfig) -> Shape {
    Shape::line(
        x,
        cfg.staff_top(Clef::Treble),
        x,
        cfg.staff_bottom(Clef::Bass),
        StyleClass::MeasureLine,
    )
}
