//! Draw instructions produced by the layout engine and the staff skeleton.
//!
//! Each variant carries exactly the fields its SVG element needs plus a
//! [`StyleClass`] that ties it to the embedded stylesheet.

use serde::Serialize;

/// CSS class a shape is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StyleClass {
    StaffLine,
    MeasureLine,
    LedgerLine,
    NoteHead,
    NoteStem,
    NoteFlag,
    NoteDot,
    ClefText,
    AccidentalText,
    RestText,
    /// Plain text with no dedicated class (the brace)
    Plain,
}

impl StyleClass {
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            StyleClass::StaffLine => Some("staff-line"),
            StyleClass::MeasureLine => Some("measure-line"),
            StyleClass::LedgerLine => Some("ledger-line"),
            StyleClass::NoteHead => Some("note-head"),
            StyleClass::NoteStem => Some("note-stem"),
            StyleClass::NoteFlag => Some("note-flag"),
            StyleClass::NoteDot => Some("note-dot"),
            StyleClass::ClefText => Some("clef-text"),
            StyleClass::AccidentalText => Some("accidental-text"),
            StyleClass::RestText => Some("rest-text"),
            StyleClass::Plain => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        class: StyleClass,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: &'static str,
        class: StyleClass,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        class: StyleClass,
    },
    /// Quadratic curve `M start Q control end`.
    Path {
        start: (f64, f64),
        control: (f64, f64),
        end: (f64, f64),
        class: StyleClass,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: Option<f64>,
        class: StyleClass,
    },
}

impl Shape {
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, class: StyleClass) -> Self {
        Shape::Line { x1, y1, x2, y2, class }
    }

    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, fill: &'static str, class: StyleClass) -> Self {
        Shape::Ellipse { cx, cy, rx: rx.abs(), ry: ry.abs(), fill, class }
    }

    pub fn circle(cx: f64, cy: f64, r: f64, class: StyleClass) -> Self {
        Shape::Circle { cx, cy, r: r.abs(), class }
    }

    pub fn quad(start: (f64, f64), control: (f64, f64), end: (f64, f64), class: StyleClass) -> Self {
        Shape::Path { start, control, end, class }
    }

    pub fn text(x: f64, y: f64, content: impl Into<String>, class: StyleClass) -> Self {
        Shape::Text { x, y, content: content.into(), font_size: None, class }
    }

    pub fn sized_text(x: f64, y: f64, content: impl Into<String>, font_size: f64, class: StyleClass) -> Self {
        Shape::Text { x, y, content: content.into(), font_size: Some(font_size), class }
    }

    pub fn class(&self) -> StyleClass {
        match self {
            Shape::Line { class, .. }
            | Shape::Ellipse { class, .. }
            | Shape::Circle { class, .. }
            | Shape::Path { class, .. }
            | Shape::Text { class, .. } => *class,
        }
    }

    /// False if any coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        let coords = match self {
            Shape::Line { x1, y1, x2, y2, .. } => vec![*x1, *y1, *x2, *y2],
            Shape::Ellipse { cx, cy, rx, ry, .. } => vec![*cx, *cy, *rx, *ry],
            Shape::Circle { cx, cy, r, .. } => vec![*cx, *cy, *r],
            Shape::Path { start, control, end, .. } => {
                vec![start.0, start.1, control.0, control.1, end.0, end.1]
            }
            Shape::Text { x, y, font_size, .. } => vec![*x, *y, font_size.unwrap_or(0.0)],
        };
        coords.iter().all(|v| v.is_finite())
    }

    /// The `d` attribute of a path shape.
    pub fn path_data(&self) -> Option<String> {
        match self {
            Shape::Path { start, control, end, .. } => Some(format!(
                "M{},{} Q {},{} {},{}",
                start.0, start.1, control.0, control.1, end.0, end.1
            )),
            _ => None,
        }
    }
}
