//! SVG builder — accumulates SVG elements and produces the final string.

use super::constants::*;
use super::shape::{Shape, StyleClass};

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.elements.len()
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" style="background-color: {};">"#,
            self.width, self.height, self.width, self.height, BACKGROUND_COLOR
        );
        svg.push('\n');
        svg.push_str("  <defs><style>");
        svg.push_str(SVG_STYLES);
        svg.push_str("</style></defs>\n");
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn extend<'a>(&mut self, shapes: impl IntoIterator<Item = &'a Shape>) {
        for shape in shapes {
            self.push(shape);
        }
    }

    /// Append one shape. Shapes with non-finite geometry are dropped.
    pub(super) fn push(&mut self, shape: &Shape) {
        if !shape.is_finite() {
            log::warn!("dropping shape with non-finite geometry: {shape:?}");
            return;
        }

        let class = class_attr(shape.class());
        let element = match shape {
            Shape::Line { x1, y1, x2, y2, .. } => format!(
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"{}/>"#,
                x1, y1, x2, y2, class
            ),
            Shape::Ellipse { cx, cy, rx, ry, fill, .. } => format!(
                r#"<ellipse cx="{:.1}" cy="{:.1}" rx="{:.1}" ry="{:.1}"{} fill="{}"/>"#,
                cx, cy, rx, ry, class, fill
            ),
            Shape::Circle { cx, cy, r, .. } => format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}"{} fill="{}"/>"#,
                cx, cy, r, class, NOTE_COLOR
            ),
            Shape::Path { .. } => format!(
                r#"<path d="{}"{}/>"#,
                shape.path_data().unwrap_or_default(),
                class
            ),
            Shape::Text { x, y, content, font_size, .. } => {
                let size = font_size
                    .map(|s| format!(r#" font-size="{:.0}px""#, s))
                    .unwrap_or_default();
                format!(
                    r#"<text x="{:.1}" y="{:.1}"{}{}>{}</text>"#,
                    x, y, class, size, escape(content)
                )
            }
        };
        self.elements.push(element);
    }
}

fn class_attr(class: StyleClass) -> String {
    class
        .as_str()
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default()
}

fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
