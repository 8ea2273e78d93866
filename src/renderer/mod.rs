//! Score renderer — converts a parsed Score into SVG output.
//!
//! One render pass draws the grand-staff skeleton, then lays out each
//! measure left to right and closes it with a barline. The result is a
//! self-contained [`RenderResult`] that export functions take explicitly.

pub(crate) mod constants;
pub mod layout;
pub mod shape;
pub mod staff;
mod svg_builder;

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::model::*;
use crate::parser::{self, DiscardedToken};
use layout::layout_measure;
use staff::{render_barline, render_grand_staff};
use svg_builder::SvgBuilder;

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderResult {
    /// Complete standalone SVG document
    pub svg: String,
    pub width: f64,
    pub height: f64,
    pub measure_count: usize,
    /// Note-strings the parser skipped (empty when rendering a Score directly)
    pub discarded: Vec<DiscardedToken>,
}

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Parse note text and render it.
///
/// Fails with [`Error::EmptyScore`] when the text holds no measures.
pub fn render_text(text: &str, cfg: &LayoutConfig) -> Result<RenderResult> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyScore);
    }

    let parsed = parser::parse(text);
    let mut result = render_score(&parsed.score, cfg)?;
    result.discarded = parsed.discarded;
    Ok(result)
}

/// Render a parsed Score into a complete SVG document.
pub fn render_score(score: &Score, cfg: &LayoutConfig) -> Result<RenderResult> {
    if score.is_empty() {
        return Err(Error::EmptyScore);
    }

    let measure_count = score.measure_count();
    let width = cfg.document_width(measure_count);
    let height = cfg.document_height();

    let mut svg = SvgBuilder::new(width, height);
    svg.extend(&render_grand_staff(width, cfg));

    let mut current_x = cfg.first_measure_x;
    for measure in &score.measures {
        svg.extend(&layout_measure(measure, current_x, cfg));
        svg.push(&render_barline(current_x, cfg));
        current_x += cfg.measure_width;
    }

    log::info!(
        "rendered {measure_count} measure(s) into {} SVG elements ({width}x{height})",
        svg.len()
    );

    Ok(RenderResult {
        svg: svg.build(),
        width,
        height,
        measure_count,
        discarded: Vec::new(),
    })
}
