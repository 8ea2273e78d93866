//! grandstaff — text notation parser and grand-staff renderer.
//!
//! Measures are separated by blank lines; the first line of a measure is
//! the treble part, the second the bass part.
//!
//! # Example
//! ```no_run
//! use grandstaff::{render_text, export_svg, LayoutConfig};
//!
//! let text = "G4-h, E♭4-q, D4-q\nC3-w\n\nC4-h, D4-q, E♭4-q\nG2-h, B♭2-h";
//! let render = render_text(text, &LayoutConfig::default()).unwrap();
//! println!("Measures: {}", render.measure_count);
//! export_svg(Some(&render), ".").unwrap();
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use export::{export_png, export_svg, png_bytes, svg_bytes};
pub use model::*;
pub use parser::{parse, parse_note, parse_score, DiscardedToken, ParsedScore};
pub use renderer::{render_score, render_text, RenderResult};

/// Convert a parsed score to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn score_to_json(score: &Score) -> Result<String> {
    Ok(serde_json::to_string_pretty(score)?)
}

/// Render note text to SVG with the default layout.
/// Returns `None` when the text contains nothing to render.
pub fn render_text_to_svg(text: &str) -> Option<String> {
    render_text(text, &LayoutConfig::default())
        .ok()
        .map(|render| render.svg)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render note text and return SVG as a C string.
/// The caller must free the returned string with `grandstaff_free_string`.
/// Returns null when the text is empty or yields no measures.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn grandstaff_render_text(text: *const c_char) -> *mut c_char {
    if text.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(text) };
    let text = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match render_text_to_svg(text) {
        Some(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        None => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by grandstaff functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a grandstaff function, or null.
#[no_mangle]
pub unsafe extern "C" fn grandstaff_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
