//! Export of a finished render to `beste.svg` / `beste.png`.
//!
//! Every function takes the render explicitly; passing `None` (nothing has
//! been rendered yet) is a silent no-op.

use std::path::{Path, PathBuf};

use resvg::tiny_skia;
use resvg::usvg;

use crate::error::{Error, Result};
use crate::renderer::RenderResult;

pub const SVG_FILE_NAME: &str = "beste.svg";
pub const PNG_FILE_NAME: &str = "beste.png";

const SVG_NAMESPACE: &str = r#"xmlns="http://www.w3.org/2000/svg""#;

/// Standalone SVG bytes, with the namespace guaranteed on the root element.
pub fn svg_bytes(render: Option<&RenderResult>) -> Option<Vec<u8>> {
    let render = render?;
    let svg = &render.svg;
    let root_end = svg.find('>').unwrap_or(svg.len());
    if svg[..root_end].contains(SVG_NAMESPACE) {
        Some(svg.as_bytes().to_vec())
    } else {
        Some(svg.replacen("<svg", &format!("<svg {SVG_NAMESPACE}"), 1).into_bytes())
    }
}

/// Rasterise the render at its own size and encode it as PNG.
pub fn png_bytes(render: Option<&RenderResult>) -> Result<Option<Vec<u8>>> {
    let Some(render) = render else {
        return Ok(None);
    };

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(&render.svg, &options)?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| Error::Raster(format!("cannot allocate {}x{} pixmap", size.width(), size.height())))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap.encode_png().map_err(|e| Error::Raster(e.to_string()))?;
    Ok(Some(png))
}

/// Write `beste.svg` into `dir`. Returns the written path.
pub fn export_svg<P: AsRef<Path>>(render: Option<&RenderResult>, dir: P) -> Result<Option<PathBuf>> {
    match svg_bytes(render) {
        Some(bytes) => write_file(dir.as_ref().join(SVG_FILE_NAME), &bytes).map(Some),
        None => Ok(None),
    }
}

/// Write `beste.png` into `dir`. Returns the written path.
pub fn export_png<P: AsRef<Path>>(render: Option<&RenderResult>, dir: P) -> Result<Option<PathBuf>> {
    match png_bytes(render)? {
        Some(bytes) => write_file(dir.as_ref().join(PNG_FILE_NAME), &bytes).map(Some),
        None => Ok(None),
    }
}

fn write_file(path: PathBuf, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::write(&path, bytes).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}
