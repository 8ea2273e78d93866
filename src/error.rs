use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Nothing to render: input contains no measures")]
    EmptyScore,

    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generated SVG could not be read back: {0}")]
    SvgParse(#[from] resvg::usvg::Error),

    #[error("Rasterisation failed: {0}")]
    Raster(String),
}

pub type Result<T> = std::result::Result<T, Error>;
