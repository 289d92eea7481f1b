// File: crates/gpxchart-core/src/error.rs
// Summary: Error type for configuration and encoding failures.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unsupported output format '{0}' (expected png or svg)")]
    UnsupportedOutput(String),
    #[error("no font dir found among {0:?}")]
    NoFontDir(Vec<PathBuf>),
    #[error("failed to read font {}", path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back rendered pixels")]
    ReadPixels,
    #[error("error encoding {format}")]
    Encode {
        format: &'static str,
        #[source]
        source: image::ImageError,
    },
    #[error("error encoding svg: empty document")]
    EmptySvg,
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
