use std::path::PathBuf;
use thiserror::Error;

/// Every way a generation run can fail. None of them is recovered from.
#[derive(Error, Debug)]
pub enum IconError {
    #[error("Failed to decode source image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Source image {0} has no alpha channel")]
    NoAlpha(PathBuf),

    #[error("Source image has no visible content (every pixel is fully transparent)")]
    EmptyContent,

    #[error("Output directory {0} does not exist")]
    MissingOutputDir(PathBuf),

    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize manifest icons: {0}")]
    Manifest(#[from] serde_json::Error),
}
