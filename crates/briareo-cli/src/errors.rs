use briareo_core::dataset::DatasetError;
use thiserror::Error;

/// Errors that can occur while previewing or exporting a sequence
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("cannot preview an empty sequence")]
    EmptySequence,

    #[error("failed to drive preview window: {0}")]
    Window(String),

    #[error("animation encoding error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PreviewError>;
