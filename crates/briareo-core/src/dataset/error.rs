use thiserror::Error;

/// Errors surfaced when retrieving a sequence from the index.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("sequence index {index} out of range (index holds {len} sequences)")]
    OutOfRange { index: usize, len: usize },

    #[error("failed to read frame image '{path}': {source}")]
    FrameRead {
        path: String,
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, DatasetError>;
