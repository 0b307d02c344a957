//! Preview support for loaded Briareo sequences: display normalization,
//! windowed playback, and GIF export.

pub mod errors;
pub mod render;

use briareo_core::dataset::SequenceIndexer;
use tracing::info;

use crate::errors::Result;

/// Load the sequence at `index` and play it back, exporting the looping GIF
/// to the working directory first when `export` is set. Blocks until the
/// preview window is closed.
pub fn preview_sequence(indexer: &SequenceIndexer, index: usize, export: bool) -> Result<()> {
    let sequence = indexer.get(index)?;
    info!(
        "Previewing subject {:03} gesture g{:02} repetition {:02} ({} frames)",
        sequence.subject_id,
        sequence.gesture_id,
        sequence.repetition_id,
        sequence.frames.len()
    );

    render::play(&sequence.frames, export)
}
