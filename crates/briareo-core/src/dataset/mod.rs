//! Index and on-demand loading for the Briareo stereo capture layout.
//!
//! The dataset is a fixed three-level hierarchy:
//!
//! ```text
//! <root>/<subject:3>/g<gesture:2>/<repetition:2>/{L,R}/raw/<frame:3>_r{l,r}.png
//! ```
//!
//! Only repetitions with all 40 left/right pairs on disk are indexed;
//! anything incomplete is dropped whole.

mod error;

pub use error::{DatasetError, Result};

use std::path::{Path, PathBuf};

use image::GrayImage;
use log::{debug, info, warn};

use crate::img::{to_unit_tensor, GrayTensor, Transform};

pub const SUBJECT_COUNT: u8 = 26;
pub const GESTURE_COUNT: u8 = 12;
pub const REPETITION_COUNT: u8 = 3;
pub const FRAMES_PER_SEQUENCE: usize = 40;

/// One left/right image pair within a sequence.
#[derive(Debug, Clone)]
pub struct FrameRef {
    frame_id: u8,
    left: PathBuf,
    right: PathBuf,
}

impl FrameRef {
    pub fn frame_id(&self) -> u8 {
        self.frame_id
    }

    pub fn left_path(&self) -> &Path {
        &self.left
    }

    pub fn right_path(&self) -> &Path {
        &self.right
    }
}

/// A complete 40-frame recording for one (subject, gesture, repetition).
///
/// Records are only constructed by the indexer, after every referenced file
/// has been seen on disk.
#[derive(Debug, Clone)]
pub struct SequenceRecord {
    pub subject_id: u8,
    pub gesture_id: u8,
    pub repetition_id: u8,
    frames: Vec<FrameRef>,
}

impl SequenceRecord {
    pub fn frames(&self) -> &[FrameRef] {
        &self.frames
    }
}

/// A sequence materialized into memory: 40 (left, right) tensor pairs plus
/// the identifiers it was recorded under. Owned by whoever requested it;
/// nothing is cached across lookups.
pub struct LoadedSequence {
    pub subject_id: u8,
    pub gesture_id: u8,
    pub repetition_id: u8,
    pub frames: Vec<(GrayTensor, GrayTensor)>,
}

/// Walks the dataset tree once at construction and serves sequences by
/// position afterwards. The record list is never mutated after the scan.
pub struct SequenceIndexer {
    sequences: Vec<SequenceRecord>,
    transform: Option<Transform>,
}

impl SequenceIndexer {
    pub fn new(root: impl AsRef<Path>, transform: Option<Transform>) -> Self {
        let root = root.as_ref();
        info!("Indexing Briareo dataset at {}", root.display());
        if !root.exists() {
            warn!("Dataset root {} does not exist", root.display());
        }

        let sequences = scan_sequences(root);
        info!("Indexed {} complete sequences", sequences.len());

        Self {
            sequences,
            transform,
        }
    }

    /// Number of complete sequences found during the scan.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Read-only view of the indexed records, in discovery order
    /// (subject-major, then gesture, then repetition, all ascending).
    pub fn records(&self) -> &[SequenceRecord] {
        &self.sequences
    }

    /// Load the sequence at `index` into memory, applying the configured
    /// transform to both sides of every pair in frame order.
    ///
    /// Fails with [`DatasetError::OutOfRange`] for an invalid position and
    /// with [`DatasetError::FrameRead`] if any image has become unreadable
    /// since the scan; a partially loaded sequence is never returned.
    pub fn get(&self, index: usize) -> Result<LoadedSequence> {
        let record = self
            .sequences
            .get(index)
            .ok_or(DatasetError::OutOfRange {
                index,
                len: self.sequences.len(),
            })?;

        let mut frames = Vec::with_capacity(record.frames.len());
        for frame in &record.frames {
            let left = open_gray(&frame.left)?;
            let right = open_gray(&frame.right)?;
            let pair = match &self.transform {
                Some(transform) => (transform(&left), transform(&right)),
                None => (to_unit_tensor(&left), to_unit_tensor(&right)),
            };
            frames.push(pair);
        }

        Ok(LoadedSequence {
            subject_id: record.subject_id,
            gesture_id: record.gesture_id,
            repetition_id: record.repetition_id,
            frames,
        })
    }
}

fn open_gray(path: &Path) -> Result<GrayImage> {
    let img = image::open(path).map_err(|source| DatasetError::FrameRead {
        path: path.display().to_string(),
        source,
    })?;
    Ok(img.to_luma8())
}

fn scan_sequences(root: &Path) -> Vec<SequenceRecord> {
    let mut sequences = Vec::new();

    for subject_id in 0..SUBJECT_COUNT {
        let subject_path = root.join(format!("{subject_id:03}"));
        if !subject_path.exists() {
            // Absent subjects are expected (train/val splits); stay quiet.
            continue;
        }

        for gesture_id in 0..GESTURE_COUNT {
            let gesture_path = subject_path.join(format!("g{gesture_id:02}"));
            if !gesture_path.exists() {
                debug!("Skipping missing gesture dir {}", gesture_path.display());
                continue;
            }

            for repetition_id in 0..REPETITION_COUNT {
                let repetition_path = gesture_path.join(format!("{repetition_id:02}"));
                if !repetition_path.exists() {
                    debug!(
                        "Skipping missing repetition dir {}",
                        repetition_path.display()
                    );
                    continue;
                }

                if let Some(record) =
                    scan_repetition(&repetition_path, subject_id, gesture_id, repetition_id)
                {
                    sequences.push(record);
                }
            }
        }
    }

    sequences
}

/// Collect the 40 frame pairs of one repetition directory, or `None` as soon
/// as either side of any pair is missing (remaining frames are not checked).
fn scan_repetition(
    repetition_path: &Path,
    subject_id: u8,
    gesture_id: u8,
    repetition_id: u8,
) -> Option<SequenceRecord> {
    let mut frames = Vec::with_capacity(FRAMES_PER_SEQUENCE);

    for frame_id in 0..FRAMES_PER_SEQUENCE as u8 {
        let left = repetition_path
            .join("L")
            .join("raw")
            .join(format!("{frame_id:03}_rl.png"));
        let right = repetition_path
            .join("R")
            .join("raw")
            .join(format!("{frame_id:03}_rr.png"));

        if !left.exists() || !right.exists() {
            warn!(
                "Incomplete sequence: {} or {} missing",
                left.display(),
                right.display()
            );
            return None;
        }

        frames.push(FrameRef {
            frame_id,
            left,
            right,
        });
    }

    Some(SequenceRecord {
        subject_id,
        gesture_id,
        repetition_id,
        frames,
    })
}
