//! Side-by-side playback of a loaded stereo sequence.
//!
//! Frames arrive as the dataset's normalized tensors; before anything is
//! drawn, each frame and each side is independently stretched to [0, 1]
//! from its own pixel range. That keeps dim captures visible but means
//! brightness is not comparable across frames; it is purely a display
//! transform, distinct from the dataset normalization.

mod font;
mod gif;
mod preview;

pub use gif::{export_animation, EXPORT_PATH};
pub use preview::SequencePreview;

use std::path::Path;

use briareo_core::img::GrayTensor;

use crate::errors::Result;

/// Guard against a flat frame dividing by zero.
const DISPLAY_EPS: f32 = 1e-8;

/// Rescale one frame to [0, 1] using only its own pixel range.
pub fn normalize_for_display(frame: &GrayTensor) -> GrayTensor {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in frame.as_raw() {
        min = min.min(v);
        max = max.max(v);
    }

    let span = max - min + DISPLAY_EPS;
    let data: Vec<f32> = frame.as_raw().iter().map(|&v| (v - min) / span).collect();
    GrayTensor::from_raw(frame.width(), frame.height(), data)
        .expect("normalized buffer matches frame dimensions")
}

pub(crate) fn luma_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Play back a sequence: export the looping GIF first when requested, then
/// block on the interactive window until it is closed.
pub fn play(frames: &[(GrayTensor, GrayTensor)], export: bool) -> Result<()> {
    if export {
        export_animation(frames, Path::new(EXPORT_PATH))?;
    }

    let mut preview = SequencePreview::new(frames)?;
    preview.run(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn tensor_from(values: &[f32], width: u32, height: u32) -> GrayTensor {
        GrayTensor::from_raw(width, height, values.to_vec()).unwrap()
    }

    #[test]
    fn display_normalization_uses_the_frame_own_range() {
        let frame = tensor_from(&[-1.0, 0.0, 0.5, 1.0], 2, 2);
        let normalized = normalize_for_display(&frame);

        let raw = normalized.as_raw();
        assert!(raw[0].abs() < 1e-6);
        assert!((raw[3] - 1.0).abs() < 1e-6);
        assert!(raw.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn flat_frame_normalizes_without_dividing_by_zero() {
        let frame = GrayTensor::from_pixel(3, 3, Luma([0.25_f32]));
        let normalized = normalize_for_display(&frame);
        assert!(normalized.as_raw().iter().all(|v| v.is_finite() && *v == 0.0));
    }

    #[test]
    fn luma_conversion_clamps_and_rounds() {
        assert_eq!(luma_to_u8(-0.5), 0);
        assert_eq!(luma_to_u8(0.0), 0);
        assert_eq!(luma_to_u8(0.5), 128);
        assert_eq!(luma_to_u8(1.0), 255);
        assert_eq!(luma_to_u8(2.0), 255);
    }
}
