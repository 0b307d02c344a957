use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use briareo_core::img::GrayTensor;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use tracing::info;

use crate::errors::Result;

use super::{luma_to_u8, normalize_for_display};

/// Fixed output path for the exported animation; silently overwritten.
pub const EXPORT_PATH: &str = "gesture_sequence.gif";

/// Export frame rate, independent of the interactive display step.
const EXPORT_FPS: u32 = 20;

/// Encode the stereo pairs as an infinitely looping side-by-side GIF.
/// Blocks until the file is fully written.
pub fn export_animation(frames: &[(GrayTensor, GrayTensor)], path: &Path) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);
    let mut encoder = GifEncoder::new_with_speed(file, 10);
    encoder.set_repeat(Repeat::Infinite)?;

    for (left, right) in frames {
        let composite = compose_side_by_side(left, right);
        let delay = Delay::from_numer_denom_ms(1_000 / EXPORT_FPS, 1);
        encoder.encode_frame(Frame::from_parts(composite, 0, 0, delay))?;
    }

    info!(
        "Wrote {} animation frames to {}",
        frames.len(),
        path.display()
    );
    Ok(())
}

/// Paint the display-normalized pair onto one RGBA canvas, left then right.
pub(crate) fn compose_side_by_side(left: &GrayTensor, right: &GrayTensor) -> RgbaImage {
    let width = left.width() + right.width();
    let height = left.height().max(right.height());
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));

    blit_gray(&mut canvas, &normalize_for_display(left), 0);
    blit_gray(&mut canvas, &normalize_for_display(right), left.width());
    canvas
}

fn blit_gray(canvas: &mut RgbaImage, frame: &GrayTensor, x_offset: u32) {
    for (x, y, pixel) in frame.enumerate_pixels() {
        let v = luma_to_u8(pixel.0[0]);
        canvas.put_pixel(x + x_offset, y, Rgba([v, v, v, 255]));
    }
}
