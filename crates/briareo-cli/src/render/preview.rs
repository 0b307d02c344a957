//! Interactive playback window, software-rendered with `minifb`.

use std::time::Duration;

use briareo_core::img::GrayTensor;
use minifb::{Key, Window, WindowOptions};

use crate::errors::{PreviewError, Result};

use super::font::{draw_label, LABEL_H};
use super::{luma_to_u8, normalize_for_display};

/// Interval between interactive frame steps.
const FRAME_INTERVAL_MS: u64 = 50;

const MARGIN: usize = 16;
const TITLE_H: usize = LABEL_H + 8;
const BG_COLOR: u32 = 0xFF10_1018;
const LABEL_COLOR: u32 = 0xFFCC_CCCC;

/// Two grayscale panels side by side, stepping through the frame pairs at a
/// fixed interval and looping until the window is closed.
pub struct SequencePreview {
    window: Window,
    buf: Vec<u32>,
    width: usize,
    height: usize,
    panel_w: usize,
}

impl SequencePreview {
    /// Open a window sized for the given pairs.
    pub fn new(frames: &[(GrayTensor, GrayTensor)]) -> Result<Self> {
        let (left, right) = frames.first().ok_or(PreviewError::EmptySequence)?;
        let panel_w = left.width().max(right.width()) as usize;
        let panel_h = left.height().max(right.height()) as usize;
        let width = MARGIN * 3 + panel_w * 2;
        let height = MARGIN * 2 + TITLE_H + panel_h;

        let mut window = Window::new(
            "Briareo — stereo gesture sequence",
            width,
            height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| PreviewError::Window(e.to_string()))?;
        window.limit_update_rate(Some(Duration::from_millis(FRAME_INTERVAL_MS)));

        Ok(Self {
            window,
            buf: vec![BG_COLOR; width * height],
            width,
            height,
            panel_w,
        })
    }

    /// Loop over the pairs indefinitely, blocking the caller until the
    /// window is closed or Escape is pressed.
    pub fn run(&mut self, frames: &[(GrayTensor, GrayTensor)]) -> Result<()> {
        if frames.is_empty() {
            return Err(PreviewError::EmptySequence);
        }

        let mut index = 0usize;
        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            let (left, right) = &frames[index];
            self.draw_pair(left, right);
            self.window
                .update_with_buffer(&self.buf, self.width, self.height)
                .map_err(|e| PreviewError::Window(e.to_string()))?;
            index = (index + 1) % frames.len();
        }

        Ok(())
    }

    fn draw_pair(&mut self, left: &GrayTensor, right: &GrayTensor) {
        self.buf.fill(BG_COLOR);

        let left_x = MARGIN;
        let right_x = MARGIN * 2 + self.panel_w;
        let top = MARGIN + TITLE_H;

        draw_label(&mut self.buf, self.width, "LEFT", left_x, MARGIN, LABEL_COLOR);
        draw_label(
            &mut self.buf,
            self.width,
            "RIGHT",
            right_x,
            MARGIN,
            LABEL_COLOR,
        );

        self.blit(&normalize_for_display(left), left_x, top);
        self.blit(&normalize_for_display(right), right_x, top);
    }

    fn blit(&mut self, frame: &GrayTensor, x0: usize, y0: usize) {
        for (x, y, pixel) in frame.enumerate_pixels() {
            let col = x0 + x as usize;
            let row = y0 + y as usize;
            if col < self.width && row < self.height {
                let v = luma_to_u8(pixel.0[0]) as u32;
                self.buf[row * self.width + col] = 0xFF00_0000 | (v << 16) | (v << 8) | v;
            }
        }
    }
}
