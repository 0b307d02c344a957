//! Minimal 3x5 bitmap font for panel titles. Only the characters the
//! preview actually draws have glyphs; anything else renders blank.

const GLYPH_W: usize = 3;
const GLYPH_H: usize = 5;
const SCALE: usize = 2;

/// Pixel height of a rendered label.
pub const LABEL_H: usize = GLYPH_H * SCALE;

pub fn draw_label(buf: &mut [u32], buf_width: usize, text: &str, x: usize, y: usize, color: u32) {
    let mut cx = x;
    for ch in text.chars() {
        let glyph = glyph(ch);
        for (row, &bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                    continue;
                }
                for sy in 0..SCALE {
                    for sx in 0..SCALE {
                        let px = cx + col * SCALE + sx;
                        let py = y + row * SCALE + sy;
                        if px < buf_width {
                            if let Some(slot) = buf.get_mut(py * buf_width + px) {
                                *slot = color;
                            }
                        }
                    }
                }
            }
        }
        cx += (GLYPH_W + 1) * SCALE;
    }
}

fn glyph(c: char) -> [u8; GLYPH_H] {
    match c {
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        _ => [0; GLYPH_H],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_glyphs_paint_pixels() {
        let mut buf = vec![0u32; 64 * 16];
        draw_label(&mut buf, 64, "LEFT", 0, 0, 0xFFFF_FFFF);
        assert!(buf.iter().any(|&p| p != 0));
    }

    #[test]
    fn unknown_characters_render_blank() {
        let mut buf = vec![0u32; 64 * 16];
        draw_label(&mut buf, 64, "???", 0, 0, 0xFFFF_FFFF);
        assert!(buf.iter().all(|&p| p == 0));
    }

    #[test]
    fn labels_clip_at_the_buffer_edge() {
        let mut buf = vec![0u32; 8 * 8];
        draw_label(&mut buf, 8, "RIGHT", 4, 4, 0xFFFF_FFFF);
        // Must not panic or wrap; whatever lands in-bounds is painted.
        assert_eq!(buf.len(), 64);
    }
}
