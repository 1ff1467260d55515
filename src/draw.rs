//! Drawing surface and the RGBA framebuffer behind the window

use crate::config::Rgb;

/// A pixel rectangle; may extend past the surface edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Primitives the game needs from the presentation layer
pub trait Surface {
    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgb);
    /// Width in pixels `text` occupies when drawn
    fn text_width(&self, text: &str) -> u32;
}

/// A borrowed RGBA8 buffer of `width * height` pixels
pub struct Frame<'a> {
    buf: &'a mut [u8],
    width: u32,
    height: u32,
    font_scale: u32,
}

impl<'a> Frame<'a> {
    pub fn new(buf: &'a mut [u8], width: u32, height: u32, font_scale: u32) -> Self {
        Self {
            buf,
            width,
            height,
            font_scale,
        }
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let idx = self.index(x as i32, y as i32)?;
        Some(Rgb(self.buf[idx], self.buf[idx + 1], self.buf[idx + 2]))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let idx = ((y as u32 * self.width + x as u32) * 4) as usize;
        (idx + 3 < self.buf.len()).then_some(idx)
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.buf[idx] = color.0;
            self.buf[idx + 1] = color.1;
            self.buf[idx + 2] = color.2;
            self.buf[idx + 3] = 255;
        }
    }

    /// Draws one glyph and returns the horizontal advance
    fn draw_char(&mut self, ch: char, x: i32, y: i32, color: Rgb) -> i32 {
        let scale = self.font_scale as i32;
        if let Some(rows) = glyph_5x7(ch) {
            for (ry, row) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (row >> (4 - rx)) & 1 == 1 {
                        let px = x + rx * scale;
                        let py = y + ry as i32 * scale;
                        self.fill_rect(Rect::new(px, py, scale as u32, scale as u32), color);
                    }
                }
            }
        }
        GLYPH_ADVANCE as i32 * scale
    }
}

impl Surface for Frame<'_> {
    fn clear(&mut self, color: Rgb) {
        for px in self.buf.chunks_exact_mut(4) {
            px[0] = color.0;
            px[1] = color.1;
            px[2] = color.2;
            px[3] = 255;
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let x1 = rect.x.max(0);
        let y1 = rect.y.max(0);
        let x2 = (rect.x + rect.w as i32).min(self.width as i32);
        let y2 = (rect.y + rect.h as i32).min(self.height as i32);
        for py in y1..y2 {
            for px in x1..x2 {
                self.put_pixel(px, py, color);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgb) {
        let mut cx = x;
        for ch in text.chars() {
            cx += self.draw_char(ch, cx, y, color);
        }
    }

    fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * GLYPH_ADVANCE * self.font_scale
    }
}

/// Glyph width plus one column of spacing
const GLYPH_ADVANCE: u32 = 6;

fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    let c = ch.to_ascii_uppercase();
    Some(match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => return None,
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(w: u32, h: u32) -> Vec<u8> {
        vec![0; (w * h * 4) as usize]
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut buf = buffer(4, 3);
        let mut frame = Frame::new(&mut buf, 4, 3, 1);
        frame.clear(Rgb(1, 2, 3));
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(frame.pixel(x, y), Some(Rgb(1, 2, 3)));
            }
        }
        assert!(buf.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_fill_rect() {
        let mut buf = buffer(10, 10);
        let mut frame = Frame::new(&mut buf, 10, 10, 1);
        frame.fill_rect(Rect::new(2, 3, 4, 2), Rgb::GREEN);

        assert_eq!(frame.pixel(2, 3), Some(Rgb::GREEN));
        assert_eq!(frame.pixel(5, 4), Some(Rgb::GREEN));
        assert_eq!(frame.pixel(6, 4), Some(Rgb::BLACK));
        assert_eq!(frame.pixel(2, 5), Some(Rgb::BLACK));
        assert_eq!(frame.pixel(1, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn test_fill_rect_clips_to_surface() {
        let mut buf = buffer(10, 10);
        let mut frame = Frame::new(&mut buf, 10, 10, 1);
        frame.fill_rect(Rect::new(-5, -5, 7, 7), Rgb::RED);
        frame.fill_rect(Rect::new(8, 8, 20, 20), Rgb::RED);
        frame.fill_rect(Rect::new(-40, 0, 20, 20), Rgb::WHITE);

        assert_eq!(frame.pixel(0, 0), Some(Rgb::RED));
        assert_eq!(frame.pixel(1, 1), Some(Rgb::RED));
        assert_eq!(frame.pixel(2, 2), Some(Rgb::BLACK));
        assert_eq!(frame.pixel(9, 9), Some(Rgb::RED));
        assert_eq!(frame.pixel(10, 10), None);
        assert!(buf.chunks_exact(4).all(|px| px[..3] != [255, 255, 255]));
    }

    #[test]
    fn test_text_width_scales_with_font() {
        let mut buf = buffer(1, 1);
        let frame = Frame::new(&mut buf, 1, 1, 3);
        assert_eq!(frame.text_width("Score: 0"), 8 * 6 * 3);
        assert_eq!(frame.text_width(""), 0);
    }

    #[test]
    fn test_draw_text_renders_glyph_pixels() {
        let mut buf = buffer(20, 10);
        let mut frame = Frame::new(&mut buf, 20, 10, 1);
        frame.draw_text("I", 1, 1, Rgb::WHITE);

        // Top bar of the I glyph spans five columns
        for x in 1..6 {
            assert_eq!(frame.pixel(x, 1), Some(Rgb::WHITE));
        }
        // Stem only in the middle column
        assert_eq!(frame.pixel(3, 3), Some(Rgb::WHITE));
        assert_eq!(frame.pixel(2, 3), Some(Rgb::BLACK));
    }

    #[test]
    fn test_lowercase_and_unknown_glyphs() {
        assert_eq!(glyph_5x7('a'), glyph_5x7('A'));
        assert!(glyph_5x7('!').is_some());
        assert!(glyph_5x7('~').is_none());

        let mut buf = buffer(20, 10);
        let mut frame = Frame::new(&mut buf, 20, 10, 1);
        frame.draw_text("~", 0, 0, Rgb::WHITE);
        assert!(buf.iter().all(|&b| b == 0));
    }
}
