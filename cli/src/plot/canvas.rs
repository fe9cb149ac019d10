//! Software-rendered RGB image.

use anyhow::{Context, Result};
use std::io::Write;

use crate::math::bresenham::{self, Point};
use crate::math::blend;

/// RGB image with 8 bits per channel. Pixel `[0, 0]` is the top left corner.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
}

impl Canvas {
    /// Creates a canvas filled with a single color.
    pub fn new(width: usize, height: usize, background: [u8; 3]) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the color of a pixel, or `None` if it is outside the canvas.
    pub fn get(&self, [x, y]: Point) -> Option<[u8; 3]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Sets the color of a pixel. Pixels outside the canvas are ignored.
    pub fn set(&mut self, [x, y]: Point, color: [u8; 3]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Blends a color over a pixel. Pixels outside the canvas are ignored.
    pub fn blend(&mut self, p: Point, color: [u8; 3], alpha: f32) {
        if let Some(base) = self.get(p) {
            self.set(p, blend(base, color, alpha));
        }
    }

    /// Draws a one-pixel line between two points, inclusive.
    pub fn line(&mut self, start: Point, end: Point, color: [u8; 3]) {
        for p in bresenham::line(start, end) {
            self.set(p, color);
        }
    }

    /// Blends a color over a vertical span of pixels, inclusive.
    pub fn blend_span(&mut self, x: isize, y1: isize, y2: isize, color: [u8; 3], alpha: f32) {
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        for y in lo..=hi {
            self.blend([x, y], color, alpha);
        }
    }

    /// Draws the outline of a rectangle with the given corners, inclusive.
    pub fn frame(&mut self, [x1, y1]: Point, [x2, y2]: Point, color: [u8; 3]) {
        self.line([x1, y1], [x2, y1], color);
        self.line([x2, y1], [x2, y2], color);
        self.line([x2, y2], [x1, y2], color);
        self.line([x1, y2], [x1, y1], color);
    }

    /// Fills a rectangle with the given corners, inclusive.
    pub fn fill(&mut self, [x1, y1]: Point, [x2, y2]: Point, color: [u8; 3]) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.line([x, y1], [x, y2], color);
        }
    }

    /// Encodes the canvas as an 8-bit RGB PNG.
    pub fn write_png(&self, w: impl Write) -> Result<()> {
        let mut encoder = png::Encoder::new(w, self.width() as u32, self.height() as u32);
        encoder.set_color(png::ColorType::RGB);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().context("Writing PNG header")?;
        let data: Vec<u8> = self.pixels.iter().flatten().copied().collect();
        writer
            .write_image_data(&data)
            .context("Writing PNG image data")?;
        Ok(())
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        if (0..self.width as isize).contains(&x) && (0..self.height as isize).contains(&y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 3] = [255, 255, 255];
    const RED: [u8; 3] = [255, 0, 0];

    #[test]
    fn test_canvas_drawing() {
        let mut canvas = Canvas::new(8, 6, WHITE);
        canvas.line([0, 0], [7, 0], RED);
        assert_eq!(Some(RED), canvas.get([0, 0]));
        assert_eq!(Some(RED), canvas.get([7, 0]));
        assert_eq!(Some(WHITE), canvas.get([0, 1]));
        assert_eq!(None, canvas.get([8, 0]));
        assert_eq!(None, canvas.get([-1, 0]));

        // Drawing off the edge is ignored.
        canvas.line([-5, 3], [20, 3], RED);
        assert_eq!(Some(RED), canvas.get([7, 3]));

        canvas.blend_span(2, 5, 4, [0, 0, 0], 0.5);
        assert_eq!(Some([128, 128, 128]), canvas.get([2, 4]));
        assert_eq!(Some([128, 128, 128]), canvas.get([2, 5]));

        canvas.frame([1, 1], [3, 2], RED);
        assert_eq!(Some(RED), canvas.get([3, 2]));
        canvas.fill([5, 4], [6, 5], RED);
        assert_eq!(Some(RED), canvas.get([6, 4]));
    }

    #[test]
    fn test_write_png() {
        let canvas = Canvas::new(5, 3, RED);
        let mut bytes = vec![];
        canvas.write_png(&mut bytes).unwrap();
        assert_eq!(&[0x89, b'P', b'N', b'G'], &bytes[..4]);

        let (info, mut reader) = png::Decoder::new(&bytes[..]).read_info().unwrap();
        assert_eq!((5, 3), (info.width, info.height));
        let mut buf = vec![0; info.buffer_size()];
        reader.next_frame(&mut buf).unwrap();
        assert_eq!(&[255, 0, 0], &buf[..3]);
    }
}
