use std::fmt;

use crate::render::bresenham;

/// Braille Unicode canvas for high-resolution terminal graphics.
/// Each character cell represents a 2x4 pixel grid (8 dots).
/// Unicode Braille patterns: U+2800 to U+28FF
pub struct BrailleCanvas {
    width: usize,  // Characters
    height: usize, // Characters
    pixels: Vec<Vec<u8>>, // Bit patterns per char
}

impl BrailleCanvas {
    /// Create a new canvas with the given character dimensions.
    /// Effective pixel resolution: width*2 x height*4
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![vec![0u8; width]; height],
        }
    }

    /// Set a pixel at the given coordinates.
    /// Braille dot layout per character:
    /// ```text
    /// (0,0) (1,0)   bits: 0x01 0x08
    /// (0,1) (1,1)   bits: 0x02 0x10
    /// (0,2) (1,2)   bits: 0x04 0x20
    /// (0,3) (1,3)   bits: 0x40 0x80
    /// ```
    pub fn set_pixel(&mut self, x: usize, y: usize) {
        let cx = x / 2;
        let cy = y / 4;

        if cx >= self.width || cy >= self.height {
            return;
        }

        let bit = match (x % 2, y % 4) {
            (0, 0) => 0x01,
            (1, 0) => 0x08,
            (0, 1) => 0x02,
            (1, 1) => 0x10,
            (0, 2) => 0x04,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => 0,
        };

        self.pixels[cy][cx] |= bit;
    }

    /// Set a pixel using signed coordinates (ignores negative values)
    pub fn set_pixel_signed(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize);
        }
    }

    /// Get a specific row as a string (for line-by-line rendering)
    pub fn row_to_string(&self, row: usize) -> String {
        if row >= self.height {
            return String::new();
        }
        self.pixels[row]
            .iter()
            .map(|&b| char::from_u32(0x2800 + b as u32).unwrap_or(' '))
            .collect()
    }

    /// Get all rows as an iterator of strings
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height).map(|i| self.row_to_string(i))
    }

    /// Pixel dimensions (width*2, height*4)
    pub fn pixel_size(&self) -> (usize, usize) {
        (self.width * 2, self.height * 4)
    }

    /// Draw a line between two pixel positions
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        bresenham(x0, y0, x1, y1, |x, y| self.set_pixel_signed(x, y));
    }

    /// Draw a filled circle (at least one dot)
    ///
    /// Only pixels inside the canvas are visited, so oversized radii are cheap.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32) {
        let (w, h) = self.pixel_size();
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius.max(0)));
        let xs = (cx - r).max(0)..=(cx + r).min(w as i64 - 1);
        let ys = (cy - r).max(0)..=(cy + r).min(h as i64 - 1);
        for y in ys {
            for x in xs.clone() {
                let (dx, dy) = (x - cx, y - cy);
                if (dx * dx).saturating_add(dy * dy) <= r * r {
                    self.set_pixel(x as usize, y as usize);
                }
            }
        }
    }
}

impl fmt::Display for BrailleCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self.rows().collect();
        f.write_str(&rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pixel() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.set_pixel(0, 0);
        assert_eq!(canvas.to_string(), "⠁"); // U+2801
    }

    #[test]
    fn test_all_dots() {
        let mut canvas = BrailleCanvas::new(1, 1);
        // Set all 8 dots
        for x in 0..2 {
            for y in 0..4 {
                canvas.set_pixel(x, y);
            }
        }
        assert_eq!(canvas.to_string(), "⣿"); // U+28FF (all dots)
    }

    #[test]
    fn test_line_and_circle() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.draw_line(0, 0, 3, 0);
        assert_eq!(canvas.to_string(), "⠉⠉");

        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.draw_circle(0, 0, 0);
        assert_eq!(canvas.to_string(), "⠁");
        assert_eq!(canvas.pixel_size(), (2, 4));
    }

    #[test]
    fn test_huge_circle_fills_canvas() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.draw_circle(1, 1, i32::MAX);
        assert_eq!(canvas.to_string(), "⣿⣿");

        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.draw_circle(i32::MIN, i32::MIN, 3);
        assert_eq!(canvas.to_string(), "⠀");
        canvas.draw_circle(0, 0, -5);
        assert_eq!(canvas.to_string(), "⠁");
    }

    #[test]
    fn test_multiple_rows() {
        let mut canvas = BrailleCanvas::new(1, 2);
        canvas.draw_line(0, 0, 0, 7);
        assert_eq!(canvas.to_string(), "⡇\n⡇");
    }

    #[test]
    fn test_diagonal() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.set_pixel(0, 0);
        canvas.set_pixel(1, 1);
        canvas.set_pixel(2, 2);
        canvas.set_pixel(3, 3);
        // First char: (0,0) and (1,1) = 0x01 | 0x10 = 0x11
        // Second char: (0,2) and (1,3) = 0x04 | 0x80 = 0x84
        assert_eq!(canvas.to_string(), "⠑⢄");
    }
}
