use image::{Rgba, RgbaImage};

use crate::style::Color;

/// Thinnest visible stroke, as alpha coverage of a one pixel line.
const MIN_COVERAGE: f64 = 0.15;

/// Walk the pixels of a line using Bresenham's algorithm.
pub(crate) fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        plot(x, y);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;

        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }

        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// RGBA pixel buffer with source-over blending.
pub(crate) struct RasterCanvas {
    image: RgbaImage,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let px = Rgba([background.r, background.g, background.b, background.a]);
        Self {
            image: RgbaImage::from_pixel(width, height, px),
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel ranges covering a screen-space box, limited to the image.
    fn clamp_box(
        &self,
        min: (f64, f64),
        max: (f64, f64),
    ) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
        let w = self.image.width() as f64;
        let h = self.image.height() as f64;
        let xs = min.0.floor().max(0.0) as i32..max.0.ceil().min(w) as i32;
        let ys = min.1.floor().max(0.0) as i32..max.1.ceil().min(h) as i32;
        (xs, ys)
    }

    /// Blend `color` into one pixel; `coverage` scales the color's alpha.
    fn blend(&mut self, x: i32, y: i32, color: Color, coverage: f64) {
        if x < 0 || y < 0 || x as u32 >= self.image.width() || y as u32 >= self.image.height() {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let sa = color.a as f64 / 255.0 * coverage.clamp(0.0, 1.0);
        let da = dst[3] as f64 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return;
        }
        let mix = |s: u8, d: u8| {
            let c = (s as f64 * sa + d as f64 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };
        *dst = Rgba([
            mix(color.r, dst[0]),
            mix(color.g, dst[1]),
            mix(color.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ]);
    }

    /// Stroke a segment between two screen positions.
    ///
    /// Strokes under a pixel wide are drawn one pixel wide with reduced alpha.
    /// A non-positive width draws nothing.
    pub fn stroke(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
        if width <= 0.0 || width.is_nan() {
            return;
        }
        if width < 1.0 {
            let coverage = width.max(MIN_COVERAGE);
            bresenham(
                from.0.floor() as i32,
                from.1.floor() as i32,
                to.0.floor() as i32,
                to.1.floor() as i32,
                |x, y| self.blend(x, y, color, coverage),
            );
            return;
        }

        let half = width / 2.0;
        let (xs, ys) = self.clamp_box(
            (from.0.min(to.0) - half, from.1.min(to.1) - half),
            (from.0.max(to.0) + half, from.1.max(to.1) + half),
        );
        for y in ys {
            for x in xs.clone() {
                let center = (x as f64 + 0.5, y as f64 + 0.5);
                if distance_to_segment(center, from, to) <= half {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    /// Fill a disc centered on a screen position.
    pub fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color) {
        let (xs, ys) = self.clamp_box(
            (center.0 - radius, center.1 - radius),
            (center.0 + radius, center.1 + radius),
        );
        for y in ys {
            for x in xs.clone() {
                let dx = x as f64 + 0.5 - center.0;
                let dy = y as f64 + 0.5 - center.1;
                if dx * dx + dy * dy <= radius * radius {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }
}

fn distance_to_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let len2 = abx * abx + aby * aby;
    let t = if len2 > 0.0 {
        (((p.0 - a.0) * abx + (p.1 - a.1) * aby) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.0 + t * abx, a.1 + t * aby);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}
