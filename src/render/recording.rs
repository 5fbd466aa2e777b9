//! Renderer double that records every call, for asserting on draw output.

use glam::DVec3;
use image::{Rgba, RgbaImage};

use crate::render::{ImageOptions, Renderer};
use crate::style::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Begin,
    End,
    SetColor(Color),
    Segment(DVec3, DVec3),
    Point(DVec3, f64),
    Rotate(f64, f64, f64),
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
}

impl RecordingRenderer {
    pub fn segments(&self) -> Vec<(DVec3, DVec3)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Segment(a, b) => Some((*a, *b)),
                _ => None,
            })
            .collect()
    }

    pub fn points(&self) -> Vec<(DVec3, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Point(p, r) => Some((*p, *r)),
                _ => None,
            })
            .collect()
    }

    /// Segments grouped by the begin/end scope they were drawn in.
    pub fn scopes(&self) -> Vec<Vec<(DVec3, DVec3)>> {
        let mut scopes = Vec::new();
        let mut current: Option<Vec<(DVec3, DVec3)>> = None;
        for call in &self.calls {
            match call {
                Call::Begin => current = Some(Vec::new()),
                Call::End => scopes.extend(current.take()),
                Call::Segment(a, b) => {
                    if let Some(scope) = current.as_mut() {
                        scope.push((*a, *b));
                    }
                }
                _ => {}
            }
        }
        scopes
    }
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self) {
        self.calls.push(Call::Begin);
    }

    fn end(&mut self) {
        self.calls.push(Call::End);
    }

    fn set_color(&mut self, color: Color) {
        self.calls.push(Call::SetColor(color));
    }

    fn draw_segment(&mut self, from: DVec3, to: DVec3) {
        self.calls.push(Call::Segment(from, to));
    }

    fn draw_point(&mut self, at: DVec3, radius: f64) {
        self.calls.push(Call::Point(at, radius));
    }

    fn rotate(&mut self, x: f64, y: f64, z: f64) {
        self.calls.push(Call::Rotate(x, y, z));
    }

    fn render_image(&self, width: u32, height: u32, opts: &ImageOptions) -> RgbaImage {
        let bg = opts.background;
        RgbaImage::from_pixel(width, height, Rgba([bg.r, bg.g, bg.b, bg.a]))
    }

    fn render_preview(&self, cols: usize, rows: usize) -> String {
        vec![" ".repeat(cols); rows].join("\n")
    }
}
