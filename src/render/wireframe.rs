use glam::{DMat3, DVec3};
use image::RgbaImage;

use crate::braille::BrailleCanvas;
use crate::render::raster::RasterCanvas;
use crate::render::{ImageOptions, Renderer};
use crate::style::Color;

/// Sphere radius of the Braille preview as a fraction of half the canvas.
const PREVIEW_SCALE: f64 = 0.95;

/// A scene primitive with the color that was active when it was drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Segment { from: DVec3, to: DVec3, color: Color },
    Point { at: DVec3, radius: f64, color: Color },
}

impl Primitive {
    fn rotated(&self, m: &DMat3) -> Primitive {
        match *self {
            Primitive::Segment { from, to, color } => Primitive::Segment {
                from: *m * from,
                to: *m * to,
                color,
            },
            Primitive::Point { at, radius, color } => Primitive::Point {
                at: *m * at,
                radius,
                color,
            },
        }
    }

    /// Distance from the viewer; larger is further away.
    fn depth(&self) -> f64 {
        match self {
            Primitive::Segment { from, to, .. } => (from.z + to.z) / 2.0,
            Primitive::Point { at, .. } => at.z,
        }
    }
}

/// Orthographic view of the scene onto a pixel grid.
///
/// The viewer sits on the -z side looking towards +z, with screen x to the
/// right and screen y up.
struct View {
    cx: f64,
    cy: f64,
    radius: f64,
}

impl View {
    fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            radius: scale * width.min(height) / 2.0,
        }
    }

    #[inline(always)]
    fn to_screen(&self, p: DVec3) -> (f64, f64) {
        (self.cx + p.x * self.radius, self.cy - p.y * self.radius)
    }
}

/// In-memory wireframe scene with a camera orientation.
///
/// Primitives are stored in world space; the orientation set by `rotate` is
/// applied to the whole scene when rendering.
pub struct Wireframe {
    primitives: Vec<Primitive>,
    colors: Vec<Color>,
    orientation: DMat3,
}

impl Wireframe {
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            colors: vec![Color::BLACK],
            orientation: DMat3::IDENTITY,
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn orientation(&self) -> DMat3 {
        self.orientation
    }

    /// Where a world-space point ends up in view space.
    pub fn transform(&self, p: DVec3) -> DVec3 {
        self.orientation * p
    }

    fn active_color(&self) -> Color {
        self.colors.last().copied().unwrap_or(Color::BLACK)
    }

    /// View-space primitives ordered far to near.
    fn view_primitives(&self) -> Vec<Primitive> {
        let mut prims: Vec<Primitive> = self
            .primitives
            .iter()
            .map(|p| p.rotated(&self.orientation))
            .collect();
        prims.sort_by(|a, b| b.depth().total_cmp(&a.depth()));
        prims
    }
}

impl Default for Wireframe {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for Wireframe {
    fn begin(&mut self) {
        let current = self.active_color();
        self.colors.push(current);
    }

    fn end(&mut self) {
        if self.colors.len() > 1 {
            self.colors.pop();
        }
    }

    fn set_color(&mut self, color: Color) {
        if let Some(top) = self.colors.last_mut() {
            *top = color;
        }
    }

    fn draw_segment(&mut self, from: DVec3, to: DVec3) {
        let color = self.active_color();
        self.primitives.push(Primitive::Segment { from, to, color });
    }

    fn draw_point(&mut self, at: DVec3, radius: f64) {
        let color = self.active_color();
        self.primitives.push(Primitive::Point { at, radius, color });
    }

    fn rotate(&mut self, x: f64, y: f64, z: f64) {
        let r = DMat3::from_rotation_z(z) * DMat3::from_rotation_y(y) * DMat3::from_rotation_x(x);
        self.orientation = r * self.orientation;
    }

    fn render_image(&self, width: u32, height: u32, opts: &ImageOptions) -> RgbaImage {
        let view = View::new(width as f64, height as f64, opts.scale);
        let stroke_width = opts.line_width * width.min(height) as f64 / 100.0;
        let mut canvas = RasterCanvas::new(width, height, opts.background);

        let prims = self.view_primitives();
        tracing::debug!(
            primitives = prims.len(),
            width,
            height,
            "rasterizing wireframe scene"
        );

        for prim in &prims {
            match *prim {
                Primitive::Segment { from, to, color } => {
                    canvas.stroke(view.to_screen(from), view.to_screen(to), stroke_width, color);
                }
                Primitive::Point { at, radius, color } => {
                    let r = (radius * view.radius).max(1.0);
                    canvas.fill_circle(view.to_screen(at), r, color);
                }
            }
        }

        canvas.into_image()
    }

    fn render_preview(&self, cols: usize, rows: usize) -> String {
        let mut canvas = BrailleCanvas::new(cols, rows);
        let (w, h) = canvas.pixel_size();
        let view = View::new(w as f64, h as f64, PREVIEW_SCALE);
        let px = |p: DVec3| {
            let (x, y) = view.to_screen(p);
            (x.floor() as i32, y.floor() as i32)
        };

        // Only the hemisphere facing the viewer; dots carry no depth cue.
        for prim in self.view_primitives() {
            match prim {
                Primitive::Segment { from, to, .. } if from.z <= 0.0 && to.z <= 0.0 => {
                    let (x0, y0) = px(from);
                    let (x1, y1) = px(to);
                    canvas.draw_line(x0, y0, x1, y1);
                }
                Primitive::Point { at, radius, .. } if at.z <= 0.0 => {
                    let (x, y) = px(at);
                    canvas.draw_circle(x, y, (radius * view.radius).round() as i32);
                }
                _ => {}
            }
        }

        canvas.to_string()
    }
}
