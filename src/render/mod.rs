//! Rendering backends for globe scenes.
//!
//! A [`Renderer`] accumulates 3D primitives inside nested color scopes and
//! rasterizes them on request. [`Wireframe`] is the backend used by default.

mod raster;
mod wireframe;

#[cfg(test)]
pub(crate) mod recording;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::style::Color;

pub(crate) use raster::bresenham;
pub use wireframe::{Primitive, Wireframe};

/// Rasterization settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageOptions {
    pub background: Color,
    /// Stroke width in pixels per 100 pixels of image side.
    pub line_width: f64,
    /// Sphere radius as a fraction of half the image side.
    pub scale: f64,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}

/// The primitive sink a `Globe` draws into.
pub trait Renderer {
    /// Open a color scope. The active color is restored by the matching `end`.
    fn begin(&mut self);

    fn end(&mut self);

    fn set_color(&mut self, color: Color);

    fn draw_segment(&mut self, from: DVec3, to: DVec3);

    /// `radius` is in unit-sphere units.
    fn draw_point(&mut self, at: DVec3, radius: f64);

    /// Rotate the view about the x, y and z axes, in that order (radians).
    fn rotate(&mut self, x: f64, y: f64, z: f64);

    fn render_image(&self, width: u32, height: u32, opts: &ImageOptions) -> RgbaImage;

    /// Braille text rendering of the scene, `cols` x `rows` characters.
    fn render_preview(&self, cols: usize, rows: usize) -> String;

    fn save_png(
        &self,
        path: &Path,
        width: u32,
        height: u32,
        opts: &ImageOptions,
    ) -> Result<(), ExportError> {
        let image = self.render_image(width, height, opts);
        let mut writer = BufWriter::new(File::create(path)?);
        image.write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;
        Ok(())
    }
}
