use std::f64::consts::FRAC_PI_2;
use std::path::Path;

use image::RgbaImage;

use crate::data::{PathTable, COUNTRIES, LAND};
use crate::geo::{
    degrees_to_radians, great_circle_distance, great_circle_interpolate, project, GeoPoint,
    EARTH_RADIUS_KM,
};
use crate::render::{ExportError, Renderer, Wireframe};
use crate::style::{color, Color, Style, StyleOption, StyleScope};

/// Gap between nodes of a parallel or meridian, in degrees.
pub const GRATICULE_LINE_STEP: f64 = 1.0;

/// Longest great circle arc drawn as a single straight segment, in km.
pub const LINE_POINT_INTERVAL_KM: f64 = 500.0;

/// A globe visualization: 3D primitives on the unit sphere plus a camera.
///
/// Every drawing call appends to the scene; nothing is ever replaced.
pub struct Globe<R: Renderer = Wireframe> {
    renderer: R,
    /// Defaults used when a drawing call has no style overrides.
    pub style: Style,
}

impl Globe<Wireframe> {
    /// Empty globe with the default style.
    pub fn new() -> Self {
        Self::with_style(Style::default())
    }

    pub fn with_style(style: Style) -> Self {
        Self::with_renderer(Wireframe::new(), style)
    }
}

impl Default for Globe<Wireframe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer> Globe<R> {
    pub fn with_renderer(renderer: R, style: Style) -> Self {
        Self { renderer, style }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn styled(&mut self, base: Color, style: &[StyleOption]) -> StyleScope<'_, R> {
        StyleScope::open(&mut self.renderer, color(base), style)
    }

    /// Draw the parallel of latitude `lat`.
    /// Uses the graticule color unless overridden.
    pub fn draw_parallel(&mut self, lat: f64, style: &[StyleOption]) {
        let base = self.style.graticule_color;
        let mut scope = self.styled(base, style);
        let steps = (360.0 / GRATICULE_LINE_STEP).round() as usize;
        for i in 0..steps {
            let lng = -180.0 + i as f64 * GRATICULE_LINE_STEP;
            scope.draw_segment(project(lat, lng), project(lat, lng + GRATICULE_LINE_STEP));
        }
    }

    /// Draw the equator and parallels every `interval` degrees north and south.
    pub fn draw_parallels(&mut self, interval: f64, style: &[StyleOption]) {
        self.draw_parallel(0.0, style);
        if !(interval > 0.0) {
            return;
        }
        let mut k: usize = 1;
        while k as f64 * interval < 90.0 {
            let lat = k as f64 * interval;
            self.draw_parallel(lat, style);
            self.draw_parallel(-lat, style);
            k += 1;
        }
    }

    /// Draw the meridian at longitude `lng`, pole to pole.
    /// Uses the graticule color unless overridden.
    pub fn draw_meridian(&mut self, lng: f64, style: &[StyleOption]) {
        let base = self.style.graticule_color;
        let mut scope = self.styled(base, style);
        let steps = (180.0 / GRATICULE_LINE_STEP).round() as usize;
        for i in 0..steps {
            let lat = -90.0 + i as f64 * GRATICULE_LINE_STEP;
            scope.draw_segment(project(lat, lng), project(lat + GRATICULE_LINE_STEP, lng));
        }
    }

    /// Draw meridians every `interval` degrees, starting at -180.
    pub fn draw_meridians(&mut self, interval: f64, style: &[StyleOption]) {
        if !(interval > 0.0) {
            return;
        }
        let mut k: usize = 0;
        while -180.0 + k as f64 * interval < 180.0 {
            self.draw_meridian(-180.0 + k as f64 * interval, style);
            k += 1;
        }
    }

    /// Draw a latitude/longitude grid at the given interval.
    pub fn draw_graticule(&mut self, interval: f64, style: &[StyleOption]) {
        self.draw_parallels(interval, style);
        self.draw_meridians(interval, style);
    }

    /// Draw a dot at (lat, lng). `radius` is in unit-sphere units.
    /// Uses the dot color unless overridden.
    pub fn draw_dot(&mut self, lat: f64, lng: f64, radius: f64, style: &[StyleOption]) {
        let base = self.style.dot_color;
        let mut scope = self.styled(base, style);
        scope.draw_point(project(lat, lng), radius);
    }

    /// Draw the great circle path from (lat1, lng1) to (lat2, lng2).
    /// Uses the line color unless overridden.
    ///
    /// The arc is split into the fewest equal parts no longer than
    /// [`LINE_POINT_INTERVAL_KM`]. Equal endpoints draw nothing. The great
    /// circle through antipodal endpoints is not unique, so those are joined
    /// by a single chord.
    pub fn draw_line(
        &mut self,
        lat1: f64,
        lng1: f64,
        lat2: f64,
        lng2: f64,
        style: &[StyleOption],
    ) {
        let from = GeoPoint::new(lat1, lng1);
        let to = GeoPoint::new(lat2, lng2);
        let base = self.style.line_color;
        let mut scope = self.styled(base, style);

        let d = great_circle_distance(from, to);
        if d == 0.0 {
            return;
        }

        let mut prev = from.to_cartesian();
        let antipodal = (d / EARTH_RADIUS_KM).sin().abs() < 1e-12;
        if !antipodal {
            let steps = (d / LINE_POINT_INTERVAL_KM).ceil() as usize;
            for i in 1..steps {
                let t = i as f64 / steps as f64;
                let next = great_circle_interpolate(from, to, t).to_cartesian();
                scope.draw_segment(prev, next);
                prev = next;
            }
        }
        scope.draw_segment(prev, to.to_cartesian());
    }

    /// Draw the rectangle with the given corners. Sides follow great circles,
    /// as in [`Globe::draw_line`].
    pub fn draw_rect(
        &mut self,
        min_lat: f64,
        min_lng: f64,
        max_lat: f64,
        max_lng: f64,
        style: &[StyleOption],
    ) {
        self.draw_line(min_lat, min_lng, max_lat, min_lng, style);
        self.draw_line(max_lat, min_lng, max_lat, max_lng, style);
        self.draw_line(max_lat, max_lng, min_lat, max_lng, style);
        self.draw_line(min_lat, max_lng, min_lat, min_lng, style);
    }

    /// Draw land boundaries. Uses the line color unless overridden.
    pub fn draw_land_boundaries(&mut self, style: &[StyleOption]) {
        self.draw_prepared_paths(LAND, style);
    }

    /// Draw country boundaries. Uses the line color unless overridden.
    pub fn draw_country_boundaries(&mut self, style: &[StyleOption]) {
        self.draw_prepared_paths(COUNTRIES, style);
    }

    fn draw_prepared_paths(&mut self, paths: PathTable, style: &[StyleOption]) {
        let base = self.style.line_color;
        let mut scope = self.styled(base, style);
        for path in paths {
            for pair in path.windows(2) {
                let (lat1, lng1) = pair[0];
                let (lat2, lng2) = pair[1];
                scope.draw_segment(
                    project(lat1 as f64, lng1 as f64),
                    project(lat2 as f64, lng2 as f64),
                );
            }
        }
    }

    /// Rotate the camera so that (lat, lng) faces the viewer, north up.
    ///
    /// Paired with the `z = -sin(lat)` convention of [`project`].
    pub fn center_on(&mut self, lat: f64, lng: f64) {
        self.renderer.rotate(0.0, 0.0, -degrees_to_radians(lng) - FRAC_PI_2);
        self.renderer.rotate(FRAC_PI_2 - degrees_to_radians(lat), 0.0, 0.0);
    }

    /// Render a `side` x `side` image of the scene.
    pub fn render_image(&self, side: u32) -> RgbaImage {
        self.renderer.render_image(side, side, &self.style.image_options())
    }

    /// Write a `side` x `side` PNG of the scene to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>, side: u32) -> Result<(), ExportError> {
        let path = path.as_ref();
        self.renderer
            .save_png(path, side, side, &self.style.image_options())?;
        tracing::debug!(path = %path.display(), side, "saved globe image");
        Ok(())
    }

    /// Braille text preview of the scene, `cols` x `rows` characters.
    pub fn render_preview(&self, cols: usize, rows: usize) -> String {
        self.renderer.render_preview(cols, rows)
    }
}
