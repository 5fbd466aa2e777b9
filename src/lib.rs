//! 3D wireframe globe visualizations.
//!
//! Geographic data (graticules, dots, great circle lines, boundaries) is
//! projected onto the unit sphere, drawn into a [`render::Renderer`] and
//! exported as an image.
//!
//! ```no_run
//! use globe::{color, Color, Globe};
//!
//! let mut g = Globe::new();
//! g.draw_graticule(10.0, &[]);
//! g.draw_land_boundaries(&[]);
//! g.draw_line(51.453349, -2.588323, 40.645423, -73.903879, &[color(Color::rgb(255, 0, 0))]);
//! g.center_on(50.244440, -37.207949);
//! g.save_png("line.png", 400)?;
//! # Ok::<(), globe::render::ExportError>(())
//! ```

pub mod braille;
pub mod data;
pub mod geo;
pub mod map;
pub mod render;
pub mod style;

pub use geo::GeoPoint;
pub use map::Globe;
pub use style::{color, Color, Style, StyleOption};
