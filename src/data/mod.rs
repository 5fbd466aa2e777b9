//! Boundary paths baked into the binary.
//!
//! The shipped tables are coarse hand-drawn outlines. The `buildgeodata` tool
//! (see [`prepare`]) turns a GeoJSON polygon dataset into a drop-in
//! replacement module. Each path is a run of `(lat, lng)` pairs in degrees;
//! consecutive points are joined, paths are not closed implicitly.

mod countries;
mod land;
pub mod prepare;

/// A table of prepared paths.
pub type PathTable = &'static [&'static [(f32, f32)]];

pub use countries::COUNTRIES;
pub use land::LAND;
