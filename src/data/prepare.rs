//! Conversion of GeoJSON boundary datasets into baked path tables.

use std::io::Write;

use geojson::{FeatureCollection, GeoJson, Position, Value};
use thiserror::Error;
use tracing::warn;

/// One polygon ring as read from GeoJSON, `[lng, lat]` positions.
pub type RawPath = Vec<Position>;

#[derive(Debug, Error)]
pub enum GeodataError {
    #[error("no handler for geometry type {0}")]
    UnsupportedGeometry(&'static str),
    #[error("point must have two coordinates, found {0}")]
    Arity(usize),
    #[error("expected a FeatureCollection, found a {0}")]
    NotACollection(&'static str),
    #[error("invalid GeoJSON: {0}")]
    Parse(#[from] geojson::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn geometry_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Parse a GeoJSON document that must be a FeatureCollection.
pub fn parse_feature_collection(content: &str) -> Result<FeatureCollection, GeodataError> {
    match content.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => Ok(fc),
        GeoJson::Feature(_) => Err(GeodataError::NotACollection("Feature")),
        GeoJson::Geometry(_) => Err(GeodataError::NotACollection("Geometry")),
    }
}

/// Flatten every polygon ring of the collection into one path list.
///
/// Point features are skipped with a warning; any other non-polygon geometry
/// is an error.
pub fn extract_paths(collection: &FeatureCollection) -> Result<Vec<RawPath>, GeodataError> {
    let mut paths = Vec::new();
    for feature in &collection.features {
        let Some(geometry) = &feature.geometry else {
            warn!("discarding feature without geometry");
            continue;
        };
        match &geometry.value {
            Value::Polygon(rings) => paths.extend(rings.iter().cloned()),
            Value::MultiPolygon(polygons) => {
                for rings in polygons {
                    paths.extend(rings.iter().cloned());
                }
            }
            value @ (Value::Point(_) | Value::MultiPoint(_)) => {
                warn!("discarding point geometry type {}", geometry_type(value));
            }
            value => return Err(GeodataError::UnsupportedGeometry(geometry_type(value))),
        }
    }
    Ok(paths)
}

/// Write `paths` as a Rust module defining `pub static {var_name}`.
///
/// Positions are swapped to `(lat, lng)`. Nothing is written if any position
/// does not have exactly two coordinates.
pub fn write_paths_code<W: Write>(
    w: &mut W,
    var_name: &str,
    arguments: &str,
    paths: &[RawPath],
) -> Result<(), GeodataError> {
    if let Some(bad) = paths.iter().flatten().find(|p| p.len() != 2) {
        return Err(GeodataError::Arity(bad.len()));
    }

    writeln!(w, "// Generated code. DO NOT EDIT.")?;
    writeln!(w, "// Arguments: {arguments}")?;
    writeln!(w)?;
    writeln!(w, "use super::PathTable;")?;
    writeln!(w)?;
    writeln!(w, "pub static {var_name}: PathTable = &[")?;
    for path in paths {
        writeln!(w, "    &[")?;
        for point in path {
            writeln!(w, "        ({:?}, {:?}),", point[1], point[0])?;
        }
        writeln!(w, "    ],")?;
    }
    writeln!(w, "];")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLYGONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [
                        [[0.0, 0.0], [10.0, 0.0], [10.0, 5.0], [0.0, 0.0]],
                        [[2.0, 1.0], [3.0, 1.0], [2.0, 2.0], [2.0, 1.0]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "Point", "coordinates": [1.0, 2.0] }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[20.0, 40.0], [21.0, 40.0], [21.0, 41.0], [20.0, 40.0]]],
                        [[[-3.5, 51.25], [-3.0, 51.0], [-3.5, 51.0], [-3.5, 51.25]]]
                    ]
                }
            }
        ]
    }"#;

    #[test]
    fn test_extract_flattens_rings() {
        let fc = parse_feature_collection(POLYGONS).unwrap();
        let paths = extract_paths(&fc).unwrap();
        assert_eq!(paths.len(), 4);
        assert_eq!(paths[0][1], vec![10.0, 0.0]);
        assert_eq!(paths[1][0], vec![2.0, 1.0]);
        assert_eq!(paths[3][0], vec![-3.5, 51.25]);
    }

    #[test]
    fn test_unsupported_geometry_is_an_error() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": { "type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]] }
            }]
        }"#;
        let fc = parse_feature_collection(doc).unwrap();
        let err = extract_paths(&fc).unwrap_err();
        assert!(matches!(err, GeodataError::UnsupportedGeometry("LineString")));
    }

    #[test]
    fn test_rejects_non_collection() {
        let doc = r#"{ "type": "Point", "coordinates": [1.0, 2.0] }"#;
        let err = parse_feature_collection(doc).unwrap_err();
        assert!(matches!(err, GeodataError::NotACollection("Geometry")));
        assert!(matches!(
            parse_feature_collection("not json"),
            Err(GeodataError::Parse(_))
        ));
    }

    #[test]
    fn test_write_swaps_to_lat_lng() {
        let paths = vec![vec![vec![-2.5, 51.25], vec![10.0, -5.0]]];
        let mut out = Vec::new();
        write_paths_code(&mut out, "LAND", "--var LAND", &paths).unwrap();
        let code = String::from_utf8(out).unwrap();
        let expected = "\
// Generated code. DO NOT EDIT.
// Arguments: --var LAND

use super::PathTable;

pub static LAND: PathTable = &[
    &[
        (51.25, -2.5),
        (-5.0, 10.0),
    ],
];
";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_write_rejects_bad_arity() {
        let paths = vec![vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]]];
        let mut out = Vec::new();
        let err = write_paths_code(&mut out, "X", "", &paths).unwrap_err();
        assert!(matches!(err, GeodataError::Arity(3)));
        assert!(out.is_empty());
    }
}
