mod globe;

pub use globe::{Globe, GRATICULE_LINE_STEP, LINE_POINT_INTERVAL_KM};
