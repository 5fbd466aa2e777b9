//! Coarse hand-drawn continent outlines.
//!
//! Fallback data for when no real dataset is at hand. Replace this file with
//! the output of `buildgeodata` run over a Natural Earth dataset for detail.

use super::PathTable;

pub static LAND: PathTable = &[
    &[
        (65.0, -168.0),
        (60.0, -166.0),
        (60.0, -141.0),
        (55.0, -130.0),
        (48.0, -125.0),
        (40.0, -124.0),
        (32.0, -117.0),
        (25.0, -110.0),
        (25.0, -97.0),
        (28.0, -97.0),
        (24.0, -82.0),
        (25.0, -80.0),
        (31.0, -81.0),
        (35.0, -75.0),
        (41.0, -70.0),
        (45.0, -67.0),
        (47.0, -65.0),
        (47.0, -55.0),
        (47.0, -52.0),
        (52.0, -55.0),
        (55.0, -58.0),
        (60.0, -64.0),
        (62.0, -73.0),
        (63.0, -80.0),
        (62.0, -95.0),
        (68.0, -110.0),
        (70.0, -130.0),
        (70.0, -145.0),
        (65.0, -168.0),
    ],
    &[
        (10.0, -80.0),
        (5.0, -75.0),
        (5.0, -70.0),
        (5.0, -60.0),
        (0.0, -50.0),
        (-5.0, -35.0),
        (-10.0, -35.0),
        (-15.0, -38.0),
        (-22.0, -40.0),
        (-25.0, -48.0),
        (-34.0, -55.0),
        (-38.0, -58.0),
        (-42.0, -65.0),
        (-50.0, -68.0),
        (-52.0, -75.0),
        (-45.0, -75.0),
        (-40.0, -72.0),
        (-30.0, -72.0),
        (-20.0, -70.0),
        (-15.0, -70.0),
        (-5.0, -80.0),
        (0.0, -80.0),
        (10.0, -80.0),
    ],
    &[
        (36.0, -10.0),
        (36.0, -5.0),
        (38.0, 0.0),
        (43.0, 5.0),
        (44.0, 10.0),
        (45.0, 15.0),
        (40.0, 20.0),
        (37.0, 25.0),
        (40.0, 30.0),
        (42.0, 35.0),
        (43.0, 40.0),
        (55.0, 40.0),
        (60.0, 30.0),
        (65.0, 25.0),
        (70.0, 20.0),
        (71.0, 10.0),
        (62.0, 5.0),
        (58.0, 5.0),
        (58.0, -5.0),
        (52.0, -10.0),
        (48.0, -5.0),
        (43.0, -5.0),
        (36.0, -10.0),
    ],
    &[
        (15.0, -17.0),
        (10.0, -15.0),
        (5.0, -10.0),
        (5.0, 0.0),
        (5.0, 10.0),
        (0.0, 15.0),
        (-5.0, 20.0),
        (-10.0, 25.0),
        (-20.0, 35.0),
        (-25.0, 35.0),
        (-30.0, 30.0),
        (-35.0, 20.0),
        (-35.0, 18.0),
        (-30.0, 15.0),
        (-15.0, 10.0),
        (0.0, 10.0),
        (5.0, 5.0),
        (5.0, -5.0),
        (10.0, -10.0),
        (15.0, -17.0),
    ],
    &[
        (15.0, -17.0),
        (20.0, -17.0),
        (28.0, -15.0),
        (35.0, -5.0),
        (37.0, 10.0),
        (33.0, 20.0),
        (32.0, 25.0),
        (30.0, 35.0),
        (20.0, 35.0),
        (12.0, 42.0),
        (12.0, 50.0),
        (5.0, 45.0),
        (-5.0, 35.0),
        (-20.0, 35.0),
    ],
    &[
        (42.0, 35.0),
        (43.0, 40.0),
        (40.0, 50.0),
        (37.0, 55.0),
        (25.0, 60.0),
        (25.0, 65.0),
        (20.0, 70.0),
        (15.0, 75.0),
        (8.0, 80.0),
        (15.0, 80.0),
        (22.0, 88.0),
        (22.0, 92.0),
        (16.0, 95.0),
        (14.0, 100.0),
        (10.0, 105.0),
        (20.0, 110.0),
        (22.0, 115.0),
        (22.0, 120.0),
        (25.0, 122.0),
        (30.0, 125.0),
        (35.0, 130.0),
        (35.0, 135.0),
        (40.0, 140.0),
        (45.0, 145.0),
        (50.0, 145.0),
        (55.0, 140.0),
        (55.0, 135.0),
        (52.0, 130.0),
        (43.0, 130.0),
        (40.0, 120.0),
        (45.0, 110.0),
        (50.0, 90.0),
        (55.0, 70.0),
        (55.0, 60.0),
        (50.0, 50.0),
        (43.0, 40.0),
    ],
    &[
        (-20.0, 115.0),
        (-18.0, 120.0),
        (-12.0, 130.0),
        (-12.0, 140.0),
        (-15.0, 145.0),
        (-25.0, 150.0),
        (-30.0, 153.0),
        (-35.0, 150.0),
        (-38.0, 145.0),
        (-38.0, 140.0),
        (-35.0, 135.0),
        (-32.0, 130.0),
        (-32.0, 125.0),
        (-35.0, 115.0),
        (-25.0, 115.0),
        (-20.0, 115.0),
    ],
];
