//! Coarse hand-drawn outlines of a few countries, as closed rings.
//!
//! Fallback data for when no real dataset is at hand. Replace this file with
//! the output of `buildgeodata` run over a Natural Earth dataset for detail.

use super::PathTable;

pub static COUNTRIES: PathTable = &[
    &[
        (48.4, -124.7),
        (49.0, -123.0),
        (49.0, -95.2),
        (48.0, -89.6),
        (46.1, -83.0),
        (43.0, -82.4),
        (43.3, -79.0),
        (45.0, -75.0),
        (45.0, -71.5),
        (47.4, -69.2),
        (45.7, -67.8),
        (44.8, -67.0),
        (43.7, -70.0),
        (41.6, -70.6),
        (40.6, -74.0),
        (38.5, -75.5),
        (37.0, -76.0),
        (35.2, -75.5),
        (33.6, -78.9),
        (31.5, -81.2),
        (26.8, -80.0),
        (25.2, -80.4),
        (26.1, -81.8),
        (28.0, -82.8),
        (30.0, -84.3),
        (30.4, -88.0),
        (29.3, -89.6),
        (29.6, -94.0),
        (27.6, -97.2),
        (25.9, -97.4),
        (27.5, -99.5),
        (29.8, -101.4),
        (29.0, -103.0),
        (29.9, -104.7),
        (31.8, -106.5),
        (31.3, -108.2),
        (31.3, -111.1),
        (32.5, -114.8),
        (32.5, -117.1),
        (34.0, -118.5),
        (34.6, -120.6),
        (37.8, -122.5),
        (40.4, -124.2),
        (43.0, -124.5),
        (46.3, -124.0),
        (48.4, -124.7),
    ],
    &[
        (32.5, -117.1),
        (32.5, -114.8),
        (31.3, -111.1),
        (31.3, -108.2),
        (31.8, -106.5),
        (29.9, -104.7),
        (29.0, -103.0),
        (29.8, -101.4),
        (27.5, -99.5),
        (25.9, -97.4),
        (22.0, -97.7),
        (19.0, -96.0),
        (18.2, -94.5),
        (18.6, -91.5),
        (21.0, -90.4),
        (21.5, -87.0),
        (18.5, -87.5),
        (18.5, -88.3),
        (17.8, -89.1),
        (16.0, -90.4),
        (14.5, -92.2),
        (16.0, -94.0),
        (15.7, -96.5),
        (16.9, -100.0),
        (19.6, -105.0),
        (22.5, -105.7),
        (25.5, -108.9),
        (29.0, -112.2),
        (31.7, -114.7),
        (27.0, -112.0),
        (22.9, -109.9),
        (24.8, -112.0),
        (28.0, -114.2),
        (32.5, -117.1),
    ],
    &[
        (51.1, 2.5),
        (49.9, 4.2),
        (49.5, 5.9),
        (49.0, 8.2),
        (47.6, 7.6),
        (46.3, 6.0),
        (45.9, 7.0),
        (44.1, 7.0),
        (43.8, 7.5),
        (43.1, 6.0),
        (43.0, 3.1),
        (42.4, 3.2),
        (42.5, 1.7),
        (43.4, -1.8),
        (46.2, -1.2),
        (47.3, -2.5),
        (48.0, -4.7),
        (48.6, -4.5),
        (48.6, -1.6),
        (49.7, -1.3),
        (49.7, 0.2),
        (50.9, 1.6),
        (51.1, 2.5),
    ],
    &[
        (43.2, -9.3),
        (43.7, -8.0),
        (43.4, -4.4),
        (43.4, -1.8),
        (42.5, 1.7),
        (42.4, 3.2),
        (41.9, 3.2),
        (41.0, 0.8),
        (39.5, -0.3),
        (38.7, 0.2),
        (37.6, -0.7),
        (36.7, -2.1),
        (36.7, -4.4),
        (36.0, -5.6),
        (36.8, -6.4),
        (37.2, -7.4),
        (37.6, -7.5),
        (38.0, -7.0),
        (39.4, -7.3),
        (41.0, -6.9),
        (41.6, -6.2),
        (41.8, -8.1),
        (42.1, -8.9),
        (43.2, -9.3),
    ],
    &[
        (42.1, -8.9),
        (41.8, -8.1),
        (41.6, -6.2),
        (41.0, -6.9),
        (39.4, -7.3),
        (38.0, -7.0),
        (37.6, -7.5),
        (37.2, -7.4),
        (37.0, -8.9),
        (38.7, -8.8),
        (38.8, -9.5),
        (40.8, -8.8),
        (42.1, -8.9),
    ],
    &[
        (50.8, 6.0),
        (51.8, 5.9),
        (52.2, 7.0),
        (53.3, 7.0),
        (53.9, 8.7),
        (54.8, 9.0),
        (54.0, 11.0),
        (53.9, 14.2),
        (52.6, 14.6),
        (51.1, 15.0),
        (50.3, 12.2),
        (48.8, 13.8),
        (47.5, 13.0),
        (47.5, 10.5),
        (47.6, 7.6),
        (49.0, 8.2),
        (49.5, 6.4),
        (50.8, 6.0),
    ],
    &[
        (45.1, 6.6),
        (45.9, 7.0),
        (46.4, 8.4),
        (46.8, 10.5),
        (47.1, 12.2),
        (46.5, 13.7),
        (45.6, 13.7),
        (45.2, 12.3),
        (44.2, 12.4),
        (43.5, 13.6),
        (42.6, 14.0),
        (41.9, 16.0),
        (40.2, 18.5),
        (40.4, 17.2),
        (39.8, 16.4),
        (39.0, 17.1),
        (37.9, 15.7),
        (38.7, 15.6),
        (39.5, 16.1),
        (40.0, 15.3),
        (40.8, 14.1),
        (41.9, 12.0),
        (42.9, 10.5),
        (43.9, 10.2),
        (44.4, 8.9),
        (43.8, 7.5),
        (44.1, 7.0),
        (45.1, 6.6),
    ],
    &[
        (50.1, -5.7),
        (50.4, -3.5),
        (50.7, -1.0),
        (51.3, 1.4),
        (52.7, 1.7),
        (53.4, 0.3),
        (54.1, -0.2),
        (55.6, -1.6),
        (56.1, -2.1),
        (57.5, -1.8),
        (58.6, -3.0),
        (58.6, -5.0),
        (56.8, -6.2),
        (55.3, -5.6),
        (54.8, -4.9),
        (54.9, -3.1),
        (53.4, -3.2),
        (53.3, -4.6),
        (52.3, -4.1),
        (51.7, -5.2),
        (51.4, -3.1),
        (51.2, -4.2),
        (50.1, -5.7),
    ],
    &[
        (53.9, -6.2),
        (52.2, -6.0),
        (52.1, -7.0),
        (51.6, -9.6),
        (52.1, -10.3),
        (53.2, -9.3),
        (54.2, -10.1),
        (55.2, -8.2),
        (55.4, -7.3),
        (54.1, -6.9),
        (53.9, -6.2),
    ],
    &[
        (-22.5, 113.7),
        (-26.3, 114.2),
        (-29.5, 115.0),
        (-33.6, 115.0),
        (-35.1, 117.9),
        (-33.9, 123.5),
        (-31.6, 129.0),
        (-31.5, 131.2),
        (-32.6, 134.3),
        (-35.6, 137.8),
        (-37.4, 139.6),
        (-38.4, 141.6),
        (-37.9, 144.9),
        (-39.0, 146.3),
        (-37.5, 150.0),
        (-33.8, 151.3),
        (-30.4, 153.1),
        (-25.0, 153.1),
        (-22.6, 150.8),
        (-14.9, 145.4),
        (-10.7, 142.5),
        (-13.5, 141.5),
        (-17.0, 141.6),
        (-17.4, 139.3),
        (-14.7, 135.5),
        (-12.3, 136.9),
        (-11.5, 132.6),
        (-12.9, 130.1),
        (-15.0, 129.4),
        (-14.3, 126.1),
        (-17.3, 122.2),
        (-19.5, 121.0),
        (-20.6, 116.7),
        (-22.5, 113.7),
    ],
    &[
        (5.2, -60.0),
        (4.2, -51.6),
        (1.7, -50.0),
        (-1.5, -48.5),
        (-2.7, -44.6),
        (-3.6, -39.0),
        (-5.5, -35.2),
        (-9.0, -35.2),
        (-13.5, -39.0),
        (-17.7, -38.9),
        (-22.0, -40.8),
        (-23.0, -43.1),
        (-26.0, -48.6),
        (-28.6, -48.8),
        (-33.7, -53.4),
        (-30.2, -57.6),
        (-25.6, -54.6),
        (-22.7, -55.7),
        (-20.2, -58.2),
        (-16.3, -58.2),
        (-13.8, -60.5),
        (-10.2, -65.3),
        (-11.0, -69.9),
        (-7.3, -73.0),
        (-1.1, -69.6),
        (4.0, -70.0),
        (4.1, -64.0),
        (5.2, -60.0),
    ],
    &[
        (23.7, 68.2),
        (24.4, 71.0),
        (28.0, 70.2),
        (31.0, 74.4),
        (34.5, 74.0),
        (35.5, 77.8),
        (32.5, 79.4),
        (30.2, 81.1),
        (27.9, 88.0),
        (27.3, 88.8),
        (26.0, 89.8),
        (26.9, 92.0),
        (28.0, 97.0),
        (27.1, 97.3),
        (25.2, 95.0),
        (23.0, 93.3),
        (25.0, 92.4),
        (25.9, 89.8),
        (22.6, 88.5),
        (19.9, 86.0),
        (15.9, 80.3),
        (13.0, 80.1),
        (10.3, 79.9),
        (8.0, 77.5),
        (10.2, 76.0),
        (14.6, 74.4),
        (19.0, 72.8),
        (21.4, 72.6),
        (20.9, 70.5),
        (23.7, 68.2),
    ],
];
