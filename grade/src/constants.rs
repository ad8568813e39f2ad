/// Mean earth radius used by the haversine distance, in kilometers.
pub const MEAN_EARTH_RADIUS_KM: f64 = 6371.0;

/// Sample count used when profiling a straight two-point route.
pub const DEFAULT_TWO_POINT_SAMPLES: usize = 100;

/// Sample count used when profiling a multi-waypoint route.
pub const DEFAULT_PATH_SAMPLES: usize = 250;
