use crate::{location::distance, ElevationSample, LocationPoint};
use itertools::Itertools;
use serde::Serialize;

/// Summary of an elevation profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProfileStats {
    /// Distance along the profile, following every sample.
    pub distance_km: f64,

    pub max_elevation_m: f64,

    pub min_elevation_m: f64,

    /// Sum of every elevation gain between consecutive samples.
    pub total_ascent_m: f64,

    /// Sum of every elevation loss between consecutive samples, as a
    /// positive number.
    pub total_descent_m: f64,
}

impl ProfileStats {
    /// Reduces `profile` in a single pass.
    ///
    /// A profile with fewer than two samples has no distance, ascent
    /// or descent; its min and max are the lone elevation, or zero
    /// when empty.
    pub fn from_profile(profile: &[ElevationSample]) -> Self {
        let Some(first) = profile.first() else {
            return Self::default();
        };

        let mut stats = Self {
            max_elevation_m: first.elevation,
            min_elevation_m: first.elevation,
            ..Self::default()
        };

        for (prev, cur) in profile.iter().tuple_windows() {
            if cur.elevation > stats.max_elevation_m {
                stats.max_elevation_m = cur.elevation;
            }
            if cur.elevation < stats.min_elevation_m {
                stats.min_elevation_m = cur.elevation;
            }

            stats.distance_km += distance(prev.location, cur.location);

            let delta_m = cur.elevation - prev.elevation;
            if delta_m > 0.0 {
                stats.total_ascent_m += delta_m;
            } else {
                stats.total_descent_m -= delta_m;
            }
        }

        stats
    }
}

/// Shorthand for [`ProfileStats::from_profile`].
pub fn reduce(profile: &[ElevationSample]) -> ProfileStats {
    ProfileStats::from_profile(profile)
}

/// An elevation sample annotated with its distance from the start of
/// the profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub location: LocationPoint,

    /// Meters.
    pub elevation: f64,

    /// Kilometers from the first sample, following every sample in
    /// between.
    pub distance_km: f64,
}

/// Pairs every sample with its cumulative distance from the start.
pub fn with_cumulative_distance(profile: &[ElevationSample]) -> Vec<ProfilePoint> {
    let mut prev: Option<&ElevationSample> = None;
    profile
        .iter()
        .scan(0.0, |distance_km, sample| {
            if let Some(prev) = prev.replace(sample) {
                *distance_km += distance(prev.location, sample.location);
            }
            Some(ProfilePoint {
                location: sample.location,
                elevation: sample.elevation,
                distance_km: *distance_km,
            })
        })
        .collect()
}
