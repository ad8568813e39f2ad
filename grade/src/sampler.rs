//! Evenly spaced sampling along a polyline.
//!
//! Samples are spaced by great circle distance measured along the
//! path, but the position within each segment is found by linear
//! interpolation of latitude and longitude. Consecutive waypoints are
//! assumed to be close relative to the earth's curvature.

use crate::{location::distance, math::linspace, LocationPoint, ProfileError};

/// One leg of a path, annotated with its position along the path.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PathSegment {
    start: LocationPoint,
    end: LocationPoint,

    /// Distance from the start of the path to `start`.
    start_km: f64,

    /// Distance from the start of the path to `end`.
    end_km: f64,
}

impl PathSegment {
    fn interpolate(&self, target_km: f64) -> LocationPoint {
        let length_km = self.end_km - self.start_km;
        // Repeated waypoints produce zero length segments.
        let t = if length_km == 0.0 {
            0.0
        } else {
            (target_km - self.start_km) / length_km
        };
        self.start.lerp(&self.end, t)
    }
}

/// A path prepared for sampling.
///
/// Building the sampler computes every segment length once; sampling
/// is then a binary search per output point.
#[derive(Debug, Clone)]
pub struct PathSampler {
    origin: Option<LocationPoint>,
    segments: Vec<PathSegment>,
}

impl PathSampler {
    pub fn new(path: &[LocationPoint]) -> Self {
        let mut cumulative_km = 0.0;
        let segments = path
            .windows(2)
            .map(|leg| {
                let start_km = cumulative_km;
                cumulative_km += distance(leg[0], leg[1]);
                PathSegment {
                    start: leg[0],
                    end: leg[1],
                    start_km,
                    end_km: cumulative_km,
                }
            })
            .collect();
        Self {
            origin: path.first().copied(),
            segments,
        }
    }

    /// Length of the path, in kilometers, following every waypoint.
    pub fn total_km(&self) -> f64 {
        self.segments.last().map_or(0.0, |segment| segment.end_km)
    }

    /// Returns `sample_count` points evenly spaced along the path,
    /// first and last points included.
    ///
    /// A path whose points all coincide yields only its first point,
    /// and an empty path yields nothing.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, sample_count: usize) -> Result<Vec<LocationPoint>, ProfileError> {
        if sample_count < 2 {
            return Err(ProfileError::SampleCount(sample_count));
        }
        let Some(origin) = self.origin else {
            return Ok(Vec::new());
        };
        let total_km = self.total_km();
        if total_km == 0.0 {
            return Ok(vec![origin]);
        }

        let last = sample_count - 1;
        let step_km = total_km / last as f64;
        let samples = (0..sample_count)
            .map(|i| {
                let target_km = if i == last {
                    total_km
                } else {
                    i as f64 * step_km
                };
                self.locate(target_km)
            })
            .collect();
        Ok(samples)
    }

    /// Returns the point `target_km` along the path.
    ///
    /// When `target_km` falls exactly on a waypoint the earlier of the
    /// two adjoining segments is used.
    fn locate(&self, target_km: f64) -> LocationPoint {
        let idx = self
            .segments
            .partition_point(|segment| segment.end_km < target_km)
            .min(self.segments.len() - 1);
        self.segments[idx].interpolate(target_km)
    }
}

/// Samples `path` at `sample_count` evenly spaced points.
pub fn sample(path: &[LocationPoint], sample_count: usize) -> Result<Vec<LocationPoint>, ProfileError> {
    PathSampler::new(path).sample(sample_count)
}

/// Samples the straight line from `start` to `end`.
///
/// Coincident endpoints yield only `start`.
pub fn sample_two_point(
    start: LocationPoint,
    end: LocationPoint,
    sample_count: usize,
) -> Result<Vec<LocationPoint>, ProfileError> {
    if sample_count < 2 {
        return Err(ProfileError::SampleCount(sample_count));
    }
    if distance(start, end) == 0.0 {
        return Ok(vec![start]);
    }
    Ok(linspace(start.lat, end.lat, sample_count)
        .zip(linspace(start.lng, end.lng, sample_count))
        .map(|(lat, lng)| LocationPoint { lat, lng })
        .collect())
}
