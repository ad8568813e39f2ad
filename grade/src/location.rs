use crate::math::{haversine_km, lerp};
use geo::geometry::{Coord, Point};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    /// Latitude, [-90, 90].
    pub lat: f64,

    /// Longitude, [-180, 180].
    pub lng: f64,
}

impl LocationPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Self) -> f64 {
        distance(*self, *other)
    }

    /// Returns the point a fraction `t` of the way to `other`,
    /// interpolating latitude and longitude independently.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            lat: lerp(self.lat, other.lat, t),
            lng: lerp(self.lng, other.lng, t),
        }
    }
}

/// Great circle distance between `a` and `b` in kilometers.
pub fn distance(a: LocationPoint, b: LocationPoint) -> f64 {
    haversine_km(a.lat, a.lng, b.lat, b.lng)
}

impl From<Coord<f64>> for LocationPoint {
    fn from(Coord { x, y }: Coord<f64>) -> Self {
        Self { lat: y, lng: x }
    }
}

impl From<LocationPoint> for Coord<f64> {
    fn from(LocationPoint { lat, lng }: LocationPoint) -> Self {
        Coord { x: lng, y: lat }
    }
}

impl From<Point<f64>> for LocationPoint {
    fn from(point: Point<f64>) -> Self {
        point.0.into()
    }
}

impl From<LocationPoint> for Point<f64> {
    fn from(location: LocationPoint) -> Self {
        Point(location.into())
    }
}

/// Measured elevation at a location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    pub location: LocationPoint,

    /// Meters.
    pub elevation: f64,
}

/// Elevation samples ordered from the start of a route to its end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElevationProfile(Vec<ElevationSample>);

impl ElevationProfile {
    pub fn new(samples: Vec<ElevationSample>) -> Self {
        Self(samples)
    }

    pub fn into_inner(self) -> Vec<ElevationSample> {
        self.0
    }
}

impl Deref for ElevationProfile {
    type Target = [ElevationSample];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ElevationSample>> for ElevationProfile {
    fn from(samples: Vec<ElevationSample>) -> Self {
        Self(samples)
    }
}

impl FromIterator<ElevationSample> for ElevationProfile {
    fn from_iter<I: IntoIterator<Item = ElevationSample>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ElevationProfile {
    type Item = &'a ElevationSample;
    type IntoIter = std::slice::Iter<'a, ElevationSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
