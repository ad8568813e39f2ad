//! JSON bodies exchanged with the elevation service.
//!
//! The service names its axes `latitude`/`longitude`; everything
//! outside this module uses [`LocationPoint`].

use grade::{ElevationSample, LocationPoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<LocationPoint> for WireLocation {
    fn from(LocationPoint { lat, lng }: LocationPoint) -> Self {
        Self {
            latitude: lat,
            longitude: lng,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupRequest {
    pub locations: Vec<WireLocation>,
}

impl LookupRequest {
    pub fn new(locations: &[LocationPoint]) -> Self {
        Self {
            locations: locations.iter().copied().map(WireLocation::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireResult {
    pub elevation: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<WireResult> for ElevationSample {
    fn from(
        WireResult {
            elevation,
            latitude,
            longitude,
        }: WireResult,
    ) -> Self {
        ElevationSample {
            location: LocationPoint::new(latitude, longitude),
            elevation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    pub results: Vec<WireResult>,
}

/// Body some services send alongside a non-success status.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{LookupRequest, LookupResponse};
    use grade::{ElevationSample, LocationPoint};

    #[test]
    fn test_request_axis_names() {
        let request = LookupRequest::new(&[LocationPoint::new(41.161758, -8.583933)]);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"locations":[{"latitude":41.161758,"longitude":-8.583933}]}"#
        );
    }

    #[test]
    fn test_response_decode() {
        let body = r#"{"results":[{"latitude":41.161758,"longitude":-8.583933,"elevation":117}]}"#;
        let response: LookupResponse = serde_json::from_str(body).unwrap();
        let samples: Vec<ElevationSample> =
            response.results.into_iter().map(ElevationSample::from).collect();
        assert_eq!(
            samples,
            vec![ElevationSample {
                location: LocationPoint::new(41.161758, -8.583933),
                elevation: 117.0,
            }]
        );
    }
}
