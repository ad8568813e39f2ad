use crate::lookup::ElevationLookup;
use grade::{
    sample, sample_two_point, ElevationProfile, LocationPoint, ProfileError, ProfileRequest,
    DEFAULT_PATH_SAMPLES, DEFAULT_TWO_POINT_SAMPLES,
};
use log::debug;
use std::time::{Duration, Instant};

/// Samples routes and fetches their elevation in one batched lookup.
#[derive(Debug, Clone)]
pub struct ProfileService<L> {
    lookup: L,

    /// Samples along a two-point route (defaults to 100).
    two_point_samples: usize,

    /// Samples along a multi-waypoint route (defaults to 250).
    path_samples: usize,
}

impl<L> ProfileService<L>
where
    L: ElevationLookup,
{
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            two_point_samples: DEFAULT_TWO_POINT_SAMPLES,
            path_samples: DEFAULT_PATH_SAMPLES,
        }
    }

    /// Samples along a two-point route (defaults to 100).
    #[must_use]
    pub fn with_two_point_samples(mut self, samples: usize) -> Self {
        self.two_point_samples = samples;
        self
    }

    /// Samples along a multi-waypoint route (defaults to 250).
    #[must_use]
    pub fn with_path_samples(mut self, samples: usize) -> Self {
        self.path_samples = samples;
        self
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Profile along the straight line from `start` to `end`.
    ///
    /// An empty profile means the service had no data for the route.
    pub async fn profile_for_two_points(
        &self,
        start: LocationPoint,
        end: LocationPoint,
    ) -> Result<ElevationProfile, ProfileError> {
        let now = Instant::now();
        let locations = sample_two_point(start, end, self.two_point_samples)?;
        self.fetch(locations, now.elapsed()).await
    }

    /// Profile following every waypoint in order.
    ///
    /// An empty profile means the service had no data for the route.
    pub async fn profile_for_path(
        &self,
        waypoints: &[LocationPoint],
    ) -> Result<ElevationProfile, ProfileError> {
        if waypoints.len() < 2 {
            return Err(ProfileError::InvalidPath(waypoints.len()));
        }
        let now = Instant::now();
        let locations = sample(waypoints, self.path_samples)?;
        self.fetch(locations, now.elapsed()).await
    }

    /// Runs a request issued by a [`grade::Session`].
    pub async fn run(&self, request: &ProfileRequest) -> Result<ElevationProfile, ProfileError> {
        match request {
            ProfileRequest::TwoPoint { start, end } => {
                self.profile_for_two_points(*start, *end).await
            }
            ProfileRequest::Path { waypoints } => self.profile_for_path(waypoints).await,
        }
    }

    async fn fetch(
        &self,
        locations: Vec<LocationPoint>,
        sample_runtime: Duration,
    ) -> Result<ElevationProfile, ProfileError> {
        let now = Instant::now();
        let samples = self.lookup.lookup(&locations).await?;
        let lookup_runtime = now.elapsed();

        debug!(
            "profile; len: {}, sample_exec: {:?}, lookup_exec: {:?}",
            locations.len(),
            sample_runtime,
            lookup_runtime
        );

        if samples.is_empty() {
            debug!("no elevation data for {} locations", locations.len());
            return Ok(ElevationProfile::default());
        }
        if samples.len() != locations.len() {
            return Err(ProfileError::LookupFailed(format!(
                "expected {} results, got {}",
                locations.len(),
                samples.len()
            )));
        }
        Ok(ElevationProfile::new(samples))
    }
}
