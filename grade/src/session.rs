//! Route-picking state.
//!
//! A [`Session`] is an immutable snapshot. Every user action consumes
//! the current snapshot and returns the next one, and actions that
//! need elevation data also hand back a [`Pending`] request for the
//! caller to run. Results are fed back through [`Session::complete`],
//! which ignores any result issued before the latest action.

use crate::{
    reducer::{reduce, with_cumulative_distance, ProfilePoint},
    ElevationProfile, LocationPoint, ProfileError, ProfileStats,
};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteMode {
    /// A straight line between a start and an end point.
    #[default]
    TwoPoint,

    /// An ordered chain of waypoints, analyzed on request.
    MultiPoint,
}

/// Elevation data a session is waiting for.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileRequest {
    TwoPoint {
        start: LocationPoint,
        end: LocationPoint,
    },
    Path {
        waypoints: Vec<LocationPoint>,
    },
}

/// A request tagged with the session generation that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct Pending {
    pub generation: u64,
    pub request: ProfileRequest,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(ProfileError),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    mode: RouteMode,
    start: Option<LocationPoint>,
    end: Option<LocationPoint>,
    waypoints: Vec<LocationPoint>,
    profile: ElevationProfile,

    /// `profile` with cumulative distances, kept for hover lookups.
    points: Vec<ProfilePoint>,

    status: Status,
    hovered: Option<ProfilePoint>,

    /// Bumped by every action which invalidates in-flight requests.
    generation: u64,
}

impl Session {
    pub fn new(mode: RouteMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> RouteMode {
        self.mode
    }

    pub fn start(&self) -> Option<LocationPoint> {
        self.start
    }

    pub fn end(&self) -> Option<LocationPoint> {
        self.end
    }

    pub fn waypoints(&self) -> &[LocationPoint] {
        &self.waypoints
    }

    pub fn profile(&self) -> &ElevationProfile {
        &self.profile
    }

    /// The current profile with cumulative distances.
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn hovered(&self) -> Option<&ProfilePoint> {
        self.hovered.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Summary of the current profile, if there is one.
    pub fn stats(&self) -> Option<ProfileStats> {
        (!self.profile.is_empty()).then(|| reduce(&self.profile))
    }

    /// Clears every point and result, keeping the mode.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            mode: self.mode,
            generation: self.generation + 1,
            ..Self::default()
        }
    }

    /// Switches route mode, discarding the current route.
    #[must_use]
    pub fn set_mode(self, mode: RouteMode) -> Self {
        Self { mode, ..self.reset() }
    }

    /// Handles a click on the map.
    ///
    /// In two-point mode the first click sets the start, the second
    /// sets the end and requests a profile, and later clicks are
    /// ignored until a reset. In multi-point mode every click appends
    /// a waypoint.
    #[must_use]
    pub fn click(self, location: LocationPoint) -> (Self, Option<Pending>) {
        match (self.mode, self.start, self.end) {
            (RouteMode::TwoPoint, None, _) => {
                let next = Self {
                    start: Some(location),
                    ..self.reset()
                };
                (next, None)
            }
            (RouteMode::TwoPoint, Some(start), None) => {
                let next = Self {
                    end: Some(location),
                    ..self
                };
                next.request(ProfileRequest::TwoPoint {
                    start,
                    end: location,
                })
            }
            (RouteMode::TwoPoint, Some(_), Some(_)) => (self, None),
            (RouteMode::MultiPoint, _, _) => {
                let mut waypoints = self.waypoints;
                waypoints.push(location);
                let next = Self {
                    mode: self.mode,
                    waypoints,
                    generation: self.generation + 1,
                    ..Self::default()
                };
                (next, None)
            }
        }
    }

    /// Requests a profile along the waypoints.
    ///
    /// Does nothing outside of multi-point mode or with fewer than two
    /// waypoints.
    #[must_use]
    pub fn analyze(self) -> (Self, Option<Pending>) {
        if self.mode != RouteMode::MultiPoint || self.waypoints.len() < 2 {
            debug!(
                "analyze ignored; mode: {:?}, waypoints: {}",
                self.mode,
                self.waypoints.len()
            );
            return (self, None);
        }
        let waypoints = self.waypoints.clone();
        self.request(ProfileRequest::Path { waypoints })
    }

    fn request(self, request: ProfileRequest) -> (Self, Option<Pending>) {
        let generation = self.generation + 1;
        let next = Self {
            profile: ElevationProfile::default(),
            points: Vec::new(),
            status: Status::Loading,
            hovered: None,
            generation,
            ..self
        };
        (
            next,
            Some(Pending {
                generation,
                request,
            }),
        )
    }

    /// Applies the outcome of a request.
    ///
    /// Outcomes for any generation other than the current one are
    /// stale and leave the session unchanged. An empty profile is
    /// reported as [`ProfileError::EmptyResult`].
    #[must_use]
    pub fn complete(self, generation: u64, result: Result<ElevationProfile, ProfileError>) -> Self {
        if generation != self.generation {
            debug!(
                "discarding stale profile; generation: {generation}, current: {}",
                self.generation
            );
            return self;
        }
        match result {
            Ok(profile) if !profile.is_empty() => {
                let points = with_cumulative_distance(&profile);
                Self {
                    profile,
                    points,
                    status: Status::Ready,
                    hovered: None,
                    ..self
                }
            }
            Ok(_) => self.fail(ProfileError::EmptyResult),
            Err(err) => self.fail(err),
        }
    }

    fn fail(self, err: ProfileError) -> Self {
        Self {
            profile: ElevationProfile::default(),
            points: Vec::new(),
            status: Status::Failed(err),
            hovered: None,
            ..self
        }
    }

    /// Highlights the profile point closest to `location`, or clears
    /// the highlight for `None`.
    #[must_use]
    pub fn hover(self, location: Option<LocationPoint>) -> Self {
        let hovered = location.and_then(|location| self.nearest(location).copied());
        Self { hovered, ..self }
    }

    /// Returns the profile point closest to `location`.
    ///
    /// Closeness is the squared difference in degrees, which is only
    /// meant for picking among nearby points on screen.
    pub fn nearest(&self, location: LocationPoint) -> Option<&ProfilePoint> {
        let key = |point: &ProfilePoint| {
            (location.lat - point.location.lat).powi(2) + (location.lng - point.location.lng).powi(2)
        };
        self.points
            .iter()
            .min_by(|a, b| key(a).total_cmp(&key(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Pending, ProfileRequest, RouteMode, Session, Status};
    use crate::{ElevationProfile, ElevationSample, LocationPoint, ProfileError};

    fn p(lat: f64, lng: f64) -> LocationPoint {
        LocationPoint::new(lat, lng)
    }

    fn profile(elevations: &[f64]) -> ElevationProfile {
        elevations
            .iter()
            .enumerate()
            .map(|(i, &elevation)| ElevationSample {
                location: p(0.0, i as f64 * 0.1),
                elevation,
            })
            .collect()
    }

    #[test]
    fn test_two_point_flow() {
        let session = Session::new(RouteMode::TwoPoint);
        let (session, pending) = session.click(p(1.0, 2.0));
        assert!(pending.is_none());
        assert_eq!(session.start(), Some(p(1.0, 2.0)));
        assert_eq!(session.status(), &Status::Idle);

        let (session, pending) = session.click(p(3.0, 4.0));
        let Pending {
            generation,
            request,
        } = pending.unwrap();
        assert_eq!(
            request,
            ProfileRequest::TwoPoint {
                start: p(1.0, 2.0),
                end: p(3.0, 4.0)
            }
        );
        assert_eq!(session.status(), &Status::Loading);

        let session = session.complete(generation, Ok(profile(&[10.0, 20.0, 15.0])));
        assert_eq!(session.status(), &Status::Ready);
        assert_eq!(session.points().len(), 3);
        let stats = session.stats().unwrap();
        assert_eq!(stats.total_ascent_m, 10.0);
        assert_eq!(stats.total_descent_m, 5.0);

        // A third click is ignored.
        let (session, pending) = session.click(p(5.0, 6.0));
        assert!(pending.is_none());
        assert_eq!(session.end(), Some(p(3.0, 4.0)));
        assert_eq!(session.status(), &Status::Ready);
    }

    #[test]
    fn test_multi_point_flow() {
        let session = Session::new(RouteMode::MultiPoint);
        let (session, pending) = session.analyze();
        assert!(pending.is_none());

        let (session, _) = session.click(p(0.0, 0.0));
        let (session, pending) = session.analyze();
        assert!(pending.is_none(), "one waypoint is not a route");

        let (session, _) = session.click(p(0.0, 1.0));
        let (session, _) = session.click(p(1.0, 1.0));
        assert_eq!(session.waypoints().len(), 3);

        let (session, pending) = session.analyze();
        let pending = pending.unwrap();
        assert_eq!(
            pending.request,
            ProfileRequest::Path {
                waypoints: vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)]
            }
        );
        let session = session.complete(pending.generation, Ok(profile(&[1.0, 2.0])));
        assert_eq!(session.status(), &Status::Ready);

        // Adding a waypoint clears the stale profile.
        let (session, _) = session.click(p(2.0, 2.0));
        assert!(session.profile().is_empty());
        assert_eq!(session.status(), &Status::Idle);
        assert_eq!(session.waypoints().len(), 4);
    }

    #[test]
    fn test_empty_and_failed_results() {
        let (session, _) = Session::default().click(p(0.0, 0.0));
        let (session, pending) = session.click(p(0.0, 1.0));
        let generation = pending.unwrap().generation;

        let empty = session.clone().complete(generation, Ok(ElevationProfile::default()));
        assert_eq!(empty.status(), &Status::Failed(ProfileError::EmptyResult));
        assert!(empty.profile().is_empty());
        assert!(empty.stats().is_none());

        let offline = session.complete(
            generation,
            Err(ProfileError::LookupUnavailable("connection refused".into())),
        );
        assert!(matches!(
            offline.status(),
            Status::Failed(ProfileError::LookupUnavailable(_))
        ));
        assert!(offline.profile().is_empty());
    }

    #[test]
    fn test_stale_results_are_discarded() {
        let (session, _) = Session::new(RouteMode::MultiPoint).click(p(0.0, 0.0));
        let (session, _) = session.click(p(0.0, 1.0));
        let (session, first) = session.analyze();
        let (session, second) = session.analyze();
        let (first, second) = (first.unwrap(), second.unwrap());
        assert!(second.generation > first.generation);

        let session = session.complete(first.generation, Ok(profile(&[1.0, 2.0])));
        assert_eq!(session.status(), &Status::Loading);

        let session = session.complete(second.generation, Ok(profile(&[5.0, 6.0, 7.0])));
        assert_eq!(session.profile().len(), 3);

        // A reset while loading drops the in-flight result.
        let (session, pending) = session.analyze();
        let session = session.reset();
        let session = session.complete(pending.unwrap().generation, Ok(profile(&[1.0, 2.0])));
        assert!(session.profile().is_empty());
        assert_eq!(session.status(), &Status::Idle);
        assert!(session.waypoints().is_empty());
    }

    #[test]
    fn test_set_mode_resets() {
        let (session, _) = Session::new(RouteMode::TwoPoint).click(p(1.0, 1.0));
        let session = session.set_mode(RouteMode::MultiPoint);
        assert_eq!(session.mode(), RouteMode::MultiPoint);
        assert!(session.start().is_none());
        assert!(session.waypoints().is_empty());
    }

    #[test]
    fn test_hover_picks_nearest() {
        let (session, _) = Session::default().click(p(0.0, 0.0));
        let (session, pending) = session.click(p(0.0, 0.3));
        let session =
            session.complete(pending.unwrap().generation, Ok(profile(&[1.0, 2.0, 3.0, 4.0])));

        let session = session.hover(Some(p(0.01, 0.19)));
        let hovered = session.hovered().unwrap();
        assert_eq!(hovered.elevation, 3.0);
        assert_eq!(hovered.distance_km, session.points()[2].distance_km);

        let session = session.hover(None);
        assert!(session.hovered().is_none());

        assert!(Session::default().hover(Some(p(0.0, 0.0))).hovered().is_none());
    }
}
