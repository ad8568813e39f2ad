use async_trait::async_trait;
use grade::{
    reduce, ElevationSample, LocationPoint, ProfileError, RouteMode, Session, Status,
};
use std::sync::Mutex;
use topo::{ElevationLookup, ProfileService};

/// Answers with a plane rising 100 m per degree of longitude and
/// records every query.
#[derive(Default)]
struct Plane {
    queries: Mutex<Vec<Vec<LocationPoint>>>,
}

#[async_trait]
impl ElevationLookup for Plane {
    async fn lookup(&self, locations: &[LocationPoint]) -> Result<Vec<ElevationSample>, ProfileError> {
        self.queries.lock().unwrap().push(locations.to_vec());
        Ok(locations
            .iter()
            .map(|&location| ElevationSample {
                location,
                elevation: 100.0 * location.lng,
            })
            .collect())
    }
}

/// Always answers with a fixed result.
struct Canned(Result<Vec<ElevationSample>, ProfileError>);

#[async_trait]
impl ElevationLookup for Canned {
    async fn lookup(&self, _: &[LocationPoint]) -> Result<Vec<ElevationSample>, ProfileError> {
        self.0.clone()
    }
}

fn p(lat: f64, lng: f64) -> LocationPoint {
    LocationPoint::new(lat, lng)
}

#[tokio::test]
async fn two_point_profile_is_one_batched_lookup() {
    let service = ProfileService::new(Plane::default()).with_two_point_samples(3);
    let profile = service
        .profile_for_two_points(p(0.0, 0.0), p(0.0, 1.0))
        .await
        .unwrap();

    let queries = service.lookup().queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0], vec![p(0.0, 0.0), p(0.0, 0.5), p(0.0, 1.0)]);

    let elevations: Vec<f64> = profile.iter().map(|s| s.elevation).collect();
    assert_eq!(elevations, vec![0.0, 50.0, 100.0]);
}

#[tokio::test]
async fn default_sample_counts() {
    let service = ProfileService::new(Plane::default());
    let two_point = service
        .profile_for_two_points(p(46.0, 7.0), p(46.1, 7.2))
        .await
        .unwrap();
    assert_eq!(two_point.len(), 100);

    let path = service
        .profile_for_path(&[p(46.0, 7.0), p(46.1, 7.2), p(46.0, 7.3)])
        .await
        .unwrap();
    assert_eq!(path.len(), 250);
    assert_eq!(path[0].location, p(46.0, 7.0));

    let stats = reduce(&path);
    assert!(stats.total_descent_m.abs() < 1e-9);
    assert!((stats.total_ascent_m - 30.0).abs() < 1e-6);
}

#[tokio::test]
async fn path_needs_two_waypoints() {
    let service = ProfileService::new(Plane::default());
    assert_eq!(
        service.profile_for_path(&[p(1.0, 1.0)]).await,
        Err(ProfileError::InvalidPath(1))
    );
    assert_eq!(
        service.profile_for_path(&[]).await,
        Err(ProfileError::InvalidPath(0))
    );
    assert!(service.lookup().queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn coincident_waypoints_query_a_single_point() {
    let service = ProfileService::new(Plane::default());
    let here = p(35.36, 138.73);
    let profile = service.profile_for_path(&[here, here, here]).await.unwrap();
    assert_eq!(profile.len(), 1);
    assert_eq!(service.lookup().queries.lock().unwrap()[0], vec![here]);

    let profile = service.profile_for_two_points(here, here).await.unwrap();
    assert_eq!(profile.len(), 1);
}

#[tokio::test]
async fn repeated_waypoint_is_sampled() {
    let service = ProfileService::new(Plane::default()).with_path_samples(9);
    let profile = service
        .profile_for_path(&[p(0.0, 0.0), p(0.0, 1.0), p(0.0, 1.0), p(0.0, 2.0)])
        .await
        .unwrap();
    assert_eq!(profile.len(), 9);
    assert!(profile.iter().all(|s| s.elevation.is_finite()));
}

#[tokio::test]
async fn invalid_sample_count() {
    let service = ProfileService::new(Plane::default()).with_two_point_samples(1);
    assert_eq!(
        service.profile_for_two_points(p(0.0, 0.0), p(1.0, 1.0)).await,
        Err(ProfileError::SampleCount(1))
    );
}

#[tokio::test]
async fn empty_result_is_an_empty_profile() {
    let service = ProfileService::new(Canned(Ok(Vec::new())));
    let profile = service
        .profile_for_two_points(p(0.0, 0.0), p(0.0, 1.0))
        .await
        .unwrap();
    assert!(profile.is_empty());

    let (session, _) = Session::new(RouteMode::TwoPoint).click(p(0.0, 0.0));
    let (session, pending) = session.click(p(0.0, 1.0));
    let pending = pending.unwrap();
    let session = session.complete(pending.generation, service.run(&pending.request).await);
    assert_eq!(session.status(), &Status::Failed(ProfileError::EmptyResult));
}

#[tokio::test]
async fn short_result_is_a_failure() {
    let one = vec![ElevationSample {
        location: p(0.0, 0.0),
        elevation: 1.0,
    }];
    let service = ProfileService::new(Canned(Ok(one))).with_two_point_samples(5);
    let err = service
        .profile_for_two_points(p(0.0, 0.0), p(0.0, 1.0))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ProfileError::LookupFailed("expected 5 results, got 1".into())
    );
}

#[tokio::test]
async fn lookup_failures_pass_through() {
    let offline = ProfileError::LookupUnavailable("connection refused".into());
    let service = ProfileService::new(Canned(Err(offline.clone())));
    assert_eq!(
        service.profile_for_path(&[p(0.0, 0.0), p(1.0, 0.0)]).await,
        Err(offline)
    );
}

#[tokio::test]
async fn session_round_trip() {
    let service = ProfileService::new(Plane::default()).with_path_samples(11);

    let session = Session::new(RouteMode::MultiPoint);
    let (session, _) = session.click(p(0.0, 0.0));
    let (session, _) = session.click(p(0.0, 0.5));
    let (session, _) = session.click(p(0.0, 1.0));
    let (session, pending) = session.analyze();
    let pending = pending.unwrap();

    let session = session.complete(pending.generation, service.run(&pending.request).await);
    assert_eq!(session.status(), &Status::Ready);
    assert_eq!(session.points().len(), 11);

    let stats = session.stats().unwrap();
    assert!((stats.max_elevation_m - 100.0).abs() < 1e-9);
    assert_eq!(stats.min_elevation_m, 0.0);
    assert!((stats.distance_km - 111.194_926).abs() < 1e-5);
}
