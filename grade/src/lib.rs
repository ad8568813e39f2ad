//! # Route grade profiling
//!
//! `grade` turns user-drawn routes into evenly spaced elevation
//! queries and reduces the answers into distance, ascent, descent and
//! gradient figures.

mod constants;
mod error;
pub mod gradient;
mod location;
mod math;
pub mod reducer;
pub mod sampler;
pub mod session;

pub use crate::{
    constants::{DEFAULT_PATH_SAMPLES, DEFAULT_TWO_POINT_SAMPLES, MEAN_EARTH_RADIUS_KM},
    error::ProfileError,
    gradient::{gradient_segments, GradientClass, GradientSegment},
    location::{distance, ElevationProfile, ElevationSample, LocationPoint},
    reducer::{reduce, with_cumulative_distance, ProfilePoint, ProfileStats},
    sampler::{sample, sample_two_point, PathSampler},
    session::{Pending, ProfileRequest, RouteMode, Session, Status},
};
pub use geo;
