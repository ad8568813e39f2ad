use crate::constants::MEAN_EARTH_RADIUS_KM;
use num_traits::{Float, FromPrimitive};

/// Returns the great circle distance, in kilometers, between
/// (`lat1`, `lng1`) and (`lat2`, `lng2`), all in degrees.
///
/// Identical inputs produce exactly zero, and swapping the endpoints
/// produces a bit-identical result.
#[allow(clippy::many_single_char_names)]
pub fn haversine_km<T>(lat1: T, lng1: T, lat2: T, lng2: T) -> T
where
    T: Float + FromPrimitive,
{
    let one = T::one();
    let two = one + one;
    let radius = T::from_f64(MEAN_EARTH_RADIUS_KM).unwrap();

    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / two).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / two).sin().powi(2);
    let c = two * a.sqrt().atan2((one - a).sqrt());

    radius * c
}
