use async_trait::async_trait;
use grade::{ElevationSample, LocationPoint, ProfileError};

/// A source of elevation data.
///
/// Implementations answer with exactly one sample per location, in
/// query order, or with an empty list when they have no data.
#[async_trait]
pub trait ElevationLookup: Send + Sync {
    async fn lookup(&self, locations: &[LocationPoint]) -> Result<Vec<ElevationSample>, ProfileError>;
}
