use thiserror::Error;

/// Every way building an elevation profile can fail.
///
/// Lookup failures are opaque: callers only learn whether the
/// elevation service was unreachable or answered badly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("a route needs at least 2 waypoints, got {0}")]
    InvalidPath(usize),

    #[error("sample count must be at least 2, got {0}")]
    SampleCount(usize),

    #[error("elevation service unreachable, check your network connection: {0}")]
    LookupUnavailable(String),

    #[error("{0}")]
    LookupFailed(String),

    #[error("no elevation data for this route")]
    EmptyResult,
}

impl ProfileError {
    /// Returns `true` for outcomes which should be shown as "no data"
    /// rather than as a failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult)
    }
}
