use crate::{
    error::TopoError,
    lookup::ElevationLookup,
    wire::{ErrorBody, LookupRequest, LookupResponse},
};
use async_trait::async_trait;
use grade::{ElevationSample, LocationPoint, ProfileError};
use log::{debug, warn};
use reqwest::{header::ACCEPT, StatusCode};
use std::time::Duration;

/// Public Open-Elevation lookup endpoint.
pub const DEFAULT_API_URL: &str = "https://api.open-elevation.com/api/v1/lookup";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Elevation lookups against an Open-Elevation compatible HTTP API.
///
/// Every lookup is a single `POST` carrying all locations.
#[derive(Debug, Clone)]
pub struct HttpLookup {
    client: reqwest::Client,
    url: String,
}

impl HttpLookup {
    pub fn builder() -> HttpLookupBuilder {
        HttpLookupBuilder {
            url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

pub struct HttpLookupBuilder {
    /// Lookup endpoint (required).
    url: Option<String>,

    /// Whole-request timeout (defaults to [`DEFAULT_TIMEOUT`]).
    timeout: Duration,
}

impl HttpLookupBuilder {
    /// Lookup endpoint (required).
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Whole-request timeout (defaults to 30 seconds).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<HttpLookup, TopoError> {
        let url = self.url.ok_or(TopoError::Builder("url"))?;
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        Ok(HttpLookup { client, url })
    }
}

#[async_trait]
impl ElevationLookup for HttpLookup {
    async fn lookup(&self, locations: &[LocationPoint]) -> Result<Vec<ElevationSample>, ProfileError> {
        if locations.is_empty() {
            return Ok(Vec::new());
        }
        debug!("lookup; url: {}, locations: {}", self.url, locations.len());

        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(&LookupRequest::new(locations))
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;
        decode_response(status, &body)
    }
}

/// Classifies a failure to exchange a request with the service.
fn transport_error(err: reqwest::Error) -> ProfileError {
    if err.is_builder() || err.is_decode() {
        ProfileError::LookupFailed(err.to_string())
    } else {
        ProfileError::LookupUnavailable(err.to_string())
    }
}

/// Turns a raw response into samples.
///
/// Non-success statuses surface the body's `error` field when there
/// is one.
pub(crate) fn decode_response(
    status: StatusCode,
    body: &[u8],
) -> Result<Vec<ElevationSample>, ProfileError> {
    if !status.is_success() {
        warn!("lookup failed; status: {status}");
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .map_or_else(
                || format!("request failed with status {}", status.as_u16()),
                |error| format!("API error: {error}"),
            );
        return Err(ProfileError::LookupFailed(message));
    }

    let response: LookupResponse = serde_json::from_slice(body)
        .map_err(|err| ProfileError::LookupFailed(format!("malformed response: {err}")))?;
    Ok(response
        .results
        .into_iter()
        .map(ElevationSample::from)
        .collect())
}
