// src/github/fetch.rs
// =============================================================================
// Fetches a user's public event feed from the GitHub REST API.
//
// Strategy:
// - Build https://api.github.com/users/<username>/events
// - One unauthenticated GET, first page only
// - 200 = here's the body, 404 = no such user, anything else = error
//
// There is no retry and no rate-limit handling: unauthenticated callers get
// 60 requests an hour and we use one per run.
//
// Rust concepts:
// - async functions: For network I/O
// - Result with a custom error enum (see src/error.rs)
// - url::Url: builds the endpoint without string concatenation bugs
// =============================================================================

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use crate::error::ActivityError;

/// Where the public GitHub API lives.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// GitHub refuses requests that don't identify themselves
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Settings for talking to the API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, e.g. https://api.github.com
    pub api_url: Url,
    /// None = whatever reqwest does by default (no timeout)
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Parses the base URL and bundles it with the optional timeout.
    pub fn new(api_url: &str, timeout: Option<Duration>) -> Result<Self, ActivityError> {
        let api_url = Url::parse(api_url).map_err(|e| ActivityError::InvalidUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;

        if api_url.cannot_be_a_base() {
            return Err(ActivityError::InvalidUrl {
                url: api_url.to_string(),
                reason: "not usable as a base URL".to_string(),
            });
        }

        Ok(Self { api_url, timeout })
    }
}

/// What the API told us about the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// HTTP 200, with the raw JSON body
    Found(String),
    /// HTTP 404
    NotFound,
}

// Builds <api_url>/users/<username>/events
//
// The username goes in as one path segment, so a '/' or '?' in it gets
// percent-encoded instead of changing the request path.
fn events_url(api_url: &Url, username: &str) -> Result<Url, ActivityError> {
    let mut url = api_url.clone();

    url.path_segments_mut()
        .map_err(|_| ActivityError::InvalidUrl {
            url: api_url.to_string(),
            reason: "not usable as a base URL".to_string(),
        })?
        .pop_if_empty()
        .extend(["users", username, "events"]);

    Ok(url)
}

// Maps the HTTP status (and body) onto a FetchOutcome
fn classify_response(status: StatusCode, body: String) -> Result<FetchOutcome, ActivityError> {
    match status {
        StatusCode::OK => Ok(FetchOutcome::Found(body)),
        StatusCode::NOT_FOUND => Ok(FetchOutcome::NotFound),
        status => Err(ActivityError::Http { status }),
    }
}

/// Fetches the first page of `username`'s public events.
pub async fn fetch_events(
    config: &ClientConfig,
    username: &str,
) -> Result<FetchOutcome, ActivityError> {
    let url = events_url(&config.api_url, username)?;

    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    debug!(%url, "fetching events");

    let response = client
        .get(url)
        .header(header::ACCEPT, "application/vnd.github+json")
        .send()
        .await?;

    let status = response.status();
    info!(status = status.as_u16(), "GitHub responded");

    let body = response.text().await?;
    classify_response(status, body)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return FetchOutcome instead of an error for 404?
//    - An unknown username is a normal answer, not a failure
//    - The caller prints "Username not found." and exits with code 0
//    - Only surprises (HTTP 500, network down) become ActivityError
//
// 2. What does path_segments_mut() do?
//    - Gives mutable access to the '/'-separated pieces of a URL path
//    - extend() appends segments and percent-encodes each one
//    - It fails for URLs like "mailto:..." that have no hierarchical path
//
// 3. Why is classify_response a separate function?
//    - It has no I/O, so tests can call it with any StatusCode
//    - fetch_events stays a thin wrapper around the network call
// -----------------------------------------------------------------------------
