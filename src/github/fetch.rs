// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public event feed from the GitHub API.
//
// Strategy:
// - Build one reqwest Client from an immutable ApiConfig (timeout, base URL)
// - Issue a single GET to /users/<username>/events
// - Return the raw response body as bytes; decoding happens elsewhere
//
// Why return bytes instead of decoded events?
// - Keeps this module about HTTP only
// - The events module owns the JSON shape and can be tested without a server
//
// Rust concepts:
// - async functions: For network I/O
// - Result<T, E>: For error handling with a typed error enum
// - thiserror: Derives Display/Error implementations for our error type
// =============================================================================

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

// Everything that can go wrong while fetching the feed
//
// #[derive(Error)] (from thiserror) generates the Display and Error impls
// from the #[error(...)] attributes, so callers get readable messages and
// can still match on the variant.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response (DNS failure, timeout,
    /// connection reset, or a body that could not be read)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered, but not with 200 OK
    #[error("failed to fetch data: status code {0}")]
    Status(u16),
}

// Immutable client configuration, built once at startup and passed
// explicitly to the fetcher. The base URL is a field (rather than a
// constant) so tests can point the fetcher at a local stub server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

// Fetches the public event feed for a GitHub user
//
// Parameters:
//   config: the API configuration (base URL + timeout)
//   username: the GitHub username to look up (non-empty, checked by the caller)
//
// Returns: Result<Vec<u8>, FetchError>
//   Success: the raw JSON bytes of the response body
//   Error: Transport for network/read failures, Status for non-200 replies
//
// No retries: the first failure ends the run.
pub async fn fetch_user_events(config: &ApiConfig, username: &str) -> Result<Vec<u8>, FetchError> {
    // Create the HTTP client with our fixed settings
    // GitHub rejects requests without a User-Agent, so we always send one
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(concat!("gh-activity/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let url = format!("{}/users/{}/events", config.base_url, username);

    let response = client.get(&url).send().await?;

    // Anything other than 200 OK counts as a failed fetch, including
    // other 2xx codes - the events endpoint only ever succeeds with 200
    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status.as_u16()));
    }

    // Read the full body; a read failure here is still a transport error
    let body = response.bytes().await?;
    Ok(body.to_vec())
}
