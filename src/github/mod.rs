// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - An immutable ApiConfig (base URL + request timeout) built at startup
// - Fetching a user's public event feed as raw bytes
// - Classifying failures (transport errors vs. unexpected status codes)
//
// Future enhancements (stretch goals):
// - Authentication for higher rate limits
// - Pagination beyond the first page of events
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;

// Re-export the public API from fetch.rs
pub use fetch::{fetch_user_events, ApiConfig, FetchError};
