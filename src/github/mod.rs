// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Building the /users/<username>/events endpoint
// - A single unauthenticated GET for the first page of events
// - Mapping 200 / 404 / everything else onto FetchOutcome or an error
// =============================================================================

mod fetch;

pub use fetch::{fetch_events, ClientConfig, FetchOutcome, DEFAULT_API_URL};
