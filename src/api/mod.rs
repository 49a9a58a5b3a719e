//! REST API client module for the starship catalog service.
//!
//! This module provides the `ApiClient` for communicating with a
//! SWAPI-compatible read-only API: one paginated listing endpoint for
//! starships plus per-person endpoints for pilots.
//!
//! Every call is a single attempt; failed requests are surfaced as
//! `ApiError` and recovery is left to the user repeating the action.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
