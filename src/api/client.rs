//! API client for the starship catalog service.
//!
//! This module provides the `ApiClient` struct for fetching catalog
//! pages and individual pilots from a SWAPI-compatible API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{Pilot, StarshipPageResponse};

use super::ApiError;

/// HTTP request timeout in seconds.
/// There are no retries, so this bounds how long one request can hold
/// the loading state.
const REQUEST_TIMEOUT_SECS: u64 = 20;

/// API client for the catalog service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given base URL.
    /// The base URL must end with a slash; `Config::base_url` guarantees it.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Issue a single GET request and decode the JSON body.
    /// One attempt per call: no retries, no backoff.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(url, "GET");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::from_status(response.status(), url));
        }

        Ok(response.json().await?)
    }

    /// Fetch one page of the starship listing.
    /// Page 1 is the bare listing endpoint; later pages carry the page
    /// number as a query parameter.
    pub async fn fetch_starships(&self, page: u32) -> Result<StarshipPageResponse, ApiError> {
        let url = if page == 1 {
            format!("{}starships", self.base_url)
        } else {
            format!("{}starships?page={}", self.base_url, page)
        };
        self.get(&url).await
    }

    /// Fetch a single pilot by the URL embedded in a starship record.
    /// Pilot URLs are absolute and are used verbatim.
    pub async fn fetch_pilot(&self, url: &str) -> Result<Pilot, ApiError> {
        self.get(url).await
    }
}
