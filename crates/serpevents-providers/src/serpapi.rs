//! SerpApi `google_events` search client.
//!
//! A thin paginated fetch over the JSON search endpoint. The client walks
//! result pages in fixed steps and hands back raw event records; it never
//! retries (callers can inspect [`ProviderError::is_retryable`] if they want
//! to).

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::raw_event::RawEvent;

/// Base URL for the SerpApi JSON search endpoint.
const SEARCH_API_BASE: &str = "https://serpapi.com/search.json";

/// Page size used by the google_events engine.
const PAGE_SIZE: usize = 10;

/// Offset at which pagination stops unconditionally.
const MAX_OFFSET: usize = 200;

/// Parameters for one event search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// The search query, e.g. `"events in Boerne, TX"`.
    pub query: String,
    /// Geographic location bias.
    pub location: Option<String>,
    /// Interface language, e.g. `"en"` or `"es"`.
    pub hl: Option<String>,
    /// Country code, e.g. `"us"`.
    pub gl: Option<String>,
}

impl SearchParams {
    /// Creates parameters for the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the location bias.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder method to set the interface language.
    pub fn with_hl(mut self, hl: impl Into<String>) -> Self {
        self.hl = Some(hl.into());
        self
    }

    /// Builder method to set the country code.
    pub fn with_gl(mut self, gl: impl Into<String>) -> Self {
        self.gl = Some(gl.into());
        self
    }
}

/// SerpApi search client.
#[derive(Debug)]
pub struct SerpApiClient {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SerpApiClient {
    /// Creates a new client with the given API key.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http_client,
            api_key: api_key.into(),
            base_url: SEARCH_API_BASE.to_string(),
        }
    }

    /// Overrides the upstream URL (tests, or a local pass-through proxy).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches every result page for the query.
    ///
    /// The first page is requested without an explicit offset (an explicit
    /// `start=0` can come back empty); later pages advance by the page size
    /// until a page is empty or the offset cap is reached.
    pub async fn search_events(&self, params: &SearchParams) -> ProviderResult<Vec<RawEvent>> {
        let mut all_events = self.search_page(params, None).await?;

        let mut offset = PAGE_SIZE;
        while offset < MAX_OFFSET {
            let page = self.search_page(params, Some(offset)).await?;
            if page.is_empty() {
                break;
            }
            all_events.extend(page);
            offset += PAGE_SIZE;
        }

        debug!(
            count = all_events.len(),
            query = %params.query,
            "fetched event records"
        );
        Ok(all_events)
    }

    /// Fetches a single result page.
    async fn search_page(
        &self,
        params: &SearchParams,
        offset: Option<usize>,
    ) -> ProviderResult<Vec<RawEvent>> {
        let mut request = self.http_client.get(&self.base_url).query(&[
            ("engine", "google_events"),
            ("q", params.query.as_str()),
            ("api_key", self.api_key.as_str()),
        ]);

        if let Some(ref location) = params.location {
            request = request.query(&[("location", location.as_str())]);
        }
        if let Some(ref hl) = params.hl {
            request = request.query(&[("hl", hl.as_str())]);
        }
        if let Some(ref gl) = params.gl {
            request = request.query(&[("gl", gl.as_str())]);
        }
        if let Some(offset) = offset {
            request = request.query(&[("start", offset.to_string())]);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::network("request timeout")
            } else if e.is_connect() {
                ProviderError::network(format!("connection failed: {}", e))
            } else {
                ProviderError::network(format!("request failed: {}", e))
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(ProviderError::rate_limited(format!(
                "rate limit exceeded{}",
                retry_after
                    .map(|s| format!(", retry after {} seconds", s))
                    .unwrap_or_default()
            )));
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ProviderError::authentication("API key rejected"));
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::authorization("access denied for this search"));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // SerpApi reports parameter problems as 400 with an error body.
            if status == reqwest::StatusCode::BAD_REQUEST {
                return Err(ProviderError::bad_request(format!(
                    "request rejected: {}",
                    body
                )));
            }
            return Err(ProviderError::server(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("failed to read response: {}", e)))?;

        let search: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::invalid_response(format!("failed to parse response: {}", e))
        })?;

        if let Some(error) = search.error {
            return Err(ProviderError::bad_request(error));
        }

        Ok(search.events_results)
    }
}

/// Response body of the search endpoint. Only the fields we consume.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    events_results: Vec<RawEvent>,
    /// SerpApi-level error message, present on rejected searches.
    error: Option<String>,
}
