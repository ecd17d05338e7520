//! HTTP client for the CFPB HMDA Data Browser API.

use std::time::Duration;

use url::Url;

use crate::{
    query::HmdaQuery,
    types::{AggregationsResponse, DataTable, InstitutionsResponse},
    Error,
};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the HMDA Data Browser API.
///
/// All filter validation runs before any request is sent. Each request
/// builds a fresh `reqwest::Client` with a 30-second timeout and makes one
/// GET; there is no retry, caching, or pagination handling.
pub struct Client {
    /// Base URL for the API. Defaults to
    /// `https://ffiec.cfpb.gov/v2/data-browser-api/view`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Data Browser API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://ffiec.cfpb.gov/v2/data-browser-api/view".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: &HmdaQuery) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        query.add_to_url(&url)
    }

    async fn get_text(&self, path: &str, query: &HmdaQuery) -> Result<String, Error> {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/csv, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            tracing::error!("Request failed with status {}: {}", status, truncate_body(&body));
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Fetches aggregated loan counts and sums matching the given query.
    ///
    /// At least one of actions/races must be set: the API cannot serve
    /// totals without a categorical narrowing filter.
    pub async fn get_aggregations(&self, query: &HmdaQuery) -> Result<DataTable, Error> {
        if !query.has_categorical_filter() {
            return Err(Error::InsufficientFilter);
        }
        let body = self.get_text("/aggregations", query).await?;
        let parsed = serde_json::from_str::<AggregationsResponse>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::RequestFailed
        })?;
        Ok(DataTable::from_records(parsed.aggregations))
    }

    /// Fetches the institutions that filed records matching the given
    /// query. No categorical filter is required for this resource.
    pub async fn get_institutions(&self, query: &HmdaQuery) -> Result<DataTable, Error> {
        let body = self.get_text("/filers", query).await?;
        let parsed = serde_json::from_str::<InstitutionsResponse>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::RequestFailed
        })?;
        Ok(DataTable::from_records(parsed.institutions))
    }

    /// Fetches individual loan-level records matching the given query.
    ///
    /// At least one of actions/races must be set. The `/csv` resource
    /// answers with (or redirects to) a CSV payload; redirects are followed
    /// by the transport and the final body is parsed as CSV.
    pub async fn get_loans(&self, query: &HmdaQuery) -> Result<DataTable, Error> {
        if !query.has_categorical_filter() {
            return Err(Error::InsufficientFilter);
        }
        let body = self.get_text("/csv", query).await?;
        DataTable::from_csv(&body).map_err(|e| {
            tracing::error!("Failed to parse CSV: {} | body: {}", e, truncate_body(&body));
            Error::RequestFailed
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // back off to a char boundary so multi-byte text cannot panic the slice
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
