//! JSON envelopes for the two object-returning endpoints.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level object returned by `/aggregations`. The API echoes the request
/// parameters alongside the data; only the array field is kept.
#[derive(Deserialize)]
pub(crate) struct AggregationsResponse {
    pub aggregations: Vec<Map<String, Value>>,
}

/// Top-level object returned by `/filers`.
#[derive(Deserialize)]
pub(crate) struct InstitutionsResponse {
    pub institutions: Vec<Map<String, Value>>,
}
