//! Error types for the API client.

/// Errors that can occur while validating filters or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A state token is not a recognized two-letter state/territory
    /// abbreviation. Carries the offending token and, for collection input,
    /// its position.
    #[error("'{token}' is not a valid two-letter state abbreviation{}", .index.map(|i| format!(" (at index {i})")).unwrap_or_default())]
    InvalidState {
        token: String,
        index: Option<usize>,
    },
    /// A value outside one of the closed enums (action taken, race) was
    /// supplied where an enum member was required.
    #[error("'{value}' is not a valid {kind}{}", .index.map(|i| format!(" (at index {i})")).unwrap_or_default())]
    InvalidEnumValue {
        kind: &'static str,
        value: String,
        index: Option<usize>,
    },
    /// An aggregations or loans request omitted both actions and races. The
    /// API cannot serve totals without a categorical narrowing filter.
    #[error("at least one of `actions` or `races` must be provided")]
    InsufficientFilter,
    /// The API returned a non-success status. Carries the response body
    /// verbatim.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// An HTTP request failed (network error, timeout, or undecodable
    /// response).
    #[error("request failed")]
    RequestFailed,
}
