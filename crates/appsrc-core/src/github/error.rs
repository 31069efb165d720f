//! Page fetch error type.

/// Why a single page of the org listing could not be used.
///
/// Each variant ends pagination for the org; none is retried.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Curl reported an error (DNS, connection refused, reset, timeout, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {code}")]
    Status { code: u32 },
    /// Body was not a JSON array of repository objects.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
