use thiserror::Error;

/// Failures on the data path between the validator and the verification
/// endpoint.
///
/// These never cross the validation boundary: `validate_receipt` converts
/// every variant into a not-approved outcome with the `TransportFailure`
/// category. They surface directly only when constructing a validator, where
/// building the HTTP client itself can fail.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to construct HTTP client: {0}")]
    ClientConstruction(#[source] reqwest::Error),

    #[error("failed to encode verification request: {0}")]
    RequestEncoding(#[source] serde_json::Error),

    #[error("callout to verification endpoint failed: {0}")]
    Callout(#[source] reqwest::Error),

    #[error("verification endpoint returned HTTP {0}")]
    CalloutStatus(reqwest::StatusCode),

    #[error("failed to parse verification response: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}
