use thiserror::Error;

/// Failure talking to the backend. Views log these and fall back to empty data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend answered HTTP {status} for {url}")]
    Http { status: u16, url: String },
    #[error("could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("could not encode request body: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// A review draft that must not be sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Please write a review before submitting.")]
    EmptyReview,
    #[error("dealer id `{0}` is not a valid integer")]
    InvalidDealerId(String),
}
