use thiserror::Error;

/// HTTP transport and status errors.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network-level failure from the underlying transport (connect,
    /// timeout, TLS). Propagated unchanged.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The base URL and endpoint path could not be combined into a
    /// valid request URL.
    #[error("invalid URL: {0}")]
    Url(String),

    /// The server answered with a status of 300 or above. Carries the
    /// raw response body for caller inspection.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },
}

impl ClientError {
    /// Returns the HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Url(_) => None,
        }
    }
}
