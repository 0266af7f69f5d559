use thiserror::Error;

/// API key and authorization errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No API key was supplied on the request builder and the client has
    /// no configured auth. Raised locally, before any network I/O.
    #[error("apiKey is required and must be specified")]
    MissingApiKey,

    /// The server rejected the credentials (HTTP 401). Carries the raw
    /// response body.
    #[error("authentication failed: {body}")]
    AuthenticationFailed {
        /// Raw response body text.
        body: String,
    },

    /// The key is valid but not allowed to perform the operation
    /// (HTTP 403). Carries the raw response body.
    #[error("insufficient permissions for operation '{operation}': {body}")]
    InsufficientPermissions {
        /// Identifier of the rejected operation.
        operation: String,
        /// Raw response body text.
        body: String,
    },

    /// The key cannot be encoded into the configured header.
    #[error("API key is not a valid header value")]
    InvalidKeyFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_message() {
        // Message mirrors the wire-level parameter name so callers can
        // grep server docs for it.
        assert_eq!(
            AuthError::MissingApiKey.to_string(),
            "apiKey is required and must be specified"
        );
    }
}
