use thiserror::Error;

/// Request parameter and response decoding errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required call parameter (typically the request body of a write
    /// operation) was never set on the builder. Raised locally, before
    /// any network I/O.
    #[error("{0} is required and must be specified")]
    MissingParameter(&'static str),

    /// A JSON object is missing a key that the schema marks required.
    /// A present-but-null value satisfies the requirement.
    #[error("no value given for required property {property}")]
    MissingRequiredProperty {
        /// The missing JSON key.
        property: &'static str,
    },

    /// The response body could not be decoded as the declared shape.
    /// Carries the raw body for caller inspection.
    #[error("failed to decode response: {message}")]
    JsonParse {
        /// Decoder error message.
        message: String,
        /// Raw response body text.
        body: String,
    },

    /// The response `Content-Type` does not match the declared format.
    #[error("unsupported response content type '{content_type}'")]
    UnsupportedContentType {
        /// The `Content-Type` header value the server sent.
        content_type: String,
    },
}
