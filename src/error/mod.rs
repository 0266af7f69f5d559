//! Layered error types for the Cal.com client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all API operations
//! - [`ClientError`] - HTTP transport and status errors
//! - [`AuthError`] - API key and authorization errors
//! - [`ValidationError`] - Request parameter and response decoding errors

mod api_error;
mod auth_error;
mod client_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use validation_error::ValidationError;
