//! Resource endpoint modules.
//!
//! Each module exposes one service per API resource; services hand out
//! per-operation request builders. Builders bind required path parameters
//! at creation, accumulate optional parameters through chainable setters
//! and terminate in an async `execute()` that performs exactly one HTTP
//! round trip through the shared [`ApiClient`](crate::client::ApiClient).

pub mod availability;
pub mod booking_references;
pub mod custom_inputs;
pub mod schedules;
pub mod users;

pub use availability::AvailabilityApi;
pub use booking_references::BookingReferencesApi;
pub use custom_inputs::CustomInputsApi;
pub use schedules::SchedulesApi;
pub use users::UsersApi;

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, AuthError};

/// Resolves the mandatory API key for one call: a key set on the builder
/// wins and is attached as the `apiKey` query parameter; otherwise the
/// client's configured auth covers the call. With neither, the call fails
/// locally before any network I/O.
pub(crate) fn apply_api_key<F>(
    endpoint: Endpoint<F>,
    client: &ApiClient,
    api_key: Option<String>,
) -> Result<Endpoint<F>, ApiError> {
    match api_key {
        Some(key) => Ok(endpoint.query("apiKey", key)),
        None if client.has_auth() => Ok(endpoint),
        None => Err(AuthError::MissingApiKey.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::RestMethod;
    use crate::response::EmptyFormat;
    use url::Url;

    #[test]
    fn test_builder_key_becomes_query_param() {
        let client = ApiClient::new(Url::parse("http://localhost").unwrap()).unwrap();
        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("list_schedules", RestMethod::Get, "/schedules");
        let endpoint =
            apply_api_key(endpoint, &client, Some("cal_live_xxx".to_string())).unwrap();
        assert_eq!(
            endpoint.query_params(),
            &[("apiKey", "cal_live_xxx".to_string())]
        );
    }

    #[test]
    fn test_missing_key_fails_locally() {
        let client = ApiClient::new(Url::parse("http://localhost").unwrap()).unwrap();
        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("list_schedules", RestMethod::Get, "/schedules");
        let err = apply_api_key(endpoint, &client, None).unwrap_err();
        assert!(matches!(err, ApiError::Auth(AuthError::MissingApiKey)));
    }
}
