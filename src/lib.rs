//! Async client for the Cal.com v1 scheduling API.
//!
//! The crate has two structural halves:
//!
//! - **Resource endpoint modules** ([`api`]): one service per API resource,
//!   handing out per-operation request builders with chainable optional
//!   parameters and an async `execute()`.
//! - **Data model modules** ([`model`]): value objects mirroring the JSON
//!   schemas, with required-key validation on deserialization and
//!   omit-when-unset serialization.
//!
//! Both sit on a shared [`client::ApiClient`] that handles base-URL
//! resolution, header selection, API-key injection, status mapping and
//! response decoding. Every call is a single, stateless HTTP round trip;
//! there are no retries and no shared mutable state.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use calcom_api::Calcom;
//! use calcom_api::model::AddScheduleRequest;
//!
//! let cal = Calcom::new("cal_live_xxx")?;
//!
//! let availability = cal
//!     .availability()
//!     .user_availability()
//!     .username("ada")
//!     .date_from("2024-06-01")
//!     .execute()
//!     .await?;
//!
//! cal.schedules()
//!     .add_schedule()
//!     .add_schedule_request(AddScheduleRequest::new("Office hours", "Europe/London"))
//!     .execute()
//!     .await?;
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod model;
pub mod response;

use std::sync::Arc;

use url::Url;

use api::{AvailabilityApi, BookingReferencesApi, CustomInputsApi, SchedulesApi, UsersApi};
pub use auth::ApiAuthMethod;
pub use client::{ApiClient, ApiClientBuilder};
pub use error::{ApiError, AuthError, ClientError, ValidationError};
pub use method::RestMethod;

/// Base URL of the hosted Cal.com v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.cal.com/v1";

/// Entry point: owns the shared HTTP client and hands out resource services.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Calcom {
    client: Arc<ApiClient>,
}

impl Calcom {
    /// Connects to the hosted Cal.com API with the given key, attached as
    /// the `apiKey` query parameter on every call.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| ClientError::Url(e.to_string()))?;
        Self::with_base_url(base_url, api_key)
    }

    /// Connects to a self-hosted or proxied deployment.
    pub fn with_base_url(base_url: Url, api_key: impl Into<String>) -> Result<Self, ApiError> {
        let client = ApiClient::builder(base_url)
            .auth(ApiAuthMethod::api_key_query(), api_key)
            .build()?;
        Ok(Self::from_client(client))
    }

    /// Wraps an already-configured [`ApiClient`]. Use this for custom
    /// timeouts, default headers or alternative auth methods.
    pub fn from_client(client: ApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Availability operations.
    pub fn availability(&self) -> AvailabilityApi {
        AvailabilityApi::new(Arc::clone(&self.client))
    }

    /// Schedule operations.
    pub fn schedules(&self) -> SchedulesApi {
        SchedulesApi::new(Arc::clone(&self.client))
    }

    /// Booking reference operations.
    pub fn booking_references(&self) -> BookingReferencesApi {
        BookingReferencesApi::new(Arc::clone(&self.client))
    }

    /// Custom input operations.
    pub fn custom_inputs(&self) -> CustomInputsApi {
        CustomInputsApi::new(Arc::clone(&self.client))
    }

    /// User operations.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(Arc::clone(&self.client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_default_base_url() {
        let cal = Calcom::new("cal_live_xxx").unwrap();
        // Facade is cheap to clone and shares the client.
        let _clone = cal.clone();
    }

    #[tokio::test]
    async fn test_facade_key_covers_every_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/schedules"))
            .and(query_param("apiKey", "cal_live_xxx"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"schedules": []})))
            .mount(&mock_server)
            .await;

        let base_url = Url::parse(&mock_server.uri()).unwrap();
        let cal = Calcom::with_base_url(base_url, "cal_live_xxx").unwrap();

        // No per-call api_key needed; the client-level key applies.
        let result = cal.schedules().list_schedules().execute().await.unwrap();
        assert!(result.contains_key("schedules"));
    }

    #[tokio::test]
    async fn test_per_call_key_overrides_nothing_when_client_has_none() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/1"))
            .and(query_param("apiKey", "cal_live_other"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .mount(&mock_server)
            .await;

        let base_url = Url::parse(&mock_server.uri()).unwrap();
        let client = ApiClient::new(base_url).unwrap();
        let cal = Calcom::from_client(client);

        let result = cal
            .users()
            .get_user_by_id(1)
            .api_key("cal_live_other")
            .execute()
            .await
            .unwrap();
        assert_eq!(result.get("id"), Some(&json!(1)));
    }
}
