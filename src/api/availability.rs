//! Availability operations.

use std::sync::Arc;

use crate::api::apply_api_key;
use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::response::{JsonFormat, JsonObject};

/// Operations querying user and team availability.
#[derive(Debug, Clone)]
pub struct AvailabilityApi {
    client: Arc<ApiClient>,
}

impl AvailabilityApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Find team availability. `GET /teams/{teamId}/availability`.
    pub fn team_availability(&self, team_id: i32) -> TeamAvailabilityCall {
        TeamAvailabilityCall {
            client: Arc::clone(&self.client),
            team_id,
            api_key: None,
            date_from: None,
            date_to: None,
            event_type_id: None,
        }
    }

    /// Find user availability. `GET /availability`.
    pub fn user_availability(&self) -> UserAvailabilityCall {
        UserAvailabilityCall {
            client: Arc::clone(&self.client),
            api_key: None,
            user_id: None,
            username: None,
            date_from: None,
            date_to: None,
            event_type_id: None,
        }
    }
}

/// Builder for `GET /teams/{teamId}/availability`.
#[derive(Debug, Clone)]
pub struct TeamAvailabilityCall {
    client: Arc<ApiClient>,
    team_id: i32,
    api_key: Option<String>,
    date_from: Option<String>,
    date_to: Option<String>,
    event_type_id: Option<i32>,
}

impl TeamAvailabilityCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Start date of the availability query.
    pub fn date_from(mut self, date_from: impl Into<String>) -> Self {
        self.date_from = Some(date_from.into());
        self
    }

    /// End date of the availability query.
    pub fn date_to(mut self, date_to: impl Into<String>) -> Self {
        self.date_to = Some(date_to.into());
        self
    }

    /// Event type to restrict the availability query to.
    pub fn event_type_id(mut self, event_type_id: i32) -> Self {
        self.event_type_id = Some(event_type_id);
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<JsonObject, ApiError> {
        let mut endpoint: Endpoint<JsonFormat<JsonObject>> = Endpoint::new(
            "team_availability",
            RestMethod::Get,
            "/teams/{teamId}/availability",
        )
        .path_param("teamId", self.team_id);

        if let Some(date_from) = self.date_from {
            endpoint = endpoint.query("dateFrom", date_from);
        }
        if let Some(date_to) = self.date_to {
            endpoint = endpoint.query("dateTo", date_to);
        }
        if let Some(event_type_id) = self.event_type_id {
            endpoint = endpoint.query("eventTypeId", event_type_id);
        }

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}

/// Builder for `GET /availability`.
#[derive(Debug, Clone)]
pub struct UserAvailabilityCall {
    client: Arc<ApiClient>,
    api_key: Option<String>,
    user_id: Option<i32>,
    username: Option<String>,
    date_from: Option<String>,
    date_to: Option<String>,
    event_type_id: Option<i32>,
}

impl UserAvailabilityCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// ID of the user to fetch availability for.
    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Username of the user to fetch availability for.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Start date of the availability query.
    pub fn date_from(mut self, date_from: impl Into<String>) -> Self {
        self.date_from = Some(date_from.into());
        self
    }

    /// End date of the availability query.
    pub fn date_to(mut self, date_to: impl Into<String>) -> Self {
        self.date_to = Some(date_to.into());
        self
    }

    /// Event type to restrict the availability query to.
    pub fn event_type_id(mut self, event_type_id: i32) -> Self {
        self.event_type_id = Some(event_type_id);
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<JsonObject, ApiError> {
        let mut endpoint: Endpoint<JsonFormat<JsonObject>> =
            Endpoint::new("user_availability", RestMethod::Get, "/availability");

        if let Some(user_id) = self.user_id {
            endpoint = endpoint.query("userId", user_id);
        }
        if let Some(username) = self.username {
            endpoint = endpoint.query("username", username);
        }
        if let Some(date_from) = self.date_from {
            endpoint = endpoint.query("dateFrom", date_from);
        }
        if let Some(date_to) = self.date_to {
            endpoint = endpoint.query("dateTo", date_to);
        }
        if let Some(event_type_id) = self.event_type_id {
            endpoint = endpoint.query("eventTypeId", event_type_id);
        }

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}
