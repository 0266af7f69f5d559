//! Schedule operations.

use std::sync::Arc;

use serde_json::Value;

use crate::api::apply_api_key;
use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ValidationError};
use crate::method::RestMethod;
use crate::model::{AddScheduleRequest, EditScheduleByIdRequest};
use crate::response::{EmptyFormat, JsonFormat, JsonObject};

/// Operations under `/schedules`.
#[derive(Debug, Clone)]
pub struct SchedulesApi {
    client: Arc<ApiClient>,
}

impl SchedulesApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Creates a new schedule. `POST /schedules`.
    pub fn add_schedule(&self) -> AddScheduleCall {
        AddScheduleCall {
            client: Arc::clone(&self.client),
            api_key: None,
            add_schedule_request: None,
        }
    }

    /// Edits an existing schedule. `PATCH /schedules/{id}`.
    pub fn edit_schedule_by_id(&self, id: i32) -> EditScheduleByIdCall {
        EditScheduleByIdCall {
            client: Arc::clone(&self.client),
            id,
            api_key: None,
            edit_schedule_by_id_request: None,
        }
    }

    /// Finds a schedule. `GET /schedules/{id}`.
    pub fn get_schedule_by_id(&self, id: i32) -> GetScheduleByIdCall {
        GetScheduleByIdCall {
            client: Arc::clone(&self.client),
            id,
            api_key: None,
        }
    }

    /// Finds all schedules. `GET /schedules`.
    pub fn list_schedules(&self) -> ListSchedulesCall {
        ListSchedulesCall {
            client: Arc::clone(&self.client),
            api_key: None,
        }
    }

    /// Removes a schedule. `DELETE /schedules/{id}`.
    pub fn remove_schedule_by_id(&self, id: i32) -> RemoveScheduleByIdCall {
        RemoveScheduleByIdCall {
            client: Arc::clone(&self.client),
            id,
            api_key: None,
        }
    }
}

/// Builder for `POST /schedules`.
#[derive(Debug, Clone)]
pub struct AddScheduleCall {
    client: Arc<ApiClient>,
    api_key: Option<String>,
    add_schedule_request: Option<AddScheduleRequest>,
}

impl AddScheduleCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The schedule to create. Required.
    pub fn add_schedule_request(mut self, request: AddScheduleRequest) -> Self {
        self.add_schedule_request = Some(request);
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<(), ApiError> {
        let body = self
            .add_schedule_request
            .ok_or(ValidationError::MissingParameter("addScheduleRequest"))?;

        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("add_schedule", RestMethod::Post, "/schedules")
                .content_types(&["application/json"])
                .json_body(Value::Object(body.to_map()));

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}

/// Builder for `PATCH /schedules/{id}`.
#[derive(Debug, Clone)]
pub struct EditScheduleByIdCall {
    client: Arc<ApiClient>,
    id: i32,
    api_key: Option<String>,
    edit_schedule_by_id_request: Option<EditScheduleByIdRequest>,
}

impl EditScheduleByIdCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The fields to change. Required.
    pub fn edit_schedule_by_id_request(mut self, request: EditScheduleByIdRequest) -> Self {
        self.edit_schedule_by_id_request = Some(request);
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<(), ApiError> {
        let body = self.edit_schedule_by_id_request.ok_or(
            ValidationError::MissingParameter("editScheduleByIdRequest"),
        )?;

        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("edit_schedule_by_id", RestMethod::Patch, "/schedules/{id}")
                .path_param("id", self.id)
                .content_types(&["application/json"])
                .json_body(Value::Object(body.to_map()));

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}

/// Builder for `GET /schedules/{id}`.
#[derive(Debug, Clone)]
pub struct GetScheduleByIdCall {
    client: Arc<ApiClient>,
    id: i32,
    api_key: Option<String>,
}

impl GetScheduleByIdCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<JsonObject, ApiError> {
        let endpoint: Endpoint<JsonFormat<JsonObject>> =
            Endpoint::new("get_schedule_by_id", RestMethod::Get, "/schedules/{id}")
                .path_param("id", self.id);

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}

/// Builder for `GET /schedules`.
#[derive(Debug, Clone)]
pub struct ListSchedulesCall {
    client: Arc<ApiClient>,
    api_key: Option<String>,
}

impl ListSchedulesCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<JsonObject, ApiError> {
        let endpoint: Endpoint<JsonFormat<JsonObject>> =
            Endpoint::new("list_schedules", RestMethod::Get, "/schedules");

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}

/// Builder for `DELETE /schedules/{id}`.
#[derive(Debug, Clone)]
pub struct RemoveScheduleByIdCall {
    client: Arc<ApiClient>,
    id: i32,
    api_key: Option<String>,
}

impl RemoveScheduleByIdCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<(), ApiError> {
        let endpoint: Endpoint<EmptyFormat> = Endpoint::new(
            "remove_schedule_by_id",
            RestMethod::Delete,
            "/schedules/{id}",
        )
        .path_param("id", self.id);

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}
