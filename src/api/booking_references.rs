//! Booking reference operations.

use std::sync::Arc;

use serde_json::Value;

use crate::api::apply_api_key;
use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ValidationError};
use crate::method::RestMethod;
use crate::model::AddBookingReferenceRequest;
use crate::response::{EmptyFormat, JsonFormat, JsonObject};

/// Operations under `/booking-references`.
#[derive(Debug, Clone)]
pub struct BookingReferencesApi {
    client: Arc<ApiClient>,
}

impl BookingReferencesApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Creates a new booking reference. `POST /booking-references`.
    pub fn add_booking_reference(&self) -> AddBookingReferenceCall {
        AddBookingReferenceCall {
            client: Arc::clone(&self.client),
            api_key: None,
            add_booking_reference_request: None,
        }
    }

    /// Finds all booking references. `GET /booking-references`.
    pub fn list_booking_references(&self) -> ListBookingReferencesCall {
        ListBookingReferencesCall {
            client: Arc::clone(&self.client),
            api_key: None,
        }
    }

    /// Finds a booking reference. `GET /booking-references/{id}`.
    pub fn get_booking_reference_by_id(&self, id: i32) -> GetBookingReferenceByIdCall {
        GetBookingReferenceByIdCall {
            client: Arc::clone(&self.client),
            id,
            api_key: None,
        }
    }
}

/// Builder for `POST /booking-references`.
#[derive(Debug, Clone)]
pub struct AddBookingReferenceCall {
    client: Arc<ApiClient>,
    api_key: Option<String>,
    add_booking_reference_request: Option<AddBookingReferenceRequest>,
}

impl AddBookingReferenceCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The reference to create. Required.
    pub fn add_booking_reference_request(mut self, request: AddBookingReferenceRequest) -> Self {
        self.add_booking_reference_request = Some(request);
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<(), ApiError> {
        let body = self.add_booking_reference_request.ok_or(
            ValidationError::MissingParameter("addBookingReferenceRequest"),
        )?;

        let endpoint: Endpoint<EmptyFormat> = Endpoint::new(
            "add_booking_reference",
            RestMethod::Post,
            "/booking-references",
        )
        .content_types(&["application/json"])
        .json_body(Value::Object(body.to_map()));

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}

/// Builder for `GET /booking-references`.
#[derive(Debug, Clone)]
pub struct ListBookingReferencesCall {
    client: Arc<ApiClient>,
    api_key: Option<String>,
}

impl ListBookingReferencesCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<JsonObject, ApiError> {
        let endpoint: Endpoint<JsonFormat<JsonObject>> = Endpoint::new(
            "list_booking_references",
            RestMethod::Get,
            "/booking-references",
        );

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}

/// Builder for `GET /booking-references/{id}`.
#[derive(Debug, Clone)]
pub struct GetBookingReferenceByIdCall {
    client: Arc<ApiClient>,
    id: i32,
    api_key: Option<String>,
}

impl GetBookingReferenceByIdCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<JsonObject, ApiError> {
        let endpoint: Endpoint<JsonFormat<JsonObject>> = Endpoint::new(
            "get_booking_reference_by_id",
            RestMethod::Get,
            "/booking-references/{id}",
        )
        .path_param("id", self.id);

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}
