//! Custom input operations.

use std::sync::Arc;

use serde_json::Value;

use crate::api::apply_api_key;
use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ValidationError};
use crate::method::RestMethod;
use crate::model::CustomInputsPostRequest;
use crate::response::{EmptyFormat, JsonFormat, JsonObject};

/// Operations under `/custom-inputs`.
#[derive(Debug, Clone)]
pub struct CustomInputsApi {
    client: Arc<ApiClient>,
}

impl CustomInputsApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Adds a custom input to an event type. `POST /custom-inputs`.
    pub fn add_custom_input(&self) -> AddCustomInputCall {
        AddCustomInputCall {
            client: Arc::clone(&self.client),
            api_key: None,
            custom_inputs_post_request: None,
        }
    }

    /// Finds all custom inputs. `GET /custom-inputs`.
    pub fn list_custom_inputs(&self) -> ListCustomInputsCall {
        ListCustomInputsCall {
            client: Arc::clone(&self.client),
            api_key: None,
        }
    }
}

/// Builder for `POST /custom-inputs`.
#[derive(Debug, Clone)]
pub struct AddCustomInputCall {
    client: Arc<ApiClient>,
    api_key: Option<String>,
    custom_inputs_post_request: Option<CustomInputsPostRequest>,
}

impl AddCustomInputCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The custom input to create. Required.
    pub fn custom_inputs_post_request(mut self, request: CustomInputsPostRequest) -> Self {
        self.custom_inputs_post_request = Some(request);
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<(), ApiError> {
        let body = self.custom_inputs_post_request.ok_or(
            ValidationError::MissingParameter("customInputsPostRequest"),
        )?;

        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("add_custom_input", RestMethod::Post, "/custom-inputs")
                .content_types(&["application/json"])
                .json_body(Value::Object(body.to_map()));

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}

/// Builder for `GET /custom-inputs`.
#[derive(Debug, Clone)]
pub struct ListCustomInputsCall {
    client: Arc<ApiClient>,
    api_key: Option<String>,
}

impl ListCustomInputsCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<JsonObject, ApiError> {
        let endpoint: Endpoint<JsonFormat<JsonObject>> =
            Endpoint::new("list_custom_inputs", RestMethod::Get, "/custom-inputs");

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}
