//! User operations.

use std::sync::Arc;

use serde_json::Value;

use crate::api::apply_api_key;
use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ValidationError};
use crate::method::RestMethod;
use crate::model::EditUserByIdRequest;
use crate::response::{EmptyFormat, JsonFormat, JsonObject};

/// Operations under `/users`.
#[derive(Debug, Clone)]
pub struct UsersApi {
    client: Arc<ApiClient>,
}

impl UsersApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Edits a user. `PATCH /users/{userId}`.
    pub fn edit_user_by_id(&self, user_id: i32) -> EditUserByIdCall {
        EditUserByIdCall {
            client: Arc::clone(&self.client),
            user_id,
            api_key: None,
            edit_user_by_id_request: None,
        }
    }

    /// Finds a user. `GET /users/{userId}`.
    pub fn get_user_by_id(&self, user_id: i32) -> GetUserByIdCall {
        GetUserByIdCall {
            client: Arc::clone(&self.client),
            user_id,
            api_key: None,
        }
    }
}

/// Builder for `PATCH /users/{userId}`.
#[derive(Debug, Clone)]
pub struct EditUserByIdCall {
    client: Arc<ApiClient>,
    user_id: i32,
    api_key: Option<String>,
    edit_user_by_id_request: Option<EditUserByIdRequest>,
}

impl EditUserByIdCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The fields to change. Required.
    pub fn edit_user_by_id_request(mut self, request: EditUserByIdRequest) -> Self {
        self.edit_user_by_id_request = Some(request);
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<(), ApiError> {
        let body = self
            .edit_user_by_id_request
            .ok_or(ValidationError::MissingParameter("editUserByIdRequest"))?;

        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("edit_user_by_id", RestMethod::Patch, "/users/{userId}")
                .path_param("userId", self.user_id)
                .content_types(&["application/json"])
                .json_body(Value::Object(body.to_map()));

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}

/// Builder for `GET /users/{userId}`.
#[derive(Debug, Clone)]
pub struct GetUserByIdCall {
    client: Arc<ApiClient>,
    user_id: i32,
    api_key: Option<String>,
}

impl GetUserByIdCall {
    /// Your API key. Overrides the client-level key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Executes the request.
    pub async fn execute(self) -> Result<JsonObject, ApiError> {
        let endpoint: Endpoint<JsonFormat<JsonObject>> =
            Endpoint::new("get_user_by_id", RestMethod::Get, "/users/{userId}")
                .path_param("userId", self.user_id);

        let endpoint = apply_api_key(endpoint, &self.client, self.api_key)?;
        self.client.execute(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn api_for(server: &MockServer) -> UsersApi {
        let client = ApiClient::new(Url::parse(&server.uri()).unwrap()).unwrap();
        UsersApi::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_edit_user_patches_only_set_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/users/4"))
            .and(query_param("apiKey", "cal_live_xxx"))
            .and(body_json(json!({"timeZone": "Europe/Berlin"})))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let patch = EditUserByIdRequest::new().time_zone("Europe/Berlin");

        api_for(&mock_server)
            .await
            .edit_user_by_id(4)
            .api_key("cal_live_xxx")
            .edit_user_by_id_request(patch)
            .execute()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_edit_user_requires_body_locally() {
        let mock_server = MockServer::start().await;

        let err = api_for(&mock_server)
            .await
            .edit_user_by_id(4)
            .api_key("cal_live_xxx")
            .execute()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::MissingParameter("editUserByIdRequest"))
        ));

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/4"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 4, "username": "ada"})),
            )
            .mount(&mock_server)
            .await;

        let result = api_for(&mock_server)
            .await
            .get_user_by_id(4)
            .api_key("cal_live_xxx")
            .execute()
            .await
            .unwrap();
        assert_eq!(result.get("username"), Some(&json!("ada")));
    }
}
