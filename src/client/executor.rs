//! Request execution with tracing instrumentation.
//!
//! [`ApiClient`] performs the HTTP round trip for an
//! [`Endpoint`](crate::endpoint::Endpoint): URL resolution, header
//! selection, auth injection, status mapping and body decoding. It holds no
//! per-call state; every operation is a single independent request.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tracing::{instrument, Span};
use url::Url;

use crate::auth::ApiAuthMethod;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, AuthError, ClientError, ValidationError};
use crate::response::ResponseFormat;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: Option<(ApiAuthMethod, String)>,
}

impl ApiClientBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            auth: None,
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ClientError::Url(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ClientError::Url(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the authentication method and API key applied to every request.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use calcom_api::ApiAuthMethod;
    ///
    /// let client = ApiClient::builder(base_url)
    ///     .auth(ApiAuthMethod::api_key_query(), "cal_live_xxx")
    ///     .build()?;
    /// ```
    pub fn auth(mut self, method: ApiAuthMethod, api_key: impl Into<String>) -> Self {
        self.auth = Some((method, api_key.into()));
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            base_url: self.base_url,
            auth: self.auth,
        })
    }
}

/// Async HTTP client shared by all resource services.
///
/// Wraps `reqwest::Client` with connection pooling, base-URL resolution and
/// auth-key injection. Cancellation and deadlines beyond the configured
/// timeout are the caller's concern; the client never retries.
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    auth: Option<(ApiAuthMethod, String)>,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    pub fn builder(base_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(base_url)
    }

    /// Creates a client with default settings and no configured auth.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether the client carries credentials it will attach to requests.
    pub fn has_auth(&self) -> bool {
        matches!(&self.auth, Some((method, _)) if *method != ApiAuthMethod::None)
    }

    /// Executes an operation and decodes the response.
    ///
    /// The round trip: resolve the endpoint URL against the base URL
    /// (query parameters included), select `Content-Type`/`Accept` from the
    /// endpoint's candidate lists, attach the JSON body if any, inject the
    /// configured auth key, send, buffer the full body, surface any status
    /// of 300 or above as an error carrying that body, and decode the rest
    /// according to the endpoint's [`ResponseFormat`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the URL is invalid, the transport fails, the
    /// server answers with status >= 300, or the body cannot be decoded.
    #[instrument(
        name = "api_request",
        skip(self, endpoint),
        fields(
            operation = endpoint.id(),
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute<F>(&self, endpoint: &Endpoint<F>) -> Result<F::Output, ApiError>
    where
        F: ResponseFormat,
    {
        Span::current().record("http.method", endpoint.method().to_string().as_str());

        let full_url = endpoint
            .full_url(&self.base_url)
            .map_err(|e| ClientError::Url(e.to_string()))?;
        Span::current().record("http.url", redacted_url(&full_url).as_str());

        let mut request = self.client.request(endpoint.method().to_reqwest(), full_url);

        if let Some(content_type) = endpoint.content_type() {
            request = request.header(CONTENT_TYPE, content_type);
        }
        if let Some(accept) = endpoint.accept() {
            request = request.header(ACCEPT, accept);
        }
        if let Some(body) = endpoint.body() {
            request = request.json(body);
        }

        request = self.apply_auth(request)?;

        let response = request.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if status.as_u16() >= 300 {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() { "ERROR" } else { "UNSET" };
            Span::current().record("otel.status_code", otel_status);

            return Err(match status.as_u16() {
                401 => AuthError::AuthenticationFailed { body }.into(),
                403 => AuthError::InsufficientPermissions {
                    operation: endpoint.id().to_string(),
                    body,
                }
                .into(),
                code => ClientError::HttpStatus { status: code, body }.into(),
            });
        }

        Span::current().record("otel.status_code", "OK");

        if !F::expects_body() {
            return F::parse(bytes::Bytes::new()).map_err(ApiError::Validation);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("json") {
            return Err(ValidationError::UnsupportedContentType { content_type }.into());
        }

        let body = response.bytes().await.map_err(ClientError::Request)?;
        F::parse(body).map_err(ApiError::Validation)
    }

    /// Applies the configured auth to a request builder.
    ///
    /// Runs after the span's `http.url` is recorded, so a client-level
    /// query-parameter key never reaches telemetry.
    fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let Some((method, api_key)) = &self.auth else {
            return Ok(request);
        };

        match method {
            ApiAuthMethod::QueryParam(param_name) => {
                Ok(request.query(&[(param_name.as_str(), api_key.as_str())]))
            }
            ApiAuthMethod::BearerToken => {
                Ok(request.header(AUTHORIZATION, format!("Bearer {api_key}")))
            }
            ApiAuthMethod::ApiKeyHeader(header_name) => {
                let name = HeaderName::try_from(header_name.as_str())
                    .map_err(|_| AuthError::InvalidKeyFormat)?;
                Ok(request.header(name, api_key.as_str()))
            }
            ApiAuthMethod::None => Ok(request),
        }
    }
}

/// URL rendered for the `http.url` span field. The `apiKey` query value is
/// a credential; mask it so it never lands in telemetry.
fn redacted_url(url: &Url) -> String {
    if !url.query_pairs().any(|(name, _)| name == "apiKey") {
        return url.as_str().to_string();
    }

    let mut redacted = url.clone();
    redacted
        .query_pairs_mut()
        .clear()
        .extend_pairs(url.query_pairs().map(|(name, value)| {
            let value = if name == "apiKey" {
                std::borrow::Cow::Borrowed("***")
            } else {
                value
            };
            (name, value)
        }));
    redacted.into()
}
