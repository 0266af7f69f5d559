//! Declarative endpoint descriptions.
//!
//! An [`Endpoint`] captures everything one API operation needs before it is
//! handed to the [`ApiClient`](crate::client::ApiClient): method, path
//! template, path and query parameters, header candidates and an optional
//! JSON body. The type parameter selects the
//! [`ResponseFormat`](crate::response::ResponseFormat) used to decode the
//! response.

use std::marker::PhantomData;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use url::Url;

use crate::method::RestMethod;

/// Characters allowed unescaped inside a single path segment, beyond
/// alphanumerics.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Description of a single API operation.
///
/// Path templates use `{name}` placeholders; values registered with
/// [`path_param`](Endpoint::path_param) are URL-escaped before substitution.
#[derive(Debug, Clone)]
pub struct Endpoint<F> {
    id: &'static str,
    method: RestMethod,
    path: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    content_types: &'static [&'static str],
    accepts: &'static [&'static str],
    body: Option<Value>,
    _format: PhantomData<F>,
}

impl<F> Endpoint<F> {
    /// Creates an endpoint for the given method and path template.
    pub fn new(id: &'static str, method: RestMethod, path: &'static str) -> Self {
        Self {
            id,
            method,
            path,
            path_params: Vec::new(),
            query: Vec::new(),
            content_types: &[],
            accepts: &["application/json"],
            body: None,
            _format: PhantomData,
        }
    }

    /// Registers a value for a `{name}` placeholder in the path template.
    pub fn path_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Sets the candidate `Content-Type` values for the request body.
    pub fn content_types(mut self, candidates: &'static [&'static str]) -> Self {
        self.content_types = candidates;
        self
    }

    /// Sets the candidate `Accept` values.
    pub fn accepts(mut self, candidates: &'static [&'static str]) -> Self {
        self.accepts = candidates;
        self
    }

    /// Attaches a JSON request body.
    pub fn json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Stable identifier of the operation, used in spans and errors.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// HTTP method of the operation.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Query parameters in registration order.
    pub fn query_params(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// The JSON body, if one was attached.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// The `Content-Type` to send, chosen from the candidate list.
    /// Prefers a JSON candidate; `None` when the operation has no body.
    pub fn content_type(&self) -> Option<&'static str> {
        select_header(self.content_types)
    }

    /// The `Accept` value to send, chosen from the candidate list.
    pub fn accept(&self) -> Option<&'static str> {
        select_header(self.accepts)
    }

    /// The path with every `{name}` placeholder replaced by its escaped
    /// value. Placeholders without a registered value are left verbatim.
    pub fn substituted_path(&self) -> String {
        let mut path = self.path.to_string();
        for (name, value) in &self.path_params {
            let escaped = utf8_percent_encode(value, PATH_SEGMENT).to_string();
            path = path.replace(&format!("{{{name}}}"), &escaped);
        }
        path
    }

    /// Resolves the full request URL against the client's base URL.
    ///
    /// The endpoint path is appended to the base path, so a base of
    /// `https://api.cal.com/v1` keeps its `/v1` prefix.
    pub fn full_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let joined = format!(
            "{}{}",
            base.as_str().trim_end_matches('/'),
            self.substituted_path()
        );
        let mut url = Url::parse(&joined)?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }
}

/// Picks the header value to send from a candidate list, preferring JSON.
/// Mirrors the server contract: every operation declares a fixed candidate
/// list and the client selects one.
fn select_header(candidates: &'static [&'static str]) -> Option<&'static str> {
    candidates
        .iter()
        .copied()
        .find(|c| c.contains("json"))
        .or_else(|| candidates.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::EmptyFormat;

    fn base() -> Url {
        Url::parse("https://api.cal.com/v1").unwrap()
    }

    #[test]
    fn test_path_substitution() {
        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("get_schedule_by_id", RestMethod::Get, "/schedules/{id}")
                .path_param("id", 42);
        assert_eq!(endpoint.substituted_path(), "/schedules/42");
    }

    #[test]
    fn test_path_substitution_escapes() {
        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("get_user", RestMethod::Get, "/users/{userId}")
                .path_param("userId", "a b/c");
        assert_eq!(endpoint.substituted_path(), "/users/a%20b%2Fc");
    }

    #[test]
    fn test_full_url_keeps_base_path() {
        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("list_schedules", RestMethod::Get, "/schedules");
        let url = endpoint.full_url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://api.cal.com/v1/schedules");
    }

    #[test]
    fn test_full_url_appends_query() {
        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("user_availability", RestMethod::Get, "/availability")
                .query("apiKey", "cal_live_xxx")
                .query("dateFrom", "2024-06-01");
        let url = endpoint.full_url(&base()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.cal.com/v1/availability?apiKey=cal_live_xxx&dateFrom=2024-06-01"
        );
    }

    #[test]
    fn test_select_header_prefers_json() {
        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("add_schedule", RestMethod::Post, "/schedules")
                .content_types(&["text/plain", "application/json"]);
        assert_eq!(endpoint.content_type(), Some("application/json"));
    }

    #[test]
    fn test_select_header_empty_candidates() {
        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("remove_schedule_by_id", RestMethod::Delete, "/schedules/{id}")
                .path_param("id", 7);
        assert_eq!(endpoint.content_type(), None);
        assert_eq!(endpoint.accept(), Some("application/json"));
    }

    #[test]
    fn test_unregistered_placeholder_left_verbatim() {
        let endpoint: Endpoint<EmptyFormat> =
            Endpoint::new("get_schedule_by_id", RestMethod::Get, "/schedules/{id}");
        assert_eq!(endpoint.substituted_path(), "/schedules/{id}");
    }
}
