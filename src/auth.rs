//! Authentication methods for API requests.

/// How the API key is attached to outgoing requests.
///
/// Cal.com v1 authenticates every call with an `apiKey` query parameter,
/// which is the default used by [`Calcom`](crate::Calcom). The other
/// variants exist for proxies and self-hosted gateways that rewrite auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiAuthMethod {
    /// Key appended as a query parameter, e.g. `?apiKey=cal_live_xxx`.
    QueryParam(String),
    /// Key sent as `Authorization: Bearer <key>`.
    BearerToken,
    /// Key sent in a custom header.
    ApiKeyHeader(String),
    /// No authentication applied by the client.
    None,
}

impl ApiAuthMethod {
    /// The Cal.com v1 default: an `apiKey` query parameter.
    pub fn api_key_query() -> Self {
        Self::QueryParam("apiKey".to_string())
    }
}

impl Default for ApiAuthMethod {
    fn default() -> Self {
        Self::api_key_query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_api_key_query() {
        assert_eq!(
            ApiAuthMethod::default(),
            ApiAuthMethod::QueryParam("apiKey".to_string())
        );
    }
}
