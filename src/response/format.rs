use std::marker::PhantomData;

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Decodes a buffered response body into the operation's declared output.
pub trait ResponseFormat {
    /// The decoded value type.
    type Output;

    /// Parses the full, buffered response body.
    fn parse(body: Bytes) -> Result<Self::Output, ValidationError>;

    /// Whether this format decodes a body at all. Formats that return
    /// `false` skip the `Content-Type` check and never read the body.
    fn expects_body() -> bool {
        true
    }
}

/// JSON response decoded into `T`.
#[derive(Debug)]
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned> ResponseFormat for JsonFormat<T> {
    type Output = T;

    fn parse(body: Bytes) -> Result<T, ValidationError> {
        serde_json::from_slice(&body).map_err(|e| ValidationError::JsonParse {
            message: e.to_string(),
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

/// Response whose body is not decoded. Used for write operations where the
/// server contract declares no response schema.
#[derive(Debug)]
pub struct EmptyFormat;

impl ResponseFormat for EmptyFormat {
    type Output = ();

    fn parse(_body: Bytes) -> Result<(), ValidationError> {
        Ok(())
    }

    fn expects_body() -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::JsonObject;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Probe {
        id: u64,
    }

    #[test]
    fn test_json_format_decodes_struct() {
        let parsed = JsonFormat::<Probe>::parse(Bytes::from_static(b"{\"id\":7}")).unwrap();
        assert_eq!(parsed, Probe { id: 7 });
    }

    #[test]
    fn test_json_format_decodes_generic_object() {
        let parsed =
            JsonFormat::<JsonObject>::parse(Bytes::from_static(b"{\"busy\":[]}")).unwrap();
        assert!(parsed.contains_key("busy"));
    }

    #[test]
    fn test_json_format_keeps_raw_body_on_error() {
        let err = JsonFormat::<Probe>::parse(Bytes::from_static(b"not json")).unwrap_err();
        match err {
            ValidationError::JsonParse { body, .. } => assert_eq!(body, "not json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_format_ignores_body() {
        assert!(EmptyFormat::parse(Bytes::from_static(b"anything")).is_ok());
        assert!(!EmptyFormat::expects_body());
    }
}
