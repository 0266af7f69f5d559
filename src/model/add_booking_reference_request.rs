use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::{as_object, check_required, null_to_default, to_object_map};

/// Body of `POST /booking-references`: links a booking to a record in an
/// external conferencing or calendar system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookingReferenceRequest {
    /// Type of the reference, e.g. `daily_video` or `google_calendar`.
    #[serde(rename = "type", default, deserialize_with = "null_to_default")]
    pub ref_type: String,
    /// UID of the referenced record in the external system.
    #[serde(default, deserialize_with = "null_to_default")]
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_calendar_id: Option<String>,
    /// Whether the reference has been soft-deleted upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<i32>,
}

impl AddBookingReferenceRequest {
    /// JSON keys that must be present for [`from_json`](Self::from_json).
    pub const REQUIRED: &'static [&'static str] = &["type", "uid"];

    /// Creates a request with all required fields set.
    pub fn new(ref_type: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            ref_type: ref_type.into(),
            uid: uid.into(),
            ..Self::default()
        }
    }

    /// Serializes into a JSON object map, omitting unset optional fields.
    pub fn to_map(&self) -> Map<String, Value> {
        to_object_map(self)
    }

    /// Validates that every required key exists in the raw object, then
    /// populates the struct.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::MissingRequiredProperty`] naming the
    /// first absent required key, or a decode error for non-object input.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        check_required(as_object(value)?, Self::REQUIRED)?;
        serde_json::from_value(value.clone()).map_err(|e| ValidationError::JsonParse {
            message: e.to_string(),
            body: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip() {
        let mut request = AddBookingReferenceRequest::new("daily_video", "ref_123");
        request.meeting_url = Some("https://meet.example.com/ref_123".to_string());
        request.credential_id = Some(4);
        let decoded =
            AddBookingReferenceRequest::from_json(&Value::Object(request.to_map())).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_type_key_is_renamed() {
        let map = AddBookingReferenceRequest::new("google_calendar", "u1").to_map();
        assert_eq!(map.get("type"), Some(&json!("google_calendar")));
        assert!(!map.contains_key("refType"));
    }

    #[test]
    fn test_unset_optionals_are_omitted() {
        let map = AddBookingReferenceRequest::new("daily_video", "ref_123").to_map();
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key("meetingId"));
        assert!(!map.contains_key("deleted"));
    }

    #[test]
    fn test_missing_required_key_fails() {
        let err =
            AddBookingReferenceRequest::from_json(&json!({"type": "daily_video"})).unwrap_err();
        assert_eq!(err.to_string(), "no value given for required property uid");
    }

    #[test]
    fn test_null_required_value_is_accepted() {
        let decoded =
            AddBookingReferenceRequest::from_json(&json!({"type": null, "uid": "u1"})).unwrap();
        assert_eq!(decoded.ref_type, "");
        assert_eq!(decoded.uid, "u1");
    }
}
