use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::{as_object, check_required, null_to_default, to_object_map};

/// Body of `POST /schedules`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddScheduleRequest {
    /// Name of the new schedule.
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    /// Time zone identifier, e.g. `Europe/London`.
    #[serde(default, deserialize_with = "null_to_default")]
    pub time_zone: String,
}

impl AddScheduleRequest {
    /// JSON keys that must be present for [`from_json`](Self::from_json).
    pub const REQUIRED: &'static [&'static str] = &["name", "timeZone"];

    /// Creates a request with all required fields set.
    pub fn new(name: impl Into<String>, time_zone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_zone: time_zone.into(),
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
        let request = AddScheduleRequest::new("Office hours", "Europe/London");
        let decoded =
            AddScheduleRequest::from_json(&Value::Object(request.to_map())).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_required_keys_always_emitted() {
        let map = AddScheduleRequest::default().to_map();
        assert!(map.contains_key("name"));
        assert!(map.contains_key("timeZone"));
    }

    #[test]
    fn test_missing_required_key_fails() {
        let err = AddScheduleRequest::from_json(&json!({"name": "Hours"})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no value given for required property timeZone"
        );
    }

    #[test]
    fn test_null_required_value_is_accepted() {
        let decoded =
            AddScheduleRequest::from_json(&json!({"name": "Hours", "timeZone": null})).unwrap();
        assert_eq!(decoded.name, "Hours");
        assert_eq!(decoded.time_zone, "");
    }
}
