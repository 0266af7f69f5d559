use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::{as_object, to_object_map};

/// Body of `PATCH /schedules/{id}`. All fields are optional; unset fields
/// are omitted from the payload and left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditScheduleByIdRequest {
    /// New name for the schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New time zone for the schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EditScheduleByIdRequest {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the schedule name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the schedule time zone.
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// Serializes into a JSON object map, omitting unset fields.
    pub fn to_map(&self) -> Map<String, Value> {
        to_object_map(self)
    }

    /// Populates the struct from a raw JSON object. The schema has no
    /// required keys, so only the object shape is validated.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        as_object(value)?;
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
    fn test_unset_fields_are_omitted() {
        let patch = EditScheduleByIdRequest::new().name("Weekend hours");
        let map = patch.to_map();
        assert_eq!(map.get("name"), Some(&json!("Weekend hours")));
        assert!(!map.contains_key("timeZone"));
    }

    #[test]
    fn test_round_trip() {
        let patch = EditScheduleByIdRequest::new()
            .name("Weekend hours")
            .time_zone("America/New_York");
        let decoded =
            EditScheduleByIdRequest::from_json(&Value::Object(patch.to_map())).unwrap();
        assert_eq!(decoded, patch);
    }

    #[test]
    fn test_empty_patch_round_trips() {
        let patch = EditScheduleByIdRequest::new();
        assert!(patch.to_map().is_empty());
        let decoded = EditScheduleByIdRequest::from_json(&json!({})).unwrap();
        assert_eq!(decoded, patch);
    }
}
