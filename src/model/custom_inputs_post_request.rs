use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::{
    as_object, check_required, null_to_default, to_object_map, CustomInputsPostRequestOptions,
};

/// Body of `POST /custom-inputs`: adds a custom booking question to an
/// event type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomInputsPostRequest {
    /// ID of the event type the custom input is added to.
    #[serde(default, deserialize_with = "null_to_default")]
    pub event_type_id: i32,
    /// Label shown to the booker.
    #[serde(default, deserialize_with = "null_to_default")]
    pub label: String,
    /// Input kind; one of `TEXT`, `TEXTLONG`, `NUMBER`, `BOOL`, `RADIO`,
    /// `PHONE`.
    #[serde(rename = "type", default, deserialize_with = "null_to_default")]
    pub input_type: String,
    /// Selection options, for input kinds that have them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<CustomInputsPostRequestOptions>,
    /// Whether the booker must answer before booking.
    #[serde(default, deserialize_with = "null_to_default")]
    pub required: bool,
    /// Placeholder text for the input.
    #[serde(default, deserialize_with = "null_to_default")]
    pub placeholder: String,
}

impl CustomInputsPostRequest {
    /// JSON keys that must be present for [`from_json`](Self::from_json).
    pub const REQUIRED: &'static [&'static str] =
        &["eventTypeId", "label", "type", "required", "placeholder"];

    /// Creates a request with all required fields set.
    pub fn new(
        event_type_id: i32,
        label: impl Into<String>,
        input_type: impl Into<String>,
        required: bool,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            event_type_id,
            label: label.into(),
            input_type: input_type.into(),
            options: None,
            required,
            placeholder: placeholder.into(),
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
