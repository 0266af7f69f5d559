use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::{as_object, to_object_map};

/// Options substructure of [`CustomInputsPostRequest`], used by selection
/// input types.
///
/// [`CustomInputsPostRequest`]: crate::model::CustomInputsPostRequest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomInputsPostRequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub option_type: Option<String>,
}

impl CustomInputsPostRequestOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes into a JSON object map, omitting unset fields.
    pub fn to_map(&self) -> Map<String, Value> {
        to_object_map(self)
    }

    /// Populates the struct from a raw JSON object. No required keys.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        as_object(value)?;
        serde_json::from_value(value.clone()).map_err(|e| ValidationError::JsonParse {
            message: e.to_string(),
            body: value.to_string(),
        })
    }
}
