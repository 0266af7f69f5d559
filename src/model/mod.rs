//! Data-transfer objects mirroring the Cal.com v1 JSON schemas.
//!
//! Every DTO follows the same contract: required fields are plain values
//! set by `new`, optional fields are `Option`s left `None` by `Default`,
//! serialization omits unset optionals, and [`from_json`] validates that
//! every required key is present before populating the struct. A
//! present-but-null required value passes the key check and decodes as the
//! field's default, matching the upstream API's own validation.
//!
//! [`from_json`]: AddScheduleRequest::from_json

mod add_booking_reference_request;
mod add_schedule_request;
mod custom_inputs_post_request;
mod custom_inputs_post_request_options;
mod edit_schedule_by_id_request;
mod edit_user_by_id_request;
mod nullable;

pub use add_booking_reference_request::AddBookingReferenceRequest;
pub use add_schedule_request::AddScheduleRequest;
pub use custom_inputs_post_request::CustomInputsPostRequest;
pub use custom_inputs_post_request_options::CustomInputsPostRequestOptions;
pub use edit_schedule_by_id_request::EditScheduleByIdRequest;
pub use edit_user_by_id_request::EditUserByIdRequest;
pub use nullable::Nullable;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Checks that every required key exists in the raw object, regardless of
/// its value. Fails with an error naming the first missing key.
pub(crate) fn check_required(
    object: &Map<String, Value>,
    required: &'static [&'static str],
) -> Result<(), ValidationError> {
    for property in required {
        if !object.contains_key(*property) {
            return Err(ValidationError::MissingRequiredProperty { property });
        }
    }
    Ok(())
}

/// Views a JSON value as an object, or fails with a decode error.
pub(crate) fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| ValidationError::JsonParse {
        message: "expected a JSON object".to_string(),
        body: value.to_string(),
    })
}

/// Decodes a required field, treating an explicit `null` as the field's
/// default value. Key presence is enforced separately by `check_required`.
pub(crate) fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serializes a DTO into a JSON object map. Unset optionals are omitted by
/// the `skip_serializing_if` attributes on each struct.
pub(crate) fn to_object_map<T: serde::Serialize>(dto: &T) -> Map<String, Value> {
    match serde_json::to_value(dto) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_required_accepts_null_values() {
        let value = json!({"name": null, "timeZone": "UTC"});
        let object = value.as_object().unwrap();
        assert!(check_required(object, &["name", "timeZone"]).is_ok());
    }

    #[test]
    fn test_check_required_names_missing_key() {
        let value = json!({"name": "Hours"});
        let object = value.as_object().unwrap();
        let err = check_required(object, &["name", "timeZone"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no value given for required property timeZone"
        );
    }

    #[test]
    fn test_as_object_rejects_non_objects() {
        assert!(as_object(&json!([1, 2, 3])).is_err());
        assert!(as_object(&json!({"a": 1})).is_ok());
    }
}
