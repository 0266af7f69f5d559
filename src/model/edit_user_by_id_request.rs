use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::model::{as_object, to_object_map};

/// Body of `PATCH /users/{userId}`. All fields are optional; unset fields
/// are omitted from the payload and left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserByIdRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Brand color as a hex string, e.g. `#292929`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_brand_color: Option<String>,
    /// First day of the week shown in the dashboard, e.g. `Monday`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_branding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// `12` or `24` hour clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl EditUserByIdRequest {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the brand color.
    pub fn brand_color(mut self, brand_color: impl Into<String>) -> Self {
        self.brand_color = Some(brand_color.into());
        self
    }

    /// Sets the dark-mode brand color.
    pub fn dark_brand_color(mut self, dark_brand_color: impl Into<String>) -> Self {
        self.dark_brand_color = Some(dark_brand_color.into());
        self
    }

    /// Sets the first day of the week.
    pub fn week_start(mut self, week_start: impl Into<String>) -> Self {
        self.week_start = Some(week_start.into());
        self
    }

    /// Sets the time zone.
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// Sets whether Cal.com branding is hidden.
    pub fn hide_branding(mut self, hide_branding: bool) -> Self {
        self.hide_branding = Some(hide_branding);
        self
    }

    /// Sets the dashboard theme.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Sets the clock format, `12` or `24`.
    pub fn time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = Some(time_format.into());
        self
    }

    /// Sets the locale.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the avatar URL.
    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
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
        let patch = EditUserByIdRequest {
            time_zone: Some("Europe/Berlin".to_string()),
            hide_branding: Some(true),
            ..EditUserByIdRequest::new()
        };
        let map = patch.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("timeZone"), Some(&json!("Europe/Berlin")));
        assert_eq!(map.get("hideBranding"), Some(&json!(true)));
    }

    #[test]
    fn test_round_trip() {
        let patch = EditUserByIdRequest::new()
            .email("ada@example.com")
            .week_start("Monday")
            .time_format("24");
        let decoded = EditUserByIdRequest::from_json(&Value::Object(patch.to_map())).unwrap();
        assert_eq!(decoded, patch);
    }

    #[test]
    fn test_chainable_setters() {
        let patch = EditUserByIdRequest::new()
            .username("ada")
            .brand_color("#292929")
            .dark_brand_color("#fafafa")
            .time_zone("Europe/Berlin")
            .hide_branding(true)
            .theme("dark")
            .locale("en")
            .avatar("https://example.com/ada.png");
        let map = patch.to_map();
        assert_eq!(map.len(), 8);
        assert_eq!(map.get("username"), Some(&json!("ada")));
        assert_eq!(map.get("hideBranding"), Some(&json!(true)));
        assert_eq!(map.get("brandColor"), Some(&json!("#292929")));
    }

    #[test]
    fn test_rejects_non_object_input() {
        assert!(EditUserByIdRequest::from_json(&json!("patch")).is_err());
    }
}
