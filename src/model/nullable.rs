use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Three-valued wrapper distinguishing an absent field from an explicit
/// JSON `null`.
///
/// `Option<T>` collapses "key missing" and "key present with null" into a
/// single state; some Cal.com write operations need the distinction (for
/// example clearing a field versus leaving it untouched). Mark fields with
/// `#[serde(default, skip_serializing_if = "Nullable::is_unset")]` so the
/// unset state round-trips as an omitted key.
///
/// ## Examples
///
/// ```rust
/// use calcom_api::model::Nullable;
///
/// let mut theme: Nullable<String> = Nullable::Unset;
/// assert!(!theme.is_set());
///
/// theme.set("dark".to_string());
/// assert_eq!(theme.get(), Some(&"dark".to_string()));
///
/// theme.set_null(); // explicit "clear this field"
/// assert!(theme.is_set());
/// assert!(theme.is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Nullable<T> {
    /// The field is absent; serialization should omit the key.
    #[default]
    Unset,
    /// The field is present as an explicit `null`.
    Null,
    /// The field is present with a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns the value, if one is present.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Sets a value, marking the field present.
    pub fn set(&mut self, value: T) {
        *self = Self::Value(value);
    }

    /// Marks the field present as an explicit `null`.
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Clears the field back to absent.
    pub fn unset(&mut self) {
        *self = Self::Unset;
    }

    /// `true` when the field is present, whether null or a value.
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// `true` only for an explicit `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true` when the field is absent. Exists for
    /// `#[serde(skip_serializing_if = "Nullable::is_unset")]`.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unset fields should be skipped at the struct level; if one
            // reaches the serializer anyway it degrades to null.
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Value(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}
