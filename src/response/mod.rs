//! Response handling.
//!
//! The [`ResponseFormat`] trait ties an [`Endpoint`](crate::endpoint::Endpoint)
//! to the shape its response decodes into: a typed struct via [`JsonFormat`],
//! a generic [`JsonObject`] for operations without a declared schema, or
//! nothing at all via [`EmptyFormat`].

mod format;

pub use format::{EmptyFormat, JsonFormat, ResponseFormat};

/// A generic JSON object, used for operations whose declared response shape
/// is an untyped map.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;
