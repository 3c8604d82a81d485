//! Body serialization seam
//!
//! Structured bodies are turned into bytes by a [`BodySerializer`]. The
//! builder never looks inside the format; it only records the serializer's
//! media type and the bytes it produced.

use serde::Serialize;

use crate::http::content_type::ContentType;

/// Failure reported by a [`BodySerializer`]
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Custom(String),
}

/// Encodes a value as request body bytes.
pub trait BodySerializer {
    /// Media type the produced bytes are in
    fn content_type(&self) -> ContentType;

    /// Encode `value`.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializeError`] when the value cannot be represented.
    fn to_bytes<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializeError>;
}

/// UTF-8 JSON via `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl BodySerializer for JsonSerializer {
    fn content_type(&self) -> ContentType {
        ContentType::ApplicationJson
    }

    fn to_bytes<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializeError> {
        Ok(serde_json::to_vec(value)?)
    }
}
