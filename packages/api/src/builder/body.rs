//! Request body handling functionality
//!
//! Each body setter defaults `Content-Type` for its kind of payload but
//! never replaces a `Content-Type` that is already present. Form fields
//! take precedence over all of these at finalize.

use bytes::Bytes;
use reqforge_request::error::serialization_failed;
use reqforge_request::http::ContentType;
use reqforge_request::{BodySerializer, JsonSerializer, Result};
use serde::Serialize;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Set text content as request body
    ///
    /// Defaults `Content-Type` to `text/plain`.
    #[must_use]
    pub fn with_text_body(self, text: impl Into<String>) -> Self {
        let text: String = text.into();
        self.set_body(Bytes::from(text), ContentType::TextPlain)
    }

    /// Set raw bytes as request body
    ///
    /// Defaults `Content-Type` to `application/octet-stream`.
    #[must_use]
    pub fn with_raw_body(self, bytes: impl Into<Bytes>) -> Self {
        self.set_body(bytes.into(), ContentType::ApplicationOctetStream)
    }

    /// Serialize `value` as UTF-8 JSON and use it as the body
    ///
    /// Defaults `Content-Type` to `application/json`.
    ///
    /// # Errors
    ///
    /// `SerializationFailed` if `serde_json` rejects the value.
    ///
    /// # Examples
    /// ```
    /// use reqforge::RequestBuilder;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct NewItem {
    ///     n: u32,
    /// }
    ///
    /// let request = RequestBuilder::post("/items")
    ///     .with_json_body(&NewItem { n: 1 })?
    ///     .build();
    /// assert_eq!(request.header("Content-Type"), Some("application/json"));
    /// assert_eq!(request.body().map(|b| &b[..]), Some(&br#"{"n":1}"#[..]));
    /// # Ok::<(), reqforge::Error>(())
    /// ```
    pub fn with_json_body<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        self.with_serialized_body(&JsonSerializer, value)
    }

    /// Encode `value` with `serializer` and use it as the body
    ///
    /// Defaults `Content-Type` to the serializer's media type.
    ///
    /// # Errors
    ///
    /// `SerializationFailed` if the serializer rejects the value.
    pub fn with_serialized_body<S, T>(self, serializer: &S, value: &T) -> Result<Self>
    where
        S: BodySerializer,
        T: Serialize + ?Sized,
    {
        let bytes = serializer
            .to_bytes(value)
            .map_err(serialization_failed)?;
        Ok(self.set_body(Bytes::from(bytes), serializer.content_type()))
    }

    fn set_body(mut self, body: Bytes, default_type: ContentType) -> Self {
        self.trace(format_args!("body set ({} bytes)", body.len()));
        self.default_content_type(default_type);
        self.draft.body = Some(body);
        self
    }
}
