//! Header management
//!
//! Header names are stored exactly as given. `X-Id` and `x-id` are two
//! different headers, and setting a name twice keeps the last value.

use reqforge_request::error::require_key;
use reqforge_request::http::{ACCEPT, CONTENT_TYPE, ContentType};
use reqforge_request::Result;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Add or overwrite a header
    ///
    /// The value is not validated and may be empty.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `key` is empty.
    ///
    /// # Examples
    /// ```
    /// use reqforge::RequestBuilder;
    ///
    /// let request = RequestBuilder::get("/data")
    ///     .with_header("X-Request-Source", "batch")?
    ///     .build();
    /// assert_eq!(request.header("X-Request-Source"), Some("batch"));
    /// # Ok::<(), reqforge::Error>(())
    /// ```
    pub fn with_header(mut self, key: &str, value: &str) -> Result<Self> {
        require_key("header", key)?;
        self.set_header(key, value);
        Ok(self)
    }

    /// Add or overwrite several headers
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any name is empty; no header is set then.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let headers: Vec<(K, V)> = headers.into_iter().collect();
        for (key, _) in &headers {
            require_key("header", key.as_ref())?;
        }
        for (key, value) in &headers {
            self.set_header(key.as_ref(), value.as_ref());
        }
        Ok(self)
    }

    /// Set `Content-Type`, replacing any earlier value
    #[must_use]
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.set_header(CONTENT_TYPE, content_type.as_str());
        self
    }

    /// Set `Accept`, replacing any earlier value
    #[must_use]
    pub fn accepts(mut self, content_type: ContentType) -> Self {
        self.set_header(ACCEPT, content_type.as_str());
        self
    }

    pub(crate) fn set_header(&mut self, key: &str, value: &str) {
        self.draft.headers.insert(key.to_string(), value.to_string());
        self.trace(format_args!("header `{key}` set"));
    }
}
