//! Core `RequestBuilder` structure and finalization
//!
//! Contains the builder's draft state, construction, and the terminal
//! [`RequestBuilder::build`] that turns the draft into a descriptor.

use bytes::Bytes;
use reqforge_request::http::{CONTENT_TYPE, ContentType};
use reqforge_request::{HttpMethod, RequestDescriptor, RequestId, RequestParts};

use crate::builder::config::BuilderConfig;

/// Fluent builder for a single HTTP request.
///
/// Configuration calls take the builder by value and hand it back, so
/// calls chain. Calls that validate input return `Result<Self>` and make
/// no change before failing. [`build`](RequestBuilder::build) consumes
/// the builder, so a draft is finalized exactly once.
#[derive(Debug)]
pub struct RequestBuilder {
    /// Identifier minted at construction
    pub(crate) id: RequestId,
    /// Method, URL template, headers, auth intent and explicit body
    pub(crate) draft: RequestParts,
    /// Encoded `key=value` pairs for the query string
    pub(crate) query: String,
    /// Encoded `key=value` pairs for a form body
    pub(crate) form: String,
    pub(crate) config: BuilderConfig,
}

impl RequestBuilder {
    /// Start a request for `method` against the URL template `url`
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self::with_config(method, url, BuilderConfig::default())
    }

    /// Start a request with explicit builder configuration
    #[must_use]
    pub fn with_config(method: HttpMethod, url: impl Into<String>, config: BuilderConfig) -> Self {
        let builder = Self {
            id: RequestId::generate(),
            draft: RequestParts::new(method, url),
            query: String::new(),
            form: String::new(),
            config,
        };
        if builder.config.debug {
            log::debug!(
                "reqforge: started {} {} ({})",
                builder.draft.method,
                builder.draft.url,
                builder.id
            );
        }
        builder
    }

    /// Enable debug logging for this request
    ///
    /// When enabled, every configuration call is logged at `debug` level.
    ///
    /// # Returns
    /// `Self` for method chaining
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    /// Identifier the finished descriptor will carry
    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Method fixed at construction
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.draft.method
    }

    /// Current URL template, placeholders substituted so far
    #[must_use]
    pub fn url_template(&self) -> &str {
        &self.draft.url
    }

    /// Current value of a header, by exact name
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.draft.headers.get(name).map(String::as_str)
    }

    pub(crate) fn trace(&self, args: std::fmt::Arguments<'_>) {
        if self.config.debug {
            log::debug!("reqforge: [{}] {}", self.id, args);
        }
    }

    /// Set `Content-Type` only when no value is present yet
    pub(crate) fn default_content_type(&mut self, content_type: ContentType) {
        self.draft
            .headers
            .entry(CONTENT_TYPE.to_string())
            .or_insert_with(|| content_type.as_str().to_string());
    }

    /// Finalize the request
    ///
    /// Appends the query string (with a literal `?`, even if the URL already
    /// has one), then, if any form field was set, replaces the body with the
    /// form encoding and forces `Content-Type` to
    /// `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn build(self) -> RequestDescriptor {
        let Self {
            id,
            mut draft,
            query,
            form,
            config,
        } = self;

        if !query.is_empty() {
            draft.url.push('?');
            draft.url.push_str(&query);
        }

        if !form.is_empty() {
            draft.headers.insert(
                CONTENT_TYPE.to_string(),
                ContentType::ApplicationFormUrlEncoded.as_str().to_string(),
            );
            draft.body = Some(Bytes::from(form));
        }

        draft.priority = config.default_priority;

        if config.warn_unresolved_placeholders && has_placeholder(&draft.url) {
            log::warn!("reqforge: [{id}] unresolved placeholder in {}", draft.url);
        }
        if config.debug {
            log::debug!(
                "reqforge: [{id}] built {} {} ({} headers, {} body bytes)",
                draft.method,
                draft.url,
                draft.headers.len(),
                draft.body.as_ref().map_or(0, Bytes::len)
            );
        }

        RequestDescriptor::from_parts(id, draft)
    }
}

/// True when `url` still contains a `{...}` token
fn has_placeholder(url: &str) -> bool {
    url.find('{')
        .is_some_and(|open| url[open..].contains('}'))
}

#[cfg(test)]
mod tests {
    use log::Level;
    use reqforge_request::AuthType;

    use super::*;
    use crate::builder::test_log::{capture_logs, lines_for};

    fn warnings_for(id: RequestId) -> Vec<String> {
        lines_for(id, Level::Warn)
    }

    #[test]
    fn fresh_builder_has_no_query_body_or_auth() {
        let request = RequestBuilder::new(HttpMethod::Get, "/health").build();
        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.url(), "/health");
        assert_eq!(request.auth_type(), AuthType::None);
        assert!(request.headers().is_empty());
        assert!(request.body().is_none());
        assert_eq!(request.priority(), 0);
    }

    #[test]
    fn id_is_fixed_at_construction() {
        let builder = RequestBuilder::new(HttpMethod::Post, "/jobs");
        let id = builder.id();
        assert_eq!(builder.build().id(), id);
    }

    #[test]
    fn default_priority_comes_from_config() {
        let config = BuilderConfig::new().default_priority(5);
        let request = RequestBuilder::with_config(HttpMethod::Get, "/q", config).build();
        assert_eq!(request.priority(), 5);
    }

    #[test]
    fn default_content_type_never_overwrites() {
        let mut builder = RequestBuilder::new(HttpMethod::Post, "/u");
        builder.default_content_type(ContentType::TextHtml);
        builder.default_content_type(ContentType::TextPlain);
        assert_eq!(builder.header_value(CONTENT_TYPE), Some("text/html"));
    }

    #[test]
    fn unresolved_placeholder_logs_a_warning() {
        capture_logs();
        let builder = RequestBuilder::new(HttpMethod::Get, "/users/{id}");
        let id = builder.id();
        let request = builder.build();

        assert_eq!(request.url(), "/users/{id}");
        let warnings = warnings_for(id);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("unresolved placeholder in /users/{id}"));
    }

    #[test]
    fn placeholder_warning_can_be_disabled() {
        capture_logs();
        let config = BuilderConfig::new().warn_unresolved_placeholders(false);
        let builder = RequestBuilder::with_config(HttpMethod::Get, "/users/{id}", config);
        let id = builder.id();
        let _ = builder.build();

        assert!(warnings_for(id).is_empty());
    }

    #[test]
    fn resolved_url_logs_no_warning() {
        capture_logs();
        let builder = RequestBuilder::new(HttpMethod::Get, "/users/42");
        let id = builder.id();
        let _ = builder.build();

        assert!(warnings_for(id).is_empty());
    }

    #[test]
    fn placeholder_detection() {
        assert!(has_placeholder("/users/{id}"));
        assert!(has_placeholder("/a/{b}/c?x=1"));
        assert!(!has_placeholder("/users/42"));
        assert!(!has_placeholder("/odd}/{"));
    }
}
