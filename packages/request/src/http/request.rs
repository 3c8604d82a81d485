//! Finalized request descriptors
//!
//! [`RequestDescriptor`] is the read-only value a transport consumes. It is
//! assembled from [`RequestParts`] and an identifier minted when the
//! request was first started, not when it was finalized.

use std::fmt;

use bytes::Bytes;
use hashbrown::HashMap;
use uuid::Uuid;

use super::content_type::{AuthType, is_authorization};
use super::escape::Escape;
use super::method::HttpMethod;

/// Process-unique request identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Mint a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        let id = RequestId(Uuid::new_v4());
        tracing::trace!(request_id = %id, "generated request id");
        id
    }

    /// Underlying UUID value
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// Owned field set a descriptor is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParts {
    pub method: HttpMethod,
    pub url: String,
    pub auth_type: AuthType,
    pub headers: HashMap<String, String>,
    pub body: Option<Bytes>,
    pub priority: i32,
}

impl RequestParts {
    /// Empty parts for `method` aimed at `url`
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            auth_type: AuthType::None,
            headers: HashMap::new(),
            body: None,
            priority: 0,
        }
    }
}

/// Immutable, fully resolved HTTP request
#[derive(Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    id: RequestId,
    parts: RequestParts,
}

impl RequestDescriptor {
    /// Seal `parts` under the identifier minted for the request
    #[must_use]
    pub fn from_parts(id: RequestId, parts: RequestParts) -> Self {
        Self { id, parts }
    }

    /// Identifier assigned when the builder was created
    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Method fixed at construction
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        self.parts.method
    }

    /// Resolved URL, query string included
    #[must_use]
    pub fn url(&self) -> &str {
        &self.parts.url
    }

    /// Declared authentication scheme, with or without credentials
    #[must_use]
    pub fn auth_type(&self) -> AuthType {
        self.parts.auth_type
    }

    /// Final header set, names as given
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.parts.headers
    }

    /// Case-sensitive header lookup
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).map(String::as_str)
    }

    /// Final payload, if any
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.parts.body.as_ref()
    }

    /// Scheduling hint for the transport. Defaults to 0.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.parts.priority
    }

    /// Replace the scheduling hint
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.parts.priority = priority;
        self
    }

    /// Give up the descriptor's fields
    #[must_use]
    pub fn into_parts(self) -> (RequestId, RequestParts) {
        (self.id, self.parts)
    }
}

impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: HashMap<&str, &str> = self
            .parts
            .headers
            .iter()
            .map(|(name, value)| {
                if is_authorization(name) {
                    (name.as_str(), "<redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("RequestDescriptor")
            .field("id", &self.id)
            .field("method", &self.parts.method)
            .field("url", &self.parts.url)
            .field("auth_type", &self.parts.auth_type)
            .field("headers", &headers)
            .field("body", &self.parts.body.as_deref().map(Escape::new))
            .field("priority", &self.parts.priority)
            .finish()
    }
}
