//! reqforge public API
//!
//! Fluent builder that assembles an immutable HTTP request descriptor from
//! incremental configuration calls: path substitution, query and form
//! parameters, headers, authentication and body. The finished
//! [`RequestDescriptor`] is handed to a transport; this crate performs no I/O.
//!
//! ```
//! use serde_json::json;
//!
//! let request = reqforge::post("/items/{id}")
//!     .with_path_param("id", "7")?
//!     .with_query_param("verbose", "true")?
//!     .with_json_body(&json!({"n": 1}))?
//!     .build();
//!
//! assert_eq!(request.url(), "/items/7?verbose=true");
//! assert_eq!(request.header("Content-Type"), Some("application/json"));
//! # Ok::<(), reqforge::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{BuilderConfig, RequestBuilder};

// Re-export the request model so callers need a single dependency
pub use reqforge_request::{
    AuthType, BodySerializer, ContentType, Error, HttpMethod, JsonSerializer, Kind,
    RequestDescriptor, RequestId, Result, SerializeError,
};

/// Start a GET request
///
/// Shorthand for `RequestBuilder::get(url)`
#[must_use]
pub fn get(url: impl Into<String>) -> RequestBuilder {
    RequestBuilder::get(url)
}

/// Start a POST request
///
/// Shorthand for `RequestBuilder::post(url)`
#[must_use]
pub fn post(url: impl Into<String>) -> RequestBuilder {
    RequestBuilder::post(url)
}

/// Start a PUT request
///
/// Shorthand for `RequestBuilder::put(url)`
#[must_use]
pub fn put(url: impl Into<String>) -> RequestBuilder {
    RequestBuilder::put(url)
}

/// Start a PATCH request
///
/// Shorthand for `RequestBuilder::patch(url)`
#[must_use]
pub fn patch(url: impl Into<String>) -> RequestBuilder {
    RequestBuilder::patch(url)
}

/// Start a DELETE request
///
/// Shorthand for `RequestBuilder::delete(url)`
#[must_use]
pub fn delete(url: impl Into<String>) -> RequestBuilder {
    RequestBuilder::delete(url)
}
