//! HTTP method entry points
//!
//! One constructor per supported method. The method chosen here is fixed
//! for the life of the builder.

use reqforge_request::HttpMethod;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Start a GET request
    ///
    /// # Examples
    /// ```
    /// use reqforge::RequestBuilder;
    ///
    /// let request = RequestBuilder::get("/users/{id}")
    ///     .with_path_param("id", "42")?
    ///     .build();
    /// assert_eq!(request.url(), "/users/42");
    /// # Ok::<(), reqforge::Error>(())
    /// ```
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Start a POST request
    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    /// Start a PUT request
    #[must_use]
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, url)
    }

    /// Start a PATCH request
    #[must_use]
    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, url)
    }

    /// Start a DELETE request
    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, url)
    }
}
