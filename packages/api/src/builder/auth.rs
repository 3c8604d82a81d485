//! Authentication methods for HTTP requests
//!
//! Each scheme comes in two forms. The `declare_*` form records only the
//! intended scheme, for transports that inject credentials themselves.
//! The `with_*` form also writes the `Authorization` header.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqforge_request::error::require_value;
use reqforge_request::http::AUTHORIZATION;
use reqforge_request::{AuthType, Result};

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Declare basic authentication without supplying credentials
    #[must_use]
    pub fn declare_basic_auth(mut self) -> Self {
        self.set_auth_type(AuthType::Basic);
        self
    }

    /// Set basic authentication header
    ///
    /// Writes `Authorization: Basic <base64(user:pass)>` using the standard
    /// padded alphabet over the UTF-8 bytes of `user:pass`.
    ///
    /// # Errors
    ///
    /// `MissingValue` if either credential is empty.
    ///
    /// # Examples
    /// ```
    /// use reqforge::RequestBuilder;
    ///
    /// let request = RequestBuilder::get("/protected")
    ///     .with_basic_auth("alice", "secret")?
    ///     .build();
    /// assert_eq!(request.header("Authorization"), Some("Basic YWxpY2U6c2VjcmV0"));
    /// # Ok::<(), reqforge::Error>(())
    /// ```
    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Result<Self> {
        require_value("basic auth username", username)?;
        require_value("basic auth password", password)?;

        let encoded = STANDARD.encode(format!("{username}:{password}"));
        self.set_auth_type(AuthType::Basic);
        self.draft
            .headers
            .insert(AUTHORIZATION.to_string(), format!("Basic {encoded}"));
        Ok(self)
    }

    /// Declare bearer authentication without supplying a token
    #[must_use]
    pub fn declare_bearer_auth(mut self) -> Self {
        self.set_auth_type(AuthType::Bearer);
        self
    }

    /// Set bearer token authentication header
    ///
    /// # Errors
    ///
    /// `MissingValue` if `token` is empty.
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self> {
        require_value("bearer token", token)?;

        self.set_auth_type(AuthType::Bearer);
        self.draft
            .headers
            .insert(AUTHORIZATION.to_string(), format!("Bearer {token}"));
        Ok(self)
    }

    fn set_auth_type(&mut self, auth_type: AuthType) {
        self.draft.auth_type = auth_type;
        self.trace(format_args!("auth {auth_type:?}"));
    }
}
