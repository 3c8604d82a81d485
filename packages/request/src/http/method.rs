//! HTTP methods a descriptor can carry

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, invalid_argument};

/// HTTP methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Upper-case wire name of the method
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(invalid_argument(format!("unsupported http method `{s}`"))),
        }
    }
}

impl From<HttpMethod> for http::Method {
    #[inline]
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Patch => http::Method::PATCH,
            HttpMethod::Delete => http::Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("patch".parse::<HttpMethod>().ok(), Some(HttpMethod::Patch));
        assert_eq!("Delete".parse::<HttpMethod>().ok(), Some(HttpMethod::Delete));
    }

    #[test]
    fn rejects_methods_outside_the_set() {
        let err = "HEAD".parse::<HttpMethod>().err();
        assert!(err.is_some_and(|e| e.is_invalid_argument()));
    }

    #[test]
    fn maps_onto_http_method() {
        assert_eq!(http::Method::from(HttpMethod::Put), http::Method::PUT);
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }
}
