use super::types::{Error, Kind};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates an `Error` for an empty or missing required key.
pub fn invalid_argument(message: impl Into<String>) -> Error {
    Error::new(Kind::InvalidArgument, message)
}

/// Creates an `Error` for an empty mandatory value.
pub fn missing_value(message: impl Into<String>) -> Error {
    Error::new(Kind::MissingValue, message)
}

/// Creates an `Error` for a body serializer failure.
pub fn serialization_failed<E: Into<BoxError>>(e: E) -> Error {
    let source = e.into();
    Error::new(Kind::SerializationFailed, source.to_string()).with(source)
}

/// Creates an `Error` for a header that cannot be sent.
pub fn invalid_header<E: Into<BoxError>>(name: &str, e: E) -> Error {
    Error::new(Kind::InvalidHeader, format!("header `{name}`")).with(e.into())
}

/// Creates an `Error` for a URL the `http` crate refuses.
pub fn invalid_uri<E: Into<BoxError>>(url: &str, e: E) -> Error {
    Error::new(Kind::InvalidUri, url.to_string()).with(e.into())
}

/// Rejects an empty key, naming what the key was for.
pub fn require_key(what: &str, key: &str) -> Result<(), Error> {
    if key.is_empty() {
        return Err(invalid_argument(format!("{what} name must not be empty")));
    }
    Ok(())
}

/// Rejects an empty mandatory value.
pub fn require_value(what: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(missing_value(format!("{what} must not be empty")));
    }
    Ok(())
}
