use super::types::{Error, Kind};

impl Error {
    /// Returns true if a required key was empty.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidArgument)
    }

    /// Returns true if a mandatory value was empty.
    #[must_use]
    pub fn is_missing_value(&self) -> bool {
        matches!(self.inner.kind, Kind::MissingValue)
    }

    /// Returns true if the body serializer failed.
    #[must_use]
    pub fn is_serialization(&self) -> bool {
        matches!(self.inner.kind, Kind::SerializationFailed)
    }

    /// Returns true if the error came from converting a descriptor for a transport.
    #[must_use]
    pub fn is_conversion(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidHeader | Kind::InvalidUri)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::constructors::{invalid_argument, missing_value, require_key, require_value};

    #[test]
    fn predicates_follow_kind() {
        assert!(invalid_argument("x").is_invalid_argument());
        assert!(!invalid_argument("x").is_missing_value());
        assert!(missing_value("x").is_missing_value());
        assert!(!missing_value("x").is_conversion());
    }

    #[test]
    fn require_helpers() {
        assert!(require_key("header", "X-Trace").is_ok());
        assert!(require_key("header", "").is_err_and(|e| e.is_invalid_argument()));
        assert!(require_value("token", "").is_err_and(|e| e.is_missing_value()));
    }
}
