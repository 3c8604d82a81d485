use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `reqforge_request::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors raised while assembling or handing off a request.
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub(crate) struct Inner {
    pub(crate) kind: Kind,
    pub(crate) message: String,
    pub(crate) source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A required key (header, path, query or form name) was empty
    InvalidArgument,
    /// A mandatory value (path parameter, credential) was empty
    MissingValue,
    /// The body serializer rejected the value
    SerializationFailed,
    /// A header could not be represented on the wire
    InvalidHeader,
    /// The resolved URL could not be parsed as a request target
    InvalidUri,
}

impl Error {
    pub fn new(kind: Kind, message: impl Into<String>) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                message: message.into(),
                source: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// Human readable detail attached at the failing call.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("reqforge::Error");

        f.field("kind", &self.inner.kind);
        f.field("message", &self.inner.message);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.inner.kind {
            Kind::InvalidArgument => "invalid argument",
            Kind::MissingValue => "missing value",
            Kind::SerializationFailed => "body serialization failed",
            Kind::InvalidHeader => "invalid header",
            Kind::InvalidUri => "invalid request uri",
        };
        if self.inner.message.is_empty() {
            f.write_str(prefix)
        } else {
            write!(f, "{prefix}: {}", self.inner.message)
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
