//! # reqforge request model
//!
//! The immutable [`RequestDescriptor`] handed to an HTTP transport, the
//! small closed vocabularies it is made of ([`HttpMethod`], [`AuthType`],
//! [`ContentType`]), the percent-encoding used for URL and form fragments,
//! and the [`BodySerializer`] seam for structured bodies.
//!
//! Nothing in this crate performs I/O.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod http;
pub mod serialize;

pub use error::{Error, Kind, Result};
pub use self::http::{
    AuthType, ContentType, HttpMethod, RequestDescriptor, RequestId, RequestParts,
};
pub use serialize::{BodySerializer, JsonSerializer, SerializeError};
