//! Request builder modules
//!
//! The builder's state lives in `core`; every other module adds one family
//! of configuration calls to [`RequestBuilder`].

pub mod auth;
pub mod body;
pub mod config;
pub mod core;
pub mod headers;
pub mod methods;
pub mod params;

#[cfg(test)]
mod test_log;

pub use self::config::BuilderConfig;
pub use self::core::RequestBuilder;
