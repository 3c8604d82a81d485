pub mod content_type;
pub mod conversions;
pub mod escape;
pub mod method;
pub mod request;

pub use content_type::{
    ACCEPT, AUTHORIZATION, AuthType, CONTENT_TYPE, ContentType, is_authorization,
};
pub use escape::{append_pair, url_encode};
pub use method::HttpMethod;
pub use request::{RequestDescriptor, RequestId, RequestParts};
