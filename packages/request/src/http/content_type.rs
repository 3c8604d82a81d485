//! Media types and authentication schemes recorded on a request

/// Header name used for the request media type
pub const CONTENT_TYPE: &str = "Content-Type";
/// Header name used for the accepted response media type
pub const ACCEPT: &str = "Accept";
/// Header name carrying credentials
pub const AUTHORIZATION: &str = "Authorization";

/// True for any spelling of the `Authorization` header name.
///
/// Names are stored case-sensitively, but a transport lowercases them, so
/// `authorization` carries credentials just as well.
#[must_use]
pub fn is_authorization(name: &str) -> bool {
    name.eq_ignore_ascii_case(AUTHORIZATION)
}

/// Content type enumeration for elegant API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// application/json content type
    ApplicationJson,
    /// application/x-www-form-urlencoded content type
    ApplicationFormUrlEncoded,
    /// application/octet-stream content type
    ApplicationOctetStream,
    /// application/xml content type
    ApplicationXml,
    /// text/plain content type
    TextPlain,
    /// text/html content type
    TextHtml,
    /// multipart/form-data content type
    MultipartFormData,
}

impl ContentType {
    /// Convert content type to string representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::ApplicationJson => "application/json",
            ContentType::ApplicationFormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::ApplicationOctetStream => "application/octet-stream",
            ContentType::ApplicationXml => "application/xml",
            ContentType::TextPlain => "text/plain",
            ContentType::TextHtml => "text/html",
            ContentType::MultipartFormData => "multipart/form-data",
        }
    }
}

/// Authentication scheme declared on a request.
///
/// Records intent only. Whether credentials were supplied is visible in
/// the `Authorization` header, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthType {
    #[default]
    None,
    Basic,
    Bearer,
}
