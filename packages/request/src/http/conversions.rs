//! Hand-off of a finalized descriptor to `http` crate types

use bytes::Bytes;
use http::{HeaderName, HeaderValue, Uri};

use super::content_type::is_authorization;
use super::request::RequestDescriptor;
use crate::error::{Result, invalid_header, invalid_uri};

impl RequestDescriptor {
    /// Convert into an [`http::Request`] for a transport.
    ///
    /// Header names are lowercased by the `http` crate, so two names that
    /// differ only by case collapse into one multi-valued entry. Headers are
    /// appended in byte order of their stored names, which keeps the value
    /// order of such an entry stable. Any spelling of `Authorization` is
    /// marked sensitive. A missing body becomes an empty one.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidUri` error when the URL is not a valid request
    /// target, and `InvalidHeader` when a header name or value contains
    /// bytes HTTP cannot carry.
    pub fn into_http_request(self) -> Result<http::Request<Bytes>> {
        let (id, parts) = self.into_parts();

        let uri: Uri = parts.url.parse().map_err(|e| {
            tracing::warn!(request_id = %id, url = %parts.url, "request url rejected");
            invalid_uri(&parts.url, e)
        })?;

        let mut request = http::Request::new(parts.body.unwrap_or_default());
        *request.method_mut() = parts.method.into();
        *request.uri_mut() = uri;

        let mut names: Vec<(&String, &String)> = parts.headers.iter().collect();
        names.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let headers = request.headers_mut();
        for (name, value) in names {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid_header(name, e))?;
            let mut header_value =
                HeaderValue::from_str(value).map_err(|e| invalid_header(name, e))?;
            if is_authorization(name) {
                header_value.set_sensitive(true);
            }
            headers.append(header_name, header_value);
        }

        tracing::debug!(
            request_id = %id,
            method = %parts.method,
            uri = %request.uri(),
            headers = request.headers().len(),
            "converted request descriptor"
        );
        Ok(request)
    }
}
