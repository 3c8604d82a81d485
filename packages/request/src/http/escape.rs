//! Percent-encoding for URL and form fragments, and byte escaping for debug output

use std::fmt;

/// Debug view over raw body bytes.
pub(crate) struct Escape<'a>(&'a [u8]);

impl<'a> Escape<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Escape(bytes)
    }
}

impl fmt::Debug for Escape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{self}\"")
    }
}

impl fmt::Display for Escape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in self.0 {
            // https://doc.rust-lang.org/reference.html#byte-escapes
            if c == b'\n' {
                write!(f, "\\n")?;
            } else if c == b'\r' {
                write!(f, "\\r")?;
            } else if c == b'\t' {
                write!(f, "\\t")?;
            } else if c == b'\\' || c == b'"' {
                write!(f, "\\{}", c as char)?;
            } else if c == b'\0' {
                write!(f, "\\0")?;
            // ASCII printable
            } else if (0x20..0x7f).contains(&c) {
                write!(f, "{}", c as char)?;
            } else {
                write!(f, "\\x{c:02x}")?;
            }
        }
        Ok(())
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
///
/// Space becomes `%20`, never `+`.
#[must_use]
pub fn url_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Append `key=value`, both encoded, to a `&`-joined fragment.
pub fn append_pair(fragment: &mut String, key: &str, value: &str) {
    if !fragment.is_empty() {
        fragment.push('&');
    }
    fragment.push_str(&urlencoding::encode(key));
    fragment.push('=');
    fragment.push_str(&urlencoding::encode(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_and_space() {
        assert_eq!(url_encode("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(url_encode("Az09-._~"), "Az09-._~");
    }

    #[test]
    fn pairs_are_ampersand_joined() {
        let mut fragment = String::new();
        append_pair(&mut fragment, "q", "rust lang");
        append_pair(&mut fragment, "page", "2");
        assert_eq!(fragment, "q=rust%20lang&page=2");
    }

    #[test]
    fn escape_renders_control_bytes() {
        let rendered = format!("{:?}", Escape::new(b"a\"b\n\x01"));
        assert_eq!(rendered, "b\"a\\\"b\\n\\x01\"");
    }
}
