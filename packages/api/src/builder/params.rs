//! Path, query and form parameters
//!
//! Path parameters are mandatory: an empty value is an error. Query and
//! form parameters are optional: an empty value is silently dropped. In all
//! three an empty name is an error. Names and values are percent-encoded.

use reqforge_request::error::{require_key, require_value};
use reqforge_request::http::{append_pair, url_encode};
use reqforge_request::Result;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Substitute every `{key}` in the URL template with the encoded `value`
    ///
    /// Plain substring replacement. A key that does not appear in the
    /// template is a no-op.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `key` is empty, `MissingValue` if `value` is empty.
    pub fn with_path_param(mut self, key: &str, value: &str) -> Result<Self> {
        check_path_param(key, value)?;
        self.substitute(key, value);
        Ok(self)
    }

    /// Apply [`with_path_param`](Self::with_path_param) for every entry
    ///
    /// Every entry is validated before any substitution happens.
    ///
    /// # Errors
    ///
    /// The first invalid entry's error.
    pub fn with_path_params<I, K, V>(mut self, params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params: Vec<(K, V)> = params.into_iter().collect();
        for (key, value) in &params {
            check_path_param(key.as_ref(), value.as_ref())?;
        }
        for (key, value) in &params {
            self.substitute(key.as_ref(), value.as_ref());
        }
        Ok(self)
    }

    /// Append `key=value` to the query string
    ///
    /// An empty `value` leaves the query string unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `key` is empty.
    pub fn with_query_param(mut self, key: &str, value: &str) -> Result<Self> {
        require_key("query parameter", key)?;
        self.push_query(key, value);
        Ok(self)
    }

    /// Append `key=value` once per value, keeping repeated keys
    ///
    /// `with_query_values("tag", ["a", "b"])` yields `tag=a&tag=b`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `key` is empty.
    pub fn with_query_values<I, V>(mut self, key: &str, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        require_key("query parameter", key)?;
        for value in values {
            self.push_query(key, value.as_ref());
        }
        Ok(self)
    }

    /// Apply [`with_query_param`](Self::with_query_param) for every entry
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any key is empty; nothing is appended then.
    pub fn with_query_params<I, K, V>(mut self, params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params: Vec<(K, V)> = params.into_iter().collect();
        for (key, _) in &params {
            require_key("query parameter", key.as_ref())?;
        }
        for (key, value) in &params {
            self.push_query(key.as_ref(), value.as_ref());
        }
        Ok(self)
    }

    /// Append `key=value` to the form body
    ///
    /// Any form field makes the finished request a form post: the form
    /// encoding replaces an explicit body at finalize.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `key` is empty.
    pub fn with_form_param(mut self, key: &str, value: &str) -> Result<Self> {
        require_key("form field", key)?;
        self.push_form(key, value);
        Ok(self)
    }

    /// Apply [`with_form_param`](Self::with_form_param) for every entry
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if any key is empty; nothing is appended then.
    pub fn with_form_params<I, K, V>(mut self, params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let params: Vec<(K, V)> = params.into_iter().collect();
        for (key, _) in &params {
            require_key("form field", key.as_ref())?;
        }
        for (key, value) in &params {
            self.push_form(key.as_ref(), value.as_ref());
        }
        Ok(self)
    }

    fn substitute(&mut self, key: &str, value: &str) {
        let token = format!("{{{key}}}");
        if self.draft.url.contains(&token) {
            self.draft.url = self.draft.url.replace(&token, &url_encode(value));
            self.trace(format_args!("path placeholder {token} replaced"));
        }
    }

    fn push_query(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        append_pair(&mut self.query, key, value);
        self.trace(format_args!("query parameter `{key}` added"));
    }

    fn push_form(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        append_pair(&mut self.form, key, value);
        self.trace(format_args!("form field `{key}` added"));
    }
}

fn check_path_param(key: &str, value: &str) -> Result<()> {
    require_key("path parameter", key)?;
    require_value(&format!("path parameter `{key}`"), value)
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;
    use crate::builder::test_log::{capture_logs, lines_for};

    fn url_of(builder: RequestBuilder) -> String {
        builder.build().url().to_string()
    }

    #[test]
    fn path_param_replaces_every_occurrence() {
        let builder = RequestBuilder::get("/{v}/items/{v}")
            .with_path_param("v", "a b")
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(url_of(builder), "/a%20b/items/a%20b");
    }

    #[test]
    fn path_param_absent_token_is_noop() {
        let builder = RequestBuilder::get("/users")
            .with_path_param("id", "42")
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(url_of(builder), "/users");
    }

    #[test]
    fn path_param_errors() {
        let empty_key = RequestBuilder::get("/users/{id}").with_path_param("", "1");
        assert!(empty_key.is_err_and(|e| e.is_invalid_argument()));

        let empty_value = RequestBuilder::get("/users/{id}").with_path_param("id", "");
        assert!(empty_value.is_err_and(|e| e.is_missing_value()));
    }

    #[test]
    fn path_params_validate_before_substituting() {
        let result = RequestBuilder::get("/{org}/{repo}")
            .with_path_params([("org", "rust-lang"), ("repo", "")]);
        assert!(result.is_err_and(|e| e.is_missing_value()));

        let builder = RequestBuilder::get("/{org}/{repo}")
            .with_path_params([("org", "rust-lang"), ("repo", "cargo")])
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(url_of(builder), "/rust-lang/cargo");
    }

    #[test]
    fn query_params_join_and_skip_empty_values() {
        let builder = RequestBuilder::get("/search")
            .with_query_param("q", "rust & go")
            .and_then(|b| b.with_query_param("page", ""))
            .and_then(|b| b.with_query_param("limit", "10"))
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(url_of(builder), "/search?q=rust%20%26%20go&limit=10");
    }

    #[test]
    fn query_values_repeat_the_key() {
        let builder = RequestBuilder::get("/posts")
            .with_query_values("tag", ["a", "", "b"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(url_of(builder), "/posts?tag=a&tag=b");
    }

    #[test]
    fn debug_trace_names_query_keys_but_not_values() {
        capture_logs();
        let builder = RequestBuilder::get("/callback")
            .debug()
            .with_query_param("access_token", "SECRET-TOKEN")
            .unwrap_or_else(|e| panic!("{e}"));
        let lines = lines_for(builder.id(), Level::Debug);

        assert!(lines.iter().any(|l| l.contains("`access_token`")));
        assert!(lines.iter().all(|l| !l.contains("SECRET-TOKEN")));
    }

    #[test]
    fn query_values_reject_empty_key() {
        let result = RequestBuilder::get("/posts").with_query_values("", ["a"]);
        assert!(result.is_err_and(|e| e.is_invalid_argument()));

        let no_values: [&str; 0] = [];
        let result = RequestBuilder::get("/posts").with_query_values("", no_values);
        assert!(result.is_err_and(|e| e.is_invalid_argument()));
    }

    #[test]
    fn query_params_reject_empty_key_without_appending() {
        let result = RequestBuilder::get("/x").with_query_params(vec![("a", "1"), ("", "2")]);
        assert!(result.is_err_and(|e| e.is_invalid_argument()));
    }

    #[test]
    fn only_empty_query_values_leave_url_untouched() {
        let builder = RequestBuilder::get("/x")
            .with_query_param("a", "")
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(url_of(builder), "/x");
    }

    #[test]
    fn query_is_appended_after_existing_question_mark() {
        let builder = RequestBuilder::get("/x?fixed=1")
            .with_query_param("b", "2")
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(url_of(builder), "/x?fixed=1?b=2");
    }

    #[test]
    fn form_params_follow_query_rules() {
        let empty_key = RequestBuilder::post("/f").with_form_param("", "v");
        assert!(empty_key.is_err_and(|e| e.is_invalid_argument()));

        let builder = RequestBuilder::post("/f")
            .with_form_params([("user", "ada lovelace"), ("note", "")])
            .unwrap_or_else(|e| panic!("{e}"));
        let request = builder.build();
        assert_eq!(
            request.body().map(|b| &b[..]),
            Some(&b"user=ada%20lovelace"[..])
        );
    }
}
