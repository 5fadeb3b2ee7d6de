//! Request URL construction.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use octoforge_model::Credentials;

/// Characters escaped in query parameter values: everything except
/// unreserved characters.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Builds fully qualified request URLs from resource paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl {
    base: String,
}

impl ApiUrl {
    /// Create a builder over the given API base. A trailing slash is added
    /// when missing.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    /// The API base, with trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Join a resource path onto the base, appending `login`/`token` query
    /// parameters when credentials are present.
    #[must_use]
    pub fn join(&self, path: &str, credentials: Option<&Credentials>) -> String {
        let mut url = format!("{}{}", self.base, path);
        if let Some(creds) = credentials {
            let separator = if url.contains('?') { '&' } else { '?' };
            url.push(separator);
            url.push_str("login=");
            url.extend(utf8_percent_encode(&creds.login, QUERY_VALUE));
            url.push_str("&token=");
            url.extend(utf8_percent_encode(&creds.token, QUERY_VALUE));
        }
        url
    }
}

/// Escape a free-form search term for use as a path segment, form-style
/// (spaces become `+`).
#[must_use]
pub fn escape_term(term: &str) -> String {
    form_urlencoded::byte_serialize(term.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_join_without_credentials() {
        let api = ApiUrl::new("http://github.com/api/v2/xml");
        assert_eq!(api.base(), "http://github.com/api/v2/xml/");
        assert_eq!(
            api.join("user/show/defunkt", None),
            "http://github.com/api/v2/xml/user/show/defunkt"
        );
    }

    #[test]
    fn test_should_append_escaped_credentials() {
        let api = ApiUrl::new("http://github.com/api/v2/xml/");
        let creds = Credentials::new("def unkt", "tok/en");
        assert_eq!(
            api.join("user/keys", Some(&creds)),
            "http://github.com/api/v2/xml/user/keys?login=def%20unkt&token=tok%2Fen"
        );
    }

    #[test]
    fn test_should_use_ampersand_when_path_has_query() {
        let api = ApiUrl::new("http://github.com/api/v2/xml/");
        let creds = Credentials::new("defunkt", "secret");
        let url = api.join("repos/search/rails?language=Ruby", Some(&creds));
        assert_eq!(
            url,
            "http://github.com/api/v2/xml/repos/search/rails?language=Ruby&login=defunkt&token=secret"
        );
    }

    #[test]
    fn test_should_plus_escape_search_terms() {
        assert_eq!(escape_term("merge train"), "merge+train");
        assert_eq!(escape_term("c++"), "c%2B%2B");
    }
}
