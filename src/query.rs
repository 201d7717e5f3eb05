use crate::Uri;
use indexmap::IndexMap;

/// Query parameter helpers.
///
/// The query is treated as `application/x-www-form-urlencoded`: pairs are
/// separated by `'&'`, keys from values by `'='`, and both are
/// percent-decoded with `'+'` read as a space.
impl Uri {
    /// Returns the query parameters in order of first appearance.
    ///
    /// When a key occurs more than once, the last value wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Uri;
    ///
    /// let uri = Uri::parse("?lang=Rust&mascot=Ferris%20the%20crab&lang=C");
    /// let params = uri.parameters();
    ///
    /// assert_eq!(params["lang"], "C");
    /// assert_eq!(params["mascot"], "Ferris the crab");
    /// assert!(params.keys().eq(["lang", "mascot"]));
    /// ```
    #[must_use]
    pub fn parameters(&self) -> IndexMap<String, String> {
        form_urlencoded::parse(self.query_bytes())
            .into_owned()
            .collect()
    }

    /// Returns the value of the query parameter with the given key.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<String> {
        form_urlencoded::parse(self.query_bytes())
            .filter(|(k, _)| k == key)
            .last()
            .map(|(_, v)| v.into_owned())
    }

    /// Returns the value of the query parameter with the given key,
    /// or `default` if there is no such parameter.
    #[must_use]
    pub fn parameter_or(&self, key: &str, default: &str) -> String {
        self.parameter(key).unwrap_or_else(|| default.to_owned())
    }

    /// Creates a new `Uri` with the query parameter set to the given value.
    ///
    /// An existing parameter keeps its position; a new one is appended.
    /// The whole query is re-encoded in the process.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Uri;
    ///
    /// let uri = Uri::parse("http://example.com/?a=1&b=2");
    ///
    /// assert_eq!(uri.with_parameter("a", "x y").to_string(), "http://example.com/?a=x+y&b=2");
    /// assert_eq!(uri.with_parameter("c", "3").to_string(), "http://example.com/?a=1&b=2&c=3");
    /// ```
    #[must_use]
    pub fn with_parameter(&self, key: &str, value: &str) -> Uri {
        let mut params = self.parameters();
        params.insert(key.to_owned(), value.to_owned());

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish();
        self.with_query(Some(query.as_str()))
    }

    fn query_bytes(&self) -> &[u8] {
        self.query.as_deref().unwrap_or_default().as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use crate::Uri;

    #[test]
    fn missing_query_has_no_parameters() {
        let uri = Uri::parse("http://example.com/");
        assert!(uri.parameters().is_empty());
        assert_eq!(uri.parameter("a"), None);
        assert_eq!(uri.parameter_or("a", "fallback"), "fallback");
    }

    #[test]
    fn keys_without_values() {
        let uri = Uri::parse("?flag&k=");
        assert_eq!(uri.parameter("flag").as_deref(), Some(""));
        assert_eq!(uri.parameter("k").as_deref(), Some(""));
    }
}
