//! Module for reference resolution.

use crate::Uri;
use tracing::trace;

/// A configurable URI reference resolver against a fixed base.
///
/// # Examples
///
/// ```
/// use lenient_uri::{resolve::Resolver, Uri};
///
/// let base = Uri::parse("http://example.com/foo/bar");
/// let resolver = Resolver::with_base(&base);
///
/// assert_eq!(resolver.resolve("baz").to_string(), "http://example.com/foo/baz");
/// assert_eq!(resolver.resolve("../baz").to_string(), "http://example.com/baz");
/// assert_eq!(resolver.resolve("?baz").to_string(), "http://example.com/foo/bar?baz");
/// ```
#[derive(Clone, Copy, Debug)]
#[must_use]
pub struct Resolver<'a> {
    base: &'a Uri,
    strict: bool,
}

impl<'a> Resolver<'a> {
    /// Creates a new `Resolver` with the given base.
    pub fn with_base(base: &'a Uri) -> Self {
        Self {
            base,
            strict: false,
        }
    }

    /// Sets whether the resolver is strict.
    ///
    /// This defaults to `false`, in which case a reference whose scheme equals
    /// the base scheme is treated as if it had no scheme, for backward
    /// compatibility with non-strict parsers as permitted by
    /// [Section 5.2.2 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.2).
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::{resolve::Resolver, Uri};
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q");
    ///
    /// let resolver = Resolver::with_base(&base);
    /// assert_eq!(resolver.resolve("http:g").to_string(), "http://a/b/c/g");
    ///
    /// let resolver = resolver.strict(true);
    /// assert_eq!(resolver.resolve("http:g").to_string(), "http:g");
    /// ```
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    /// Resolves the given reference against the configured base.
    ///
    /// A string reference is parsed first; a [`Uri`] is used as is.
    /// See [`Uri::transform_reference`] for the exact behavior of this method.
    pub fn resolve(&self, reference: impl Into<Uri>) -> Uri {
        resolve(self.base, reference.into(), self.strict)
    }
}

pub(crate) fn resolve(base: &Uri, mut r: Uri, strict: bool) -> Uri {
    trace!(base = %base, reference = %r, strict, "transforming reference");

    if !strict && r.scheme() == base.scheme() {
        r.scheme = None;
    }

    let branch;
    let (t_scheme, t_authority, t_path, t_query, t_fragment);

    if r.scheme.is_some() {
        branch = "scheme";
        t_scheme = r.scheme;
        t_authority = r.authority;
        t_path = remove_dot_segments(r.path.as_deref().unwrap_or_default());
        t_query = r.query;
    } else {
        if r.authority.is_some() {
            branch = "authority";
            t_authority = r.authority;
            t_path = remove_dot_segments(r.path.as_deref().unwrap_or_default());
            t_query = r.query;
        } else {
            if r.path.is_none() {
                branch = "empty-path";
                t_path = base.path.clone().unwrap_or_default();
                if r.query.is_some() {
                    t_query = r.query;
                } else {
                    t_query = base.query.clone();
                }
            } else {
                let r_path = r.path.as_deref().unwrap_or_default();
                if r_path.starts_with('/') {
                    branch = "absolute-path";
                    t_path = remove_dot_segments(r_path);
                } else {
                    branch = "relative-path";
                    let base_path = base.path.as_deref().unwrap_or_default();
                    t_path = remove_dot_segments(&merge(base_path, r_path));
                }
                t_query = r.query;
            }
            t_authority = base.authority.clone();
        }
        t_scheme = base.scheme.clone();
    }
    t_fragment = r.fragment;

    let mut t = Uri {
        scheme: t_scheme,
        authority: t_authority,
        path: None,
        query: t_query,
        fragment: t_fragment,
    };
    t.set_path(Some(t_path.as_str()));

    trace!(branch, result = %t, "transformed reference");
    t
}

/// Merges a relative-path reference with the path of the base URI.
///
/// This implements the "merge" routine from
/// [Section 5.2.3 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.3):
/// everything after the last `'/'` of the base path is dropped and the
/// relative path is appended.
///
/// A base path with no `'/'` at all is kept whole, so the two paths are
/// simply concatenated.
///
/// # Examples
///
/// ```
/// use lenient_uri::merge;
///
/// assert_eq!(merge("/b/c/d;p", "g"), "/b/c/g");
/// assert_eq!(merge("/b/c/", "../g"), "/b/c/../g");
/// assert_eq!(merge("abc", "g"), "abcg");
/// ```
#[must_use]
pub fn merge(base: &str, relative: &str) -> String {
    let base = match base.rfind('/') {
        Some(i) => &base[..=i],
        None => base,
    };

    let mut buf = String::with_capacity(base.len() + relative.len());
    buf.push_str(base);
    buf.push_str(relative);
    buf
}

/// Removes `"."` and `".."` segments from a path.
///
/// This implements the "remove_dot_segments" routine from
/// [Section 5.2.4 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4).
/// A `".."` that would climb above the root is dropped.
///
/// # Examples
///
/// ```
/// use lenient_uri::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments("/../g"), "/g");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while input.contains("./") || input.contains("/.") || input == "." || input == ".." {
        if let Some(rem) = input.strip_prefix("../") {
            input = rem;
        } else if let Some(rem) = input.strip_prefix("./") {
            input = rem;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            // The first segment runs up to the next '/' after the first character.
            let end = input.as_bytes()[1..]
                .iter()
                .position(|&x| x == b'/')
                .map_or(input.len(), |i| i + 1);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }

    output.push_str(input);
    output
}

/// Removes the last segment and its preceding `'/'`, if any, from the buffer.
fn pop_segment(buf: &mut String) {
    buf.truncate(buf.rfind('/').unwrap_or(0));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_segments() {
        assert_eq!(remove_dot_segments(""), "");
        assert_eq!(remove_dot_segments("."), "");
        assert_eq!(remove_dot_segments(".."), "");
        assert_eq!(remove_dot_segments("/."), "/");
        assert_eq!(remove_dot_segments("/.."), "/");
        assert_eq!(remove_dot_segments("./a/./b/."), "a/b/");
        assert_eq!(remove_dot_segments("../a"), "a");
        assert_eq!(remove_dot_segments("some/."), "some/");
        assert_eq!(remove_dot_segments("a./b"), "a./b");
        assert_eq!(remove_dot_segments("/a//b/../c"), "/a//c");
        assert_eq!(remove_dot_segments("/b/c/.g"), "/b/c/.g");
        assert_eq!(remove_dot_segments("/b/c/..g"), "/b/c/..g");
    }

    #[test]
    fn dot_segments_underflow() {
        // The output has no '/' left to trim back to, so it is emptied.
        assert_eq!(remove_dot_segments("some/../other"), "/other");
        assert_eq!(remove_dot_segments("some/.."), "/");
        assert_eq!(remove_dot_segments("a/b/../../.."), "/");
        assert_eq!(remove_dot_segments("/b/c/../../../../g"), "/g");
    }

    #[test]
    fn dot_segments_non_ascii() {
        assert_eq!(remove_dot_segments("/é/./ü/../ß"), "/é/ß");
        assert_eq!(remove_dot_segments("é/../ß"), "/ß");
    }

    #[test]
    fn dot_segments_idempotent() {
        for p in [
            "",
            ".",
            "..",
            "/./",
            "/../",
            "a/b/../c/./d",
            "../../x/../y",
            "/a/./b/../../c/",
            "..//g",
            ".a/..b/.../",
        ] {
            let once = remove_dot_segments(p);
            assert_eq!(remove_dot_segments(&once), once, "input: {p:?}");
        }
    }

    #[test]
    fn merge_paths() {
        assert_eq!(merge("/b/c/d;p", "g"), "/b/c/g");
        assert_eq!(merge("/b/c/", "g"), "/b/c/g");
        assert_eq!(merge("/", "g"), "/g");
        assert_eq!(merge("", "g"), "g");
        assert_eq!(merge("abc", "g"), "abcg");
    }
}
