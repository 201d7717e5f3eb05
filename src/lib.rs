#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

//! A permissive URI reference parser and resolver following IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! Unlike a validating parser, nothing here ever fails: any string splits into
//! the five components of [Appendix B], with light normalization applied on
//! assignment. On top of that sit the reference resolution algorithms of
//! [Section 5], namely [`merge`], [`remove_dot_segments`] and
//! [`Uri::transform_reference`].
//!
//! [Appendix B]: https://datatracker.ietf.org/doc/html/rfc3986/#appendix-B
//! [Section 5]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5
//!
//! See the documentation of [`Uri`] for more details.
//!
//! # Feature flags
//!
//! All features are disabled by default.
//!
//! - `serde`: Enables [`serde`] support for [`Uri`], which is
//!   serialized as its recomposed string.
//!
//! [`serde`]: https://docs.rs/serde

pub mod component;

mod fmt;
mod normalize;
mod parser;
mod query;

pub mod resolve;

pub use parser::{parse, Components};
pub use resolve::{merge, remove_dot_segments};

use crate::{
    component::{Path, Scheme},
    resolve::Resolver,
};
use core::{convert::Infallible, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A [URI reference] split into its five components.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
///
/// Each component is either present or absent. An empty component is
/// always stored as absent, so it never shows up when recomposing.
/// On assignment:
///
/// - the scheme is lowercased;
/// - runs of `'/'` and `'\\'` in the path are collapsed into a single `'/'`,
///   and whitespace around the path is trimmed.
///
/// Other components are stored as given, without any decoding or validation.
///
/// A `Uri` is never modified in place through its public API.
/// The `with_*` methods each return a new `Uri` with one component replaced.
///
/// # Examples
///
/// ```
/// use lenient_uri::Uri;
///
/// let uri = Uri::parse("https://example.org/some/path/?some[]=value#key1&key2=val2&key3");
///
/// assert_eq!(uri.scheme().unwrap().as_str(), "https");
/// assert_eq!(uri.authority(), Some("example.org"));
/// assert_eq!(uri.path().unwrap().as_str(), "/some/path/");
/// assert_eq!(uri.query(), Some("some[]=value"));
/// assert_eq!(uri.fragment(), Some("key1&key2=val2&key3"));
///
/// assert_eq!(uri.to_string(), "https://example.org/some/path/?some[]=value#key1&key2=val2&key3");
/// ```
///
/// Parsing is lenient and never fails:
///
/// ```
/// use lenient_uri::Uri;
///
/// let uri = Uri::parse("D:\\var\\www\\index.php");
/// assert_eq!(uri.to_string(), "d:/var/www/index.php");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: Option<String>,
    authority: Option<String>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

/// Maps an empty string to `None`.
fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_owned)
}

impl Uri {
    /// Creates an empty `Uri`, with every component absent.
    #[inline]
    #[must_use]
    pub fn new() -> Uri {
        Uri::default()
    }

    /// Parses a URI reference from a string.
    ///
    /// This never fails. See [`parse`](crate::parse) for how the string
    /// is split into components.
    #[must_use]
    pub fn parse(s: &str) -> Uri {
        let c = parser::parse(s);
        let mut uri = Uri::new();
        uri.set_scheme(c.scheme);
        uri.set_authority(c.authority);
        uri.set_path(c.path);
        uri.set_query(c.query);
        uri.set_fragment(c.fragment);
        uri
    }

    /// Parses a URI reference from a string, optionally [normalizing](Self::normalize) it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Uri;
    ///
    /// assert_eq!(Uri::get("/a/./b/../c", false).to_string(), "/a/./b/../c");
    /// assert_eq!(Uri::get("/a/./b/../c", true).to_string(), "/a/c");
    /// ```
    #[must_use]
    pub fn get(s: &str, normalize: bool) -> Uri {
        let uri = Uri::parse(s);
        if normalize {
            uri.normalize()
        } else {
            uri
        }
    }

    /// Returns the [scheme] component.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&Scheme> {
        self.scheme.as_deref().map(Scheme::new_validated)
    }

    /// Returns the [authority] component.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// Returns the [path] component.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref().map(Path::new_validated)
    }

    /// Returns the [query] component.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.4
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the [fragment] component.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.5
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Creates a new `Uri` with the scheme replaced.
    ///
    /// The scheme is lowercased. `None` and the empty string remove it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Uri;
    ///
    /// let uri = Uri::new().with_scheme(Some("HTTP"));
    /// assert_eq!(uri.to_string(), "http:");
    /// assert_eq!(uri.with_scheme(None).to_string(), "");
    /// ```
    #[must_use]
    pub fn with_scheme(&self, scheme: Option<&str>) -> Uri {
        let mut uri = self.clone();
        uri.set_scheme(scheme);
        uri
    }

    /// Creates a new `Uri` with the authority replaced.
    ///
    /// `None` and the empty string remove it.
    #[must_use]
    pub fn with_authority(&self, authority: Option<&str>) -> Uri {
        let mut uri = self.clone();
        uri.set_authority(authority);
        uri
    }

    /// Creates a new `Uri` with the path replaced.
    ///
    /// Runs of `'/'` and `'\\'` are collapsed into a single `'/'` and
    /// surrounding whitespace is trimmed. A path that ends up empty is removed.
    /// Dot segments are kept; use [`normalize`](Self::normalize) to remove them.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Uri;
    ///
    /// assert_eq!(Uri::new().with_path(Some("some/../other")).to_string(), "some/../other");
    /// assert_eq!(Uri::new().with_path(Some("\\\\a//b")).to_string(), "/a/b");
    /// ```
    #[must_use]
    pub fn with_path(&self, path: Option<&str>) -> Uri {
        let mut uri = self.clone();
        uri.set_path(path);
        uri
    }

    /// Creates a new `Uri` with the query replaced.
    ///
    /// `None` and the empty string remove it.
    #[must_use]
    pub fn with_query(&self, query: Option<&str>) -> Uri {
        let mut uri = self.clone();
        uri.set_query(query);
        uri
    }

    /// Creates a new `Uri` with the fragment replaced.
    ///
    /// `None` and the empty string remove it.
    #[must_use]
    pub fn with_fragment(&self, fragment: Option<&str>) -> Uri {
        let mut uri = self.clone();
        uri.set_fragment(fragment);
        uri
    }

    /// Resolves a URI reference against this `Uri` as base.
    ///
    /// This implements the "transform references" algorithm from
    /// [Section 5.2.2 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.2).
    /// A string reference is parsed first.
    ///
    /// When `strict` is `false`, a reference with the same scheme as the base
    /// is treated as if it had no scheme. For full configuration, use a
    /// [`Resolver`] directly.
    ///
    /// No check is made that the base is absolute or has no fragment, and
    /// a base with no `'/'` in its path is simply concatenated with a
    /// relative path (see [`merge`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Uri;
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q");
    ///
    /// assert_eq!(base.transform_reference("g", false).to_string(), "http://a/b/c/g");
    /// assert_eq!(base.transform_reference("../../g", false).to_string(), "http://a/g");
    /// assert_eq!(base.transform_reference("#s", false).to_string(), "http://a/b/c/d;p?q#s");
    ///
    /// let r = Uri::parse("//g");
    /// assert_eq!(base.transform_reference(&r, false).to_string(), "http://g");
    /// ```
    #[must_use]
    pub fn transform_reference(&self, relative: impl Into<Uri>, strict: bool) -> Uri {
        Resolver::with_base(self).strict(strict).resolve(relative)
    }

    /// Normalizes the path of this `Uri`.
    ///
    /// Runs of `'/'` and `'\\'` are collapsed into a single `'/'`, and then
    /// dot segments are removed with [`remove_dot_segments`].
    /// Other components are left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Uri;
    ///
    /// let uri = Uri::parse("http://example.com/a/./b/../../c//d?x=./y");
    /// assert_eq!(uri.normalize().to_string(), "http://example.com/c/d?x=./y");
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Uri {
        normalize::normalize(self)
    }

    /// Recomposes the components into a URI reference string.
    ///
    /// This follows [Section 5.3 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.3),
    /// skipping every absent component. Nothing is percent-encoded.
    /// The [`Display`](core::fmt::Display) implementation writes the same string.
    #[must_use]
    pub fn build(&self) -> String {
        let mut len = 0;
        if let Some(scheme) = &self.scheme {
            len += scheme.len() + 1;
        }
        if let Some(authority) = &self.authority {
            len += authority.len() + 2;
        }
        if let Some(path) = &self.path {
            len += path.len();
        }
        if let Some(query) = &self.query {
            len += query.len() + 1;
        }
        if let Some(fragment) = &self.fragment {
            len += fragment.len() + 1;
        }

        let mut buf = String::with_capacity(len);
        if let Some(scheme) = &self.scheme {
            buf.push_str(scheme);
            buf.push(':');
        }
        if let Some(authority) = &self.authority {
            buf.push_str("//");
            buf.push_str(authority);
        }
        if let Some(path) = &self.path {
            buf.push_str(path);
        }
        if let Some(query) = &self.query {
            buf.push('?');
            buf.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            buf.push('#');
            buf.push_str(fragment);
        }

        debug_assert_eq!(buf.len(), len);
        buf
    }

    pub(crate) fn set_scheme(&mut self, scheme: Option<&str>) {
        self.scheme = non_empty(scheme).map(|mut s| {
            s.make_ascii_lowercase();
            s
        });
    }

    pub(crate) fn set_authority(&mut self, authority: Option<&str>) {
        self.authority = non_empty(authority);
    }

    pub(crate) fn set_path(&mut self, path: Option<&str>) {
        self.path = path.and_then(normalize::normalize_path);
    }

    pub(crate) fn set_query(&mut self, query: Option<&str>) {
        self.query = non_empty(query);
    }

    pub(crate) fn set_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = non_empty(fragment);
    }
}

impl From<&str> for Uri {
    /// Equivalent to [`parse`](Self::parse).
    #[inline]
    fn from(value: &str) -> Self {
        Uri::parse(value)
    }
}

impl From<&String> for Uri {
    /// Equivalent to [`parse`](Self::parse).
    #[inline]
    fn from(value: &String) -> Self {
        Uri::parse(value)
    }
}

impl From<String> for Uri {
    /// Equivalent to [`parse`](Self::parse).
    #[inline]
    fn from(value: String) -> Self {
        Uri::parse(&value)
    }
}

impl From<&Uri> for Uri {
    /// Equivalent to [`clone`](Clone::clone).
    #[inline]
    fn from(value: &Uri) -> Self {
        value.clone()
    }
}

impl From<Uri> for String {
    /// Equivalent to [`build`](Uri::build).
    #[inline]
    fn from(value: Uri) -> String {
        value.build()
    }
}

impl FromStr for Uri {
    type Err = Infallible;

    /// Equivalent to [`parse`](Self::parse).
    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Uri::parse(s))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.build())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Uri::parse(&s))
    }
}
