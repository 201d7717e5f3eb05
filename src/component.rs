//! URI components.

use ref_cast::{ref_cast_custom, RefCastCustom};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. A scheme stored in a [`Uri`]
/// is always lowercase, so this only matters for schemes created with
/// [`Scheme::new`].
///
/// # Examples
///
/// ```
/// use lenient_uri::{component::Scheme, Uri};
///
/// let uri = Uri::parse("HTTP://EXAMPLE.COM/");
/// let scheme = uri.scheme().unwrap();
///
/// assert_eq!(scheme, Scheme::new("Http"));
/// assert_eq!(scheme.as_str(), "http");
/// ```
///
/// [`Uri`]: crate::Uri
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// No validation is performed.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> &Scheme {
        Scheme::new_validated(s)
    }

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

/// A [path] component.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(path: &str) -> &Path;

    /// Returns the path component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the path is absolute, i.e., starting with `'/'`.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Checks whether the path is rootless, i.e., not starting with `'/'`.
    #[inline]
    #[must_use]
    pub fn is_rootless(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns an iterator over the [segments] of the path.
    ///
    /// [segments]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::Uri;
    ///
    /// let uri = Uri::parse("a/b/c");
    /// assert!(uri.path().unwrap().segments().eq(["a", "b", "c"]));
    ///
    /// // The empty string before a leading "/" is not a segment.
    /// let uri = Uri::parse("/path/to/dir/");
    /// assert!(uri.path().unwrap().segments().eq(["path", "to", "dir", ""]));
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        let path = self.inner.strip_prefix('/').unwrap_or(&self.inner);
        path.split('/')
    }
}

impl PartialEq for Path {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Path {}
