use regex::Regex;
use std::sync::LazyLock;

/// The regular expression from [Appendix B of RFC 3986] for breaking a
/// URI reference down into its components.
///
/// The `s` flag lets `.` match line terminators so that the pattern
/// matches every input, including ones containing newlines.
///
/// [Appendix B of RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/#appendix-B
static URI_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?$")
        .expect("URI reference pattern is valid")
});

/// The five components of a URI reference, borrowed from the input string.
///
/// A component is `None` when its delimiter did not occur in the input,
/// and `Some("")` when the delimiter occurred with nothing after it.
/// No normalization is applied here; see [`Uri`] for that.
///
/// [`Uri`]: crate::Uri
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Components<'a> {
    /// The scheme, without the trailing `':'`.
    pub scheme: Option<&'a str>,
    /// The authority, without the leading `"//"`.
    pub authority: Option<&'a str>,
    /// The path. Always `Some`, as the path may be empty but never missing.
    pub path: Option<&'a str>,
    /// The query, without the leading `'?'`.
    pub query: Option<&'a str>,
    /// The fragment, without the leading `'#'`.
    pub fragment: Option<&'a str>,
}

/// Splits a string into its five URI components.
///
/// This never fails: every part of the pattern is optional, so any input
/// yields some (possibly mostly empty) set of components.
///
/// # Examples
///
/// ```
/// use lenient_uri::parse;
///
/// let c = parse("http://example.com/over/there?name=ferret#nose");
/// assert_eq!(c.scheme, Some("http"));
/// assert_eq!(c.authority, Some("example.com"));
/// assert_eq!(c.path, Some("/over/there"));
/// assert_eq!(c.query, Some("name=ferret"));
/// assert_eq!(c.fragment, Some("nose"));
///
/// let c = parse("");
/// assert_eq!(c.scheme, None);
/// assert_eq!(c.path, Some(""));
/// ```
pub fn parse(s: &str) -> Components<'_> {
    let caps = URI_REFERENCE
        .captures(s)
        .expect("URI reference pattern matches every input");
    let group = |i| caps.get(i).map(|m| m.as_str());

    Components {
        scheme: group(2),
        authority: group(4),
        path: group(5),
        query: group(7),
        fragment: group(9),
    }
}
