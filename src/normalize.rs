//! Module for normalization.

use crate::{resolve::remove_dot_segments, Uri};
use std::borrow::Cow;
use tracing::trace;

/// Characters trimmed from both ends of a path when it is set.
const PATH_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Collapses every run of `'/'` and `'\\'` into a single `'/'`.
pub(crate) fn collapse_separators(path: &str) -> Cow<'_, str> {
    let needs_work = path.contains('\\') || path.contains("//");
    if !needs_work {
        return Cow::Borrowed(path);
    }

    let mut buf = String::with_capacity(path.len());
    let mut prev_sep = false;
    for c in path.chars() {
        if is_separator(c) {
            if !prev_sep {
                buf.push('/');
            }
            prev_sep = true;
        } else {
            buf.push(c);
            prev_sep = false;
        }
    }
    Cow::Owned(buf)
}

/// Applies the path rules used on assignment: separators collapsed,
/// surrounding whitespace trimmed, and an empty result made absent.
pub(crate) fn normalize_path(path: &str) -> Option<String> {
    let path = collapse_separators(path);
    let path = path.trim_matches(PATH_TRIM);
    (!path.is_empty()).then(|| path.to_owned())
}

pub(crate) fn normalize(uri: &Uri) -> Uri {
    let path = uri.path.as_deref().unwrap_or_default();
    let normalized = remove_dot_segments(&collapse_separators(path));
    trace!(path, normalized = %normalized, "normalized path");
    uri.with_path(Some(normalized.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse() {
        assert!(matches!(collapse_separators("/a/b"), Cow::Borrowed("/a/b")));
        assert_eq!(collapse_separators("//a///b"), "/a/b");
        assert_eq!(collapse_separators("\\\\srv\\share/\\x"), "/srv/share/x");
        assert_eq!(collapse_separators(""), "");
    }

    #[test]
    fn path_on_assignment() {
        assert_eq!(normalize_path(""), None);
        assert_eq!(normalize_path(" \t\r\n"), None);
        assert_eq!(normalize_path("  /x/  "), Some("/x/".to_owned()));
        assert_eq!(normalize_path("\\var\\www"), Some("/var/www".to_owned()));
        // Only the ASCII whitespace set is trimmed.
        assert_eq!(normalize_path("\u{a0}a"), Some("\u{a0}a".to_owned()));
    }
}
