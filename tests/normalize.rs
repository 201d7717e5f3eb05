use lenient_uri::{component::Path, remove_dot_segments, Uri};

#[test]
fn normalize() {
    let r = Uri::parse("http://a/b/c/./../../g");
    assert_eq!(r.normalize().to_string(), "http://a/g");

    let r = Uri::parse("mid/content=5/../6");
    assert_eq!(r.normalize().to_string(), "mid/6");

    // The first segment is removed along with what climbs above it.
    let r = Uri::new().with_path(Some("some/../other"));
    assert_eq!(r.normalize().path().map(Path::as_str), Some("/other"));

    let r = Uri::new().with_path(Some("some/."));
    assert_eq!(r.normalize().to_string(), "some/");

    // Paths reduced to nothing become absent.
    for p in [".", "..", "./", "../"] {
        let r = Uri::new().with_path(Some(p));
        assert_eq!(r.normalize().path(), None, "path: {p:?}");
    }
}

#[test]
fn normalize_only_touches_path() {
    let r = Uri::parse("HTTP://Example.COM/a/../b?x=/./y#/../z");
    assert_eq!(r.normalize().to_string(), "http://Example.COM/b?x=/./y#/../z");

    let r = Uri::parse("http://example.com?q");
    assert_eq!(r.normalize(), r);
}

#[test]
fn normalize_collapses_separators_first() {
    let r = Uri::new().with_path(Some("..//g"));
    assert_eq!(r.normalize().to_string(), "g");

    let r = Uri::parse("file:///C:\\dir\\..\\file.txt");
    assert_eq!(r.normalize().to_string(), "file:/C:/file.txt");
}

#[test]
fn normalize_idempotent() {
    for s in [
        "",
        "/",
        "http://a/b/c/./../../g",
        "a/b/../../..",
        "./a/./b/.",
        "/..",
        "../../x/../y",
    ] {
        let once = Uri::parse(s).normalize();
        assert_eq!(once.normalize(), once, "input: {s:?}");

        let p = remove_dot_segments(s);
        assert_eq!(remove_dot_segments(&p), p, "input: {s:?}");
    }
}

#[test]
fn get() {
    let s = "http://example.com/a/./b/../c";
    assert_eq!(Uri::get(s, false), Uri::parse(s));
    assert_eq!(Uri::get(s, true), Uri::parse(s).normalize());
    assert_eq!(Uri::get(s, true).to_string(), "http://example.com/a/c");
}
