use lenient_uri::Uri;

#[test]
fn parameters() {
    let uri = Uri::parse("http://example.com/?a=1&b=two+words&c=%E2%9C%93&a=3");
    let params = uri.parameters();

    assert!(params.keys().eq(["a", "b", "c"]));
    assert_eq!(params["a"], "3");
    assert_eq!(params["b"], "two words");
    assert_eq!(params["c"], "\u{2713}");

    assert_eq!(uri.parameter("a").as_deref(), Some("3"));
    assert_eq!(uri.parameter("missing"), None);
    assert_eq!(uri.parameter_or("b", "default"), "two words");
    assert_eq!(uri.parameter_or("missing", "default"), "default");
}

#[test]
fn parameters_are_raw_query_based() {
    // The fragment is never consulted.
    let uri = Uri::parse("/p#a=1");
    assert!(uri.parameters().is_empty());

    let uri = Uri::parse("?some[]=value");
    assert_eq!(uri.parameter("some[]").as_deref(), Some("value"));
}

#[test]
fn with_parameter() {
    let uri = Uri::parse("http://example.com/path?a=1&b=2#frag");

    let changed = uri.with_parameter("b", "x");
    assert_eq!(changed.to_string(), "http://example.com/path?a=1&b=x#frag");

    let added = uri.with_parameter("c", "a b&c");
    assert_eq!(
        added.to_string(),
        "http://example.com/path?a=1&b=2&c=a+b%26c#frag"
    );
    assert_eq!(added.parameter("c").as_deref(), Some("a b&c"));

    // The receiver is left untouched.
    assert_eq!(uri.to_string(), "http://example.com/path?a=1&b=2#frag");
}

#[test]
fn with_parameter_without_query() {
    let uri = Uri::parse("http://example.com/");
    assert_eq!(
        uri.with_parameter("k", "v").to_string(),
        "http://example.com/?k=v"
    );

    let uri = Uri::new().with_parameter("key[]", "val");
    assert_eq!(uri.query(), Some("key%5B%5D=val"));
    assert_eq!(uri.parameter("key[]").as_deref(), Some("val"));
}

#[test]
fn with_parameter_reencodes_query() {
    let uri = Uri::parse("?x=%41&y=a%20b");
    assert_eq!(uri.with_parameter("z", "1").query(), Some("x=A&y=a+b&z=1"));
}
