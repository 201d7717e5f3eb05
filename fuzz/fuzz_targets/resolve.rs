#![no_main]
use lenient_uri::Uri;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str, bool)| {
    let (base, r, strict) = data;
    let base = Uri::parse(base);
    let r = Uri::parse(r);

    let t = base.transform_reference(&r, strict);

    assert_eq!(t.fragment(), r.fragment());
    if r.scheme().is_none() {
        assert_eq!(t.scheme(), base.scheme());
    }
    if r.scheme().is_none() && r.authority().is_none() {
        assert_eq!(t.authority(), base.authority());
    }
});
