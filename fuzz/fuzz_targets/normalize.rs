#![no_main]
use lenient_uri::{remove_dot_segments, Uri};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let p = remove_dot_segments(data);
    assert_eq!(remove_dot_segments(&p), p);

    let u1 = Uri::parse(data).normalize();
    assert_eq!(u1.normalize(), u1);
});
