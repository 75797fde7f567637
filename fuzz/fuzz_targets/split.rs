#![no_main]

use docookie::CookieJar;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Use `count()` to exhaust the iterator.
    let _ = docookie::Cookie::split_parse(data).count();
    let _ = CookieJar::parse_list(data).to_string();
});
