#![no_main]

use docookie::Cookie;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(cookie) = Cookie::parse(data) {
        assert!(Cookie::parse(&cookie.to_string()).is_ok());
    }
});
