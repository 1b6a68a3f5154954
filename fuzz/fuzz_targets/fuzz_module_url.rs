#![no_main]

use libfuzzer_sys::fuzz_target;
use requirekit::domain::value_objects::module_url;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (base, name) = s.split_once('\n').unwrap_or(("js", s));
        let _ = module_url::normalize(s);
        let _ = module_url::resolve_require_url(base, name);
        let _ = module_url::resolve_require_module(base, name);
    }
});
