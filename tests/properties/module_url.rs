//! Property tests for module URL resolution.

use proptest::prelude::*;

use requirekit::domain::value_objects::module_url::{normalize, resolve_require_module};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just(String::new()),
        proptest::string::string_regex("[A-Za-z0-9_-]{1,8}").unwrap(),
    ]
}

fn slash_path() -> impl Strategy<Value = String> {
    (any::<bool>(), proptest::collection::vec(segment(), 0..8)).prop_map(|(absolute, parts)| {
        let joined = parts.join("/");
        if absolute {
            format!("/{}", joined)
        } else {
            joined
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,256}") {
        let _ = normalize(&s);
        let _ = resolve_require_module("js", &s);
    }

    /// PROPERTY: normalizing twice changes nothing.
    #[test]
    fn property_normalize_is_idempotent(path in slash_path()) {
        let once = normalize(&path);
        prop_assert_eq!(normalize(&once), once);
    }

    /// PROPERTY: normalized paths carry no `.` or empty segments.
    #[test]
    fn property_normalize_is_canonical(path in slash_path()) {
        let normalized = normalize(&path);
        if normalized != "." && normalized != "/" {
            let body = normalized.trim_start_matches('/');
            for part in body.split('/') {
                prop_assert!(!part.is_empty() && part != ".", "{:?} -> {:?}", path, normalized);
            }
        }
    }

    /// PROPERTY: resolved module names always name a `.js` file under the
    /// base URL.
    #[test]
    fn property_resolved_module_is_js(
        base in "[a-z]{1,6}(/[a-z]{1,6}){0,2}",
        name in "[a-z]{1,6}(/[a-z]{1,6}){0,2}(\\.[a-z]{1,3})?",
    ) {
        let resolved = resolve_require_module(&base, &name);
        prop_assert!(resolved.to_ascii_lowercase().ends_with(".js"), "{}", resolved);
        let prefix = format!("{}/", base);
        prop_assert!(resolved.starts_with(&prefix), "{}", resolved);
    }
}
