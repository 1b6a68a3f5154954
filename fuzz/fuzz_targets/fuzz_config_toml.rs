#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz TOML config parsing - this should never panic
        if let Ok(config) = toml::from_str::<requirekit::Config>(content) {
            let _ = config.require.exclude_names();
            let _ = config.staticfiles.ignore_patterns();
            for (module, spec) in &config.require.standalone_modules {
                let _ = spec.entry_point(module);
                let _ = spec.output_path();
            }
        }
    }
});
