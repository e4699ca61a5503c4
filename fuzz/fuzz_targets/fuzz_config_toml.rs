#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and resolving a config file should never panic
        if let Ok((raw, _warnings)) =
            kirby_deploy::config::parse_with_warnings(content, Path::new("fuzz.toml"))
        {
            let _ = kirby_deploy::config::resolve(raw);
        }
    }
});
