#![no_main]

use libfuzzer_sys::fuzz_target;
use sasskit::config::{CompilerOptions, ConfigLayer};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any layer that parses must apply without panicking
        if let Ok(layer) = serde_json::from_str::<ConfigLayer>(content) {
            let mut options = CompilerOptions::default();
            layer.apply_to(&mut options);
            let _ = sasskit::TargetResolver::resolve(&options);
        }
    }
});
