#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let output = String::from_utf8_lossy(data);
    for file in sasskit::OutputParser::parse_compiled(&output) {
        assert!(!file.destination.as_os_str().is_empty());
    }
});
