//! Property tests for compiler output parsing

use std::path::PathBuf;

use proptest::prelude::*;
use sasskit::OutputParser;

fn css_path() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.css"
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

    /// Only `Compiled X to Y.` lines contribute, in order
    #[test]
    fn parse_keeps_compiled_destinations_in_order(
        entries in prop::collection::vec((css_path(), any::<bool>()), 0..8),
        crlf in any::<bool>(),
    ) {
        let newline = if crlf { "\r\n" } else { "\n" };
        let mut output = String::new();
        let mut expected = Vec::new();
        for (path, compiled) in &entries {
            if *compiled {
                output.push_str(&format!("Compiled src/a.scss to {}.{}", path, newline));
                expected.push(PathBuf::from(path));
            } else {
                output.push_str(&format!("Deprecation warning in {}{}", path, newline));
            }
        }

        prop_assert_eq!(OutputParser::parse(&output), expected);
    }

    /// Arbitrary text without the marker yields nothing
    #[test]
    fn parse_ignores_noise(text in "[^C]*") {
        prop_assert!(OutputParser::parse(&text).is_empty());
    }
}
