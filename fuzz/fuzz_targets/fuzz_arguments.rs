#![no_main]

use libfuzzer_sys::fuzz_target;
use sasskit::{ArgumentBuilder, BuildMode, CompilerOptions, Invocation, TargetResolver};
use sasskit::infrastructure::LocalFs;

fuzz_target!(|data: &[u8]| {
    if let Ok(arguments) = std::str::from_utf8(data) {
        let options = CompilerOptions::default().with_arguments(arguments);
        let targets = TargetResolver::resolve(&options);
        let builder = ArgumentBuilder::new(&options, LocalFs::new()).with_build_mode(BuildMode::Debug);

        if let Ok(built) = builder.build(Invocation::Watch, &targets, &[]) {
            assert_eq!(built.args.iter().filter(|a| *a == "--watch").count(), 1);
            assert!(!built.contains("--interactive"));
        }
    }
});
