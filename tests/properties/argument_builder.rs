//! Property tests for argument building

use std::path::Path;

use proptest::prelude::*;
use sasskit::domain::ports::FileSystem;
use sasskit::{ArgumentBuilder, BuildMode, CompilerOptions, Invocation, SassError, TargetResolver};

/// Every path exists
struct Everything;

impl FileSystem for Everything {
    fn exists(&self, _path: &Path) -> bool {
        true
    }
}

fn flag() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "--error-css",
        "--quiet",
        "--style=expanded",
        "--style=compressed",
        "-s",
        "--source-map",
        "--no-source-map",
        "--charset",
        "--load-path=vendor",
    ])
    .prop_map(str::to_string)
}

fn mode() -> impl Strategy<Value = BuildMode> {
    prop_oneof![Just(BuildMode::Debug), Just(BuildMode::Release)]
}

fn is_style(arg: &str) -> bool {
    arg == "-s" || arg == "--style" || arg.starts_with("--style=")
}

fn is_source_map(arg: &str) -> bool {
    arg == "--source-map" || arg == "--no-source-map"
}

fn styles_only(flags: &[String]) -> CompilerOptions {
    CompilerOptions::default()
        .with_scoped_outputs(false)
        .with_arguments(flags.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

    /// A default is injected only when the user set none, so at most the
    /// user's own style/source-map flags plus one default appear
    #[test]
    fn style_and_source_map_defaults_never_override(
        flags in prop::collection::vec(flag(), 0..6),
        mode in mode(),
    ) {
        let options = styles_only(&flags);
        let targets = TargetResolver::resolve(&options);
        let built = ArgumentBuilder::new(&options, Everything)
            .with_build_mode(mode)
            .build(Invocation::Update, &targets, &[])
            .unwrap();

        let user_styles = flags.iter().filter(|f| is_style(f)).count();
        let styles = built.args.iter().filter(|a| is_style(a)).count();
        prop_assert_eq!(styles, user_styles.max(1));

        let user_maps = flags.iter().filter(|f| is_source_map(f)).count();
        let maps = built.args.iter().filter(|a| is_source_map(a)).count();
        prop_assert_eq!(maps, user_maps.max(1));

        prop_assert_eq!(built.args.last().map(String::as_str), Some("--update"));
    }

    /// Watch builds carry `--watch` exactly once, wherever the user put it
    #[test]
    fn watch_flag_appears_once(
        flags in prop::collection::vec(flag(), 0..4),
        user_watch in 0usize..3,
        mode in mode(),
    ) {
        let mut flags = flags;
        flags.extend(std::iter::repeat("--watch".to_string()).take(user_watch));
        let options = styles_only(&flags);
        let targets = TargetResolver::resolve(&options);

        let built = ArgumentBuilder::new(&options, Everything)
            .with_build_mode(mode)
            .build(Invocation::Watch, &targets, &[])
            .unwrap();

        prop_assert_eq!(built.args.iter().filter(|a| *a == "--watch").count(), 1);
        prop_assert_eq!(built.args[0].as_str(), "--watch");
        prop_assert!(!built.contains("--update"));
    }

    /// One-shot builds refuse `--watch` no matter where it comes from
    #[test]
    fn one_shot_rejects_watch(
        flags in prop::collection::vec(flag(), 0..4),
        from_config in any::<bool>(),
    ) {
        let mut config_flags = flags.clone();
        let mut extra = Vec::new();
        if from_config {
            config_flags.push("--watch".to_string());
        } else {
            extra.push("--watch".to_string());
        }
        let options = styles_only(&config_flags);
        let targets = TargetResolver::resolve(&options);

        let result = ArgumentBuilder::new(&options, Everything)
            .build(Invocation::Update, &targets, &extra);

        let rejected = matches!(
            result,
            Err(SassError::UnsupportedArgument { ref flag }) if flag == "--watch"
        );
        prop_assert!(rejected);
    }
}
