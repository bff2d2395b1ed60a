//! Property tests for target resolution

use std::collections::HashSet;

use proptest::prelude::*;
use sasskit::{CompilationTarget, CompilerOptions, TargetResolver};

fn folder() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Styles", "Views", "Pages", "Shared", "Components", "Admin", "Theme",
    ])
    .prop_map(str::to_string)
}

fn explicit_list() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((folder(), "[a-z]{1,6}/css"), 0..5)
}

fn options_from(
    explicit: &[(String, String)],
    scoped: bool,
    scoped_names: &[String],
) -> CompilerOptions {
    let mut options = CompilerOptions::default()
        .with_scoped_outputs(scoped)
        .with_scoped_folders(scoped_names.iter().cloned());
    for (source, target) in explicit {
        options = options.with_compilation(CompilationTarget::new(source, target));
    }
    options
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

    /// Scoped folders never duplicate a source that is already targeted
    #[test]
    fn scoped_folders_are_deduplicated(
        explicit in explicit_list(),
        scoped_names in prop::collection::vec(folder(), 0..6),
    ) {
        let options = options_from(&explicit, true, &scoped_names);
        let set = TargetResolver::resolve(&options);

        let mut claimed: HashSet<String> = HashSet::new();
        claimed.insert("Styles".to_string());
        claimed.extend(explicit.iter().map(|(s, _)| s.clone()));

        let scoped: Vec<_> = set.iter().skip(1 + explicit.len()).collect();
        let mut seen = HashSet::new();
        for target in &scoped {
            prop_assert!(!claimed.contains(&target.source));
            prop_assert!(seen.insert(target.source.clone()));
            prop_assert!(target.is_in_place());
            prop_assert!(target.optional);
        }
    }

    /// Default pair first, then explicit pairs in configured order
    #[test]
    fn resolution_order_is_stable(explicit in explicit_list(), scoped in any::<bool>()) {
        let options = options_from(&explicit, scoped, &[]);
        let set = TargetResolver::resolve(&options);

        prop_assert_eq!(set.as_slice()[0].source.as_str(), "Styles");
        for (resolved, (source, target)) in set.iter().skip(1).zip(&explicit) {
            prop_assert_eq!(&resolved.source, source);
            prop_assert_eq!(&resolved.target, target);
            prop_assert!(!resolved.optional);
        }
        prop_assert_eq!(set.len(), 1 + explicit.len());
    }

    /// The built-in pair may be absent only when there is other work
    #[test]
    fn builtin_default_pair_optional_iff_other_work(
        explicit in explicit_list(),
        scoped in any::<bool>(),
    ) {
        let options = options_from(&explicit, scoped, &["Pages".to_string()]);
        let set = TargetResolver::resolve(&options);

        let other_work = scoped || !explicit.is_empty();
        prop_assert_eq!(set.as_slice()[0].optional, other_work);
    }

    /// A default pair the user chose must always exist
    #[test]
    fn custom_default_pair_is_required(
        source in "[A-Z][a-z]{2,8}",
        explicit in explicit_list(),
        scoped in any::<bool>(),
    ) {
        prop_assume!(source != "Styles");
        let options = options_from(&explicit, scoped, &[]).with_source_folder(&source);
        let set = TargetResolver::resolve(&options);

        prop_assert_eq!(&set.as_slice()[0].source, &source);
        prop_assert!(!set.as_slice()[0].optional);
    }
}
