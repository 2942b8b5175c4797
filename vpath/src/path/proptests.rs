//! Property-based tests for alias registration and lookup.
//!
//! Note: The normalize module already has property tests for normalization.
//! This module focuses on resolver ordering behavior.

use super::normalize::prefix;
use super::resolver::PathResolver;
use super::types::Mode;
use crate::filesystem::MockFilesystem;
use proptest::prelude::*;

// Directory names under /site, possibly repeated
fn dirs_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,2}", 1..8)
        .prop_map(|names| names.into_iter().map(|n| format!("/site/{n}")).collect())
}

fn resolver_for(dirs: &[String]) -> PathResolver<MockFilesystem> {
    let fs = dirs
        .iter()
        .fold(MockFilesystem::new().with_dir("/site"), |fs, dir| {
            fs.with_dir(dir)
        });
    PathResolver::with_filesystem(fs, Some("/site")).unwrap()
}

fn dedup_keep_first(dirs: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for dir in dirs {
        if !seen.contains(dir) {
            seen.push(dir.clone());
        }
    }
    seen
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Append keeps the supplied order and drops repeats
    #[test]
    fn append_preserves_order(dirs in dirs_strategy()) {
        let mut resolver = resolver_for(&dirs);
        resolver.set("alias", &dirs, Mode::Append).unwrap();

        prop_assert_eq!(resolver.get_paths("alias").unwrap(), dedup_keep_first(&dirs));
    }

    // Prepend searches the last supplied directory first
    #[test]
    fn prepend_reverses_order(dirs in dirs_strategy()) {
        let mut resolver = resolver_for(&dirs);
        resolver.set("alias", &dirs, Mode::Prepend).unwrap();

        let mut expected = dedup_keep_first(&dirs);
        expected.reverse();
        prop_assert_eq!(resolver.get_paths("alias").unwrap(), expected);
    }

    // Registering the same list twice changes nothing
    #[test]
    fn registration_is_idempotent(dirs in dirs_strategy(), mode in prop_oneof![Just(Mode::Prepend), Just(Mode::Append)]) {
        let mut resolver = resolver_for(&dirs);
        resolver.set("alias", &dirs, mode).unwrap();
        let once = resolver.get_paths("alias").unwrap();

        resolver.set("alias", &dirs, mode).unwrap();
        prop_assert_eq!(resolver.get_paths("alias").unwrap(), once);
    }

    // Reset leaves exactly the new list behind
    #[test]
    fn reset_replaces_everything(before in dirs_strategy(), after in dirs_strategy()) {
        let all: Vec<String> = before.iter().chain(after.iter()).cloned().collect();
        let mut resolver = resolver_for(&all);
        resolver.set("alias", &before, Mode::Append).unwrap();
        resolver.set("alias", &after, Mode::Reset).unwrap();

        let mut expected = dedup_keep_first(&after);
        expected.reverse();
        prop_assert_eq!(resolver.get_paths("alias").unwrap(), expected);
    }

    // Lookups hit the first directory that holds the file
    #[test]
    fn get_returns_first_hit(dirs in dirs_strategy(), holder in 0usize..8) {
        let order = dedup_keep_first(&dirs);
        let holder = &order[holder % order.len()];

        let mut resolver = resolver_for(&dirs);
        resolver.fs_mut().add_file(&format!("{holder}/file.txt"));
        resolver.set("alias", &dirs, Mode::Append).unwrap();

        let expected = format!("{holder}/file.txt");
        prop_assert_eq!(resolver.get("alias:file.txt").unwrap(), Some(expected));
    }

    // Unregistered single-colon paths are either virtual or prefixed, never both
    #[test]
    fn virtual_and_prefix_are_exclusive(
        name in "[a-z]{2,8}".prop_filter("root is always virtual", |n| n != "root"),
        slashes in 0usize..3,
        rest in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
    ) {
        let resolver = resolver_for(&[]);
        let path = format!("{name}:{}{rest}", "/".repeat(slashes));

        prop_assert!(resolver.is_virtual(&path) != prefix(&path).is_some());
    }
}
