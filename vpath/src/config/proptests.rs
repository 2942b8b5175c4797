//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{AliasConfig, Config};
use super::validator::ConfigValidator;
use crate::path::Mode;
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = Option<Mode>> {
    prop::option::of(prop_oneof![
        Just(Mode::Prepend),
        Just(Mode::Append),
        Just(Mode::Reset),
    ])
}

fn alias_strategy() -> impl Strategy<Value = AliasConfig> {
    (
        "[a-z]{2,10}".prop_filter("root is reserved", |name| name != "root"),
        prop::collection::vec("/[a-z]{1,8}(/[a-z]{1,8}){0,2}", 0..4),
        mode_strategy(),
    )
        .prop_map(|(name, paths, mode)| AliasConfig { name, paths, mode })
}

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("/[a-z]{1,10}"),
        prop::option::of(any::<bool>()),
        prop::option::of("https?://[a-z]{1,10}\\.test"),
        prop::option::of(prop::collection::vec(alias_strategy(), 0..4)),
    )
        .prop_map(|(root, real_paths, base_url, aliases)| Config {
            root,
            real_paths,
            base_url,
            aliases,
        })
}

fn alias_count(config: &Config) -> usize {
    config.aliases.as_ref().map_or(0, Vec::len)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Scalars from the higher source win when present
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(&result.root, if high.root.is_some() { &high.root } else { &low.root });
        prop_assert_eq!(
            result.real_paths,
            if high.real_paths.is_some() { high.real_paths } else { low.real_paths }
        );
        prop_assert_eq!(
            &result.base_url,
            if high.base_url.is_some() { &high.base_url } else { &low.base_url }
        );
    }

    // Alias registrations from both sources are kept, lower first
    #[test]
    fn config_merge_accumulates_aliases(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(alias_count(&result), alias_count(&low) + alias_count(&high));

        let merged = result.aliases.unwrap_or_default();
        let expected: Vec<_> = low
            .aliases
            .unwrap_or_default()
            .into_iter()
            .chain(high.aliases.unwrap_or_default())
            .collect();
        prop_assert_eq!(merged, expected);
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(from_empty, config);
    }

    // Generated configs are valid and stay valid after merging
    #[test]
    fn valid_configs_stay_valid_after_merge(a in config_strategy(), b in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&a).is_ok());
        prop_assert!(ConfigValidator::validate(&b).is_ok());

        let mut merged = a;
        ConfigMerger::merge_into(&mut merged, &b);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // Configs survive a YAML round trip through the file format
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
