//! Tests for source precedence and default application.
//!
//! These verify:
//! 1. The first source supplying an option always wins
//! 2. Defaults apply only when no source supplies the option
//! 3. Provenance reports the winning source
//! 4. CLI and JSON forms of the same option normalize identically

use optique::sources::cli::parse_cli;
use optique::sources::{Source, json};
use optique::{OptionValue, Provenance};

use crate::common::doc_registry;

#[test]
fn test_first_source_wins_over_later_sources() {
    let registry = doc_registry();
    let a = Source::named("a", [("name", "From A".into())]);
    let b = Source::named("b", [("name", "From B".into())]);

    let config = registry.resolve(&[a, b]).into_result().unwrap();
    assert_eq!(config.get_as::<String>("name").as_deref(), Some("From A"));
}

#[test]
fn test_cli_outranks_config_file() {
    let registry = doc_registry();
    let cli = parse_cli(&registry, ["--theme", "minimal"]);
    let file = json::from_str("typedoc.json", r#"{"theme": "custom", "hideGenerator": true}"#)
        .unwrap();

    let config = registry.resolve(&[cli, file]).into_result().unwrap();
    assert_eq!(config.get_as::<String>("theme").as_deref(), Some("minimal"));
    assert!(config.provenance("theme").unwrap().is_cli());

    // Options only the file supplies still come from the file.
    assert_eq!(config.get_as::<bool>("hideGenerator"), Some(true));
    assert_eq!(
        config.provenance("hideGenerator"),
        Some(&Provenance::File("typedoc.json".into()))
    );
}

#[test]
fn test_defaults_fill_unsupplied_options() {
    let registry = doc_registry();
    let config = registry.resolve(&[]).into_result().unwrap();

    assert_eq!(config.get_as::<String>("gitRevision").as_deref(), Some("master"));
    assert!(config.provenance("gitRevision").unwrap().is_default());

    // No default, no source: unset, not an error.
    assert_eq!(config.get("name"), None);
    assert!(!config.is_set("name"));
}

#[test]
fn test_supplied_value_beats_default() {
    let registry = doc_registry();
    let file = json::from_str("typedoc.json", r#"{"gitRevision": "v2.0"}"#).unwrap();
    let config = registry.resolve(&[file]).into_result().unwrap();
    assert_eq!(config.get_as::<String>("gitRevision").as_deref(), Some("v2.0"));
    assert!(!config.provenance("gitRevision").unwrap().is_default());
}

#[test]
fn test_comma_list_and_json_array_normalize_identically() {
    let registry = doc_registry();

    let cli = parse_cli(&registry, ["--excludeTags", "internal, hidden ,beta"]);
    let from_cli = registry.resolve(&[cli]).into_result().unwrap();

    let file =
        json::from_str("typedoc.json", r#"{"excludeTags": ["internal", "hidden", "beta"]}"#)
            .unwrap();
    let from_file = registry.resolve(&[file]).into_result().unwrap();

    let expected = OptionValue::List(vec!["internal".into(), "hidden".into(), "beta".into()]);
    assert_eq!(from_cli.get("excludeTags"), Some(&expected));
    assert_eq!(from_file.get("excludeTags"), Some(&expected));
}

#[test]
fn test_explicit_empty_list_is_set() {
    let registry = doc_registry();
    let file = json::from_str("typedoc.json", r#"{"excludeTags": []}"#).unwrap();
    let config = registry.resolve(&[file]).into_result().unwrap();

    // An explicit empty array is not the same as "not provided".
    assert!(config.is_set("excludeTags"));
    assert_eq!(config.get("excludeTags"), Some(&OptionValue::List(Vec::new())));
    assert!(!config.is_set("categoryOrder"));
}

#[test]
fn test_each_pass_is_independent() {
    let registry = doc_registry();

    let with_name = registry
        .resolve(&[Source::named("m", [("name", "First".into())])])
        .into_result()
        .unwrap();
    let without = registry.resolve(&[]).into_result().unwrap();

    assert_eq!(with_name.get_as::<String>("name").as_deref(), Some("First"));
    assert_eq!(without.get("name"), None);
}
