//! Tests for unknown configuration key handling.
//!
//! These verify that:
//! 1. Unknown keys warn but never block resolution
//! 2. Close typos get a did-you-mean suggestion
//! 3. The same unknown key in several sources warns once
//! 4. Accessor lookups of undeclared names stay a hard programming error

use optique::sources::cli::parse_cli;
use optique::sources::{Source, json};
use optique::{Severity, render_report};

use crate::common::doc_registry;

#[test]
fn test_unknown_key_is_advisory_only() {
    let registry = doc_registry();
    let file = json::from_str(
        "typedoc.json",
        r#"{"excludPrivate": true, "theme": "minimal"}"#,
    )
    .unwrap();
    let resolution = registry.resolve(&[file]);

    assert!(!resolution.has_errors(), "warnings must not block the run");
    assert_eq!(resolution.errors().len(), 1);
    assert_eq!(resolution.errors()[0].severity(), Severity::Warning);

    let config = resolution.into_result().expect("warnings alone still succeed");
    assert_eq!(config.get_as::<String>("theme").as_deref(), Some("minimal"));
}

#[test]
fn test_typo_gets_a_suggestion() {
    let registry = doc_registry();
    let file = json::from_str("typedoc.json", r#"{"excludPrivate": true}"#).unwrap();
    let (_, errors) = registry.resolve(&[file]).into_parts();

    assert_eq!(
        errors[0].help().as_deref(),
        Some("did you mean 'excludePrivate'?")
    );

    let report = render_report(&errors);
    assert!(
        report.contains("did you mean 'excludePrivate'?"),
        "report should carry the suggestion:\n{report}"
    );
}

#[test]
fn test_unrecognizable_key_gets_no_suggestion() {
    let registry = doc_registry();
    let file = json::from_str("typedoc.json", r#"{"frobnicate": 1}"#).unwrap();
    let (_, errors) = registry.resolve(&[file]).into_parts();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].help(), None);
}

#[test]
fn test_same_unknown_key_across_sources_warns_once() {
    let registry = doc_registry();
    let cli = parse_cli(&registry, ["--mystery", "1"]);
    let memory = Source::named("memory", [("mystery", "2".into())]);

    let (_, errors) = registry.resolve(&[cli, memory]).into_parts();
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert_eq!(errors[0].option, "mystery");
}

#[test]
#[should_panic(expected = "never declared")]
fn test_accessor_rejects_undeclared_names() {
    let registry = doc_registry();
    let config = registry.resolve(&[]).into_result().unwrap();
    // Unlike raw input keys, programmatic lookups must fail fast.
    let _ = config.get("definitelyNotDeclared");
}
