//! Tests for batch validation: coercion failures, converter rejections, and
//! the collect-everything contract.

use optique::sources::{Source, json};
use optique::{Severity, ValidationErrorKind, render_report};

use crate::common::doc_registry;

#[test]
fn test_bad_map_key_fails_that_option_only() {
    let registry = doc_registry();
    let file = json::from_str(
        "typedoc.json",
        r#"{"logLevel": "chatty", "excludePrivate": true}"#,
    )
    .unwrap();
    let resolution = registry.resolve(&[file]);

    let about_level: Vec<_> = resolution
        .errors()
        .iter()
        .filter(|e| e.option == "logLevel")
        .collect();
    assert_eq!(about_level.len(), 1, "exactly one error for logLevel");
    assert!(matches!(
        about_level[0].kind,
        ValidationErrorKind::InvalidValue { .. }
    ));

    // The failed option is unset (not defaulted), the rest resolved.
    assert_eq!(resolution.config().get("logLevel"), None);
    assert_eq!(resolution.config().get_as::<bool>("excludePrivate"), Some(true));
}

#[test]
fn test_converter_rejection_references_the_option() {
    let registry = doc_registry();
    let file = json::from_str("typedoc.json", r#"{"lightTheme": "sparkle-pony"}"#).unwrap();
    let resolution = registry.resolve(&[file]);

    let converter_errors: Vec<_> = resolution
        .errors()
        .iter()
        .filter(|e| matches!(e.kind, ValidationErrorKind::Converter { .. }))
        .collect();
    assert_eq!(converter_errors.len(), 1);
    assert_eq!(converter_errors[0].option, "lightTheme");
    assert!(
        converter_errors[0].label().contains("light-plus"),
        "converter message should list accepted themes: {}",
        converter_errors[0].label()
    );

    // Resolution continued for every other declaration.
    assert_eq!(
        resolution.config().get_as::<String>("darkTheme").as_deref(),
        Some("dark-plus")
    );
}

#[test]
fn test_all_errors_collected_in_one_pass() {
    let registry = doc_registry();
    let file = json::from_str(
        "typedoc.json",
        r#"{
            "logLevel": "chatty",
            "lightTheme": "sparkle-pony",
            "excludePrivate": "maybe",
            "theme": "custom"
        }"#,
    )
    .unwrap();
    let resolution = registry.resolve(&[file]);

    let error_options: Vec<_> = resolution
        .errors()
        .iter()
        .filter(|e| e.severity() == Severity::Error)
        .map(|e| e.option.as_str())
        .collect();
    assert_eq!(error_options.len(), 3, "{error_options:?}");
    assert!(error_options.contains(&"logLevel"));
    assert!(error_options.contains(&"lightTheme"));
    assert!(error_options.contains(&"excludePrivate"));

    // The valid entry in the same document still resolved.
    assert_eq!(
        resolution.config().get_as::<String>("theme").as_deref(),
        Some("custom")
    );
}

#[test]
fn test_report_names_every_failing_option() {
    let registry = doc_registry();
    let file = json::from_str(
        "typedoc.json",
        r#"{"logLevel": "chatty", "lightTheme": "sparkle-pony"}"#,
    )
    .unwrap();
    let (_, errors) = registry.resolve(&[file]).into_parts();

    let report = render_report(&errors);
    assert!(report.contains("logLevel"), "report:\n{report}");
    assert!(report.contains("lightTheme"), "report:\n{report}");
}

#[test]
fn test_into_result_blocks_on_errors_only() {
    let registry = doc_registry();

    let bad = json::from_str("typedoc.json", r#"{"logLevel": "chatty"}"#).unwrap();
    assert!(registry.resolve(&[bad]).into_result().is_err());

    let fine = json::from_str("typedoc.json", r#"{"logLevel": "warn"}"#).unwrap();
    assert!(registry.resolve(&[fine]).into_result().is_ok());
}

#[test]
fn test_numeric_log_level_passes_through() {
    let registry = doc_registry();
    let source = Source::named("conf", [("logLevel", 0.into())]);
    let config = registry.resolve(&[source]).into_result().unwrap();
    assert_eq!(config.get_as::<i64>("logLevel"), Some(0));
}
