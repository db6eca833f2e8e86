//! Tests for the JSON file adapter feeding a real resolution pass.

use std::io::Write;

use optique::sources::cli::parse_cli;
use optique::sources::json;

use crate::common::doc_registry;

#[test]
fn test_config_file_resolves_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typedoc.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{
            "name": "My Project",
            "excludePrivate": true,
            "logLevel": "verbose",
            "exclude": ["**/node_modules/**", "**/*.spec.ts"]
        }}"#
    )
    .unwrap();

    let source = json::from_file(path.to_str().unwrap()).unwrap();
    let registry = doc_registry();
    let config = registry.resolve(&[source]).into_result().unwrap();

    assert_eq!(config.get_as::<String>("name").as_deref(), Some("My Project"));
    assert_eq!(config.get_as::<bool>("excludePrivate"), Some(true));
    assert_eq!(config.get_as::<i64>("logLevel"), Some(3));
    assert_eq!(
        config.get_as::<Vec<String>>("exclude"),
        Some(vec![
            "**/node_modules/**".to_string(),
            "**/*.spec.ts".to_string()
        ])
    );
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = json::from_file("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, json::SourceError::Io { .. }));
    assert!(err.to_string().contains("here.json"));
}

#[test]
fn test_cli_overrides_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("typedoc.json");
    std::fs::write(&path, r#"{"logLevel": "error", "theme": "custom"}"#).unwrap();

    let registry = doc_registry();
    let cli = parse_cli(&registry, ["--logLevel", "info"]);
    let file = json::from_file(path.to_str().unwrap()).unwrap();

    let config = registry.resolve(&[cli, file]).into_result().unwrap();
    assert_eq!(config.get_as::<i64>("logLevel"), Some(2), "CLI wins");
    assert_eq!(
        config.get_as::<String>("theme").as_deref(),
        Some("custom"),
        "file still supplies what the CLI does not"
    );
}

#[test]
fn test_mixed_option_keeps_raw_json_shape() {
    let registry = doc_registry();
    let source = json::from_str("typedoc.json", r#"{"logger": "none"}"#).unwrap();
    let config = registry.resolve(&[source]).into_result().unwrap();

    // Mixed options pass their raw value through for the consumer.
    match config.get("logger") {
        Some(optique::OptionValue::Mixed(optique::RawValue::String(s))) => {
            assert_eq!(s, "none");
        }
        other => panic!("expected a mixed string value, got {other:?}"),
    }
}
