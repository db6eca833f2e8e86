//! Tests for generated help text over the full option set.

use optique::{HelpConfig, render_help};

use crate::common::doc_registry;

fn help() -> String {
    render_help(
        &doc_registry(),
        &HelpConfig {
            program_name: Some("docgen".into()),
            version: Some("0.1.0".into()),
            width: 100,
        },
    )
}

#[test]
fn test_help_header_and_usage() {
    let help = help();
    assert!(help.starts_with("docgen 0.1.0\n"), "{help}");
    assert!(help.contains("docgen [OPTIONS]"), "{help}");
}

#[test]
fn test_help_lists_options_in_registration_order() {
    let help = help();
    // "options" is registered first, "logLevel" last.
    let first = help.find("--options").expect("--options listed");
    let last = help.find("--logLevel").expect("--logLevel listed");
    assert!(first < last, "registration order should be preserved:\n{help}");
}

#[test]
fn test_help_shows_short_aliases_and_placeholders() {
    let help = help();
    assert!(help.contains("-h, --help"), "{help}");
    assert!(help.contains("-v, --version"), "{help}");
    assert!(help.contains("--tsconfig <path>"), "{help}");
    assert!(
        help.contains("--logLevel <error|warn|info|verbose>"),
        "{help}"
    );
}

#[test]
fn test_help_carries_description_text() {
    let help = help();
    assert!(
        help.contains("Ignores private variables and methods"),
        "{help}"
    );
}
