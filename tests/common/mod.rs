use optique::{OptionRegistry, builtins};

/// A sealed registry loaded with the full documentation generator option
/// set, as a realistic resolution target.
pub fn doc_registry() -> OptionRegistry {
    let mut registry = OptionRegistry::new();
    builtins::add_builtin_options(&mut registry).expect("builtin option set registers cleanly");
    registry.seal();
    registry
}
