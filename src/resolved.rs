//! The resolved configuration and its typed accessor facade.
//!
//! A [`ResolvedConfig`] is produced fresh by each resolution pass and never
//! mutated afterwards; a new pass builds a new one. It carries one entry per
//! *declaration* - including options no source supplied - so "unset" is a
//! first-class, queryable state distinct from any typed empty value.

use indexmap::IndexMap;

use crate::provenance::Provenance;
use crate::value::{FromOptionValue, OptionValue};

#[derive(Debug, Clone)]
pub(crate) struct ResolvedEntry {
    /// `None` means the option is unset (no source, no default, or the
    /// supplied value failed validation).
    pub value: Option<OptionValue>,
    /// Present exactly when `value` is.
    pub provenance: Option<Provenance>,
}

/// A mapping from option name to typed value, sealed after resolution.
///
/// Lookups with a name that was never declared are programming errors and
/// panic; contrast with the resolver, which treats unknown keys in raw
/// input as advisory warnings.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    entries: IndexMap<String, ResolvedEntry>,
}

impl ResolvedConfig {
    pub(crate) fn new(entries: IndexMap<String, ResolvedEntry>) -> Self {
        Self { entries }
    }

    fn entry(&self, name: &str) -> &ResolvedEntry {
        self.entries
            .get(name)
            .unwrap_or_else(|| panic!("option '{name}' was never declared"))
    }

    /// The resolved value for a declared option, or `None` if it is unset.
    ///
    /// Callers must treat unset distinctly from a typed falsy/empty value:
    /// an explicit empty list is not the same as "not provided".
    ///
    /// # Panics
    ///
    /// Panics if `name` was never declared in the registry this
    /// configuration was resolved from.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entry(name).value.as_ref()
    }

    /// The resolved value converted to a concrete Rust type.
    ///
    /// Returns `None` when the option is unset. A resolved value always
    /// matches its declared type, so a `None` for a set option means the
    /// caller asked for the wrong type.
    ///
    /// # Panics
    ///
    /// Panics if `name` was never declared.
    pub fn get_as<T: FromOptionValue>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(T::from_option_value)
    }

    /// Whether a declared option resolved to a value.
    ///
    /// # Panics
    ///
    /// Panics if `name` was never declared.
    pub fn is_set(&self, name: &str) -> bool {
        self.entry(name).value.is_some()
    }

    /// Where the option's value came from, or `None` if it is unset.
    ///
    /// # Panics
    ///
    /// Panics if `name` was never declared.
    pub fn provenance(&self, name: &str) -> Option<&Provenance> {
        self.entry(name).provenance.as_ref()
    }

    /// Iterate `(name, value)` for every declaration, in registration
    /// order. Unset options yield `None` values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&OptionValue>)> + '_ {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.value.as_ref()))
    }

    /// Number of declared options in this configuration.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration covers no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
