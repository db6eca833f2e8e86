//! Raw value sources: the partial maps a resolution pass consumes.
//!
//! A [`Source`] is a flat `name -> RawValue` map plus the origin it was
//! loaded from. Adapters in [`cli`] and [`json`] build sources from command
//! lines and JSON documents; [`Source::named`] covers in-memory maps. All
//! I/O happens here, before resolution - the resolver itself is a pure pass
//! over these maps.

pub mod cli;
pub mod json;

use camino::Utf8PathBuf;
use indexmap::IndexMap;

use crate::value::RawValue;

/// Where a source's values were loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Command-line arguments.
    Cli,
    /// A configuration file.
    File(Utf8PathBuf),
    /// An in-memory map with a caller-chosen label.
    Named(String),
}

impl core::fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SourceOrigin::Cli => write!(f, "command line"),
            SourceOrigin::File(path) => write!(f, "{path}"),
            SourceOrigin::Named(name) => write!(f, "{name}"),
        }
    }
}

/// An ordered, flat map of raw option values from a single origin.
///
/// Insertion order is preserved so reports and unknown-key warnings are
/// stable across runs.
#[derive(Debug, Clone)]
pub struct Source {
    origin: SourceOrigin,
    values: IndexMap<String, RawValue>,
}

impl Source {
    /// Create an empty source with the given origin.
    pub fn new(origin: SourceOrigin) -> Self {
        Self {
            origin,
            values: IndexMap::new(),
        }
    }

    /// Build an in-memory source from key-value pairs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optique::sources::Source;
    ///
    /// let overrides = Source::named("test overrides", [("excludePrivate", true.into())]);
    /// assert!(overrides.get("excludePrivate").is_some());
    /// ```
    pub fn named<I, K>(label: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, RawValue)>,
        K: Into<String>,
    {
        Self {
            origin: SourceOrigin::Named(label.into()),
            values: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }

    /// The origin this source was loaded from.
    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }

    /// Set a raw value, replacing any previous value for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// The raw value for a name, if this source supplies one.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }

    /// Iterate the supplied names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    /// Number of supplied values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the source supplies no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge a value for an array-accumulating key: existing scalars are
    /// promoted to an array, arrays are extended.
    pub(crate) fn accumulate(&mut self, name: &str, value: RawValue) {
        match self.values.entry(name.to_string()) {
            indexmap::map::Entry::Occupied(mut occupied) => match occupied.get_mut() {
                RawValue::Array(items) => items.push(value),
                existing => {
                    let first = existing.clone();
                    *existing = RawValue::Array(vec![first, value]);
                }
            },
            indexmap::map::Entry::Vacant(vacant) => {
                vacant.insert(value);
            }
        }
    }
}
