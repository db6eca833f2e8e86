//! Option declarations: the metadata describing a single configuration option.
//!
//! A declaration names an option, fixes its type, and optionally carries a
//! default value, a one-character alias for command-line use, the symbolic
//! key enumeration for map options, and a validation strategy that runs
//! after built-in coercion.

use indexmap::IndexMap;

use crate::value::OptionValue;

/// The declared type of an option.
///
/// `File` and `Directory` are strings as far as coercion is concerned; the
/// variant records the intended filesystem-path semantics for consumers
/// (documentation, pickers). The registry performs no existence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    /// A free-form string.
    String,
    /// An integer.
    Number,
    /// A boolean flag.
    Boolean,
    /// A list of strings. A single raw string splits on commas.
    Array,
    /// One of a declared set of symbolic keys, resolving to its rank.
    Map,
    /// No coercion; the raw value passes through for the consumer.
    Mixed,
    /// A string carrying a file-path hint.
    File,
    /// A string carrying a directory-path hint.
    Directory,
}

/// The intended filesystem interpretation of a path-hinted option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathHint {
    /// The value names a file.
    File,
    /// The value names a directory.
    Directory,
}

impl ParameterType {
    /// Short name of this type for help and error text.
    pub fn name(self) -> &'static str {
        match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
            ParameterType::Array => "array",
            ParameterType::Map => "map",
            ParameterType::Mixed => "mixed",
            ParameterType::File => "file",
            ParameterType::Directory => "directory",
        }
    }

    /// Name of the *value* shape options of this type resolve to.
    pub(crate) fn value_type_name(self) -> &'static str {
        match self {
            ParameterType::Boolean => "boolean",
            ParameterType::Number | ParameterType::Map => "number",
            ParameterType::String | ParameterType::File | ParameterType::Directory => "string",
            ParameterType::Array => "list",
            ParameterType::Mixed => "any",
        }
    }

    /// The filesystem hint carried by this type, if any.
    pub fn path_hint(self) -> Option<PathHint> {
        match self {
            ParameterType::File => Some(PathHint::File),
            ParameterType::Directory => Some(PathHint::Directory),
            _ => None,
        }
    }
}

/// Signature for a custom converter function.
///
/// Receives the value after built-in coercion; returns the (possibly
/// transformed) value, or a failure message that the resolver collects as
/// a converter error for the option.
pub type ConverterFn = fn(OptionValue) -> Result<OptionValue, String>;

/// A validation strategy attached to a declaration.
///
/// Converters run after built-in coercion, on the typed value. Each variant
/// is a plain datum (or a `fn` pointer), so declarations stay `Clone` and
/// converters can be exercised in isolation.
#[derive(Debug, Clone)]
pub enum Converter {
    /// The value's string form must be one of the allowed identifiers.
    ClosedSet(Vec<String>),
    /// The numeric value must fall within the inclusive range.
    Range {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// An arbitrary predicate/transform.
    Custom(ConverterFn),
}

impl Converter {
    /// Build a closed-set converter from any collection of identifiers.
    pub fn closed_set<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Converter::ClosedSet(allowed.into_iter().map(Into::into).collect())
    }

    /// Build an inclusive numeric range converter.
    pub fn range(min: i64, max: i64) -> Self {
        Converter::Range { min, max }
    }

    /// Apply this converter to an already-coerced value.
    pub fn apply(&self, value: OptionValue) -> Result<OptionValue, String> {
        match self {
            Converter::ClosedSet(allowed) => {
                let Some(text) = value.as_str() else {
                    return Err(format!(
                        "expected a string value, got {}",
                        value.type_name()
                    ));
                };
                if allowed.iter().any(|candidate| candidate == text) {
                    Ok(value)
                } else {
                    Err(format!("expected one of: {}", allowed.join(", ")))
                }
            }
            Converter::Range { min, max } => {
                let Some(number) = value.as_number() else {
                    return Err(format!(
                        "expected a number value, got {}",
                        value.type_name()
                    ));
                };
                if number < *min || number > *max {
                    Err(format!(
                        "expected a number between {min} and {max}, got {number}"
                    ))
                } else {
                    Ok(value)
                }
            }
            Converter::Custom(convert) => convert(value),
        }
    }
}

/// Metadata describing one configuration option.
///
/// Declarations are built with the consuming setter methods and registered
/// with [`OptionRegistry::add_declaration`](crate::OptionRegistry::add_declaration),
/// after which they are immutable for the life of the registry.
///
/// # Example
///
/// ```rust
/// use optique::{OptionDeclaration, ParameterType};
///
/// let decl = OptionDeclaration::new("excludePrivate", "Ignores private variables and methods")
///     .with_type(ParameterType::Boolean)
///     .with_default(false);
/// assert_eq!(decl.name, "excludePrivate");
/// ```
#[derive(Debug, Clone)]
pub struct OptionDeclaration {
    /// Unique, case-sensitive option name.
    pub name: String,
    /// Optional one-character alias for command-line use.
    pub short: Option<char>,
    /// Human-readable description; feeds help text, never behavior.
    pub help: String,
    /// The declared type. Defaults to `String` when not set explicitly.
    pub param_type: ParameterType,
    /// Typed default, used when no source supplies the option. Absent means
    /// "unset" is itself a valid resolved state.
    pub default: Option<OptionValue>,
    /// For `Map` options only: accepted symbolic keys and their ranks, in
    /// declaration order (the order error messages list them in).
    pub map_values: Option<IndexMap<String, i64>>,
    /// Optional validation strategy, run after built-in coercion.
    pub converter: Option<Converter>,
}

impl OptionDeclaration {
    /// Create a declaration with the given name and help text.
    ///
    /// The type defaults to `String`; use [`with_type`](Self::with_type) to
    /// change it.
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            help: help.into(),
            param_type: ParameterType::String,
            default: None,
            map_values: None,
            converter: None,
        }
    }

    /// Set the declared type.
    pub fn with_type(mut self, param_type: ParameterType) -> Self {
        self.param_type = param_type;
        self
    }

    /// Set the one-character command-line alias.
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<OptionValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the symbolic key enumeration for a `Map` option.
    pub fn with_map_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        self.map_values = Some(
            values
                .into_iter()
                .map(|(key, rank)| (key.into(), rank))
                .collect(),
        );
        self
    }

    /// Attach a validation strategy.
    pub fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = Some(converter);
        self
    }
}
