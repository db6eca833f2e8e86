//! Raw and typed option values.
//!
//! Source adapters produce [`RawValue`]s: untyped data as it arrived from the
//! command line, a JSON file, or an in-memory map. The coercion engine turns
//! a raw value into an [`OptionValue`] matching the option's declared type.
//! The two are kept separate so that "what the user wrote" and "what the
//! option means" never blur together.

use indexmap::IndexMap;

use crate::declaration::ParameterType;

/// An untyped configuration value as supplied by a source.
///
/// `Array` and `Object` only survive coercion for `Mixed` options; every
/// other declared type requires a scalar (or, for arrays, a sequence of
/// scalars). `Null` exists so the JSON adapter is total over its input.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// An explicit null (JSON `null`).
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
    /// A sequence of values.
    Array(Vec<RawValue>),
    /// A nested key-value map. Passes through `Mixed` options only.
    Object(IndexMap<String, RawValue>),
}

impl RawValue {
    /// Human-readable name of this value's shape, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "boolean",
            RawValue::Integer(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::String(_) => "string",
            RawValue::Array(_) => "array",
            RawValue::Object(_) => "object",
        }
    }

    /// Render a scalar raw value as a string.
    ///
    /// Returns `None` for `Null`, `Array`, and `Object` - those have no
    /// scalar string form.
    pub fn as_scalar_string(&self) -> Option<String> {
        match self {
            RawValue::Bool(b) => Some(b.to_string()),
            RawValue::Integer(i) => Some(i.to_string()),
            RawValue::Float(f) => Some(f.to_string()),
            RawValue::String(s) => Some(s.clone()),
            RawValue::Null | RawValue::Array(_) | RawValue::Object(_) => None,
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(value: Vec<RawValue>) -> Self {
        RawValue::Array(value)
    }
}

/// A typed, resolved option value.
///
/// Map-typed options resolve to `Number` (the rank associated with the
/// matched symbolic key). `Mixed` options carry their raw value through
/// untouched for the consumer to interpret.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// A boolean.
    Bool(bool),
    /// An integer.
    Number(i64),
    /// A string (also used by path-hinted options).
    String(String),
    /// A list of strings.
    List(Vec<String>),
    /// An uninterpreted value, passed through from the source.
    Mixed(RawValue),
}

impl OptionValue {
    /// Human-readable name of this value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "boolean",
            OptionValue::Number(_) => "number",
            OptionValue::String(_) => "string",
            OptionValue::List(_) => "list",
            OptionValue::Mixed(_) => "mixed",
        }
    }

    /// The boolean inside, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number inside, if this is a `Number`.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string inside, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The list inside, if this is a `List`.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            OptionValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this value is shaped correctly for the given declared type.
    ///
    /// Used at registration time to validate declared defaults. `Mixed`
    /// accepts anything.
    pub(crate) fn matches_type(&self, param_type: ParameterType) -> bool {
        match param_type {
            ParameterType::Boolean => matches!(self, OptionValue::Bool(_)),
            ParameterType::Number | ParameterType::Map => matches!(self, OptionValue::Number(_)),
            ParameterType::String | ParameterType::File | ParameterType::Directory => {
                matches!(self, OptionValue::String(_))
            }
            ParameterType::Array => matches!(self, OptionValue::List(_)),
            ParameterType::Mixed => true,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::List(value)
    }
}

impl From<&[&str]> for OptionValue {
    fn from(value: &[&str]) -> Self {
        OptionValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Conversion from a resolved [`OptionValue`] to a concrete Rust type.
///
/// Implemented for the types an option can resolve to; used by
/// [`ResolvedConfig::get_as`](crate::ResolvedConfig::get_as).
pub trait FromOptionValue: Sized {
    /// Extract `Self` from the value, or `None` if the shapes don't match.
    fn from_option_value(value: &OptionValue) -> Option<Self>;
}

impl FromOptionValue for bool {
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromOptionValue for i64 {
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        value.as_number()
    }
}

impl FromOptionValue for String {
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        value.as_str().map(|s| s.to_string())
    }
}

impl FromOptionValue for Vec<String> {
    fn from_option_value(value: &OptionValue) -> Option<Self> {
        value.as_list().map(|items| items.to_vec())
    }
}
