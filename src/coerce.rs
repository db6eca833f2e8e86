//! Built-in coercion from raw values to typed option values.
//!
//! One canonical conversion per declared type, dispatched exhaustively so
//! that adding a [`ParameterType`] variant is a compile-time-checked
//! exercise. Coercion normalizes shape only; a declaration's converter (if
//! any) runs afterwards on the typed value.

use crate::declaration::{OptionDeclaration, ParameterType};
use crate::value::{OptionValue, RawValue};

/// Coerce a raw value into the declaration's type.
///
/// On failure returns the reason only; the resolver wraps it into a
/// [`ValidationError`](crate::ValidationError) tagged with the option name.
pub(crate) fn coerce(decl: &OptionDeclaration, raw: &RawValue) -> Result<OptionValue, String> {
    match decl.param_type {
        ParameterType::String | ParameterType::File | ParameterType::Directory => {
            coerce_string(raw)
        }
        ParameterType::Number => coerce_number(raw),
        ParameterType::Boolean => coerce_boolean(raw),
        ParameterType::Array => coerce_array(raw),
        ParameterType::Map => {
            // Registration guarantees the enumeration is present.
            let map_values = decl
                .map_values
                .as_ref()
                .expect("map option registered without key enumeration");
            coerce_map(raw, map_values)
        }
        ParameterType::Mixed => Ok(OptionValue::Mixed(raw.clone())),
    }
}

fn coerce_string(raw: &RawValue) -> Result<OptionValue, String> {
    raw.as_scalar_string()
        .map(OptionValue::String)
        .ok_or_else(|| format!("expected a string, got {}", raw.type_name()))
}

fn coerce_number(raw: &RawValue) -> Result<OptionValue, String> {
    match raw {
        RawValue::Integer(i) => Ok(OptionValue::Number(*i)),
        // The engine works in integers; fractional input truncates toward zero.
        RawValue::Float(f) => Ok(OptionValue::Number(f.trunc() as i64)),
        RawValue::String(s) => s
            .trim()
            .parse::<i64>()
            .map(OptionValue::Number)
            .map_err(|_| format!("'{s}' is not a valid number")),
        other => Err(format!("expected a number, got {}", other.type_name())),
    }
}

fn coerce_boolean(raw: &RawValue) -> Result<OptionValue, String> {
    match raw {
        RawValue::Bool(b) => Ok(OptionValue::Bool(*b)),
        RawValue::String(s) => {
            if s.eq_ignore_ascii_case("true") {
                Ok(OptionValue::Bool(true))
            } else if s.eq_ignore_ascii_case("false") {
                Ok(OptionValue::Bool(false))
            } else {
                Err(format!(
                    "'{s}' is not a valid boolean (expected true or false)"
                ))
            }
        }
        other => Err(format!("expected a boolean, got {}", other.type_name())),
    }
}

fn coerce_array(raw: &RawValue) -> Result<OptionValue, String> {
    match raw {
        RawValue::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item.as_scalar_string() {
                    Some(s) => out.push(s),
                    None => {
                        return Err(format!(
                            "array elements must be scalar values, got {}",
                            item.type_name()
                        ));
                    }
                }
            }
            Ok(OptionValue::List(out))
        }
        // `--opt a,b,c` and JSON `["a","b","c"]` normalize to the same shape.
        RawValue::String(s) => Ok(OptionValue::List(split_comma_list(s))),
        other => match other.as_scalar_string() {
            Some(s) => Ok(OptionValue::List(vec![s])),
            None => Err(format!("expected a list, got {}", other.type_name())),
        },
    }
}

fn coerce_map(
    raw: &RawValue,
    map_values: &indexmap::IndexMap<String, i64>,
) -> Result<OptionValue, String> {
    match raw {
        RawValue::String(s) => map_values
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(s))
            .map(|(_, rank)| OptionValue::Number(*rank))
            .ok_or_else(|| invalid_map_key(s, map_values)),
        // A raw number equal to one of the ranks passes through directly.
        RawValue::Integer(i) => {
            if map_values.values().any(|rank| rank == i) {
                Ok(OptionValue::Number(*i))
            } else {
                Err(invalid_map_key(&i.to_string(), map_values))
            }
        }
        other => Err(format!(
            "expected one of the declared keys, got {}",
            other.type_name()
        )),
    }
}

fn invalid_map_key(given: &str, map_values: &indexmap::IndexMap<String, i64>) -> String {
    let keys: Vec<&str> = map_values.keys().map(String::as_str).collect();
    format!(
        "'{given}' is not a valid value; expected one of: {}",
        keys.join(", ")
    )
}

/// Split a comma-separated list, trimming whitespace from each segment.
fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',').map(|segment| segment.trim().to_string()).collect()
}
