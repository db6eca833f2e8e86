//! JSON configuration file adapter.
//!
//! Parses a JSON document whose top level is an object and produces a
//! [`Source`] with file provenance. Values keep their JSON shapes as
//! [`RawValue`]s; nested objects survive only for `Mixed` options, per the
//! flat-options contract.

use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;

use crate::sources::{Source, SourceOrigin};
use crate::value::RawValue;

/// A failure to load or parse a JSON source.
///
/// These happen before resolution ever starts and are distinct from the
/// [`ValidationError`](crate::ValidationError)s a resolution pass collects.
#[derive(Debug)]
pub enum SourceError {
    /// The file could not be read.
    Io {
        /// The path that failed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        error: std::io::Error,
    },
    /// The document is not valid JSON.
    Parse {
        /// The document's path (or label, for in-memory text).
        path: Utf8PathBuf,
        /// The underlying JSON error.
        error: serde_json::Error,
    },
    /// The document parsed, but its top level is not an object.
    NotAnObject {
        /// The document's path.
        path: Utf8PathBuf,
    },
}

impl core::fmt::Display for SourceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SourceError::Io { path, error } => write!(f, "failed to read {path}: {error}"),
            SourceError::Parse { path, error } => write!(f, "failed to parse {path}: {error}"),
            SourceError::NotAnObject { path } => {
                write!(f, "{path}: expected a top-level JSON object")
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io { error, .. } => Some(error),
            SourceError::Parse { error, .. } => Some(error),
            SourceError::NotAnObject { .. } => None,
        }
    }
}

/// Parse a JSON document held in memory, labelled with `path` for
/// provenance and error messages.
pub fn from_str(path: impl Into<Utf8PathBuf>, text: &str) -> Result<Source, SourceError> {
    let path = path.into();
    let document: serde_json::Value =
        serde_json::from_str(text).map_err(|error| SourceError::Parse {
            path: path.clone(),
            error,
        })?;

    let serde_json::Value::Object(object) = document else {
        return Err(SourceError::NotAnObject { path });
    };

    let mut source = Source::new(SourceOrigin::File(path));
    for (key, value) in object {
        source.insert(key, json_to_raw(value));
    }
    Ok(source)
}

/// Read and parse a JSON configuration file.
pub fn from_file(path: impl AsRef<Utf8Path>) -> Result<Source, SourceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path.as_std_path()).map_err(|error| SourceError::Io {
        path: path.to_owned(),
        error,
    })?;
    from_str(path.to_owned(), &text)
}

fn json_to_raw(value: serde_json::Value) -> RawValue {
    match value {
        serde_json::Value::Null => RawValue::Null,
        serde_json::Value::Bool(b) => RawValue::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => RawValue::Integer(i),
            None => RawValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => RawValue::String(s),
        serde_json::Value::Array(items) => {
            RawValue::Array(items.into_iter().map(json_to_raw).collect())
        }
        serde_json::Value::Object(entries) => {
            let map: IndexMap<String, RawValue> = entries
                .into_iter()
                .map(|(key, value)| (key, json_to_raw(value)))
                .collect();
            RawValue::Object(map)
        }
    }
}
