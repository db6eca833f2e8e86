//! Validation errors collected during a resolution pass.
//!
//! Resolution never raises mid-pass: every failure becomes a
//! [`ValidationError`] in the pass's collected list, so a caller can report
//! every problem in the input at once instead of forcing a fix-one/rerun
//! loop. Registration-time errors live in
//! [`DeclarationError`](crate::DeclarationError) and fail fast instead.

use crate::declaration::ParameterType;

/// How serious a validation error is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Advisory only; does not block execution.
    Warning,
    /// A real problem; the caller should exit non-zero.
    Error,
}

/// A single validation failure, tagged with the option it concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The option (or, for unknown keys, the raw key) the error concerns.
    pub option: String,
    /// What went wrong.
    pub kind: ValidationErrorKind,
}

/// The specific failure that occurred while resolving an option.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    /// Built-in coercion could not produce the declared type.
    InvalidValue {
        /// The declared type that was expected.
        expected: ParameterType,
        /// Why coercion failed, quoting the input.
        reason: String,
    },

    /// A converter rejected an otherwise well-typed value.
    ///
    /// Carries the converter's message verbatim.
    Converter {
        /// The converter's failure message.
        message: String,
    },

    /// A source supplied a key that names no declaration.
    ///
    /// Warning-class: likely a typo or an option from a disabled feature.
    UnknownOption {
        /// A declared name within a small edit distance, if one exists.
        suggestion: Option<String>,
    },
}

impl ValidationError {
    pub(crate) fn invalid_value(
        option: impl Into<String>,
        expected: ParameterType,
        reason: String,
    ) -> Self {
        Self {
            option: option.into(),
            kind: ValidationErrorKind::InvalidValue { expected, reason },
        }
    }

    pub(crate) fn converter(option: impl Into<String>, message: String) -> Self {
        Self {
            option: option.into(),
            kind: ValidationErrorKind::Converter { message },
        }
    }

    pub(crate) fn unknown_option(option: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            option: option.into(),
            kind: ValidationErrorKind::UnknownOption { suggestion },
        }
    }

    /// Machine-readable error code.
    pub const fn code(&self) -> &'static str {
        match self.kind {
            ValidationErrorKind::InvalidValue { .. } => "options::invalid_value",
            ValidationErrorKind::Converter { .. } => "options::converter",
            ValidationErrorKind::UnknownOption { .. } => "options::unknown_option",
        }
    }

    /// How serious this error is. Unknown options are advisory.
    pub const fn severity(&self) -> Severity {
        match self.kind {
            ValidationErrorKind::UnknownOption { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// One-line description of the failure.
    pub fn label(&self) -> String {
        match &self.kind {
            ValidationErrorKind::InvalidValue { expected, reason } => {
                format!(
                    "invalid {} value for option '{}': {reason}",
                    expected.name(),
                    self.option
                )
            }
            ValidationErrorKind::Converter { message } => {
                format!("option '{}': {message}", self.option)
            }
            ValidationErrorKind::UnknownOption { .. } => {
                format!("unknown option '{}'", self.option)
            }
        }
    }

    /// Extra guidance to print under the label, when there is any.
    pub fn help(&self) -> Option<String> {
        match &self.kind {
            ValidationErrorKind::UnknownOption {
                suggestion: Some(suggestion),
            } => Some(format!("did you mean '{suggestion}'?")),
            _ => None,
        }
    }
}

// Display is the label only; help text is the report renderer's concern.
impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_option_is_warning_class() {
        let err = ValidationError::unknown_option("logLvl", Some("logLevel".into()));
        assert_eq!(err.severity(), Severity::Warning);
        assert_eq!(err.code(), "options::unknown_option");
        assert_eq!(err.help().as_deref(), Some("did you mean 'logLevel'?"));
    }

    #[test]
    fn test_invalid_value_is_error_class() {
        let err = ValidationError::invalid_value(
            "logLevel",
            ParameterType::Map,
            "'chatty' is not a valid value".into(),
        );
        assert_eq!(err.severity(), Severity::Error);
        let label = err.label();
        assert!(label.contains("logLevel"), "label should name the option: {label}");
        assert!(label.contains("chatty"), "label should quote the input: {label}");
    }

    #[test]
    fn test_converter_message_kept_verbatim() {
        let err = ValidationError::converter("lightTheme", "expected one of: a, b".into());
        assert!(err.label().ends_with("expected one of: a, b"));
    }
}
