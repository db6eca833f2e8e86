//! The resolution pass: sources in, typed configuration plus errors out.
//!
//! # Phases
//! 1. **Declarations**: every registered declaration is visited, whether or
//!    not any source mentions it. The first source (descending precedence)
//!    supplying the option wins; the value is coerced, then run through the
//!    declaration's converter. Failures leave the option unset - not
//!    defaulted - and resolution continues.
//! 2. **Defaults**: options no source supplied take their declared default,
//!    or stay unset when there is none.
//! 3. **Unknown keys**: keys present in any source but absent from the
//!    registry produce one advisory warning each, with a did-you-mean
//!    suggestion when a declared name is close.
//!
//! Nothing in the pass raises: the full error list rides back alongside
//! whatever resolved, so callers report every problem at once.

use indexmap::{IndexMap, IndexSet};

use crate::coerce;
use crate::error::{Severity, ValidationError};
use crate::provenance::Provenance;
use crate::registry::OptionRegistry;
use crate::report;
use crate::resolved::{ResolvedConfig, ResolvedEntry};
use crate::sources::Source;
use crate::suggest;
use crate::value::OptionValue;

/// The outcome of one resolution pass.
///
/// Holds the configuration that could be resolved together with everything
/// that went wrong. Use [`into_result`](Self::into_result) when warnings
/// are acceptable and any real error should fail the run, or
/// [`into_parts`](Self::into_parts) for manual handling.
#[derive(Debug)]
pub struct Resolution {
    config: ResolvedConfig,
    errors: Vec<ValidationError>,
}

impl Resolution {
    /// The resolved configuration, however partial.
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Every validation error collected during the pass, warnings included.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether any error-severity entries were collected.
    ///
    /// Warnings alone (unknown options) do not count.
    pub fn has_errors(&self) -> bool {
        self.errors
            .iter()
            .any(|e| e.severity() == Severity::Error)
    }

    /// Split into the configuration and the error list.
    pub fn into_parts(self) -> (ResolvedConfig, Vec<ValidationError>) {
        (self.config, self.errors)
    }

    /// `Ok` with the configuration when no error-severity entries exist.
    ///
    /// Unknown-option warnings are advisory and do not block; real errors
    /// return everything collected as a [`ResolutionErrors`].
    pub fn into_result(self) -> Result<ResolvedConfig, ResolutionErrors> {
        if self.has_errors() {
            Err(ResolutionErrors {
                errors: self.errors,
            })
        } else {
            Ok(self.config)
        }
    }
}

/// The collected failures of a resolution pass, as an error value.
#[derive(Debug)]
pub struct ResolutionErrors {
    /// Everything collected during the pass, warnings included.
    pub errors: Vec<ValidationError>,
}

impl core::fmt::Display for ResolutionErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", report::render(&self.errors, false).trim_end())
    }
}

impl std::error::Error for ResolutionErrors {}

pub(crate) fn resolve(registry: &OptionRegistry, sources: &[Source]) -> Resolution {
    let mut entries = IndexMap::with_capacity(registry.len());
    let mut errors = Vec::new();

    for decl in registry.iter() {
        let hit = sources
            .iter()
            .find_map(|source| source.get(&decl.name).map(|raw| (source, raw)));

        let entry = match hit {
            Some((source, raw)) => {
                let coerced = coerce::coerce(decl, raw).map_err(|reason| {
                    ValidationError::invalid_value(&decl.name, decl.param_type, reason)
                });
                let converted = coerced.and_then(|value| match &decl.converter {
                    Some(converter) => converter
                        .apply(value)
                        .map_err(|message| ValidationError::converter(&decl.name, message)),
                    None => Ok(value),
                });
                match converted {
                    Ok(value) => {
                        let provenance = Provenance::from_origin(source.origin());
                        tracing::debug!(
                            option = decl.name.as_str(),
                            source = %source.origin(),
                            "resolved option"
                        );
                        resolved(value, provenance)
                    }
                    Err(error) => {
                        // Failed values stay unset rather than falling back
                        // to the default.
                        errors.push(error);
                        unset()
                    }
                }
            }
            None => match &decl.default {
                Some(default) => resolved(default.clone(), Provenance::Default),
                None => unset(),
            },
        };
        entries.insert(decl.name.clone(), entry);
    }

    // One advisory warning per unknown key, first source wins, deduplicated
    // across sources.
    let mut seen: IndexSet<&str> = IndexSet::new();
    for source in sources {
        for key in source.keys() {
            if registry.get(key).is_none() && seen.insert(key) {
                let suggestion =
                    suggest::find_similar(key, registry.iter().map(|d| d.name.as_str()));
                tracing::warn!(
                    key,
                    source = %source.origin(),
                    "source supplies an option that was never declared"
                );
                errors.push(ValidationError::unknown_option(key, suggestion));
            }
        }
    }

    Resolution {
        config: ResolvedConfig::new(entries),
        errors,
    }
}

fn resolved(value: OptionValue, provenance: Provenance) -> ResolvedEntry {
    ResolvedEntry {
        value: Some(value),
        provenance: Some(provenance),
    }
}

fn unset() -> ResolvedEntry {
    ResolvedEntry {
        value: None,
        provenance: None,
    }
}
