//! The option registry: declaration storage, uniqueness, and sealing.
//!
//! A registry is populated once at startup (or plugin-load time), sealed,
//! and then only read. Sealing is what makes the "declare, then resolve"
//! discipline explicit: a sealed registry rejects further declarations, and
//! because every post-seal operation takes `&self`, it is safe to share
//! across threads and to run any number of resolution passes against.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::declaration::{OptionDeclaration, ParameterType};
use crate::resolver::{self, Resolution};
use crate::sources::Source;

/// An error raised while registering a declaration.
///
/// Registration errors are synchronous and fail fast, one declaration at a
/// time; a failed [`add_declaration`](OptionRegistry::add_declaration)
/// leaves the registry exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
    /// The declaration's name was empty.
    EmptyName,
    /// Another declaration already owns this name.
    DuplicateName {
        /// The contested name.
        name: String,
    },
    /// Another declaration already owns this short alias.
    DuplicateShortName {
        /// The contested alias.
        short: char,
        /// The declaration that tried to claim it.
        name: String,
        /// The declaration that already owns it.
        existing: String,
    },
    /// A `Map`-typed declaration arrived without its key enumeration.
    MissingMapValues {
        /// The offending declaration.
        name: String,
    },
    /// A non-`Map` declaration carried a key enumeration.
    UnexpectedMapValues {
        /// The offending declaration.
        name: String,
    },
    /// The declared default does not match the declared type.
    DefaultTypeMismatch {
        /// The offending declaration.
        name: String,
        /// Value shape the declared type resolves to.
        expected: &'static str,
        /// Value shape the default actually has.
        got: &'static str,
    },
    /// The registry was already sealed.
    Sealed {
        /// The declaration that arrived too late.
        name: String,
    },
}

impl core::fmt::Display for DeclarationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeclarationError::EmptyName => write!(f, "option names must not be empty"),
            DeclarationError::DuplicateName { name } => {
                write!(f, "an option named '{name}' is already registered")
            }
            DeclarationError::DuplicateShortName {
                short,
                name,
                existing,
            } => write!(
                f,
                "short name '-{short}' for option '{name}' is already taken by '{existing}'"
            ),
            DeclarationError::MissingMapValues { name } => {
                write!(f, "map option '{name}' declares no accepted keys")
            }
            DeclarationError::UnexpectedMapValues { name } => {
                write!(f, "option '{name}' declares map keys but is not map-typed")
            }
            DeclarationError::DefaultTypeMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "default for option '{name}' should be a {expected}, got a {got}"
            ),
            DeclarationError::Sealed { name } => {
                write!(f, "cannot register option '{name}': the registry is sealed")
            }
        }
    }
}

impl std::error::Error for DeclarationError {}

/// Stores one declaration per option name and enforces uniqueness.
///
/// The registry is pure metadata storage: it performs no coercion. Iteration
/// follows registration order, which drives generated help text (resolution
/// correctness does not depend on it).
///
/// # Example
///
/// ```rust
/// use optique::{OptionDeclaration, OptionRegistry};
///
/// let mut options = OptionRegistry::new();
/// options
///     .add_declaration(OptionDeclaration::new("name", "Set the project name."))
///     .unwrap();
/// options.seal();
///
/// assert!(options.get("name").is_some());
/// assert!(options
///     .add_declaration(OptionDeclaration::new("late", "Too late."))
///     .is_err());
/// ```
#[derive(Debug, Default)]
pub struct OptionRegistry {
    declarations: IndexMap<String, OptionDeclaration>,
    shorts: HashMap<char, String>,
    sealed: bool,
}

impl OptionRegistry {
    /// Create an empty, unsealed registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration.
    ///
    /// Validates the declaration's internal invariants (map options carry
    /// their enumeration, defaults match the declared type) and its
    /// uniqueness against everything already registered. On any failure the
    /// registry is left untouched.
    pub fn add_declaration(&mut self, decl: OptionDeclaration) -> Result<(), DeclarationError> {
        if self.sealed {
            return Err(DeclarationError::Sealed { name: decl.name });
        }
        if decl.name.is_empty() {
            return Err(DeclarationError::EmptyName);
        }
        if decl.param_type == ParameterType::Map && decl.map_values.is_none() {
            return Err(DeclarationError::MissingMapValues { name: decl.name });
        }
        if decl.param_type != ParameterType::Map && decl.map_values.is_some() {
            return Err(DeclarationError::UnexpectedMapValues { name: decl.name });
        }
        if let Some(default) = &decl.default
            && !default.matches_type(decl.param_type)
        {
            return Err(DeclarationError::DefaultTypeMismatch {
                name: decl.name,
                expected: decl.param_type.value_type_name(),
                got: default.type_name(),
            });
        }
        if self.declarations.contains_key(&decl.name) {
            return Err(DeclarationError::DuplicateName { name: decl.name });
        }
        if let Some(short) = decl.short
            && let Some(existing) = self.shorts.get(&short)
        {
            return Err(DeclarationError::DuplicateShortName {
                short,
                name: decl.name,
                existing: existing.clone(),
            });
        }

        if let Some(short) = decl.short {
            self.shorts.insert(short, decl.name.clone());
        }
        self.declarations.insert(decl.name.clone(), decl);
        Ok(())
    }

    /// Look up a declaration by name.
    pub fn get(&self, name: &str) -> Option<&OptionDeclaration> {
        self.declarations.get(name)
    }

    /// Look up a declaration by its one-character alias.
    pub fn get_by_short(&self, short: char) -> Option<&OptionDeclaration> {
        self.shorts
            .get(&short)
            .and_then(|name| self.declarations.get(name))
    }

    /// Iterate all declarations in registration order.
    ///
    /// The iterator is cheap to recreate; call again to restart.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDeclaration> + '_ {
        self.declarations.values()
    }

    /// Number of registered declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the registry has no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Seal the registry: all later registration attempts fail.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Whether [`seal`](Self::seal) has been called.
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Resolve concrete values for every declared option.
    ///
    /// `sources` are consulted in descending precedence: the first source
    /// supplying a value for an option wins. See [`Resolution`] for the
    /// outcome shape; errors are collected across the whole pass, never
    /// raised mid-way.
    pub fn resolve(&self, sources: &[Source]) -> Resolution {
        resolver::resolve(self, sources)
    }
}
