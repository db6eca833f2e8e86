#![warn(missing_docs)]
#![deny(unsafe_code)]
//! # optique - Declarative Option Registry for Rust
//!
//! optique lets a program's subsystems register named, typed configuration
//! options up front, then resolves concrete values for them from multiple
//! overlapping sources with deterministic precedence:
//! - **CLI arguments** - via the [`sources::cli`] adapter
//! - **JSON config files** - via the [`sources::json`] adapter
//! - **In-memory maps** - via [`Source::named`]
//! - **Declared defaults** - applied when no source supplies an option
//!
//! Resolution is a batch operation: every declaration is attempted, every
//! failure is collected, and the full error list rides back alongside
//! whatever could be resolved - one report per run instead of a
//! fix-one/rerun loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use optique::{OptionDeclaration, OptionRegistry, ParameterType};
//! use optique::sources::cli::parse_cli;
//!
//! let mut options = OptionRegistry::new();
//! options
//!     .add_declaration(
//!         OptionDeclaration::new("excludePrivate", "Ignores private variables and methods")
//!             .with_type(ParameterType::Boolean)
//!             .with_default(false),
//!     )
//!     .unwrap();
//! options
//!     .add_declaration(OptionDeclaration::new("name", "Set the project name."))
//!     .unwrap();
//! options.seal();
//!
//! let cli = parse_cli(&options, ["--excludePrivate"]);
//! let config = options.resolve(&[cli]).into_result().unwrap();
//!
//! assert_eq!(config.get_as::<bool>("excludePrivate"), Some(true));
//! assert_eq!(config.get("name"), None); // unset, distinct from ""
//! ```
//!
//! ## Layered Sources
//!
//! Sources are consulted in the order given; the first one supplying an
//! option wins. Every resolved value remembers where it came from:
//!
//! ```rust
//! use optique::{OptionDeclaration, OptionRegistry, Provenance};
//! use optique::sources::{Source, json};
//!
//! let mut options = OptionRegistry::new();
//! options
//!     .add_declaration(OptionDeclaration::new("theme", "The theme to use.").with_default("default"))
//!     .unwrap();
//! options.seal();
//!
//! let file = json::from_str("typedoc.json", r#"{"theme": "minimal"}"#).unwrap();
//! let overrides = Source::named("overrides", [("theme", "plain".into())]);
//!
//! // overrides outranks the file
//! let config = options.resolve(&[overrides, file]).into_result().unwrap();
//! assert_eq!(config.get_as::<String>("theme").as_deref(), Some("plain"));
//! assert_eq!(
//!     config.provenance("theme"),
//!     Some(&Provenance::Named("overrides".into()))
//! );
//! ```
//!
//! ## Batch Validation
//!
//! ```rust
//! use optique::{OptionDeclaration, OptionRegistry, ParameterType, Severity};
//! use optique::sources::Source;
//!
//! let mut options = OptionRegistry::new();
//! options
//!     .add_declaration(
//!         OptionDeclaration::new("logLevel", "Logging level.")
//!             .with_type(ParameterType::Map)
//!             .with_map_values([("Error", 0), ("Warn", 1), ("Info", 2), ("Verbose", 3)])
//!             .with_default(2),
//!     )
//!     .unwrap();
//! options.seal();
//!
//! let source = Source::named("conf", [("logLevel", "chatty".into()), ("logLvl", "info".into())]);
//! let resolution = options.resolve(&[source]);
//!
//! // Both problems reported in one pass: a real error and an advisory
//! // unknown-option warning with a suggestion.
//! assert_eq!(resolution.errors().len(), 2);
//! assert!(resolution.has_errors());
//! assert_eq!(resolution.errors()[1].severity(), Severity::Warning);
//! println!("{}", optique::render_report(resolution.errors()));
//! ```
//!
//! ## Discipline
//!
//! Declare, then seal, then resolve: a registry is populated once at
//! startup, [`seal`](OptionRegistry::seal)ed, and from then on only read.
//! Late registration attempts fail. A sealed registry is safe to share
//! across threads; each [`resolve`](OptionRegistry::resolve) pass builds
//! its own independent [`ResolvedConfig`].

pub mod builtins;
pub mod sources;

pub(crate) mod coerce;
pub(crate) mod color;
pub(crate) mod declaration;
pub(crate) mod error;
pub(crate) mod help;
pub(crate) mod provenance;
pub(crate) mod registry;
pub(crate) mod report;
pub(crate) mod resolved;
pub(crate) mod resolver;
pub(crate) mod suggest;
pub(crate) mod value;

// ==========================================
// PUBLIC INTERFACE
// ==========================================

pub use declaration::{Converter, ConverterFn, OptionDeclaration, ParameterType, PathHint};
pub use error::{Severity, ValidationError, ValidationErrorKind};
pub use help::{HelpConfig, render_help};
pub use provenance::Provenance;
pub use registry::{DeclarationError, OptionRegistry};
pub use report::render_report;
pub use resolved::ResolvedConfig;
pub use resolver::{Resolution, ResolutionErrors};
pub use sources::{Source, SourceOrigin};
pub use value::{FromOptionValue, OptionValue, RawValue};
