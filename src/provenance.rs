//! Provenance tracking for resolved values.
//!
//! Every entry in a [`ResolvedConfig`](crate::ResolvedConfig) records where
//! its value came from, enabling "who set this?" debugging output and
//! precise error attribution without re-running resolution.

use camino::Utf8PathBuf;

use crate::sources::SourceOrigin;

/// The origin of a resolved option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// The value came from command-line arguments.
    Cli,
    /// The value came from a configuration file.
    File(Utf8PathBuf),
    /// The value came from a named in-memory source.
    Named(String),
    /// No source supplied the option; the declaration's default applied.
    Default,
}

impl Provenance {
    /// Whether the value came from the command line.
    pub fn is_cli(&self) -> bool {
        matches!(self, Self::Cli)
    }

    /// Whether the value came from a configuration file.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Whether the value is the declaration's default.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    pub(crate) fn from_origin(origin: &SourceOrigin) -> Self {
        match origin {
            SourceOrigin::Cli => Provenance::Cli,
            SourceOrigin::File(path) => Provenance::File(path.clone()),
            SourceOrigin::Named(name) => Provenance::Named(name.clone()),
        }
    }
}

impl core::fmt::Display for Provenance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Cli => write!(f, "from command-line arguments"),
            Self::File(path) => write!(f, "from {path}"),
            Self::Named(name) => write!(f, "from source '{name}'"),
            Self::Default => write!(f, "from declaration default"),
        }
    }
}
