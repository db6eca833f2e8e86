//! Built-in declarations for a documentation generator.
//!
//! This is the bulk-loader pattern the registry exists to serve: one
//! function that seeds a registry with a whole domain's option set in
//! sequence. The declarations here are pure data - the registry does not
//! know what any of them mean.

use crate::declaration::{Converter, OptionDeclaration, ParameterType};
use crate::registry::{DeclarationError, OptionRegistry};
use crate::value::OptionValue;

/// Logging severity, ranked for threshold comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Normal output.
    Info,
    /// Everything.
    Verbose,
}

impl LogLevel {
    /// Numeric rank of this level; higher is chattier.
    pub const fn rank(self) -> i64 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Verbose => 3,
        }
    }

    /// The symbolic key enumeration for a map-typed log level option.
    pub fn map_values() -> [(&'static str, i64); 4] {
        [
            ("Error", LogLevel::Error.rank()),
            ("Warn", LogLevel::Warn.rank()),
            ("Info", LogLevel::Info.rank()),
            ("Verbose", LogLevel::Verbose.rank()),
        ]
    }
}

/// Bundled syntax highlighting themes accepted by the theme options.
pub const SYNTAX_THEMES: &[&str] = &[
    "dark-plus",
    "light-plus",
    "github-dark",
    "github-light",
    "monokai",
    "nord",
    "one-dark-pro",
    "slack-dark",
    "slack-ochin",
    "solarized-dark",
    "solarized-light",
];

fn current_dir() -> String {
    std::env::current_dir()
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|_| ".".to_string())
}

/// Register the full documentation generator option set.
///
/// Call once on a fresh registry, before sealing. Fails fast on the first
/// declaration the registry rejects (which, for this fixed set, indicates a
/// caller already claimed one of its names).
pub fn add_builtin_options(options: &mut OptionRegistry) -> Result<(), DeclarationError> {
    options.add_declaration(
        OptionDeclaration::new(
            "options",
            "Specify a json option file that should be loaded. If not specified the tool \
             will look for 'typedoc.json' in the current directory",
        )
        .with_type(ParameterType::File)
        .with_default(current_dir()),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "tsconfig",
            "Specify a typescript config file that should be loaded. If not specified the \
             tool will look for 'tsconfig.json' in the current directory.",
        )
        .with_type(ParameterType::File)
        .with_default(current_dir()),
    )?;

    options.add_declaration(
        OptionDeclaration::new(
            "entryPoint",
            "The entry point to document all symbols from. More than one may be specified.",
        )
        .with_type(ParameterType::Array),
    )?;

    options.add_declaration(
        OptionDeclaration::new(
            "exclude",
            "Define patterns for excluded files when specifying paths.",
        )
        .with_type(ParameterType::Array),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "excludeExternals",
            "Prevent items originating in node_modules from being documented.",
        )
        .with_type(ParameterType::Boolean),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "excludeNotDocumented",
            "Prevent symbols that are not explicitly documented from appearing in the results.",
        )
        .with_type(ParameterType::Boolean),
    )?;
    options.add_declaration(
        OptionDeclaration::new("excludePrivate", "Ignores private variables and methods")
            .with_type(ParameterType::Boolean),
    )?;
    options.add_declaration(
        OptionDeclaration::new("excludeProtected", "Ignores protected variables and methods")
            .with_type(ParameterType::Boolean),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "disableSources",
            "Disables setting the source of a reflection when documenting it.",
        )
        .with_type(ParameterType::Boolean),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "includes",
            "Specifies the location to look for included documents (use [[include:FILENAME]] \
             in comments).",
        )
        .with_type(ParameterType::Directory),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "media",
            "Specifies the location with media files that should be copied to the output \
             directory.",
        )
        .with_type(ParameterType::Directory),
    )?;

    options.add_declaration(
        OptionDeclaration::new(
            "html",
            "Specifies the location the documentation should be written to.",
        )
        .with_type(ParameterType::Directory),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "json",
            "Specifies the location and file name a json file describing the project is \
             written to.",
        )
        .with_type(ParameterType::File),
    )?;

    options.add_declaration(
        OptionDeclaration::new(
            "theme",
            "Specify the path to the theme that should be used or 'default' or 'minimal' to \
             use built-in themes.",
        )
        .with_default("default"),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "lightTheme",
            "Specify the light theme to be used for syntax highlighting.",
        )
        .with_default("light-plus")
        .with_converter(Converter::closed_set(SYNTAX_THEMES.iter().copied())),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "darkTheme",
            "Specify the dark theme to be used for syntax highlighting.",
        )
        .with_default("dark-plus")
        .with_converter(Converter::closed_set(SYNTAX_THEMES.iter().copied())),
    )?;

    options.add_declaration(OptionDeclaration::new(
        "name",
        "Set the name of the project that will be used in the header of the template.",
    ))?;
    options.add_declaration(
        OptionDeclaration::new("includeVersion", "Add the package version to the project name.")
            .with_type(ParameterType::Boolean),
    )?;
    options.add_declaration(
        OptionDeclaration::new("excludeTags", "Remove the listed tags from doc comments.")
            .with_type(ParameterType::Array),
    )?;
    options.add_declaration(OptionDeclaration::new(
        "readme",
        "Path to the readme file that should be displayed on the index page. Pass `none` to \
         disable the index page and start the documentation on the globals page.",
    ))?;
    options.add_declaration(
        OptionDeclaration::new(
            "defaultCategory",
            "Specifies the default category for reflections without a category.",
        )
        .with_default("Other"),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "categoryOrder",
            "Specifies the order in which categories appear. * indicates the relative order \
             for categories not in the list.",
        )
        .with_type(ParameterType::Array),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "categorizeByGroup",
            "Specifies whether categorization will be done at the group level.",
        )
        .with_type(ParameterType::Boolean)
        .with_default(true),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "gitRevision",
            "Use specified revision instead of the last revision for linking to source files.",
        )
        .with_default("master"),
    )?;
    options.add_declaration(
        OptionDeclaration::new("gitRemote", "Use the specified remote for linking to source files.")
            .with_default("origin"),
    )?;
    options.add_declaration(OptionDeclaration::new(
        "gaID",
        "Set the Google Analytics tracking ID and activate tracking code.",
    ))?;
    options.add_declaration(
        OptionDeclaration::new("gaSite", "Set the site name for Google Analytics. Defaults to `auto`.")
            .with_default("auto"),
    )?;
    options.add_declaration(
        OptionDeclaration::new("hideGenerator", "Do not print the generator link at the end of the page.")
            .with_type(ParameterType::Boolean),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "cleanOutputDir",
            "If set, will clean up the output directory before creating files.",
        )
        .with_type(ParameterType::Boolean)
        .with_default(true),
    )?;

    options.add_declaration(
        OptionDeclaration::new("help", "Print this message.")
            .with_type(ParameterType::Boolean)
            .with_short('h'),
    )?;
    options.add_declaration(
        OptionDeclaration::new("version", "Print the tool's version.")
            .with_type(ParameterType::Boolean)
            .with_short('v'),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "plugin",
            "Specify the npm plugins that should be loaded. Omit to load all installed \
             plugins, set to 'none' to load no plugins.",
        )
        .with_type(ParameterType::Array),
    )?;
    options.add_declaration(
        OptionDeclaration::new(
            "logger",
            "Specify the logger that should be used, 'none' or 'console'",
        )
        .with_type(ParameterType::Mixed)
        .with_default(OptionValue::Mixed("console".into())),
    )?;
    options.add_declaration(
        OptionDeclaration::new("logLevel", "Specify what level of logging should be used.")
            .with_type(ParameterType::Map)
            .with_map_values(LogLevel::map_values())
            .with_default(LogLevel::Info.rank()),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::Source;
    use crate::value::RawValue;

    fn loaded() -> OptionRegistry {
        let mut registry = OptionRegistry::new();
        add_builtin_options(&mut registry).expect("builtin set registers cleanly");
        registry.seal();
        registry
    }

    #[test]
    fn test_builtin_set_registers_cleanly() {
        let registry = loaded();
        assert!(registry.len() > 30, "full option set expected");
        assert_eq!(registry.get_by_short('h').unwrap().name, "help");
        assert_eq!(registry.get_by_short('v').unwrap().name, "version");
    }

    #[test]
    fn test_log_level_ranks() {
        assert_eq!(LogLevel::Error.rank(), 0);
        assert_eq!(LogLevel::Verbose.rank(), 3);
    }

    #[test]
    fn test_log_level_option_resolves_symbolically() {
        let registry = loaded();
        let source = Source::named("conf", [("logLevel", RawValue::from("warn"))]);
        let config = registry.resolve(&[source]).into_result().unwrap();
        assert_eq!(config.get_as::<i64>("logLevel"), Some(LogLevel::Warn.rank()));
    }

    #[test]
    fn test_theme_converter_rejects_unbundled_theme() {
        let registry = loaded();
        let source = Source::named("conf", [("lightTheme", RawValue::from("hotdog-stand"))]);
        let resolution = registry.resolve(&[source]);
        assert!(resolution.has_errors());
        assert_eq!(resolution.errors()[0].option, "lightTheme");
        // Everything else still resolved; theme keeps its own default.
        assert_eq!(
            resolution.config().get_as::<String>("theme").as_deref(),
            Some("default")
        );
    }

    #[test]
    fn test_defaults_apply_without_sources() {
        let config = loaded().resolve(&[]).into_result().unwrap();
        assert_eq!(config.get_as::<String>("gitRemote").as_deref(), Some("origin"));
        assert_eq!(config.get_as::<bool>("cleanOutputDir"), Some(true));
        assert_eq!(config.get_as::<i64>("logLevel"), Some(2));
        assert_eq!(config.get("name"), None);
    }
}
