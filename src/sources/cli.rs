//! Command-line argument adapter.
//!
//! Scans a token stream against a registry and produces a [`Source`] keyed
//! by canonical option names, so the resolver never needs to know about
//! flag syntax. Handled forms:
//!
//! - `--name value` and `--name=value`
//! - `-s value` for declared one-character aliases
//! - bare `--flag` for boolean options (an optional `true`/`false` token
//!   after the flag is consumed)
//! - `--kebab-case-name`, accepted for declarations named in lowerCamelCase
//! - repeated occurrences of array options accumulate instead of replacing
//!
//! Unknown flags are kept under the name the user wrote so the resolver can
//! raise its advisory unknown-option warning; bare positional tokens are
//! not part of this system's contract and are skipped.

use heck::ToLowerCamelCase;

use crate::declaration::{OptionDeclaration, ParameterType};
use crate::registry::OptionRegistry;
use crate::sources::{Source, SourceOrigin};
use crate::value::RawValue;

/// Parse command-line tokens into a [`Source`].
///
/// Pass `std::env::args().skip(1)` for a real invocation, or a literal
/// slice in tests.
///
/// # Example
///
/// ```rust
/// use optique::{OptionDeclaration, OptionRegistry, ParameterType};
/// use optique::sources::cli::parse_cli;
///
/// let mut options = OptionRegistry::new();
/// options
///     .add_declaration(
///         OptionDeclaration::new("excludePrivate", "Ignores private variables and methods")
///             .with_type(ParameterType::Boolean),
///     )
///     .unwrap();
/// options.seal();
///
/// let source = parse_cli(&options, ["--excludePrivate"]);
/// assert!(source.get("excludePrivate").is_some());
/// ```
pub fn parse_cli<I, S>(registry: &OptionRegistry, args: I) -> Source
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let mut source = Source::new(SourceOrigin::Cli);

    let mut i = 0;
    while i < args.len() {
        let token = &args[i];
        i += 1;

        let Some(flag) = strip_flag(token) else {
            // Positional tokens are outside this adapter's contract.
            continue;
        };
        if flag.is_empty() {
            // A bare `--` separator carries no option.
            continue;
        }

        let (name_part, eq_value) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };

        let decl = lookup(registry, name_part);
        let canonical = decl
            .map(|d| d.name.clone())
            .unwrap_or_else(|| name_part.to_string());
        let is_boolean = decl.is_some_and(|d| d.param_type == ParameterType::Boolean);
        let is_array = decl.is_some_and(|d| d.param_type == ParameterType::Array);

        let raw = if let Some(value) = eq_value {
            RawValue::String(value)
        } else if is_boolean {
            // A bare flag means true; an explicit true/false token after it
            // is consumed as the value.
            match args.get(i) {
                Some(next)
                    if next.eq_ignore_ascii_case("true") || next.eq_ignore_ascii_case("false") =>
                {
                    let value = next.clone();
                    i += 1;
                    RawValue::String(value)
                }
                _ => RawValue::Bool(true),
            }
        } else if args.get(i).is_some_and(|next| !looks_like_flag(next)) {
            let value = args[i].clone();
            i += 1;
            RawValue::String(value)
        } else if decl.is_some() {
            // A declared, value-taking flag with nothing after it; null makes
            // coercion report the missing value.
            RawValue::Null
        } else {
            RawValue::Bool(true)
        };

        if is_array {
            source.accumulate(&canonical, raw);
        } else {
            source.insert(canonical, raw);
        }
    }

    source
}

/// Strip one or two leading dashes; `None` for tokens that are not flags.
fn strip_flag(token: &str) -> Option<&str> {
    if !looks_like_flag(token) {
        return None;
    }
    let stripped = token.strip_prefix('-').unwrap_or(token);
    Some(stripped.strip_prefix('-').unwrap_or(stripped))
}

/// A flag starts with a dash but is not a negative number.
fn looks_like_flag(token: &str) -> bool {
    token.len() > 1
        && token.starts_with('-')
        && !token[1..].starts_with(|c: char| c.is_ascii_digit())
}

fn lookup<'a>(registry: &'a OptionRegistry, token: &str) -> Option<&'a OptionDeclaration> {
    if let Some(decl) = registry.get(token) {
        return Some(decl);
    }
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && let Some(decl) = registry.get_by_short(c)
    {
        return Some(decl);
    }
    if token.contains('-') {
        return registry.get(&token.to_lower_camel_case());
    }
    None
}
