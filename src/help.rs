//! Help text generation from a registry.
//!
//! Renders the registered declarations in registration order - the reason
//! the registry's iteration order is defined at all. Output is a usage line
//! plus an aligned two-column option listing, colored when the terminal
//! supports it.

use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::color::should_use_color;
use crate::declaration::{OptionDeclaration, ParameterType};
use crate::registry::OptionRegistry;

/// Configuration for help text generation.
#[derive(Debug, Clone)]
pub struct HelpConfig {
    /// Program name (defaults to the executable name).
    pub program_name: Option<String>,
    /// Program version, shown next to the name when set.
    pub version: Option<String>,
    /// Width for wrapping help text (0 = no wrapping).
    pub width: usize,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            program_name: None,
            version: None,
            width: 80,
        }
    }
}

/// Generate help text for every declaration in the registry.
pub fn render_help(registry: &OptionRegistry, config: &HelpConfig) -> String {
    render(registry, config, should_use_color())
}

fn render(registry: &OptionRegistry, config: &HelpConfig, color: bool) -> String {
    let mut out = String::new();

    let program_name = config
        .program_name
        .clone()
        .or_else(|| std::env::args().next())
        .unwrap_or_else(|| "program".to_string());

    match &config.version {
        Some(version) => out.push_str(&format!("{program_name} {version}\n\n")),
        None => out.push_str(&format!("{program_name}\n\n")),
    }

    out.push_str(&format!("{}:\n    {program_name} [OPTIONS]\n\n", heading("USAGE", color)));
    out.push_str(&format!("{}:\n", heading("OPTIONS", color)));

    // Left column first, so the right column can align to the widest entry.
    let rows: Vec<(String, &str)> = registry
        .iter()
        .map(|decl| (flag_column(decl), decl.help.as_str()))
        .collect();
    let column_width = rows
        .iter()
        .map(|(flags, _)| flags.width())
        .max()
        .unwrap_or(0);

    for (flags, help) in &rows {
        let padding = column_width.saturating_sub(flags.width());
        let flags = if color {
            format!("{}", flags.green())
        } else {
            flags.clone()
        };
        out.push_str(&format!("    {flags}{}  ", " ".repeat(padding)));

        let indent = column_width + 6;
        let wrap_at = if config.width > indent + 20 {
            config.width - indent
        } else {
            0
        };
        let lines = wrap_text(help, wrap_at);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push_str(&" ".repeat(indent));
            }
            out.push_str(line);
            out.push('\n');
        }
        if lines.is_empty() {
            out.push('\n');
        }
    }

    out
}

fn heading(text: &str, color: bool) -> String {
    if color {
        format!("{}", text.yellow().bold())
    } else {
        text.to_string()
    }
}

/// The left column for one declaration: short alias, flag, placeholder.
fn flag_column(decl: &OptionDeclaration) -> String {
    let mut out = String::new();
    match decl.short {
        Some(short) => out.push_str(&format!("-{short}, ")),
        None => out.push_str("    "),
    }
    out.push_str(&format!("--{}", decl.name));
    if let Some(placeholder) = value_placeholder(decl) {
        out.push(' ');
        out.push_str(&placeholder);
    }
    out
}

fn value_placeholder(decl: &OptionDeclaration) -> Option<String> {
    match decl.param_type {
        ParameterType::Boolean => None,
        ParameterType::String => Some("<string>".to_string()),
        ParameterType::Number => Some("<number>".to_string()),
        ParameterType::Array => Some("<value>".to_string()),
        ParameterType::Mixed => Some("<value>".to_string()),
        ParameterType::File | ParameterType::Directory => Some("<path>".to_string()),
        ParameterType::Map => {
            let keys: Vec<String> = decl
                .map_values
                .iter()
                .flat_map(|map| map.keys())
                .map(|key| key.to_lowercase())
                .collect();
            Some(format!("<{}>", keys.join("|")))
        }
    }
}

/// Greedy word wrap; `0` disables wrapping.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
