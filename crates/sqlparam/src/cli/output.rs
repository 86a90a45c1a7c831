//! Output formatting utilities

use anyhow::{Context, Result};
use colored::Colorize;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use sqlparam_diagnostics::CodecError;
use sqlparam_eval::format_typed;
use sqlparam_types::TypedValue;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Pretty,
    Table,
}

impl OutputFormat {
    /// Parse a format name; unknown names fall back to `Pretty`
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "table" => Self::Table,
            _ => Self::Pretty,
        }
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stderr().is_terminal()),
    }
}

/// Format an error for display, with the diagnostic help for codec errors
pub fn format_error(error: &anyhow::Error) -> String {
    let label = "Error:".red().bold();
    let Some(codec) = error.downcast_ref::<CodecError>() else {
        return format!("{} {:#}", label, error);
    };

    // Codec errors already render their cause chain
    let diagnostic = codec.to_diagnostic();
    let mut message = format!("{} {} [{}]", label, codec, diagnostic.code);
    if let Some(help) = diagnostic.help {
        message.push_str(&format!("\n  {} {}", "help:".cyan().bold(), help));
    }
    message
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", content)
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{}", content);
    }
    Ok(())
}

/// Format JSON value for output
pub fn format_json(value: &JsonValue, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

#[derive(Tabled)]
struct ParamRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    ty: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render a parameter map as a table of name, SQL type and display value
pub fn params_table(params: &IndexMap<String, TypedValue>) -> Result<String> {
    let rows = params
        .iter()
        .map(|(name, typed)| {
            Ok(ParamRow {
                name: name.clone(),
                ty: typed.ty.to_string(),
                value: format_typed(typed)
                    .with_context(|| format!("Failed to format parameter {}", name))?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Table::new(rows).with(Style::modern()).to_string())
}

#[derive(Tabled)]
struct CellRow {
    #[tabled(rename = "Type")]
    ty: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render formatted cells as a table of SQL type and display value
pub fn cells_table(cells: &[TypedValue], lines: &[String]) -> String {
    let rows = cells.iter().zip(lines).map(|(cell, line)| CellRow {
        ty: cell.ty.to_string(),
        value: line.clone(),
    });
    Table::new(rows).with(Style::modern()).to_string()
}
