//! Format command implementation

use super::output::{self, OutputFormat};
use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use sqlparam_eval::format_typed;
use sqlparam_types::TypedValue;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Configuration for format command
pub struct FormatConfig {
    /// JSON input file; stdin when absent
    pub file: Option<PathBuf>,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Read typed values as JSON and print their display strings
pub fn format(config: FormatConfig) -> Result<()> {
    let input = match &config.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let cells = parse_cells(&input)?;
    let lines = format_cells(&cells)?;

    let content = match OutputFormat::from_name(config.output_format.as_deref().unwrap_or("pretty")) {
        OutputFormat::Pretty => lines.join("\n"),
        OutputFormat::Json => output::format_json(&JsonValue::from(lines), false)?,
        OutputFormat::Table => output::cells_table(&cells, &lines),
    };

    output::write_output(&content, config.output_file.as_deref())
}

/// Parse a single typed value or a JSON array of them
pub fn parse_cells(input: &str) -> Result<Vec<TypedValue>> {
    let json: JsonValue = serde_json::from_str(input).context("Input is not valid JSON")?;
    let cells = match json {
        JsonValue::Array(items) => items
            .into_iter()
            .map(serde_json::from_value::<TypedValue>)
            .collect::<Result<Vec<_>, _>>(),
        other => serde_json::from_value::<TypedValue>(other).map(|cell| vec![cell]),
    };
    cells.context("Input is not a typed value or a list of typed values")
}

/// Format each cell, naming the first one that fails
pub fn format_cells(cells: &[TypedValue]) -> Result<Vec<String>> {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| format_typed(cell).with_context(|| format!("Failed to format cell {}", i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparam_types::Type;

    #[test]
    fn test_parse_single_cell() {
        let cells = parse_cells(r#"{"type": {"code": "INT64"}, "value": "42"}"#).unwrap();
        assert_eq!(cells, vec![TypedValue::new(Type::Int64, "42")]);
    }

    #[test]
    fn test_parse_cell_list() {
        let cells = parse_cells(
            r#"[
                {"type": {"code": "BOOL"}, "value": true},
                {"type": {"code": "ARRAY", "arrayElementType": {"code": "STRING"}}, "value": null}
            ]"#,
        )
        .unwrap();
        assert_eq!(format_cells(&cells).unwrap(), vec!["true", "<null>"]);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = parse_cells(r#"{"type": {"code": "PROTO"}, "value": null}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown type: PROTO"), "{err:#}");
    }

    #[test]
    fn test_format_failure_names_cell() {
        let cells = vec![
            TypedValue::new(Type::Int64, "1"),
            TypedValue::new(Type::Date, "someday"),
        ];
        let err = format_cells(&cells).unwrap_err();
        assert_eq!(err.to_string(), "Failed to format cell 1");
    }
}
