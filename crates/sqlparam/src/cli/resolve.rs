//! Resolve command implementation

use super::logger::StderrLogger;
use super::output::{self, OutputFormat};
use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use sqlparam_eval::ParamBuilder;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration for resolve command
pub struct ResolveConfig {
    pub params: Vec<String>,
    pub permit_type: bool,
    pub verbose: bool,
    pub output_format: Option<String>,
    pub output_file: Option<PathBuf>,
}

/// Build typed parameters from `name=code` pairs and print them
pub fn resolve(config: ResolveConfig) -> Result<()> {
    let entries = parse_param_args(&config.params)?;

    if config.verbose {
        eprintln!(
            "Resolving {} parameter(s), type fragments {}",
            entries.len(),
            if config.permit_type {
                "permitted"
            } else {
                "not permitted"
            }
        );
    }

    let builder = ParamBuilder::new(config.permit_type)
        .with_logger(Arc::new(StderrLogger::new(config.verbose)));
    let params = builder.build(entries)?;

    let format = OutputFormat::from_name(config.output_format.as_deref().unwrap_or("pretty"));
    let content = match format {
        OutputFormat::Table => output::params_table(&params)?,
        OutputFormat::Json | OutputFormat::Pretty => {
            let json = serde_json::to_value(&params).context("Failed to serialize parameters")?;
            output::format_json(&json, format == OutputFormat::Pretty)?
        }
    };

    output::write_output(&content, config.output_file.as_deref())
}

/// Split `name=code` arguments at the first `=`
///
/// Names and codes are trimmed; a repeated name keeps its last code.
pub fn parse_param_args(params: &[String]) -> Result<IndexMap<String, String>> {
    let mut result = IndexMap::new();

    for param in params {
        let Some((name, code)) = param.split_once('=') else {
            bail!("Invalid parameter format: '{}'. Expected 'name=code'", param);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Missing parameter name in '{}'", param);
        }
        result.insert(name.to_string(), code.trim().to_string());
    }

    Ok(result)
}
