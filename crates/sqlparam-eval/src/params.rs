//! Parameter map builder
//!
//! Each entry maps a parameter name to a code fragment. With type fragments
//! permitted, a fragment is first tried as a type (yielding a typed NULL);
//! if it does not parse as one, it is evaluated as a literal.

use crate::literal::evaluate;
use crate::resolver::resolve_type;
use indexmap::IndexMap;
use log::{Level, Log, Metadata, Record};
use sqlparam_diagnostics::Result;
use sqlparam_parser::{parse_expression, parse_type};
use sqlparam_types::TypedValue;
use std::fmt;
use std::sync::Arc;

const LOG_TARGET: &str = "sqlparam::params";

/// A logger that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLog;

impl Log for SilentLog {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        false
    }

    fn log(&self, _record: &Record<'_>) {}

    fn flush(&self) {}
}

/// Builds typed query parameters from code fragments
#[derive(Clone)]
pub struct ParamBuilder {
    permit_type: bool,
    logger: Arc<dyn Log>,
}

impl ParamBuilder {
    pub fn new(permit_type: bool) -> Self {
        Self {
            permit_type,
            logger: Arc::new(SilentLog),
        }
    }

    /// Route debug output to `logger`
    pub fn with_logger(mut self, logger: Arc<dyn Log>) -> Self {
        self.logger = logger;
        self
    }

    pub fn permit_type(&self) -> bool {
        self.permit_type
    }

    /// Build all entries, stopping at the first failure
    ///
    /// The result keeps input order. A repeated name keeps its first position
    /// and its last value. Errors are attributed to the failing entry's name.
    pub fn build<I, K, V>(&self, entries: I) -> Result<IndexMap<String, TypedValue>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut params = IndexMap::new();
        for (name, code) in entries {
            let name = name.into();
            let typed = self
                .build_param(code.as_ref())
                .map_err(|err| err.in_param(name.as_str()))?;
            params.insert(name, typed);
        }
        Ok(params)
    }

    /// Build a single fragment
    ///
    /// A fragment that parses as a type but fails to resolve is an error; it
    /// does not fall back to literal evaluation.
    pub fn build_param(&self, code: &str) -> Result<TypedValue> {
        if self.permit_type {
            match parse_type(code) {
                Ok(spec) => {
                    self.debug(format_args!("{:?} parsed as type {}", code, spec));
                    let typed = resolve_type(&spec)?;
                    self.log_result(&typed);
                    return Ok(typed);
                }
                Err(err) => {
                    self.debug(format_args!("{:?} is not a type: {}", code, err));
                }
            }
        }

        let expr = parse_expression(code)?;
        self.debug(format_args!("{:?} parsed as literal {}", code, expr));
        let typed = evaluate(&expr)?;
        self.log_result(&typed);
        Ok(typed)
    }

    fn log_result(&self, typed: &TypedValue) {
        if let Ok(wire) = serde_json::to_string(&typed.ty) {
            self.debug(format_args!("resolved type {}", wire));
        }
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        let metadata = Metadata::builder()
            .level(Level::Debug)
            .target(LOG_TARGET)
            .build();
        if !self.logger.enabled(&metadata) {
            return;
        }
        self.logger.log(
            &Record::builder()
                .metadata(metadata)
                .args(args)
                .module_path_static(Some(module_path!()))
                .file_static(Some(file!()))
                .line(Some(line!()))
                .build(),
        );
    }
}

impl Default for ParamBuilder {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for ParamBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamBuilder")
            .field("permit_type", &self.permit_type)
            .finish_non_exhaustive()
    }
}

/// Build a parameter map with a silent builder
pub fn build_params<I, K, V>(entries: I, permit_type: bool) -> Result<IndexMap<String, TypedValue>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    ParamBuilder::new(permit_type).build(entries)
}
