//! Stderr logger for `--verbose`

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes log records to stderr, one line each, with a colored level label
#[derive(Debug, Clone, Copy)]
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    /// Debug output when verbose, warnings and errors otherwise
    pub fn new(verbose: bool) -> Self {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        };
        Self { level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let label = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn".yellow().bold(),
            Level::Info => "info".green(),
            Level::Debug => "debug".blue(),
            Level::Trace => "trace".dimmed(),
        };
        eprintln!("{} {} {}", label, record.target().dimmed(), record.args());
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(StderrLogger::new(true).enabled(&debug));
        assert!(!StderrLogger::new(false).enabled(&debug));

        let warn = Metadata::builder().level(Level::Warn).build();
        assert!(StderrLogger::new(false).enabled(&warn));
    }
}
