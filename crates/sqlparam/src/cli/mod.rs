//! CLI functionality for the sqlparam tool
//!
//! This module contains all CLI-related functionality including:
//! - Parameter resolution
//! - Value formatting
//! - Stderr logging
//! - Output formatting

pub mod format;
pub mod logger;
pub mod output;
pub mod resolve;
