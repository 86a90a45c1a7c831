//! sqlparam command-line interface

use clap::{Parser, Subcommand};
use sqlparam::cli::{format, output, resolve};
use std::path::PathBuf;

/// Typed SQL query parameter tool
#[derive(Parser)]
#[command(name = "sqlparam")]
#[command(author, version, about = "Typed SQL query parameters from code fragments", long_about = None)]
struct Cli {
    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, pretty, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build typed parameters from code fragments
    Resolve {
        /// Parameters (name=code)
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Accept type names such as INT64 as typed NULLs
        #[arg(long)]
        permit_type: bool,
    },

    /// Format typed values for display
    Format {
        /// JSON file holding a typed value or a list of them (default: stdin)
        file: Option<PathBuf>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Set up color output
    output::setup_colors(&cli.color);

    let result = match cli.command {
        Commands::Resolve {
            params,
            permit_type,
        } => {
            let config = resolve::ResolveConfig {
                params,
                permit_type,
                verbose: cli.verbose,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            resolve::resolve(config)
        }

        Commands::Format { file } => {
            let config = format::FormatConfig {
                file,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            format::format(config)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
