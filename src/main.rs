//! json-tidy CLI.
//!
//! One-shot batch conversion: read a JSON file, write a normalized copy
//! with sorted keys and fixed indentation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use json_tidy::reformat::{self, DEFAULT_INDENT, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "json-tidy")]
#[command(about = "Rewrite a JSON file with sorted keys and fixed indentation", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the raw JSON input file
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the formatted JSON
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Number of spaces per indentation level
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match reformat::run(&cli.input, &cli.output, cli.indent) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("json-tidy: {err}");
            ExitCode::FAILURE
        }
    }
}
