//! Script command implementation.
//!
//! Parses script text given literally, read from a file, or read from stdin.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Args;

use crate::error::{NuexternError, Result};
use crate::output::{display_path, Printer};
use crate::parser::parse_commands;

use super::emit::{emit, OutputArgs};

/// Parse a script
#[derive(Args, Debug)]
pub struct ScriptArgs {
    /// The script to parse (`-` reads stdin)
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub script: Option<String>,

    /// Read the script from a file
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: ScriptArgs, printer: &Printer) -> Result<()> {
    let script = load_script(&args, printer)?;
    let commands = parse_commands(&script)?;
    emit(&commands, &args.output, printer)
}

/// Resolve the script text from the literal argument, `--file`, or stdin.
fn load_script(args: &ScriptArgs, printer: &Printer) -> Result<String> {
    if let Some(path) = &args.file {
        printer.status("Reading", &display_path(path));
        return fs::read_to_string(path).map_err(|e| NuexternError::Io {
            path: path.clone(),
            message: format!("Failed to read file: {}", e),
        });
    }

    match args.script.as_deref() {
        Some("-") => {
            printer.status("Reading", "stdin");
            let mut script = String::new();
            io::stdin().read_to_string(&mut script)?;
            Ok(script)
        }
        Some(script) => Ok(script.to_string()),
        None => Ok(String::new()),
    }
}
