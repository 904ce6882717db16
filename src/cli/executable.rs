//! Executable command implementation.
//!
//! Runs an executable to obtain its nushell completion script, then parses it.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::parser::parse_commands;
use crate::retrieval::{script_from_executable, DEFAULT_ARGS};

use super::emit::{emit, OutputArgs};

/// Retrieve the script from an executable, then parse it
#[derive(Args, Debug)]
pub struct ExecutableArgs {
    /// The executable to invoke
    #[arg(required = true)]
    pub executable: PathBuf,

    /// Argument passed to the executable instead of the default
    /// `generate-shell-completion nushell` (repeatable)
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ExecutableArgs {
    /// Arguments to invoke the executable with.
    pub fn invocation_args(&self) -> Vec<&str> {
        if self.args.is_empty() {
            DEFAULT_ARGS.to_vec()
        } else {
            self.args.iter().map(String::as_str).collect()
        }
    }
}

pub fn run(args: ExecutableArgs, printer: &Printer) -> Result<()> {
    let invocation = args.invocation_args();
    printer.status(
        "Retrieving",
        &format!("{} {}", display_path(&args.executable), invocation.join(" ")),
    );

    let script = script_from_executable(&args.executable, &invocation[..])?;
    let commands = parse_commands(&script)?;
    emit(&commands, &args.output, printer)
}
