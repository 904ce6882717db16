//! Document serialization and output.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{NuexternError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Command;

/// Document encoding.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

/// Output options shared by the parsing subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Write the document to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Serialize `commands` as a document in the requested format.
pub fn render(commands: &[Command], args: &OutputArgs) -> Result<String> {
    let serialize_error = |message: String| NuexternError::Serialize { message };

    match args.format {
        Format::Json if args.compact => {
            serde_json::to_string(commands).map_err(|e| serialize_error(e.to_string()))
        }
        Format::Json => {
            serde_json::to_string_pretty(commands).map_err(|e| serialize_error(e.to_string()))
        }
        Format::Yaml => serde_yaml::to_string(commands).map_err(|e| serialize_error(e.to_string())),
    }
}

/// Render `commands` and write them to the configured destination.
pub fn emit(commands: &[Command], args: &OutputArgs, printer: &Printer) -> Result<()> {
    if commands.is_empty() {
        printer.warning("Empty", "no export extern blocks found");
    } else {
        printer.status("Parsed", &plural(commands.len(), "command", "commands"));
    }

    let mut document = render(commands, args)?;
    if !document.ends_with('\n') {
        document.push('\n');
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &document).map_err(|e| NuexternError::Io {
                path: path.clone(),
                message: format!("Failed to write document: {}", e),
            })?;
            printer.info("Wrote", &display_path(path));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
