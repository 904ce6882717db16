pub mod completions;
pub mod emit;
pub mod executable;
pub mod script;

use clap::{Parser, Subcommand};

/// nuextern - Parse nushell extern completion scripts into JSON
#[derive(Parser, Debug)]
#[command(name = "nuextern")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a script given as text, a file, or stdin
    Script(script::ScriptArgs),

    /// Retrieve the script from an executable, then parse it
    Executable(executable::ExecutableArgs),

    /// Generate shell completions for nuextern itself
    Completions(completions::CompletionsArgs),
}
