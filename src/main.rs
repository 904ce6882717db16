use clap::Parser;
use miette::Result;
use nuextern::cli::{Cli, Commands};
use nuextern::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Script(args) => nuextern::cli::script::run(args, &printer)?,
        Commands::Executable(args) => nuextern::cli::executable::run(args, &printer)?,
        Commands::Completions(args) => nuextern::cli::completions::run(args)?,
    }

    Ok(())
}
