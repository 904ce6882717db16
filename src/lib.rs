//! nuextern - nushell extern completion script parser
//!
//! A library for turning `export extern` declarations, as emitted by
//! `generate-shell-completion nushell`, into serializable command records.

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod retrieval;
pub mod types;

pub use error::{NuexternError, Result};
pub use parser::{parse_commands, Location, SuggestionScope};
pub use retrieval::{default_script_from_executable, script_from_executable};
pub use types::{Command, OptionOrArgument};
