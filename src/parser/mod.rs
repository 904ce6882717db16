//! Parser for nushell `export extern` completion scripts.
//!
//! A script is scanned for command blocks in document order. Each block is
//! parsed independently: its suggestion definitions are only visible to its
//! own option lines.
//!
//! # Block Structure
//!
//! Each block has:
//! - Optional `def "<id>" [] { [...] }` suggestion definitions
//! - An optional `# description` line
//! - An `export extern <name> [` declaration, option lines, and a closing `]`
//!
//! Text that does not form a complete block is skipped.
//!
//! # Usage
//!
//! ```ignore
//! use nuextern::parser::parse_commands;
//!
//! let script = std::fs::read_to_string("completions.nu")?;
//! for command in parse_commands(&script)? {
//!     println!("{}", command.name());
//! }
//! ```

mod command;
mod grammar;
mod location;
mod option;
mod suggestions;

pub use command::{parse_command, parse_fragments};
pub use location::{offset_to_location, Location};
pub use option::{parse_option_line, NameToken};
pub use suggestions::{parse_value_list, SuggestionScope};

use crate::error::Result;
use crate::types::Command;

use grammar::COMMAND;

/// Parse every command block in `script`, in the order they appear.
///
/// Returns an empty list when the script holds no block. The first
/// malformed block aborts the whole parse.
pub fn parse_commands(script: &str) -> Result<Vec<Command>> {
    COMMAND
        .captures_iter(script)
        .map(|caps| parse_command(script, &caps))
        .collect()
}
