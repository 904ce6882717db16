//! Core domain types for nuextern.
//!
//! - `Command` - one `export extern` declaration
//! - `OptionOrArgument` - one flag or positional line of a declaration

mod command;

pub use command::{Command, OptionOrArgument};
