//! Option/argument line parsing.
//!
//! Each body line of a command block holds one flag or positional:
//!
//! ```nu
//!     --color(-c): string@"nu-complete tool color"  # When to colour output
//!     ...paths: path
//!     target?: string
//! ```

use regex::Captures;

use crate::error::{NuexternError, Result};
use crate::types::OptionOrArgument;

use super::grammar::OPTION_OR_ARGUMENT;
use super::location::Location;
use super::suggestions::SuggestionScope;

/// The name token of an option line, as chosen by the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameToken<'a> {
    /// Letters, digits, hyphens and underscores only: `--all`, `-a`, `file`.
    Flag(&'a str),
    /// A positional carrying at least one marker: `...paths`, `target?`.
    Positional {
        name: &'a str,
        variadic: bool,
        optional: bool,
    },
}

impl<'a> NameToken<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        if let Some(flag) = caps.name("flag") {
            return Some(NameToken::Flag(flag.as_str()));
        }

        caps.name("positional").map(|name| NameToken::Positional {
            name: name.as_str(),
            variadic: caps.name("variadic").is_some(),
            optional: caps.name("optional").is_some(),
        })
    }

    pub fn name(&self) -> &'a str {
        match *self {
            NameToken::Flag(name) | NameToken::Positional { name, .. } => name,
        }
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self, NameToken::Positional { variadic: true, .. })
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, NameToken::Positional { optional: true, .. })
    }
}

/// Parse one body line and resolve its suggestion reference against `scope`.
///
/// `location` points at the start of the line in the script and is attached
/// to any error.
pub fn parse_option_line(
    line: &str,
    location: Location,
    scope: &SuggestionScope,
) -> Result<OptionOrArgument> {
    let malformed = || NuexternError::MalformedOptionLine {
        line: line.to_string(),
        location,
        help: Some(
            "Expected four spaces, a name, then optional (alias), : type and # comment"
                .to_string(),
        ),
    };

    let caps = OPTION_OR_ARGUMENT.captures(line).ok_or_else(malformed)?;
    let token = NameToken::from_captures(&caps).ok_or_else(malformed)?;

    let mut option = OptionOrArgument::new(token.name())
        .with_variadic(token.is_variadic())
        .with_optional(token.is_optional());

    if let Some(alias) = caps.name("alias") {
        option = option.with_alias(alias.as_str());
    }

    if let Some(value_type) = caps.name("type") {
        option = option.with_type(value_type.as_str());
    }

    if let Some(id) = caps.name("suggestion_id") {
        let values = scope
            .resolve(id.as_str())
            .ok_or_else(|| NuexternError::UnresolvedSuggestion {
                id: id.as_str().to_string(),
                location: Location {
                    offset: location.offset + id.start(),
                    line: location.line,
                    column: location.column + line[..id.start()].chars().count() as u32,
                },
                help: Some(format!(
                    "Define it above the command: def \"{}\" [] {{ [\"value\"] }}",
                    id.as_str()
                )),
            })?;
        option = option.with_suggestions(values.to_vec());
    }

    if let Some(description) = caps.name("description") {
        option = option.with_description(description.as_str());
    }

    Ok(option)
}
