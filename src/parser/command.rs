//! Command block extraction.
//!
//! Turns one match of the command-block pattern into a [`Command`]:
//! suggestion definitions first, then the name fragments, then every body
//! line in order.

use regex::Captures;

use crate::error::{NuexternError, Result};
use crate::types::{Command, OptionOrArgument};

use super::location::Location;
use super::option::parse_option_line;
use super::suggestions::SuggestionScope;

/// Parse a matched command block.
///
/// `script` is the text the block was matched in; offsets in `caps` are
/// relative to it.
pub fn parse_command(script: &str, caps: &Captures<'_>) -> Result<Command> {
    let block_start = caps.get(0).map_or(0, |m| m.start());

    let scope = match caps.name("definitions") {
        Some(run) => SuggestionScope::from_definitions(script, run)?,
        None => SuggestionScope::new(),
    };

    let fragments = match (caps.name("name"), caps.name("quoted_name")) {
        (Some(name), _) => vec![name.as_str().to_string()],
        (None, Some(quoted)) => parse_fragments(quoted.as_str()),
        (None, None) => Vec::new(),
    };

    if fragments.is_empty() {
        return Err(NuexternError::MalformedCommand {
            message: "declaration has no command name".to_string(),
            location: Location::in_source(script, block_start),
        });
    }

    let description = caps.name("description").map(|d| d.as_str().to_string());

    let options_and_arguments = match caps.name("body") {
        Some(body) => parse_options(script, body.start(), body.as_str(), &scope)?,
        None => Vec::new(),
    };

    Ok(Command::new(fragments, description, options_and_arguments))
}

/// Split a command name on whitespace runs.
pub fn parse_fragments(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

/// Parse every body line, stopping at the first malformed one.
fn parse_options(
    script: &str,
    body_start: usize,
    body: &str,
    scope: &SuggestionScope,
) -> Result<Vec<OptionOrArgument>> {
    let mut options = Vec::new();
    let mut offset = body_start;

    for line in body.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);

        let location = Location::in_source(script, offset);
        options.push(parse_option_line(content, location, scope)?);

        offset += line.len();
    }

    Ok(options)
}
