//! Suggestion definitions local to one command block.
//!
//! A block may be preceded by any number of
//!
//! ```nu
//!   def "nu-complete tool color" [] {
//!     [ "always" "never" "auto" ]
//!   }
//! ```
//!
//! sub-blocks. Their values are collected into a [`SuggestionScope`] that
//! lives only while the block's options are resolved.

use std::collections::HashMap;

use regex::Match;

use crate::error::{NuexternError, Result};

use super::grammar::{SUGGESTION_DEFINITION, SUGGESTION_VALUE, SUGGESTION_VALUES};
use super::location::Location;

/// Suggestion id -> ordered values, scoped to a single command block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionScope {
    definitions: HashMap<String, Vec<String>>,
}

impl SuggestionScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the scope from the run of definition sub-blocks captured in
    /// front of a command declaration.
    ///
    /// `script` is the full source, used only to locate errors. A later
    /// definition with an id already in scope replaces the earlier one.
    pub fn from_definitions(script: &str, run: Match<'_>) -> Result<Self> {
        let mut scope = Self::new();
        let mut covered = 0;

        for caps in SUGGESTION_DEFINITION.captures_iter(run.as_str()) {
            let (Some(whole), Some(id), Some(values)) =
                (caps.get(0), caps.name("id"), caps.name("values"))
            else {
                continue;
            };

            // Definitions must tile the run exactly; anything else means ids
            // and value lists cannot be paired one to one.
            if whole.start() != covered {
                return Err(NuexternError::MalformedCommand {
                    message: "suggestion definitions could not be paired with their values"
                        .to_string(),
                    location: Location::in_source(script, run.start() + covered),
                });
            }
            covered = whole.end();

            let location = Location::in_source(script, run.start() + values.start());
            let parsed = parse_value_list(values.as_str(), location)?;
            scope.insert(id.as_str(), parsed);
        }

        if covered != run.len() {
            return Err(NuexternError::MalformedCommand {
                message: "suggestion definitions could not be paired with their values"
                    .to_string(),
                location: Location::in_source(script, run.start() + covered),
            });
        }

        Ok(scope)
    }

    /// Add or replace a definition.
    pub fn insert(&mut self, id: impl Into<String>, values: Vec<String>) {
        self.definitions.insert(id.into(), values);
    }

    /// Look up the values for a suggestion id.
    pub fn resolve(&self, id: &str) -> Option<&[String]> {
        self.definitions.get(id).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Parse a bracketed value list like `["red" "green"]` into its unquoted
/// values, in order.
pub fn parse_value_list(content: &str, location: Location) -> Result<Vec<String>> {
    if !SUGGESTION_VALUES.is_match(content) {
        return Err(NuexternError::MalformedSuggestionList {
            content: content.to_string(),
            location,
            help: Some("Use a bracketed list of quoted strings: [\"a\" \"b\"]".to_string()),
        });
    }

    Ok(SUGGESTION_VALUE
        .captures_iter(content)
        .filter_map(|caps| caps.name("value"))
        .map(|value| value.as_str().to_string())
        .collect())
}
