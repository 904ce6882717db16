//! Command and option records produced by the parser.
//!
//! Both records serialize with exactly the field names used by the JSON
//! document: absent values become `null`, never empty strings or lists.
//!
//! # Example
//!
//! ```nu
//!   # Run the thing
//!   export extern "tool run" [
//!     --color(-c): string@"nu-complete tool color"  # When to colour output
//!     ...args: string
//!   ]
//! ```

use serde::{Deserialize, Serialize};

/// One parsed `export extern` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCommand")]
pub struct Command {
    /// Name tokens, one per whitespace-separated word. Never empty.
    fragments: Vec<String>,

    /// Comment line directly above the declaration.
    description: Option<String>,

    /// Option and argument lines in source order.
    options_and_arguments: Vec<OptionOrArgument>,
}

impl Command {
    /// Create a new command record.
    pub fn new(
        fragments: Vec<String>,
        description: Option<String>,
        options_and_arguments: Vec<OptionOrArgument>,
    ) -> Self {
        debug_assert!(!fragments.is_empty(), "a command has at least one fragment");
        Self {
            fragments,
            description,
            options_and_arguments,
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn options_and_arguments(&self) -> &[OptionOrArgument] {
        &self.options_and_arguments
    }

    /// The full command name, fragments joined with single spaces.
    pub fn name(&self) -> String {
        self.fragments.join(" ")
    }

    /// Look up an option or argument by its name or alias.
    pub fn option(&self, name: &str) -> Option<&OptionOrArgument> {
        self.options_and_arguments
            .iter()
            .find(|o| o.name == name || o.alias.as_deref() == Some(name))
    }
}

/// Unchecked deserialized form of [`Command`].
#[derive(Deserialize)]
struct RawCommand {
    fragments: Vec<String>,
    description: Option<String>,
    options_and_arguments: Vec<OptionOrArgument>,
}

impl TryFrom<RawCommand> for Command {
    type Error = String;

    fn try_from(raw: RawCommand) -> Result<Self, Self::Error> {
        if raw.fragments.is_empty() {
            return Err("command must have at least one fragment".to_string());
        }
        Ok(Command::new(
            raw.fragments,
            raw.description,
            raw.options_and_arguments,
        ))
    }
}

/// One flag or positional parameter of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionOrArgument {
    name: String,
    alias: Option<String>,
    variadic: bool,
    optional: bool,
    #[serde(rename = "type")]
    value_type: Option<String>,
    suggestions: Option<Vec<String>>,
    description: Option<String>,
}

impl OptionOrArgument {
    /// Create a record with only a name; everything else absent or false.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            variadic: false,
            optional: false,
            value_type: None,
            suggestions: None,
            description: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variadic(mut self, variadic: bool) -> Self {
        self.variadic = variadic;
        self
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    pub fn suggestions(&self) -> Option<&[String]> {
        self.suggestions.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
