use miette::Diagnostic;
use thiserror::Error;

use crate::parser::Location;

/// Main error type for nuextern operations
#[derive(Error, Diagnostic, Debug)]
pub enum NuexternError {
    #[error("IO error: {0}")]
    #[diagnostic(code(nuextern::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(nuextern::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Suggestion definition is malformed at {location}: {content}")]
    #[diagnostic(code(nuextern::parse::suggestions))]
    MalformedSuggestionList {
        content: String,
        location: Location,
        #[help]
        help: Option<String>,
    },

    #[error("Option/argument is malformed at {location}: {line}")]
    #[diagnostic(code(nuextern::parse::option))]
    MalformedOptionLine {
        line: String,
        location: Location,
        #[help]
        help: Option<String>,
    },

    #[error("Unresolved suggestion reference \"{id}\" at {location}")]
    #[diagnostic(code(nuextern::parse::reference))]
    UnresolvedSuggestion {
        id: String,
        location: Location,
        #[help]
        help: Option<String>,
    },

    #[error("Command is malformed at {location}: {message}")]
    #[diagnostic(code(nuextern::parse::command))]
    MalformedCommand {
        message: String,
        location: Location,
    },

    #[error("Failed to retrieve script from {executable}: {message}")]
    #[diagnostic(code(nuextern::retrieve))]
    Retrieval {
        executable: std::path::PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Serialization error: {message}")]
    #[diagnostic(code(nuextern::serialize))]
    Serialize { message: String },
}

impl NuexternError {
    /// Whether this error was raised while parsing script text.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            NuexternError::MalformedSuggestionList { .. }
                | NuexternError::MalformedOptionLine { .. }
                | NuexternError::UnresolvedSuggestion { .. }
                | NuexternError::MalformedCommand { .. }
        )
    }

    /// Source location of a parse error, if any.
    pub fn location(&self) -> Option<Location> {
        match self {
            NuexternError::MalformedSuggestionList { location, .. }
            | NuexternError::MalformedOptionLine { location, .. }
            | NuexternError::UnresolvedSuggestion { location, .. }
            | NuexternError::MalformedCommand { location, .. } => Some(*location),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NuexternError>;
