//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a quiz bank.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("topic marker at line {line}, but the file does not start with a topic")]
    MalformedTopicDeclaration { line: usize },

    #[error("invalid answer {letter} at line {line}: expected \"{letter}. <text>\"")]
    InvalidAnswerLine { line: usize, letter: char },

    #[error("invalid correct answer at line {line}: expected a single answer letter")]
    InvalidCorrectAnswerLine { line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Line the format violation was found on, if the error is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedTopicDeclaration { line }
            | Self::InvalidAnswerLine { line, .. }
            | Self::InvalidCorrectAnswerLine { line } => Some(*line),
            Self::InvalidArgument(_) | Self::Io(_) => None,
        }
    }
}
