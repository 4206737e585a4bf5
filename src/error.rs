//! Error kinds for task list operations and user input

use std::fmt;
use thiserror::Error;

/// Why a task description was refused by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing left after trimming
    Blank,
    /// Longer than the configured maximum (in characters)
    TooLong { max: usize },
    /// Same text, ignoring case, as an existing task
    Duplicate,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "Task description cannot be empty"),
            Self::TooLong { max } => {
                write!(f, "Task description is too long (max {} characters)", max)
            }
            Self::Duplicate => write!(f, "This task already exists"),
        }
    }
}

/// Recoverable errors raised by the store and the input parsers.
///
/// None of these are fatal: the shell reports them and keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// No text where input was required
    #[error("Empty input is not allowed")]
    EmptyInput,

    /// Text is not an integer literal
    #[error("'{input}' is not a valid number")]
    Parse { input: String },

    /// Integer outside the bound valid for the current context
    #[error("{value} is not between {min} and {max}")]
    Range { value: i64, min: usize, max: usize },

    /// The list has no elements to act on
    #[error("No tasks available")]
    Empty,

    /// Task description refused
    #[error("{0}")]
    Validation(Rejection),
}
