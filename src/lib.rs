//! Tasklist - interactive in-memory task list manager
//!
//! A menu-driven shell for adding, viewing and deleting short text tasks.
//! Tasks live only for the duration of one run.

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod shell;
pub mod ui;

// Re-exports
pub use config::ShellConfig;
pub use core::{AdmissionRules, TaskStore};
pub use error::{Rejection, TaskError};
pub use input::{Line, LineSource, MenuChoice, ScriptedInput, TerminalInput};
pub use shell::{Shell, ShellState};

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
