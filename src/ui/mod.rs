//! UI layer - screen text and line formatting for the interactive shell

use crate::error::TaskError;
use crate::input::MenuChoice;
use std::io::{self, Write};

pub const MENU_PROMPT: &str = "Please select an option (1-4): ";
pub const ADD_PROMPT: &str = "Enter task description: ";
pub const PAUSE_PROMPT: &str = "\nPress Enter to continue...";

pub const ADD_DONE: &str = "Add task operation completed.";
pub const VIEW_DONE: &str = "View tasks operation completed.";
pub const DELETE_DONE: &str = "Delete task operation completed.";

const FAILURE_MARK: &str = "❌";

/// One-time welcome banner
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    let border = "=".repeat(50);
    writeln!(out, "{}", border)?;
    writeln!(out, "    Welcome to the Task Manager CLI!")?;
    writeln!(out, "{}", border)?;
    writeln!(out)
}

pub fn write_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n--- MAIN MENU ---")?;
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }
    writeln!(out, "{}", "-".repeat(20))
}

pub fn write_header(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n--- {} ---", title)
}

/// `<position>. <description>` per task
pub fn write_tasks(out: &mut impl Write, tasks: &[(usize, &str)]) -> io::Result<()> {
    for (position, description) in tasks {
        writeln!(out, "{}. {}", position, description)?;
    }
    Ok(())
}

pub fn write_success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "✓ {}", message)
}

pub fn write_failure(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", FAILURE_MARK, message)
}

pub fn write_goodbye(out: &mut impl Write) -> io::Result<()> {
    write_header(out, "GOODBYE")?;
    writeln!(out, "Thank you for using Task Manager!")?;
    writeln!(out, "Have a productive day! 🚀")?;
    writeln!(out, "Application shutting down...")
}

pub fn write_interrupted(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n\n⚠️  Application interrupted by user")?;
    writeln!(out, "Goodbye!")
}

/// Report for a main menu selection that could not be used
pub fn choice_error_message(err: &TaskError) -> String {
    match err {
        TaskError::EmptyInput => format!("Input Error: {}", err),
        TaskError::Parse { .. } => "Input Error: Please enter a valid number".to_string(),
        TaskError::Range { min, max, .. } => {
            format!("Selection Error: Choice must be between {} and {}", min, max)
        }
        other => format!("Unexpected error: {}", other),
    }
}

/// Report for a task number typed in the delete flow
pub fn position_error_message(err: &TaskError) -> String {
    match err {
        TaskError::EmptyInput => "Error: Please enter a task number".to_string(),
        TaskError::Parse { .. } => "Error: Please enter a valid number".to_string(),
        TaskError::Range { min, max, .. } => {
            format!("Error: Task number must be between {} and {}", min, max)
        }
        TaskError::Empty => "Error: No tasks available to delete".to_string(),
        other => format!("Error: {}", other),
    }
}
