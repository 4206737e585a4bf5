//! Task store - ordered in-memory list of task descriptions

use crate::error::{Rejection, TaskError};

/// Extra rules a description must pass before it is stored.
///
/// The default admits any non-blank text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdmissionRules {
    /// Maximum description length in characters, after trimming
    pub max_length: Option<usize>,
    /// Refuse descriptions matching an existing task, ignoring case
    pub reject_duplicates: bool,
}

/// Ordered task list.
///
/// Positions are 1-based everywhere in the public API. Every stored
/// description is trimmed and non-empty.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<String>,
    rules: AdmissionRules,
}

impl TaskStore {
    /// Create an empty store with default rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given admission rules
    pub fn with_rules(rules: AdmissionRules) -> Self {
        Self {
            tasks: Vec::new(),
            rules,
        }
    }

    /// Append a task. Surrounding whitespace is dropped before storing.
    pub fn add(&mut self, description: &str) -> Result<(), TaskError> {
        let description = description.trim();
        self.check(description).map_err(TaskError::Validation)?;

        log::debug!("Adding task #{}: {}", self.tasks.len() + 1, description);
        self.tasks.push(description.to_string());
        Ok(())
    }

    fn check(&self, description: &str) -> Result<(), Rejection> {
        if description.is_empty() {
            return Err(Rejection::Blank);
        }

        if let Some(max) = self.rules.max_length {
            if description.chars().count() > max {
                return Err(Rejection::TooLong { max });
            }
        }

        if self.rules.reject_duplicates {
            let lowered = description.to_lowercase();
            if self.tasks.iter().any(|t| t.to_lowercase() == lowered) {
                return Err(Rejection::Duplicate);
            }
        }

        Ok(())
    }

    /// Current tasks paired with their 1-based positions
    pub fn list(&self) -> Result<Vec<(usize, &str)>, TaskError> {
        if self.tasks.is_empty() {
            return Err(TaskError::Empty);
        }

        Ok(self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| (i + 1, task.as_str()))
            .collect())
    }

    /// Remove and return the task at `position`; later tasks shift down by one
    pub fn remove(&mut self, position: usize) -> Result<String, TaskError> {
        if self.tasks.is_empty() {
            return Err(TaskError::Empty);
        }

        if position < 1 || position > self.tasks.len() {
            return Err(TaskError::Range {
                value: i64::try_from(position).unwrap_or(i64::MAX),
                min: 1,
                max: self.tasks.len(),
            });
        }

        let removed = self.tasks.remove(position - 1);
        log::debug!("Removed task #{}: {}", position, removed);
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
