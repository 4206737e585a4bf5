//! Interactive shell - menu loop, action dispatch and error reporting

use crate::config::ShellConfig;
use crate::core::TaskStore;
use crate::error::TaskError;
use crate::input::{self, Line, LineSource, MenuChoice};
use crate::ui;
use anyhow::Result;
use std::io::Write;

/// Shell lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Terminated,
}

/// How a single menu interaction ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Continue,
    Quit,
    Interrupted,
}

/// Menu-driven task list shell.
///
/// Owns the task store for the whole session. Reads from any [`LineSource`]
/// and writes to any [`Write`], so tests can drive it with scripted input.
/// Only I/O failures on the output escape as errors; everything the user
/// types wrong is reported and the loop carries on.
pub struct Shell<I, W> {
    store: TaskStore,
    input: I,
    out: W,
    config: ShellConfig,
    state: ShellState,
}

impl<I: LineSource, W: Write> Shell<I, W> {
    /// Create a shell with an empty store built from the config rules
    pub fn new(input: I, out: W, config: ShellConfig) -> Self {
        let store = TaskStore::with_rules(config.rules());
        Self::with_store(store, input, out, config)
    }

    pub fn with_store(store: TaskStore, input: I, out: W, config: ShellConfig) -> Self {
        Self {
            store,
            input,
            out,
            config,
            state: ShellState::Running,
        }
    }

    /// Run until the user quits or interrupts
    pub fn run(&mut self) -> Result<()> {
        log::info!("Shell started");

        if self.config.banner {
            ui::write_banner(&mut self.out)?;
        }

        while self.state == ShellState::Running {
            self.step()?;
        }

        self.out.flush()?;
        log::info!("Shell terminated with {} task(s) in memory", self.store.len());
        Ok(())
    }

    /// One menu interaction: show the menu, read a choice, act on it
    pub fn step(&mut self) -> Result<()> {
        if self.state == ShellState::Terminated {
            return Ok(());
        }

        ui::write_menu(&mut self.out)?;
        let outcome = match self.prompt(ui::MENU_PROMPT)? {
            Line::Interrupted => Outcome::Interrupted,
            Line::Text(text) => match input::parse_choice(&text) {
                Ok(choice) => self.dispatch(choice)?,
                Err(err) => {
                    log::debug!("Rejected menu input {:?}: {}", text, err);
                    ui::write_failure(&mut self.out, &ui::choice_error_message(&err))?;
                    writeln!(self.out, "Please try again with a valid option.")?;
                    Outcome::Continue
                }
            },
        };

        match outcome {
            Outcome::Continue => self.acknowledge(),
            Outcome::Quit => {
                self.state = ShellState::Terminated;
                self.acknowledge()
            }
            Outcome::Interrupted => self.interrupt(),
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Outcome> {
        log::debug!("Menu choice: {:?}", choice);
        match choice {
            MenuChoice::Add => self.scoped(ui::ADD_DONE, Self::add_task),
            MenuChoice::View => self.scoped(ui::VIEW_DONE, Self::view_tasks),
            MenuChoice::Delete => self.scoped(ui::DELETE_DONE, Self::delete_task),
            MenuChoice::Quit => {
                ui::write_goodbye(&mut self.out)?;
                log::info!("Quit requested");
                Ok(Outcome::Quit)
            }
        }
    }

    /// Run an action flow, then print its completion notice no matter how
    /// the flow ended.
    fn scoped(
        &mut self,
        done: &str,
        action: impl FnOnce(&mut Self) -> Result<Outcome>,
    ) -> Result<Outcome> {
        let outcome = action(self);
        writeln!(self.out, "{}", done)?;
        outcome
    }

    fn add_task(&mut self) -> Result<Outcome> {
        ui::write_header(&mut self.out, "ADD TASK")?;
        let Line::Text(text) = self.prompt(ui::ADD_PROMPT)? else {
            return Ok(Outcome::Interrupted);
        };

        match self.store.add(&text) {
            Ok(()) => ui::write_success(
                &mut self.out,
                &format!("Task '{}' added successfully!", text.trim()),
            )?,
            Err(err) => {
                log::debug!("Task rejected: {}", err);
                ui::write_failure(&mut self.out, &format!("Error: {}", err))?;
            }
        }
        Ok(Outcome::Continue)
    }

    fn view_tasks(&mut self) -> Result<Outcome> {
        ui::write_header(&mut self.out, "YOUR TASKS")?;
        match self.store.list() {
            Ok(tasks) => {
                ui::write_tasks(&mut self.out, &tasks)?;
                writeln!(self.out, "\nTotal tasks: {}", tasks.len())?;
            }
            Err(_) => ui::write_failure(&mut self.out, "No tasks available to display")?,
        }
        Ok(Outcome::Continue)
    }

    fn delete_task(&mut self) -> Result<Outcome> {
        ui::write_header(&mut self.out, "DELETE TASK")?;
        let count = match self.store.list() {
            Ok(tasks) => {
                writeln!(self.out, "Current tasks:")?;
                ui::write_tasks(&mut self.out, &tasks)?;
                tasks.len()
            }
            Err(err) => {
                ui::write_failure(&mut self.out, &ui::position_error_message(&err))?;
                return Ok(Outcome::Continue);
            }
        };

        let prompt = format!("\nEnter task number to delete (1-{}): ", count);
        let Line::Text(text) = self.prompt(&prompt)? else {
            return Ok(Outcome::Interrupted);
        };

        let removed = input::parse_in_range(&text, 1, count)
            .and_then(|position| self.store.remove(position));
        match removed {
            Ok(task) => ui::write_success(
                &mut self.out,
                &format!("Task '{}' deleted successfully!", task),
            )?,
            Err(err) => self.report_position_error(&text, &err)?,
        }
        Ok(Outcome::Continue)
    }

    fn report_position_error(&mut self, text: &str, err: &TaskError) -> Result<()> {
        log::debug!("Rejected task number {:?}: {}", text, err);
        ui::write_failure(&mut self.out, &ui::position_error_message(err))?;
        Ok(())
    }

    /// Block for the acknowledgement keypress, if enabled
    fn acknowledge(&mut self) -> Result<()> {
        if !self.config.pause {
            return Ok(());
        }

        if self.prompt(ui::PAUSE_PROMPT)? == Line::Interrupted
            && self.state == ShellState::Running
        {
            return self.interrupt();
        }
        Ok(())
    }

    fn interrupt(&mut self) -> Result<()> {
        log::info!("Interrupted by user");
        ui::write_interrupted(&mut self.out)?;
        self.state = ShellState::Terminated;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Line> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(self.input.read_line())
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Give back the output sink, e.g. to inspect a captured transcript
    pub fn into_output(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;

    fn quiet() -> ShellConfig {
        ShellConfig {
            banner: false,
            pause: false,
            ..Default::default()
        }
    }

    fn run_script(lines: &[&str], config: ShellConfig) -> (ShellState, usize, String) {
        let mut shell = Shell::new(ScriptedInput::new(lines.iter().copied()), Vec::new(), config);
        shell.run().unwrap();
        let state = shell.state();
        let len = shell.store().len();
        let out = String::from_utf8(shell.into_output()).unwrap();
        (state, len, out)
    }

    #[test]
    fn test_view_empty() {
        let (state, _, out) = run_script(&["2", "4"], quiet());
        assert!(out.contains("❌ No tasks available to display"));
        assert!(out.contains("View tasks operation completed."));
        assert_eq!(state, ShellState::Terminated);
    }

    #[test]
    fn test_add_then_view() {
        let (_, len, out) = run_script(&["1", "Write report", "2", "4"], quiet());
        assert_eq!(len, 1);
        assert!(out.contains("✓ Task 'Write report' added successfully!"));
        assert!(out.contains("1. Write report\n"));
        assert!(out.contains("Total tasks: 1"));
    }

    #[test]
    fn test_add_blank_reports_and_continues() {
        let (_, len, out) = run_script(&["1", "   ", "4"], quiet());
        assert_eq!(len, 0);
        assert!(out.contains("❌ Error: Task description cannot be empty"));
        assert!(out.contains("Add task operation completed."));
    }

    #[test]
    fn test_invalid_choices() {
        let (state, len, out) = run_script(&["abc", "9", "", "4"], quiet());
        assert_eq!(len, 0);
        assert_eq!(state, ShellState::Terminated);
        assert!(out.contains("❌ Input Error: Please enter a valid number"));
        assert!(out.contains("❌ Selection Error: Choice must be between 1 and 4"));
        assert!(out.contains("❌ Input Error: Empty input is not allowed"));
        assert_eq!(out.matches("Please try again with a valid option.").count(), 3);
        assert_eq!(out.matches("--- MAIN MENU ---").count(), 4);
    }

    #[test]
    fn test_delete_flow() {
        let script = ["1", "a", "1", "b", "1", "c", "3", "2", "2", "4"];
        let (_, len, out) = run_script(&script, quiet());
        assert_eq!(len, 2);
        assert!(out.contains("Enter task number to delete (1-3): "));
        assert!(out.contains("✓ Task 'b' deleted successfully!"));
        assert!(out.contains("1. a\n2. c\n\nTotal tasks: 2"));
    }

    #[test]
    fn test_delete_errors() {
        let script = ["3", "1", "x", "3", "", "3", "5", "3", "abc", "4"];
        let (_, len, out) = run_script(&script, quiet());
        assert_eq!(len, 1);
        assert!(out.contains("❌ Error: No tasks available to delete"));
        assert!(out.contains("❌ Error: Please enter a task number"));
        assert!(out.contains("❌ Error: Task number must be between 1 and 1"));
        assert!(out.contains("❌ Error: Please enter a valid number"));
        assert_eq!(out.matches("Delete task operation completed.").count(), 4);
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut shell = Shell::new(ScriptedInput::new(["4", "1", "never"]), Vec::new(), quiet());
        shell.run().unwrap();
        assert_eq!(shell.state(), ShellState::Terminated);
        let out = String::from_utf8(shell.into_output()).unwrap();
        assert!(out.contains("Thank you for using Task Manager!"));
        assert!(out.ends_with("Application shutting down...\n"));
    }

    #[test]
    fn test_interrupt_at_menu_skips_pause() {
        let config = ShellConfig {
            banner: false,
            ..Default::default()
        };
        let (state, _, out) = run_script(&[], config);
        assert_eq!(state, ShellState::Terminated);
        assert!(out.contains("Application interrupted by user\n"));
        assert!(!out.contains("Ctrl+C"));
        assert!(out.ends_with("Goodbye!\n"));
        assert!(!out.contains("Press Enter to continue..."));
    }

    #[test]
    fn test_interrupt_inside_flow_still_prints_footer() {
        let (state, _, out) = run_script(&["1"], quiet());
        assert_eq!(state, ShellState::Terminated);
        let footer = out.find("Add task operation completed.").unwrap();
        let goodbye = out.find("Application interrupted").unwrap();
        assert!(footer < goodbye);
    }

    #[test]
    fn test_pause_after_each_interaction() {
        let config = ShellConfig {
            banner: false,
            ..Default::default()
        };
        let (state, _, out) = run_script(&["2", "", "4", ""], config);
        assert_eq!(state, ShellState::Terminated);
        assert_eq!(out.matches("Press Enter to continue...").count(), 2);
        assert!(!out.contains("interrupted"));
    }

    #[test]
    fn test_interrupt_at_pause_terminates() {
        let config = ShellConfig {
            banner: false,
            ..Default::default()
        };
        let (state, _, out) = run_script(&["2"], config);
        assert_eq!(state, ShellState::Terminated);
        assert_eq!(out.matches("Press Enter to continue...").count(), 1);
        assert_eq!(out.matches("--- MAIN MENU ---").count(), 1);
        let pause = out.find("Press Enter to continue...").unwrap();
        let notice = out.find("Application interrupted by user").unwrap();
        assert!(pause < notice);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_banner_printed_once() {
        let config = ShellConfig {
            pause: false,
            ..Default::default()
        };
        let (_, _, out) = run_script(&["2", "2", "4"], config);
        assert_eq!(out.matches("Welcome to the Task Manager CLI!").count(), 1);
        assert!(out.starts_with(&"=".repeat(50)));
    }

    #[test]
    fn test_config_rules_reach_store() {
        let config = ShellConfig {
            max_length: Some(5),
            reject_duplicates: true,
            ..quiet()
        };
        let script = ["1", "milk", "1", "MILK", "1", "too long", "4"];
        let (_, len, out) = run_script(&script, config);
        assert_eq!(len, 1);
        assert!(out.contains("❌ Error: This task already exists"));
        assert!(out.contains("❌ Error: Task description is too long (max 5 characters)"));
    }

    #[test]
    fn test_step_after_termination_is_noop() {
        let mut shell = Shell::new(ScriptedInput::new(["4", "2"]), Vec::new(), quiet());
        shell.run().unwrap();
        shell.step().unwrap();
        assert_eq!(shell.state(), ShellState::Terminated);
        assert!(!String::from_utf8(shell.into_output())
            .unwrap()
            .contains("YOUR TASKS"));
    }
}
