//! User input - line sources and parsing of menu choices and positions

use crate::error::TaskError;
use anyhow::Result;
use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

/// Main menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Delete,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [Self::Add, Self::View, Self::Delete, Self::Quit];

    /// Menu number shown to the user
    pub fn number(&self) -> usize {
        match self {
            Self::Add => 1,
            Self::View => 2,
            Self::Delete => 3,
            Self::Quit => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add Task",
            Self::View => "View Tasks",
            Self::Delete => "Delete Task",
            Self::Quit => "Quit Application",
        }
    }
}

/// Parse a trimmed integer literal
pub fn parse_integer(text: &str) -> Result<i64, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyInput);
    }

    text.parse::<i64>().map_err(|_| TaskError::Parse {
        input: text.to_string(),
    })
}

/// Parse an integer and check it lies within `[min, max]`
pub fn parse_in_range(text: &str, min: usize, max: usize) -> Result<usize, TaskError> {
    let value = match parse_integer(text) {
        Ok(value) => value,
        // Too many digits for i64: a number, just a very large one
        Err(TaskError::Parse { input }) if is_overflowing_integer(&input) => {
            let value = if input.starts_with('-') {
                i64::MIN
            } else {
                i64::MAX
            };
            return Err(TaskError::Range { value, min, max });
        }
        Err(e) => return Err(e),
    };

    match usize::try_from(value) {
        Ok(v) if (min..=max).contains(&v) => Ok(v),
        _ => Err(TaskError::Range { value, min, max }),
    }
}

fn is_overflowing_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Parse a main menu selection
pub fn parse_choice(text: &str) -> Result<MenuChoice, TaskError> {
    let number = parse_in_range(text, 1, MenuChoice::ALL.len())?;
    Ok(MenuChoice::ALL[number - 1])
}

/// One read from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line of text, without its line terminator
    Text(String),
    /// Ctrl+C, or input closed
    Interrupted,
}

/// Blocking source of user input lines
pub trait LineSource {
    fn read_line(&mut self) -> Line;
}

/// Pre-recorded input; reports an interrupt once the lines run out
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> Line {
        match self.lines.pop_front() {
            Some(line) => Line::Text(line),
            None => Line::Interrupted,
        }
    }
}

enum InputEvent {
    Line(String),
    Closed,
    Interrupt,
}

/// Stdin-backed input that also turns Ctrl+C into [`Line::Interrupted`].
///
/// A reader thread forwards stdin lines and a watcher thread forwards the
/// interrupt signal; both feed one channel drained by the caller.
pub struct TerminalInput {
    rx: mpsc::Receiver<InputEvent>,
}

impl TerminalInput {
    /// Start the stdin reader and the Ctrl+C watcher
    pub fn spawn() -> Result<Self> {
        let (tx, rx) = mpsc::channel();

        let line_tx = tx.clone();
        thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || read_stdin(line_tx))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        thread::Builder::new()
            .name("ctrl-c-watcher".to_string())
            .spawn(move || match runtime.block_on(tokio::signal::ctrl_c()) {
                Ok(()) => {
                    log::debug!("Ctrl+C received");
                    let _ = tx.send(InputEvent::Interrupt);
                }
                Err(e) => log::warn!("Failed to listen for Ctrl+C: {}", e),
            })?;

        Ok(Self { rx })
    }
}

fn read_stdin(tx: mpsc::Sender<InputEvent>) {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    loop {
        let mut buf = Vec::new();
        match stdin.read_until(b'\n', &mut buf) {
            Ok(0) => {
                log::debug!("stdin closed");
                let _ = tx.send(InputEvent::Closed);
                return;
            }
            Ok(_) => {
                if tx.send(InputEvent::Line(decode_line(&buf))).is_err() {
                    return;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::warn!("Failed to read stdin: {}", e);
                let _ = tx.send(InputEvent::Closed);
                return;
            }
        }
    }
}

/// Strip the line terminator; bytes that are not UTF-8 become U+FFFD
fn decode_line(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_end_matches(['\n', '\r'])
        .to_string()
}

impl LineSource for TerminalInput {
    fn read_line(&mut self) -> Line {
        match self.rx.recv() {
            Ok(InputEvent::Line(line)) => Line::Text(line),
            Ok(InputEvent::Closed) | Ok(InputEvent::Interrupt) | Err(_) => Line::Interrupted,
        }
    }
}
