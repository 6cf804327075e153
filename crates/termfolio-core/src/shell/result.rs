//! Command execution result type.

use crate::models::{OutputLine, Section};

/// Result of executing a command.
///
/// Commands produce output and may ask the session to activate a section,
/// clear the log first, or append lines later.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Section to activate (`cd`, `cat`)
    pub navigate_to: Option<Section>,
    /// Clear the output log before appending `output`
    pub clear: bool,
    /// Lines to append after a delay, as `(delay_ms, line)`
    pub scheduled: Vec<(u32, OutputLine)>,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            ..Self::default()
        }
    }

    /// Create a result that activates `section` and prints `line`.
    pub fn navigate(section: Section, line: OutputLine) -> Self {
        Self {
            output: vec![line],
            navigate_to: Some(section),
            ..Self::default()
        }
    }

    /// Create a result that clears the log, then prints `lines`.
    pub fn cleared(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            clear: true,
            ..Self::default()
        }
    }

    /// Adds a line to append after `delay_ms`.
    pub fn schedule(mut self, delay_ms: u32, line: OutputLine) -> Self {
        self.scheduled.push((delay_ms, line));
        self
    }
}
