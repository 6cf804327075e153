//! Error types for the portfolio core.
//!
//! None of these ever escape a shell command: the dispatcher turns a
//! [`CommandError`] into styled output lines and keeps the session alive.
//!
//! - [`CommandError`] - User-facing shell command failures
//! - [`FetchError`] - Repository feed fetch and decode failures
//! - [`SessionError`] - Invalid session construction
//! - [`UnknownSection`] - Section id parse failure

use thiserror::Error;

use crate::config::HELP_HINT;
use crate::models::{OutputLine, Style};

/// Failure of a single shell command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command not found: {0}")]
    UnknownCommand(String),
    /// Required argument missing; carries the usage synopsis.
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("No files found matching: {0}")]
    NoMatches(String),
}

impl CommandError {
    /// Output style used when the error is shown in the terminal.
    pub fn style(&self) -> Style {
        match self {
            Self::NoMatches(_) => Style::Warning,
            _ => Style::Error,
        }
    }

    pub fn to_line(&self) -> OutputLine {
        OutputLine::new(self.to_string(), self.style())
    }

    /// The error line, followed by the help hint for unknown commands.
    pub fn to_lines(&self) -> Vec<OutputLine> {
        let mut lines = vec![self.to_line()];
        if matches!(self, Self::UnknownCommand(_)) {
            lines.push(OutputLine::comment(HELP_HINT));
        }
        lines
    }
}

/// Network and decoding errors for the repository feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent (offline, CORS, DNS).
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

/// Invalid arguments when building a [`crate::Session`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("file explorer requires at least one item")]
    NoFileItems,
}

/// A section id that is not one of the five known sections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);
