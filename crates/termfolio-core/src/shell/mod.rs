//! Line-oriented command shell.
//!
//! - [`CommandKind`] / [`Command`]: the closed registry and a parsed line
//! - [`execute_command`]: one handler per command
//! - [`autocomplete`]: Tab completion over command names
//! - [`ShellInterpreter`]: input buffer, history replay and dispatch

mod autocomplete;
mod command;
mod execute;
mod result;

pub use autocomplete::{autocomplete, hint, AutocompleteResult};
pub use command::{Command, CommandKind};
pub use execute::{execute_command, interrupt, reset, ExecContext};
pub use result::CommandResult;

use rand::RngCore;

use crate::clock::Clock;
use crate::history::HistoryBuffer;
use crate::models::{OutputLine, Section};

/// Session state a submitted line runs against.
pub struct Environment<'a> {
    pub section: Section,
    pub clock: &'a dyn Clock,
    pub rng: &'a mut dyn RngCore,
}

/// A non-blank line that went through the shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// `$ <line>` prompt echo, appended before any clearing.
    pub echo: OutputLine,
    pub result: CommandResult,
}

/// The shell's input buffer and command history.
#[derive(Clone, Debug, Default)]
pub struct ShellInterpreter {
    history: HistoryBuffer,
    input: String,
}

impl ShellInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input buffer (user typing).
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Runs the input buffer and empties it.
    pub fn submit(&mut self, env: Environment<'_>) -> Option<Submission> {
        let line = std::mem::take(&mut self.input);
        self.execute(&line, env)
    }

    /// Runs one line.
    ///
    /// Blank lines do nothing. Everything else is recorded in history,
    /// echoed, and dispatched; command errors become output lines here and
    /// never reach the caller.
    pub fn execute(&mut self, line: &str, env: Environment<'_>) -> Option<Submission> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        self.history.push(line);

        let Environment {
            section,
            clock,
            rng,
        } = env;
        let mut ctx = ExecContext {
            history: &self.history,
            section,
            clock,
            rng,
        };
        let result = match Command::parse(line).and_then(|cmd| execute_command(&cmd, &mut ctx)) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("command {:?} failed: {}", line, e);
                CommandResult::output(e.to_lines())
            }
        };

        Some(Submission {
            echo: OutputLine::prompt(line),
            result,
        })
    }

    /// Tab: completes the input in place, or returns the candidate list.
    pub fn complete(&mut self) -> Vec<OutputLine> {
        match autocomplete(&self.input) {
            AutocompleteResult::Single(name) => {
                self.input = name;
                vec![]
            }
            AutocompleteResult::Multiple(names) => vec![
                OutputLine::info("Available commands:"),
                OutputLine::comment(names.join("  ")),
            ],
            AutocompleteResult::None => vec![],
        }
    }

    /// Up arrow. Returns `true` if the input changed.
    pub fn history_older(&mut self) -> bool {
        match self.history.older() {
            Some(line) => {
                self.input = line;
                true
            }
            None => false,
        }
    }

    /// Down arrow. Returns `true` if the input changed.
    pub fn history_newer(&mut self) -> bool {
        match self.history.newer() {
            Some(line) => {
                self.input = line;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::Style;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(shell: &mut ShellInterpreter, line: &str) -> Option<Submission> {
        let clock = FixedClock::new(0.0, "");
        let mut rng = StdRng::seed_from_u64(1);
        shell.execute(
            line,
            Environment {
                section: Section::Welcome,
                clock: &clock,
                rng: &mut rng,
            },
        )
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut shell = ShellInterpreter::new();
        assert!(run(&mut shell, "").is_none());
        assert!(run(&mut shell, "   \t").is_none());
        assert!(shell.history().is_empty());
    }

    #[test]
    fn test_submission_echoes_and_records() {
        let mut shell = ShellInterpreter::new();
        let sub = run(&mut shell, "  echo Hi ").unwrap();
        assert_eq!(sub.echo, OutputLine::new("$ echo Hi", Style::Prompt));
        assert_eq!(sub.result.output[0].text, "Hi");
        assert_eq!(shell.history().get(0), Some("echo Hi"));
    }

    #[test]
    fn test_unknown_command_reports_and_hints() {
        let mut shell = ShellInterpreter::new();
        let sub = run(&mut shell, "Frobnicate now").unwrap();
        let texts: Vec<_> = sub.result.output.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Command not found: Frobnicate",
                "Type \"help\" for available commands"
            ]
        );
        assert_eq!(shell.history().len(), 1);
    }

    #[test]
    fn test_errors_become_lines() {
        let mut shell = ShellInterpreter::new();
        let sub = run(&mut shell, "cd nowhere").unwrap();
        assert_eq!(
            sub.result.output,
            vec![OutputLine::error("Directory not found: nowhere")]
        );
        assert_eq!(sub.result.navigate_to, None);
    }

    #[test]
    fn test_history_sees_current_line() {
        let mut shell = ShellInterpreter::new();
        run(&mut shell, "pwd");
        let sub = run(&mut shell, "history").unwrap();
        let texts: Vec<_> = sub.result.output.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Command history:", "1  history", "2  pwd"]);
    }

    #[test]
    fn test_submit_takes_input() {
        let mut shell = ShellInterpreter::new();
        shell.set_input("whoami");
        let clock = FixedClock::new(0.0, "");
        let mut rng = StdRng::seed_from_u64(1);
        let sub = shell.submit(Environment {
            section: Section::Welcome,
            clock: &clock,
            rng: &mut rng,
        });
        assert!(sub.is_some());
        assert_eq!(shell.input(), "");
    }

    #[test]
    fn test_complete_single_fills_input() {
        let mut shell = ShellInterpreter::new();
        shell.set_input("neo");
        assert!(shell.complete().is_empty());
        assert_eq!(shell.input(), "neofetch");
    }

    #[test]
    fn test_complete_multiple_lists() {
        let mut shell = ShellInterpreter::new();
        shell.set_input("p");
        let lines = shell.complete();
        assert_eq!(lines[0], OutputLine::info("Available commands:"));
        assert_eq!(lines[1], OutputLine::comment("pwd  ps  ping"));
        assert_eq!(shell.input(), "p");
    }

    #[test]
    fn test_complete_none_is_silent() {
        let mut shell = ShellInterpreter::new();
        shell.set_input("zz");
        assert!(shell.complete().is_empty());
        assert_eq!(shell.input(), "zz");
    }

    #[test]
    fn test_history_replay_ends_on_empty_input() {
        let mut shell = ShellInterpreter::new();
        run(&mut shell, "ls");
        run(&mut shell, "pwd");
        shell.set_input("ec");

        assert!(shell.history_older());
        assert_eq!(shell.input(), "pwd");
        assert!(shell.history_older());
        assert_eq!(shell.input(), "ls");
        assert!(!shell.history_older());
        assert_eq!(shell.input(), "ls");

        assert!(shell.history_newer());
        assert_eq!(shell.input(), "pwd");
        assert!(shell.history_newer());
        assert_eq!(shell.input(), "");
        assert!(!shell.history_newer());
    }
}
