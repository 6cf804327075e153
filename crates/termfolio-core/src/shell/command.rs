//! The closed registry of shell commands.

use crate::error::CommandError;

/// Every command the shell understands, in registry order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Clear,
    Ls,
    Cd,
    Cat,
    Pwd,
    Whoami,
    Date,
    Uptime,
    Ps,
    Top,
    History,
    Exit,
    Reset,
    Echo,
    Tree,
    Find,
    Grep,
    Vim,
    Nano,
    Ssh,
    Curl,
    Ping,
    Chmod,
    Sudo,
    Neofetch,
}

impl CommandKind {
    /// All commands in registry order. Completion lists follow this order.
    pub const ALL: [Self; 26] = [
        Self::Help,
        Self::Clear,
        Self::Ls,
        Self::Cd,
        Self::Cat,
        Self::Pwd,
        Self::Whoami,
        Self::Date,
        Self::Uptime,
        Self::Ps,
        Self::Top,
        Self::History,
        Self::Exit,
        Self::Reset,
        Self::Echo,
        Self::Tree,
        Self::Find,
        Self::Grep,
        Self::Vim,
        Self::Nano,
        Self::Ssh,
        Self::Curl,
        Self::Ping,
        Self::Chmod,
        Self::Sudo,
        Self::Neofetch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Clear => "clear",
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Cat => "cat",
            Self::Pwd => "pwd",
            Self::Whoami => "whoami",
            Self::Date => "date",
            Self::Uptime => "uptime",
            Self::Ps => "ps",
            Self::Top => "top",
            Self::History => "history",
            Self::Exit => "exit",
            Self::Reset => "reset",
            Self::Echo => "echo",
            Self::Tree => "tree",
            Self::Find => "find",
            Self::Grep => "grep",
            Self::Vim => "vim",
            Self::Nano => "nano",
            Self::Ssh => "ssh",
            Self::Curl => "curl",
            Self::Ping => "ping",
            Self::Chmod => "chmod",
            Self::Sudo => "sudo",
            Self::Neofetch => "neofetch",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Command names in registry order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }
}

/// A parsed command line: the command and its raw arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandKind,
    /// Arguments split on whitespace, case preserved.
    pub args: Vec<String>,
}

impl Command {
    /// Parses a non-blank line. Only the command name is case-folded.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let kind = CommandKind::lookup(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        Ok(Self {
            kind,
            args: tokens.map(str::to_string).collect(),
        })
    }

    /// First argument, or a usage error.
    pub fn required_arg(&self, usage: &'static str) -> Result<&str, CommandError> {
        self.args
            .first()
            .map(String::as_str)
            .ok_or(CommandError::Usage(usage))
    }

    /// All arguments joined by single spaces.
    pub fn joined_args(&self) -> String {
        self.args.join(" ")
    }
}
