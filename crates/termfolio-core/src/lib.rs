//! Keyboard navigation and command shell for a terminal-style portfolio.
//!
//! The crate is host-independent: it knows nothing about the DOM. A host
//! feeds it key presses and clicks through [`Session`], renders what the
//! session exposes, and applies the returned [`Effect`]s.
//!
//! - [`navigation`]: file/content mode and key routing
//! - [`explorer`], [`content`]: the two selection cursors
//! - [`shell`]: command registry, handlers and completion
//! - [`history`]: bounded command history with replay
//! - [`projects`]: paginated repository feed
//! - [`window`]: window chrome state machine

pub mod clock;
pub mod config;
pub mod content;
pub mod effect;
pub mod error;
pub mod explorer;
pub mod history;
pub mod input;
pub mod models;
pub mod navigation;
pub mod projects;
pub mod session;
pub mod shell;
pub mod window;

pub use clock::{Clock, FixedClock};
pub use content::{Activation, ContentCursor};
pub use effect::Effect;
pub use error::{CommandError, FetchError, SessionError, UnknownSection};
pub use explorer::FileExplorerCursor;
pub use history::HistoryBuffer;
pub use input::{Focus, Key, KeyInput};
pub use models::{
    ContentItem, ContentRole, FileItem, FileKind, LogEntry, OutputLine, OutputLog, Section, Style,
};
pub use navigation::{NavigationMode, NavigationModeController};
pub use projects::{FeedState, ProjectFeed, Repository};
pub use session::{KeyOutcome, Session};
pub use shell::{CommandKind, ShellInterpreter};
pub use window::{WindowChrome, WindowState};
