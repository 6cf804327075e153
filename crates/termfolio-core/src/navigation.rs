//! Exclusive file/content navigation mode and the keyboard routing table.

use crate::input::{Focus, Key, KeyInput};
use crate::models::OutputLine;

/// Which list directional keys currently drive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavigationMode {
    /// The file-explorer sidebar.
    #[default]
    Files,
    /// Interactive items inside the active section.
    Content,
}

/// What a page-level key press asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Move the file cursor by `delta`.
    StepFile(isize),
    /// Open the selected file, then switch to content mode.
    OpenFileAndEnter,
    /// Jump to the first file and open it.
    ParentDirectory,
    /// Open (or toggle) the selected file.
    OpenFile,
    /// Switch to content mode.
    EnterContent,
    /// Move the content cursor.
    StepContent { delta: isize, horizontal: bool },
    /// Activate the selected content item.
    ActivateContent,
    /// Force file mode.
    EnterFiles,
    /// Focus the shell and swallow the key.
    FocusShell,
    /// Focus the shell and let the key reach it.
    TypeIntoShell,
}

/// Owns the navigation mode and maps page-level keys to actions.
///
/// Keys pressed while the shell input has focus are never routed here; they
/// belong to the text field.
#[derive(Clone, Debug, Default)]
pub struct NavigationModeController {
    mode: NavigationMode,
}

impl NavigationModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Sets the mode and returns its announcement line.
    ///
    /// The line is produced even when the mode does not change.
    pub fn set_mode(&mut self, mode: NavigationMode) -> OutputLine {
        if self.mode != mode {
            log::debug!("navigation mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        match mode {
            NavigationMode::Files => OutputLine::info("Switched to file explorer mode"),
            NavigationMode::Content => OutputLine::info("Switched to content navigation mode"),
        }
    }

    /// Escape: always back to the file explorer.
    pub fn handle_escape(&mut self) -> OutputLine {
        self.set_mode(NavigationMode::Files)
    }

    /// Arrow keys and Tab.
    pub fn handle_directional(&self, key: Key, focus: Focus) -> Option<NavAction> {
        if focus == Focus::Shell {
            return None;
        }
        let action = match (self.mode, key) {
            (NavigationMode::Files, Key::Up) => NavAction::StepFile(-1),
            (NavigationMode::Files, Key::Down) => NavAction::StepFile(1),
            (NavigationMode::Files, Key::Right) => NavAction::OpenFileAndEnter,
            (NavigationMode::Files, Key::Left) => NavAction::ParentDirectory,
            (NavigationMode::Files, Key::Tab) => NavAction::EnterContent,
            (NavigationMode::Content, Key::Up) => NavAction::StepContent {
                delta: -1,
                horizontal: false,
            },
            (NavigationMode::Content, Key::Down) => NavAction::StepContent {
                delta: 1,
                horizontal: false,
            },
            (NavigationMode::Content, Key::Right) => NavAction::StepContent {
                delta: 1,
                horizontal: true,
            },
            (NavigationMode::Content, Key::Left) => NavAction::StepContent {
                delta: -1,
                horizontal: true,
            },
            (NavigationMode::Content, Key::Tab) => NavAction::FocusShell,
            _ => return None,
        };
        Some(action)
    }

    /// Enter and Space.
    pub fn handle_activate(&self, focus: Focus) -> Option<NavAction> {
        match (focus, self.mode) {
            (Focus::Shell, _) => None,
            (Focus::Page, NavigationMode::Files) => Some(NavAction::OpenFile),
            (Focus::Page, NavigationMode::Content) => Some(NavAction::ActivateContent),
        }
    }

    /// Full routing table for a key press without Ctrl.
    pub fn route(&self, input: &KeyInput) -> Option<NavAction> {
        if input.focus == Focus::Shell {
            return None;
        }
        match input.key {
            Key::Up | Key::Down | Key::Left | Key::Right | Key::Tab => {
                self.handle_directional(input.key, input.focus)
            }
            Key::Enter | Key::Space => self.handle_activate(input.focus),
            Key::Escape => Some(NavAction::EnterFiles),
            Key::Char('`') | Key::Char('~') => Some(NavAction::FocusShell),
            Key::Char(_) => Some(NavAction::TypeIntoShell),
            Key::Other => None,
        }
    }
}
