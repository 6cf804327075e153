//! Window chrome: close, minimize and maximize as an explicit state machine.

use crate::models::OutputLine;

/// Visible state of the terminal window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    /// Hidden in the dock.
    Minimized,
    /// Closed; only the desktop icon remains.
    Closed,
}

impl WindowState {
    /// Whether the window is on screen.
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Normal | Self::Maximized)
    }

    /// CSS class for the window element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Maximized => "maximized",
            Self::Minimized => "minimized",
            Self::Closed => "closed",
        }
    }
}

/// Current window state plus the visible state to return to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowChrome {
    state: WindowState,
    restore_to: WindowState,
}

impl WindowChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn close(&mut self) -> Option<OutputLine> {
        if self.state == WindowState::Closed {
            return None;
        }
        if self.state.is_visible() {
            self.restore_to = self.state;
        }
        self.state = WindowState::Closed;
        Some(OutputLine::warning("Connection closed by user"))
    }

    /// Desktop icon double-click.
    pub fn reopen(&mut self) -> Option<OutputLine> {
        if self.state != WindowState::Closed {
            return None;
        }
        self.state = self.restore_to;
        Some(OutputLine::success("Terminal session restored"))
    }

    /// Minimize button or Ctrl+M.
    ///
    /// Toggling back out of the dock is silent.
    pub fn toggle_minimize(&mut self) -> Option<OutputLine> {
        match self.state {
            WindowState::Normal | WindowState::Maximized => {
                self.restore_to = self.state;
                self.state = WindowState::Minimized;
                Some(OutputLine::warning("Window minimized to dock"))
            }
            WindowState::Minimized => {
                self.state = self.restore_to;
                None
            }
            WindowState::Closed => None,
        }
    }

    /// Dock icon click.
    pub fn restore_from_dock(&mut self) -> Option<OutputLine> {
        if self.state != WindowState::Minimized {
            return None;
        }
        self.state = self.restore_to;
        Some(OutputLine::info("Window restored from dock"))
    }

    /// Maximize button or Ctrl+Shift+M. Ignored unless visible.
    pub fn toggle_maximize(&mut self) -> Option<OutputLine> {
        match self.state {
            WindowState::Normal => {
                self.state = WindowState::Maximized;
                Some(OutputLine::info("Window maximized"))
            }
            WindowState::Maximized => {
                self.state = WindowState::Normal;
                Some(OutputLine::info("Window restored"))
            }
            WindowState::Minimized | WindowState::Closed => None,
        }
    }
}
