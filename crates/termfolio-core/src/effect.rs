//! Side effects the host applies after the core mutates its state.

use crate::models::OutputLine;

/// A request from the core to the rendering layer.
///
/// The core never touches the DOM; every visible side effect beyond the
/// output log and the marks is expressed as one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Smooth-scroll the content item at this index to the viewport center.
    ScrollIntoView(usize),
    /// Scroll the page body by one step in the given direction.
    ScrollPage(i32),
    /// Open a URL in a new tab.
    FollowLink(String),
    /// Run a host-defined action (copy to clipboard, download).
    Trigger(String),
    FocusShell,
    BlurShell,
    /// Append `line` to the output log after `delay_ms` milliseconds.
    Schedule { delay_ms: u32, line: OutputLine },
}
