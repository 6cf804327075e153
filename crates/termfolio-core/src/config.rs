//! Core configuration constants.
//!
//! Host-level settings (GitHub user, sidebar entries, static links) live in
//! the web crate's `site.toml`; everything here is fixed behavior.

// =============================================================================
// Identity
// =============================================================================

/// User name shown by `whoami`, `pwd` and the canned command texts.
pub const USER_NAME: &str = "0x5un5h1n3";

/// Tagline shown under the user name by `whoami`.
pub const USER_TAGLINE: &str =
    "Software engineer with a passion for technology and cybersecurity";

/// Home directory prefix for `pwd`.
pub const HOME_PATH: &str = "/home/0x5un5h1n3/portfolio";

// =============================================================================
// Shell
// =============================================================================

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Number of entries printed by the `history` command.
pub const HISTORY_DISPLAY_LIMIT: usize = 10;

/// Hint printed after unknown commands and `reset`.
pub const HELP_HINT: &str = "Type \"help\" for available commands";

/// Timed output for network commands (milliseconds).
pub mod timings {
    /// Delay before `curl` reports its response.
    pub const CURL_RESPONSE_MS: u32 = 1000;
    /// Interval between `ping` replies.
    pub const PING_INTERVAL_MS: u32 = 500;
    /// Number of `ping` replies.
    pub const PING_COUNT: u32 = 3;
    /// Simulated ping latency range in milliseconds (`min..max`).
    pub const PING_LATENCY_MS: std::ops::Range<f64> = 10.0..60.0;
}

/// Reference instant for `uptime`: 2024-01-01T00:00:00Z in Unix milliseconds.
pub const UPTIME_EPOCH_MS: f64 = 1_704_067_200_000.0;

/// Milliseconds per day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

// =============================================================================
// Navigation
// =============================================================================

/// Items per visual row in grid containers.
///
/// Fixed; it does not follow the rendered column count.
pub const GRID_STRIDE: usize = 2;

/// Number of repositories revealed per page of the project feed.
pub const PROJECT_BATCH_SIZE: usize = 6;

// =============================================================================
// Text Assets
// =============================================================================

/// `help` output. Lines containing ':' render highlighted.
pub const HELP_TEXT: &str = include_str!("../assets/help.txt");

/// `neofetch` output.
pub const NEOFETCH_TEXT: &str = include_str!("../assets/neofetch.txt");

/// `tree` output.
pub const TREE_TEXT: &str = include_str!("../assets/tree.txt");

/// Pseudo-file manifest behind `ls` and `find`. Independent of the sidebar.
pub const MANIFEST: [&str; 5] = ["welcome/", "projects/", "connect/", "about.md", "terminal.js"];
