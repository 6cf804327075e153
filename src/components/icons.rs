//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuClock as Clock, LuExternalLink as ExternalLink, LuFile as File,
        LuFileText as FileText, LuFolder as Folder, LuFolderOpen as FolderOpen,
        LuGitFork as Fork, LuMinus as Minimize, LuSquare as Maximize, LuStar as Star,
        LuTerminal as Terminal, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsClock as Clock, BsDashLg as Minimize,
        BsDiagram2 as Fork, BsFileEarmark as File, BsFileEarmarkText as FileText,
        BsFolder2Open as FolderOpen, BsFolderFill as Folder, BsSquare as Maximize,
        BsStarFill as Star, BsTerminal as Terminal, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER, Folder);
themed_icon!(FOLDER_OPEN, FolderOpen);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(TERMINAL, Terminal);
themed_icon!(CLOSE, Close);
themed_icon!(MINIMIZE, Minimize);
themed_icon!(MAXIMIZE, Maximize);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(STAR, Star);
themed_icon!(FORK, Fork);
themed_icon!(CLOCK, Clock);
