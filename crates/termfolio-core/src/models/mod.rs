//! Data models shared by the navigation and shell components.
//!
//! - [`Section`] - The five top-level content views
//! - [`FileItem`], [`ContentItem`] - Host-supplied navigation descriptors
//! - [`OutputLine`], [`OutputLog`] - Styled terminal output

mod items;
mod output;
mod section;

pub use items::{ContentItem, ContentRole, FileItem, FileKind};
pub use output::{LogEntry, OutputLine, OutputLog, Style};
pub use section::Section;
