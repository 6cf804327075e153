//! File-explorer sidebar cursor.
//!
//! The sidebar is a flat, single-level list: there is no real directory
//! hierarchy, folders only carry an expanded/collapsed flag.

use crate::error::SessionError;
use crate::models::{FileItem, OutputLine, Section};

/// Result of opening a sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opened {
    /// Section to activate, if any.
    pub activate: Option<Section>,
    pub lines: Vec<OutputLine>,
}

/// Selected index into the host-supplied file list, plus folder state.
#[derive(Clone, Debug)]
pub struct FileExplorerCursor {
    items: Vec<FileItem>,
    selected: usize,
    /// Expanded flag per item, indexed like `items`.
    expanded: Vec<bool>,
}

impl FileExplorerCursor {
    /// Creates a cursor on the first item.
    pub fn new(items: Vec<FileItem>) -> Result<Self, SessionError> {
        if items.is_empty() {
            return Err(SessionError::NoFileItems);
        }
        let expanded = items.iter().map(|i| i.is_folder() && i.expanded).collect();
        Ok(Self {
            items,
            selected: 0,
            expanded,
        })
    }

    pub fn items(&self) -> &[FileItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> &FileItem {
        &self.items[self.selected]
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Index of the first entry that opens `section`.
    pub fn position_of(&self, section: Section) -> Option<usize> {
        self.items.iter().position(|i| i.section == section)
    }

    /// Moves the selection by `delta`, clamped to the list bounds.
    pub fn navigate(&mut self, delta: isize) -> usize {
        self.selected = self.clamp(self.selected.saturating_add_signed(delta));
        self.selected
    }

    /// Selects `index` and optionally opens it.
    ///
    /// Out-of-range indices are clamped to the last entry.
    pub fn select(&mut self, index: usize, open: bool) -> Option<Opened> {
        if index >= self.items.len() {
            log::warn!(
                "file index {} out of range ({} items)",
                index,
                self.items.len()
            );
        }
        self.selected = self.clamp(index);
        open.then(|| self.open_current())
    }

    /// Opens the selected entry.
    ///
    /// Files activate their section. Folders toggle; only expanding one
    /// activates its section.
    pub fn open_current(&mut self) -> Opened {
        let index = self.selected;
        let item = &self.items[index];
        let section = item.section;

        if !item.is_folder() {
            return Opened {
                activate: Some(section),
                lines: vec![OutputLine::success(format!("Opened file: {}", section))],
            };
        }

        let expanded = !self.expanded[index];
        self.expanded[index] = expanded;
        if expanded {
            Opened {
                activate: Some(section),
                lines: vec![OutputLine::info(format!("Expanded folder: {}", section))],
            }
        } else {
            Opened {
                activate: None,
                lines: vec![OutputLine::info(format!("Collapsed folder: {}", section))],
            }
        }
    }

    /// Selects and opens the first entry.
    pub fn go_to_parent(&mut self) -> Opened {
        self.selected = 0;
        let mut opened = self.open_current();
        opened
            .lines
            .push(OutputLine::info("Moved to parent directory"));
        opened
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.items.len() - 1)
    }
}
