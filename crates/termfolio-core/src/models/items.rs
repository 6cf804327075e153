//! Host-supplied descriptors for the file explorer and the content area.

use serde::{Deserialize, Serialize};

use super::Section;

/// Whether a sidebar entry is a plain file or a folder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    #[default]
    File,
    Folder,
}

/// An entry in the file-explorer sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileItem {
    /// Display name (`about.md`, `projects/`).
    pub name: String,
    /// Section opened by this entry.
    pub section: Section,
    #[serde(default)]
    pub kind: FileKind,
    /// Initial expanded state (folders only).
    #[serde(default)]
    pub expanded: bool,
}

impl FileItem {
    pub fn file(name: impl Into<String>, section: Section) -> Self {
        Self {
            name: name.into(),
            section,
            kind: FileKind::File,
            expanded: false,
        }
    }

    pub fn folder(name: impl Into<String>, section: Section, expanded: bool) -> Self {
        Self {
            name: name.into(),
            section,
            kind: FileKind::Folder,
            expanded,
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == FileKind::Folder
    }
}

/// Interactive role of a content item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentRole {
    /// Followed by opening its target URL.
    Link,
    /// Triggered by its action ID.
    Button,
    /// Composite card; activation follows its first nested link.
    Card,
    /// Pagination affordance for the project feed.
    LoadMore,
}

/// An interactive element within the active section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub role: ContentRole,
    #[serde(default)]
    pub label: String,
    /// URL for links and cards, action ID for buttons.
    #[serde(default)]
    pub target: Option<String>,
    /// Whether the item sits in a two-column grid.
    #[serde(default)]
    pub in_grid: bool,
}

impl ContentItem {
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            role: ContentRole::Link,
            label: label.into(),
            target: Some(url.into()),
            in_grid: false,
        }
    }

    pub fn button(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            role: ContentRole::Button,
            label: label.into(),
            target: Some(action.into()),
            in_grid: false,
        }
    }

    /// A card whose nested link points at `url` (or nowhere).
    pub fn card(label: impl Into<String>, url: Option<String>) -> Self {
        Self {
            role: ContentRole::Card,
            label: label.into(),
            target: url,
            in_grid: false,
        }
    }

    pub fn load_more(label: impl Into<String>) -> Self {
        Self {
            role: ContentRole::LoadMore,
            label: label.into(),
            target: None,
            in_grid: false,
        }
    }

    /// Marks the item as a member of a grid container.
    pub fn in_grid(mut self) -> Self {
        self.in_grid = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_item_deserialize_defaults() {
        let item: FileItem =
            serde_json::from_str(r#"{"name":"about.md","section":"about"}"#).unwrap();
        assert_eq!(item, FileItem::file("about.md", Section::About));
        assert!(!item.is_folder());
    }

    #[test]
    fn test_content_item_builders() {
        let card = ContentItem::card("repo", Some("https://github.com/x/repo".into())).in_grid();
        assert_eq!(card.role, ContentRole::Card);
        assert!(card.in_grid);

        let more = ContentItem::load_more("more");
        assert_eq!(more.target, None);
        assert!(!more.in_grid);
    }

    #[test]
    fn test_content_role_kebab_case() {
        let role: ContentRole = serde_json::from_str("\"load-more\"").unwrap();
        assert_eq!(role, ContentRole::LoadMore);
    }
}
