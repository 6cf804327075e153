//! Cursor over the interactive items of the active section.

use crate::config::GRID_STRIDE;
use crate::models::{ContentItem, ContentRole};

/// What activating a content item asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Open a URL.
    Follow(String),
    /// Run a host action by ID.
    Trigger(String),
    /// Reveal the next page of the project feed.
    LoadMore,
}

/// Selection state over a rebuildable list of [`ContentItem`]s.
///
/// The list is a snapshot of whatever the active section rendered last; it
/// becomes stale as soon as the section changes and must be rebuilt before
/// it is trusted again.
#[derive(Clone, Debug, Default)]
pub struct ContentCursor {
    items: Vec<ContentItem>,
    selected: Option<usize>,
    stale: bool,
}

impl ContentCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the item list and selects the first item (if any).
    pub fn rebuild(&mut self, items: Vec<ContentItem>) {
        self.selected = (!items.is_empty()).then_some(0);
        self.items = items;
        self.stale = false;
    }

    /// Marks the list as out of date and drops the selection.
    pub fn invalidate(&mut self) {
        self.stale = true;
        self.selected = None;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Re-selects `index` after a rebuild, clamped to the new length.
    pub fn restore(&mut self, index: usize) -> Option<usize> {
        let last = self.items.len().checked_sub(1)?;
        self.selected = Some(index.min(last));
        self.selected
    }

    /// Moves the selection; returns the new index, or `None` when empty.
    ///
    /// Inside a grid, vertical moves jump a whole row of [`GRID_STRIDE`]
    /// items. Movement clamps at both ends.
    pub fn navigate(&mut self, delta: isize, horizontal: bool) -> Option<usize> {
        let current = self.selected?;
        let in_grid = self.items[current].in_grid;
        let stride = if in_grid && !horizontal {
            GRID_STRIDE as isize
        } else {
            1
        };
        let last = self.items.len() - 1;
        let next = current
            .saturating_add_signed(delta.saturating_mul(stride))
            .min(last);
        self.selected = Some(next);
        self.selected
    }

    /// Selects `index` directly (pointer click).
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index < self.items.len() {
            self.selected = Some(index);
            self.selected
        } else {
            None
        }
    }

    /// Resolves what activating the selected item means.
    ///
    /// Links and cards without a target do nothing.
    pub fn activate_current(&self) -> Option<Activation> {
        let item = self.current()?;
        match item.role {
            ContentRole::Link | ContentRole::Card => item.target.clone().map(Activation::Follow),
            ContentRole::Button => item.target.clone().map(Activation::Trigger),
            ContentRole::LoadMore => Some(Activation::LoadMore),
        }
    }

    pub fn current(&self) -> Option<&ContentItem> {
        self.items.get(self.selected?)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cards: usize) -> Vec<ContentItem> {
        (0..cards)
            .map(|i| ContentItem::card(format!("repo-{}", i), Some(format!("https://r/{}", i))).in_grid())
            .collect()
    }

    fn links(count: usize) -> Vec<ContentItem> {
        (0..count)
            .map(|i| ContentItem::link(format!("link-{}", i), format!("https://l/{}", i)))
            .collect()
    }

    #[test]
    fn test_rebuild_selects_first() {
        let mut cursor = ContentCursor::new();
        cursor.rebuild(links(3));
        assert_eq!(cursor.selected(), Some(0));
        assert!(!cursor.is_stale());
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut cursor = ContentCursor::new();
        cursor.rebuild(vec![]);
        assert_eq!(cursor.selected(), None);
        assert_eq!(cursor.navigate(1, false), None);
        assert_eq!(cursor.navigate(-1, true), None);
        assert_eq!(cursor.activate_current(), None);
        assert_eq!(cursor.restore(3), None);
    }

    #[test]
    fn test_invalidate_drops_selection() {
        let mut cursor = ContentCursor::new();
        cursor.rebuild(links(4));
        cursor.navigate(3, false);
        cursor.invalidate();
        assert!(cursor.is_stale());
        assert_eq!(cursor.selected(), None);
        assert_eq!(cursor.restore(3), Some(3));
    }

    #[test]
    fn test_linear_movement_clamps() {
        let mut cursor = ContentCursor::new();
        cursor.rebuild(links(3));
        assert_eq!(cursor.navigate(-1, false), Some(0));
        assert_eq!(cursor.navigate(1, false), Some(1));
        assert_eq!(cursor.navigate(1, true), Some(2));
        assert_eq!(cursor.navigate(1, false), Some(2));
    }

    #[test]
    fn test_grid_vertical_stride() {
        let mut cursor = ContentCursor::new();
        cursor.rebuild(grid(6));
        assert_eq!(cursor.navigate(1, false), Some(2));
        assert_eq!(cursor.navigate(1, false), Some(4));
        assert_eq!(cursor.navigate(1, true), Some(5));
        assert_eq!(cursor.navigate(-1, false), Some(3));
        assert_eq!(cursor.navigate(-1, false), Some(1));
        assert_eq!(cursor.navigate(-1, false), Some(0));
    }

    #[test]
    fn test_grid_stride_clamps_at_end() {
        let mut cursor = ContentCursor::new();
        cursor.rebuild(grid(6));
        cursor.select(5);
        assert_eq!(cursor.navigate(1, false), Some(5));
    }

    #[test]
    fn test_stride_depends_on_current_item() {
        let mut items = links(2);
        items.extend(grid(4));
        let mut cursor = ContentCursor::new();
        cursor.rebuild(items);

        assert_eq!(cursor.navigate(1, false), Some(1));
        assert_eq!(cursor.navigate(1, false), Some(2));
        assert_eq!(cursor.navigate(1, false), Some(4));
    }

    #[test]
    fn test_restore_clamps() {
        let mut cursor = ContentCursor::new();
        cursor.rebuild(links(12));
        assert_eq!(cursor.restore(4), Some(4));
        cursor.rebuild(links(3));
        assert_eq!(cursor.restore(4), Some(2));
    }

    #[test]
    fn test_activation_by_role() {
        let mut cursor = ContentCursor::new();
        cursor.rebuild(vec![
            ContentItem::link("gh", "https://github.com"),
            ContentItem::button("copy", "copy-email"),
            ContentItem::card("repo", Some("https://github.com/u/repo".into())),
            ContentItem::card("no link", None),
            ContentItem::load_more("more"),
        ]);

        assert_eq!(
            cursor.activate_current(),
            Some(Activation::Follow("https://github.com".into()))
        );
        cursor.select(1);
        assert_eq!(
            cursor.activate_current(),
            Some(Activation::Trigger("copy-email".into()))
        );
        cursor.select(2);
        assert_eq!(
            cursor.activate_current(),
            Some(Activation::Follow("https://github.com/u/repo".into()))
        );
        cursor.select(3);
        assert_eq!(cursor.activate_current(), None);
        cursor.select(4);
        assert_eq!(cursor.activate_current(), Some(Activation::LoadMore));
    }

    #[test]
    fn test_select_out_of_range_keeps_selection() {
        let mut cursor = ContentCursor::new();
        cursor.rebuild(links(2));
        cursor.select(1);
        assert_eq!(cursor.select(9), None);
        assert_eq!(cursor.selected(), Some(1));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn selection_stays_in_bounds(
                len in 0usize..20,
                gridded in any::<bool>(),
                moves in proptest::collection::vec((-1isize..=1, any::<bool>()), 0..64),
            ) {
                let mut cursor = ContentCursor::new();
                cursor.rebuild(if gridded { grid(len) } else { links(len) });
                for (delta, horizontal) in moves {
                    match cursor.navigate(delta, horizontal) {
                        Some(index) => prop_assert!(index < len),
                        None => prop_assert_eq!(len, 0),
                    }
                }
            }

            #[test]
            fn two_vertical_grid_moves_offset_by_four(len in 9usize..40, start_seed in any::<usize>()) {
                let start = start_seed % (len - 4);
                let mut cursor = ContentCursor::new();
                cursor.rebuild(grid(len));
                cursor.select(start);
                cursor.navigate(1, false);
                let landed = cursor.navigate(1, false).unwrap();
                prop_assert_eq!(landed, start + 4);

                cursor.navigate(-1, false);
                prop_assert_eq!(cursor.navigate(-1, false), Some(start));
            }
        }
    }
}
