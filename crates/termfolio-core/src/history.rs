//! Bounded command history with replay-cursor semantics.

use std::collections::VecDeque;

use crate::config::MAX_COMMAND_HISTORY;

/// Submitted command lines, newest first.
///
/// The replay cursor walks from the newest entry (index 0) toward the oldest.
/// `None` means the user is not browsing history. Moving past either end
/// clamps; it never wraps.
#[derive(Clone, Debug)]
pub struct HistoryBuffer {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: Option<usize>,
}

impl HistoryBuffer {
    /// Creates an empty history holding at most `capacity` lines.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "HistoryBuffer capacity must be greater than 0");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            cursor: None,
        }
    }

    /// Records a submitted line as the newest entry and stops browsing.
    ///
    /// The oldest entry is dropped once the buffer is full.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
        self.entries.truncate(self.capacity);
        self.reset_cursor();
    }

    /// Moves one entry toward the oldest.
    ///
    /// Returns the text the input should now show, or `None` when nothing
    /// changes.
    pub fn older(&mut self) -> Option<String> {
        let next = match self.cursor {
            None if self.entries.is_empty() => return None,
            None => 0,
            Some(i) if i + 1 < self.entries.len() => i + 1,
            Some(_) => return None,
        };
        self.cursor = Some(next);
        self.entries.get(next).cloned()
    }

    /// Moves one entry toward the newest.
    ///
    /// Stepping past the newest entry leaves browsing mode and returns an
    /// empty line. Returns `None` when not browsing.
    pub fn newer(&mut self) -> Option<String> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some(String::new())
            }
            i => {
                self.cursor = Some(i - 1);
                self.entries.get(i - 1).cloned()
            }
        }
    }

    /// Stops browsing without touching the entries.
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entry at `index`, where 0 is the newest.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Iterates newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Up to `n` most recent entries, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &str> {
        self.iter().take(n)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(MAX_COMMAND_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(lines: &[&str]) -> HistoryBuffer {
        let mut history = HistoryBuffer::default();
        for line in lines {
            history.push(*line);
        }
        history
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _ = HistoryBuffer::new(0);
    }

    #[test]
    fn test_newest_first() {
        let history = filled(&["ls", "pwd", "whoami"]);
        let entries: Vec<_> = history.iter().collect();
        assert_eq!(entries, vec!["whoami", "pwd", "ls"]);
    }

    #[test]
    fn test_overflow_keeps_most_recent() {
        let mut history = HistoryBuffer::default();
        for i in 0..150 {
            history.push(format!("echo {}", i));
        }

        assert_eq!(history.len(), 100);
        assert_eq!(history.get(0), Some("echo 149"));
        assert_eq!(history.get(99), Some("echo 50"));
        assert_eq!(history.get(100), None);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let history = filled(&["ls", "ls"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_older_on_empty_is_noop() {
        let mut history = HistoryBuffer::default();
        assert_eq!(history.older(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_older_walks_toward_oldest_and_clamps() {
        let mut history = filled(&["first", "second"]);
        assert_eq!(history.older().as_deref(), Some("second"));
        assert_eq!(history.older().as_deref(), Some("first"));
        assert_eq!(history.older(), None);
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    fn test_newer_past_newest_clears_input() {
        let mut history = filled(&["ls"]);
        history.older();
        assert_eq!(history.newer().as_deref(), Some(""));
        assert_eq!(history.cursor(), None);
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn test_newer_walks_back_then_clears() {
        let mut history = filled(&["ls", "pwd"]);
        history.older();
        history.older();
        assert_eq!(history.newer().as_deref(), Some("pwd"));
        assert_eq!(history.newer().as_deref(), Some(""));
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_push_resets_cursor() {
        let mut history = filled(&["ls", "pwd"]);
        history.older();
        history.push("date");
        assert_eq!(history.cursor(), None);
        assert_eq!(history.older().as_deref(), Some("date"));
    }

    #[test]
    fn test_recent_limits_count() {
        let history = filled(&["a", "b", "c"]);
        let recent: Vec<_> = history.recent(2).collect();
        assert_eq!(recent, vec!["c", "b"]);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn bounded_to_capacity(count in 0usize..300) {
                let mut history = HistoryBuffer::default();
                for i in 0..count {
                    history.push(format!("cmd{}", i));
                }
                prop_assert_eq!(history.len(), count.min(MAX_COMMAND_HISTORY));
                if count > 0 {
                    let newest = format!("cmd{}", count - 1);
                    prop_assert_eq!(history.get(0), Some(newest.as_str()));
                }
            }

            #[test]
            fn replay_round_trip(
                lines in proptest::collection::vec("[a-z]{1,8}", 1..30),
                typed in "[a-z ]{0,10}",
                steps in 1usize..30,
            ) {
                let mut history = HistoryBuffer::default();
                for line in &lines {
                    history.push(line.clone());
                }
                let n = steps.min(history.len());
                let mut input = typed;
                for _ in 0..n {
                    if let Some(value) = history.older() {
                        input = value;
                    }
                }
                prop_assert_eq!(input.as_str(), lines[lines.len() - n].as_str());
                for _ in 0..n {
                    if let Some(value) = history.newer() {
                        input = value;
                    }
                }
                prop_assert_eq!(input, "");
                prop_assert_eq!(history.cursor(), None);
            }
        }
    }
}
