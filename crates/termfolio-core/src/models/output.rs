//! Terminal output lines and the append-only output log.

/// Visual style class of an output line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// No style class.
    #[default]
    Plain,
    /// Neutral information (yellow).
    Info,
    /// Positive outcome (green).
    Success,
    /// Failure (red).
    Error,
    /// Something noteworthy but harmless (orange).
    Warning,
    /// Secondary text (dimmed).
    Comment,
    /// Headings and table headers.
    Highlight,
    /// Echo of a submitted command line.
    Prompt,
}

/// A single line of terminal output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub style: Style,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(s: impl Into<String>) -> Self {
        Self::new(s, Style::Plain)
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(s, Style::Info)
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(s, Style::Success)
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(s, Style::Error)
    }

    pub fn warning(s: impl Into<String>) -> Self {
        Self::new(s, Style::Warning)
    }

    pub fn comment(s: impl Into<String>) -> Self {
        Self::new(s, Style::Comment)
    }

    pub fn highlight(s: impl Into<String>) -> Self {
        Self::new(s, Style::Highlight)
    }

    /// Echo of a submitted command (`$ <line>`).
    pub fn prompt(input: &str) -> Self {
        Self::new(format!("$ {}", input), Style::Prompt)
    }

    /// An empty, unstyled line.
    pub fn empty() -> Self {
        Self::plain("")
    }
}

/// An output line with a log-unique ID for keyed rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub id: usize,
    pub line: OutputLine,
}

/// Ordered, append-only, unbounded output log.
///
/// Lines are only ever appended at the end or cleared all at once. IDs keep
/// increasing across [`OutputLog::clear`] so a renderer never sees the same
/// key twice.
#[derive(Clone, Debug, Default)]
pub struct OutputLog {
    entries: Vec<LogEntry>,
    next_id: usize,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutputLine) {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(LogEntry { id, line });
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Iterates over the lines, oldest first.
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &OutputLine> {
        self.entries.iter().map(|e| &e.line)
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.entries.last().map(|e| &e.line)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if any line has exactly this text and style.
    pub fn contains(&self, text: &str, style: Style) -> bool {
        self.lines().any(|l| l.text == text && l.style == style)
    }
}
