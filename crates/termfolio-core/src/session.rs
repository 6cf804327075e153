//! The portfolio session: one owner for all navigation and shell state.
//!
//! The host builds a [`Session`] once, stores it in a signal, and funnels
//! every input event through it. Each operation mutates the session and
//! returns the [`Effect`]s the host still has to apply.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::Clock;
use crate::content::{Activation, ContentCursor};
use crate::effect::Effect;
use crate::error::SessionError;
use crate::explorer::{FileExplorerCursor, Opened};
use crate::history::HistoryBuffer;
use crate::input::{Focus, Key, KeyInput};
use crate::models::{ContentItem, FileItem, OutputLine, OutputLog, Section};
use crate::navigation::{NavAction, NavigationMode, NavigationModeController};
use crate::projects::{ProjectFeed, Repository};
use crate::shell::{self, CommandResult, Environment, ShellInterpreter, Submission};
use crate::window::{WindowChrome, WindowState};

/// Outcome of a key press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The key was handled; the host should suppress its default action.
    pub consumed: bool,
    pub effects: Vec<Effect>,
}

impl KeyOutcome {
    fn consumed(effects: Vec<Effect>) -> Self {
        Self {
            consumed: true,
            effects,
        }
    }

    fn ignored() -> Self {
        Self::default()
    }
}

pub struct Session {
    nav: NavigationModeController,
    explorer: FileExplorerCursor,
    content: ContentCursor,
    shell: ShellInterpreter,
    output: OutputLog,
    section: Section,
    /// Static content items per section, as rendered by the host.
    catalog: HashMap<Section, Vec<ContentItem>>,
    projects: ProjectFeed,
    window: WindowChrome,
    clock: Box<dyn Clock>,
    rng: StdRng,
}

impl Session {
    /// Starts on the welcome section with the first file selected.
    pub fn new(files: Vec<FileItem>, clock: impl Clock + 'static) -> Result<Self, SessionError> {
        let explorer = FileExplorerCursor::new(files)?;
        log::info!("session started with {} file items", explorer.len());
        Ok(Self {
            nav: NavigationModeController::new(),
            explorer,
            content: ContentCursor::new(),
            shell: ShellInterpreter::new(),
            output: OutputLog::new(),
            section: Section::Welcome,
            catalog: HashMap::new(),
            projects: ProjectFeed::new(),
            window: WindowChrome::new(),
            clock: Box::new(clock),
            rng: StdRng::from_entropy(),
        })
    }

    /// Replaces the random source with a seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn mode(&self) -> NavigationMode {
        self.nav.mode()
    }

    pub fn active_section(&self) -> Section {
        self.section
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.section == section
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn explorer(&self) -> &FileExplorerCursor {
        &self.explorer
    }

    pub fn content(&self) -> &ContentCursor {
        &self.content
    }

    pub fn projects(&self) -> &ProjectFeed {
        &self.projects
    }

    pub fn window(&self) -> WindowState {
        self.window.state()
    }

    pub fn history(&self) -> &HistoryBuffer {
        self.shell.history()
    }

    pub fn input(&self) -> &str {
        self.shell.input()
    }

    /// Remaining characters of the first command the input is a prefix of.
    pub fn input_hint(&self) -> Option<&'static str> {
        shell::hint(self.shell.input())
    }

    /// Whether file `index` carries the keyboard mark. Only in file mode.
    pub fn file_marked(&self, index: usize) -> bool {
        self.nav.mode() == NavigationMode::Files && self.explorer.selected() == index
    }

    /// Whether content item `index` carries the keyboard mark. Only in
    /// content mode.
    pub fn content_marked(&self, index: usize) -> bool {
        self.nav.mode() == NavigationMode::Content && self.content.selected() == Some(index)
    }

    // =========================================================================
    // Host Content
    // =========================================================================

    /// Appends host-produced lines (boot banner and the like).
    pub fn print(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.output.extend(lines);
    }

    /// Registers the navigable items of a static section.
    pub fn set_section_items(&mut self, section: Section, items: Vec<ContentItem>) -> Vec<Effect> {
        self.catalog.insert(section, items);
        if section == self.section {
            self.refresh_content()
        } else {
            vec![]
        }
    }

    /// The repository fetch succeeded.
    pub fn projects_loaded(&mut self, repos: Vec<Repository>) -> Vec<Effect> {
        self.projects.load(repos);
        log::info!("project feed loaded: {} repositories", self.projects.total());
        self.refresh_projects()
    }

    /// The repository fetch failed.
    pub fn projects_failed(&mut self) -> Vec<Effect> {
        self.projects.fail();
        self.output
            .push(OutputLine::error("Failed to load GitHub repositories"));
        self.refresh_projects()
    }

    /// Reveals the next page of repositories.
    pub fn load_more_projects(&mut self) -> Vec<Effect> {
        match self.projects.load_more() {
            Some(line) => {
                self.output.push(line);
                self.refresh_projects()
            }
            None => vec![],
        }
    }

    fn refresh_projects(&mut self) -> Vec<Effect> {
        if self.section == Section::Projects {
            self.refresh_content()
        } else {
            vec![]
        }
    }

    fn items_for(&self, section: Section) -> Vec<ContentItem> {
        match section {
            Section::Projects => self.projects.content_items(),
            other => self.catalog.get(&other).cloned().unwrap_or_default(),
        }
    }

    /// Rebuilds the content list after the active section re-rendered.
    ///
    /// In content mode the previous index survives, clamped to the new
    /// length, and is scrolled back into view.
    fn refresh_content(&mut self) -> Vec<Effect> {
        let previous = self.content.selected();
        let items = self.items_for(self.section);
        self.content.rebuild(items);
        if self.nav.mode() != NavigationMode::Content {
            return vec![];
        }
        previous
            .map_or(self.content.selected(), |index| self.content.restore(index))
            .map(Effect::ScrollIntoView)
            .into_iter()
            .collect()
    }

    fn rebuild_if_stale(&mut self) {
        if self.content.is_stale() || self.content.is_empty() {
            let items = self.items_for(self.section);
            self.content.rebuild(items);
        }
    }

    // =========================================================================
    // Sections and Modes
    // =========================================================================

    /// Shows `section`. Returns `false` if it was already active.
    pub fn activate_section(&mut self, section: Section) -> bool {
        if self.section == section {
            return false;
        }
        log::debug!("section {} -> {}", self.section, section);
        self.section = section;
        if self.nav.mode() == NavigationMode::Content {
            let items = self.items_for(section);
            self.content.rebuild(items);
        } else {
            self.content.invalidate();
        }
        true
    }

    /// Shows `section` and moves the explorer selection onto its entry
    /// without toggling folders.
    pub fn open_section(&mut self, section: Section) -> bool {
        if let Some(index) = self.explorer.position_of(section) {
            self.explorer.select(index, false);
        }
        self.activate_section(section)
    }

    /// The shell input received focus.
    pub fn shell_focused(&mut self) {
        self.activate_section(Section::Terminal);
    }

    fn enter_content(&mut self) -> Vec<Effect> {
        let line = self.nav.set_mode(NavigationMode::Content);
        let items = self.items_for(self.section);
        self.content.rebuild(items);
        self.output.push(line);
        self.content
            .selected()
            .map(Effect::ScrollIntoView)
            .into_iter()
            .collect()
    }

    fn enter_files(&mut self) {
        let line = self.nav.set_mode(NavigationMode::Files);
        self.output.push(line);
    }

    fn apply_opened(&mut self, opened: Opened) {
        self.output.extend(opened.lines);
        if let Some(section) = opened.activate {
            self.activate_section(section);
        }
    }

    fn focus_shell(&mut self) -> Vec<Effect> {
        self.activate_section(Section::Terminal);
        vec![Effect::FocusShell]
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Routes one key press.
    ///
    /// Ctrl shortcuts apply everywhere. Otherwise keys go to the shell when
    /// it has focus and to the navigation controller when it does not.
    pub fn handle_key(&mut self, input: KeyInput) -> KeyOutcome {
        if input.ctrl {
            return self.handle_shortcut(input);
        }
        match input.focus {
            Focus::Shell => self.handle_shell_key(input.key),
            Focus::Page => match self.nav.route(&input) {
                Some(NavAction::TypeIntoShell) => KeyOutcome {
                    consumed: false,
                    effects: self.focus_shell(),
                },
                Some(action) => KeyOutcome::consumed(self.apply_nav(action)),
                None => KeyOutcome::ignored(),
            },
        }
    }

    fn handle_shortcut(&mut self, input: KeyInput) -> KeyOutcome {
        let Key::Char(c) = input.key else {
            return KeyOutcome::ignored();
        };
        match c.to_ascii_lowercase() {
            'w' => self.close_window(),
            'm' if input.shift => self.toggle_maximize(),
            'm' => self.toggle_minimize(),
            'l' => self.output.clear(),
            'c' => self.output.extend(shell::interrupt()),
            'r' => {
                self.apply_result(shell::reset());
            }
            _ => return KeyOutcome::ignored(),
        }
        KeyOutcome::consumed(vec![])
    }

    fn handle_shell_key(&mut self, key: Key) -> KeyOutcome {
        let effects = match key {
            Key::Enter => self.submit(),
            Key::Up => {
                self.shell.history_older();
                vec![]
            }
            Key::Down => {
                self.shell.history_newer();
                vec![]
            }
            Key::Tab => {
                let lines = self.shell.complete();
                self.output.extend(lines);
                vec![]
            }
            Key::Escape => {
                self.enter_files();
                vec![Effect::BlurShell]
            }
            _ => return KeyOutcome::ignored(),
        };
        KeyOutcome::consumed(effects)
    }

    fn apply_nav(&mut self, action: NavAction) -> Vec<Effect> {
        match action {
            NavAction::StepFile(delta) => {
                self.explorer.navigate(delta);
                vec![]
            }
            NavAction::OpenFile => {
                let opened = self.explorer.open_current();
                self.apply_opened(opened);
                vec![]
            }
            NavAction::OpenFileAndEnter => {
                let opened = self.explorer.open_current();
                self.apply_opened(opened);
                self.enter_content()
            }
            NavAction::ParentDirectory => {
                let opened = self.explorer.go_to_parent();
                self.apply_opened(opened);
                vec![]
            }
            NavAction::EnterContent => self.enter_content(),
            NavAction::EnterFiles => {
                self.enter_files();
                vec![]
            }
            NavAction::StepContent { delta, horizontal } => {
                self.rebuild_if_stale();
                let mut effects: Vec<_> = self
                    .content
                    .navigate(delta, horizontal)
                    .map(Effect::ScrollIntoView)
                    .into_iter()
                    .collect();
                if !horizontal {
                    effects.push(Effect::ScrollPage(delta.signum() as i32));
                }
                effects
            }
            NavAction::ActivateContent => {
                self.rebuild_if_stale();
                self.activate_content()
            }
            NavAction::FocusShell | NavAction::TypeIntoShell => self.focus_shell(),
        }
    }

    fn activate_content(&mut self) -> Vec<Effect> {
        match self.content.activate_current() {
            Some(Activation::Follow(url)) => vec![Effect::FollowLink(url)],
            Some(Activation::Trigger(action)) => vec![Effect::Trigger(action)],
            Some(Activation::LoadMore) => self.load_more_projects(),
            None => vec![],
        }
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// Click on sidebar entry `index`: back to file mode, select and open it.
    pub fn click_file(&mut self, index: usize) {
        self.enter_files();
        if let Some(opened) = self.explorer.select(index, true) {
            self.apply_opened(opened);
        }
    }

    /// Click on content item `index`.
    pub fn click_content(&mut self, index: usize) -> Vec<Effect> {
        self.rebuild_if_stale();
        if self.content.select(index).is_none() {
            log::warn!(
                "content index {} out of range ({} items)",
                index,
                self.content.len()
            );
            return vec![];
        }
        self.activate_content()
    }

    // =========================================================================
    // Shell
    // =========================================================================

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.shell.set_input(input);
    }

    /// Runs the shell input buffer.
    pub fn submit(&mut self) -> Vec<Effect> {
        let submission = self.shell.submit(Environment {
            section: self.section,
            clock: self.clock.as_ref(),
            rng: &mut self.rng,
        });
        self.apply_submission(submission)
    }

    /// Runs `line` as if it had been typed and submitted.
    pub fn execute(&mut self, line: &str) -> Vec<Effect> {
        let submission = self.shell.execute(
            line,
            Environment {
                section: self.section,
                clock: self.clock.as_ref(),
                rng: &mut self.rng,
            },
        );
        self.apply_submission(submission)
    }

    fn apply_submission(&mut self, submission: Option<Submission>) -> Vec<Effect> {
        let Some(Submission { echo, result }) = submission else {
            return vec![];
        };
        self.output.push(echo);
        self.apply_result(result)
    }

    fn apply_result(&mut self, result: CommandResult) -> Vec<Effect> {
        if result.clear {
            self.output.clear();
        }
        self.output.extend(result.output);
        let mut effects = vec![];
        if let Some(section) = result.navigate_to {
            if self.open_section(section) && self.nav.mode() == NavigationMode::Content {
                effects.extend(self.content.selected().map(Effect::ScrollIntoView));
            }
        }
        effects.extend(
            result
                .scheduled
                .into_iter()
                .map(|(delay_ms, line)| Effect::Schedule { delay_ms, line }),
        );
        effects
    }

    // =========================================================================
    // Window Chrome
    // =========================================================================

    pub fn close_window(&mut self) {
        self.output.extend(self.window.close());
    }

    pub fn reopen_window(&mut self) {
        self.output.extend(self.window.reopen());
    }

    pub fn toggle_minimize(&mut self) {
        self.output.extend(self.window.toggle_minimize());
    }

    pub fn restore_from_dock(&mut self) {
        self.output.extend(self.window.restore_from_dock());
    }

    pub fn toggle_maximize(&mut self) {
        self.output.extend(self.window.toggle_maximize());
    }

    /// Editor tab close button: wipe the log and start over on welcome.
    pub fn close_tab(&mut self) {
        self.output.clear();
        self.output
            .push(OutputLine::warning("Tab closed - Terminal session ended"));
        self.activate_section(Section::Welcome);
        self.enter_files();
        self.explorer.select(0, false);
    }
}
