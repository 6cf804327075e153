//! Client-side pagination of the GitHub repository feed.

use serde::{Deserialize, Serialize};

use crate::config::PROJECT_BATCH_SIZE;
use crate::error::FetchError;
use crate::models::{ContentItem, OutputLine};

/// Subset of the GitHub `repos` API object the portfolio renders.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

impl Repository {
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("No description available")
    }

    /// Tags shown on the card: the language, then up to two topics.
    pub fn tags(&self) -> Vec<&str> {
        let language = self.language.as_deref().unwrap_or("Text");
        std::iter::once(language)
            .chain(self.topics.iter().take(2).map(String::as_str))
            .collect()
    }

    /// Date part of `updated_at` (`YYYY-MM-DD`).
    pub fn updated_date(&self) -> &str {
        self.updated_at.split('T').next().unwrap_or_default()
    }
}

/// Decodes the body of a `GET /users/{user}/repos` response.
pub fn parse_repositories(body: &str) -> Result<Vec<Repository>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

/// Load state of the projects section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedState {
    #[default]
    Loading,
    Loaded,
    /// The fetch failed; stays failed until the page is reloaded.
    Failed,
}

/// Filtered, sorted repositories and how many of them are revealed.
#[derive(Clone, Debug, Default)]
pub struct ProjectFeed {
    state: FeedState,
    repos: Vec<Repository>,
    shown: usize,
}

impl ProjectFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a fetched list: drops forks and archived repos, sorts by
    /// stars (descending, stable) and reveals the first batch.
    pub fn load(&mut self, repos: Vec<Repository>) {
        let mut repos: Vec<_> = repos.into_iter().filter(|r| !r.fork && !r.archived).collect();
        repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
        self.shown = repos.len().min(PROJECT_BATCH_SIZE);
        self.repos = repos;
        self.state = FeedState::Loaded;
    }

    pub fn fail(&mut self) {
        self.repos.clear();
        self.shown = 0;
        self.state = FeedState::Failed;
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    /// Repositories currently on screen.
    pub fn visible(&self) -> &[Repository] {
        &self.repos[..self.shown]
    }

    pub fn total(&self) -> usize {
        self.repos.len()
    }

    pub fn remaining(&self) -> usize {
        self.repos.len() - self.shown
    }

    pub fn has_more(&self) -> bool {
        self.remaining() > 0
    }

    /// Reveals the next batch. `None` when nothing is left to show.
    pub fn load_more(&mut self) -> Option<OutputLine> {
        if !self.has_more() {
            return None;
        }
        self.shown = (self.shown + PROJECT_BATCH_SIZE).min(self.repos.len());
        Some(OutputLine::success(format!(
            "Loaded more projects ({}/{})",
            self.shown,
            self.repos.len()
        )))
    }

    /// Label of the pagination control.
    pub fn load_more_label(&self) -> String {
        format!("→ Load more repositories ({} remaining)", self.remaining())
    }

    /// Navigable items of the projects section: one card per visible
    /// repository, then the load-more control while anything remains.
    pub fn content_items(&self) -> Vec<ContentItem> {
        let mut items: Vec<_> = self
            .visible()
            .iter()
            .map(|r| ContentItem::card(r.name.clone(), Some(r.html_url.clone())).in_grid())
            .collect();
        if self.has_more() {
            items.push(ContentItem::load_more(self.load_more_label()).in_grid());
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentRole, Style};

    fn repo(name: &str, stars: u32) -> Repository {
        Repository {
            name: name.to_string(),
            html_url: format!("https://github.com/u/{}", name),
            stargazers_count: stars,
            ..Default::default()
        }
    }

    fn feed_of(count: usize) -> ProjectFeed {
        let mut feed = ProjectFeed::new();
        feed.load((0..count).map(|i| repo(&format!("r{}", i), i as u32)).collect());
        feed
    }

    #[test]
    fn test_starts_loading() {
        let feed = ProjectFeed::new();
        assert_eq!(feed.state(), FeedState::Loading);
        assert!(feed.content_items().is_empty());
    }

    #[test]
    fn test_load_filters_and_sorts() {
        let mut feed = ProjectFeed::new();
        let mut forked = repo("forked", 100);
        forked.fork = true;
        let mut old = repo("old", 50);
        old.archived = true;
        feed.load(vec![repo("a", 1), forked, repo("b", 9), old, repo("c", 5)]);

        let names: Vec<_> = feed.visible().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
        assert_eq!(feed.state(), FeedState::Loaded);
        assert!(!feed.has_more());
    }

    #[test]
    fn test_first_batch_is_six() {
        let feed = feed_of(14);
        assert_eq!(feed.visible().len(), 6);
        assert_eq!(feed.remaining(), 8);
        assert_eq!(feed.load_more_label(), "→ Load more repositories (8 remaining)");
    }

    #[test]
    fn test_load_more_clamps() {
        let mut feed = feed_of(14);
        let line = feed.load_more().unwrap();
        assert_eq!(line.text, "Loaded more projects (12/14)");
        assert_eq!(line.style, Style::Success);

        assert_eq!(feed.load_more().unwrap().text, "Loaded more projects (14/14)");
        assert!(feed.load_more().is_none());
    }

    #[test]
    fn test_content_items_include_load_more() {
        let feed = feed_of(8);
        let items = feed.content_items();
        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|i| i.in_grid));
        assert_eq!(items[6].role, ContentRole::LoadMore);
        assert_eq!(items[0].target.as_deref(), Some("https://github.com/u/r7"));
    }

    #[test]
    fn test_fail_clears() {
        let mut feed = feed_of(3);
        feed.fail();
        assert_eq!(feed.state(), FeedState::Failed);
        assert!(feed.visible().is_empty());
        assert!(feed.load_more().is_none());
    }

    #[test]
    fn test_card_fields() {
        let mut r = repo("x", 0);
        assert_eq!(r.description_or_default(), "No description available");
        assert_eq!(r.tags(), vec!["Text"]);

        r.language = Some("Rust".into());
        r.topics = vec!["wasm".into(), "cli".into(), "extra".into()];
        r.updated_at = "2024-05-02T10:00:00Z".into();
        assert_eq!(r.tags(), vec!["Rust", "wasm", "cli"]);
        assert_eq!(r.updated_date(), "2024-05-02");
    }

    #[test]
    fn test_parse_repositories() {
        let body = r#"[{"name":"websh","html_url":"https://github.com/u/websh",
            "stargazers_count":3,"forks_count":1,"language":null,
            "updated_at":"2024-01-01T00:00:00Z","fork":false,"archived":false,
            "owner":{"login":"u"}}]"#;
        let repos = parse_repositories(body).unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "websh");
        assert!(repos[0].topics.is_empty());

        assert!(matches!(
            parse_repositories("{\"message\":\"rate limited\"}"),
            Err(FetchError::Json(_))
        ));
    }
}
