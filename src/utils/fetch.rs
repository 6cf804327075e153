//! Repository listing fetch.

use gloo_net::http::Request;
use termfolio_core::{FetchError, Repository, projects::parse_repositories};

/// Fetches and decodes the GitHub repository list at `url`.
pub async fn fetch_repositories(url: &str) -> Result<Vec<Repository>, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    parse_repositories(&body)
}
