//! Browser-facing helpers.
//!
//! - [`dom`] - window, focus and scrolling
//! - [`fetch_repositories`] - GitHub repository listing
//! - [`logger`] - `log` backend writing to the browser console
//! - [`BrowserClock`] - wall clock backed by `Date`

mod clock;
pub mod dom;
mod fetch;
pub mod logger;

pub use clock::{BrowserClock, status_time};
pub use fetch::fetch_repositories;
