//! The fixed set of top-level content sections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownSection;

/// One of the five top-level content views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Welcome,
    Projects,
    Connect,
    About,
    Terminal,
}

impl Section {
    /// All sections in sidebar order.
    pub const ALL: [Section; 5] = [
        Self::Welcome,
        Self::Projects,
        Self::Connect,
        Self::About,
        Self::Terminal,
    ];

    /// Lowercase identifier (`welcome`, `projects`, ...).
    pub fn id(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Projects => "projects",
            Self::Connect => "connect",
            Self::About => "about",
            Self::Terminal => "terminal",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
