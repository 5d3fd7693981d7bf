use serde::{Deserialize, Serialize};

/// One line of the watch list: a company and one of its RSS feed locators.
/// A company may appear on multiple lines with different feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistRow {
    pub company: String,
    pub feed_url: String,
}

/// Outcome of resolving a single feed. A feed that exists but has never
/// published anything is `NoEntries`, not an age of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Freshness {
    DaysSinceUpdate(u64),
    NoEntries,
}

impl Freshness {
    /// A feed counts as active when its latest entry is strictly younger
    /// than the window. `NoEntries` is always inactive.
    pub fn is_active_within(&self, window_days: u32) -> bool {
        matches!(self, Freshness::DaysSinceUpdate(d) if *d < u64::from(window_days))
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "rss-activity-monitor/0.1".to_string(),
            timeout_seconds: 30,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("cannot open watch list: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed watch list at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    #[error("unable to load RSS feed: {locator} ({reason})")]
    Unreadable { locator: String, reason: String },
}

impl MonitorError {
    /// An unreadable feed gets its own exit code so callers can tell "fix
    /// your feed data" apart from every other failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            MonitorError::Unreadable { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MonitorError>;
