use chrono::{DateTime, Utc};
use feed_rs::parser;
use tracing::debug;

/// The two timestamps a feed entry may carry. Feeds are inconsistent about
/// which one they populate, so selection happens in `activity_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryDates {
    pub updated: Option<DateTime<Utc>>,
    pub published: Option<DateTime<Utc>>,
}

impl EntryDates {
    /// Prefer `updated`, falling back to `published` when `updated` is
    /// missing or an epoch placeholder some publishers emit instead of
    /// omitting the field.
    pub fn activity_date(&self) -> Option<DateTime<Utc>> {
        self.updated
            .filter(|ts| ts.timestamp() > 0)
            .or(self.published)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("feed payload is empty")]
    EmptyPayload,
    #[error("feed parse error: {0}")]
    Feed(#[from] feed_rs::parser::ParseFeedError),
}

/// Parses a raw feed payload into per-entry timestamps, preserving feed
/// order. The feed's own ordering is trusted to put the newest entry first.
pub fn parse_entry_dates(raw: &[u8]) -> Result<Vec<EntryDates>, FeedParseError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Err(FeedParseError::EmptyPayload);
    }

    let feed = parser::parse(raw)?;
    let entries: Vec<EntryDates> = feed
        .entries
        .iter()
        .map(|entry| EntryDates {
            updated: entry.updated.map(|ts| ts.with_timezone(&Utc)),
            published: entry.published.map(|ts| ts.with_timezone(&Utc)),
        })
        .collect();

    debug!("parsed feed with {} entries", entries.len());
    Ok(entries)
}
