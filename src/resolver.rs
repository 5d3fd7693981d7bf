use crate::fetcher::FeedFetcher;
use crate::parser::parse_entry_dates;
use crate::types::{Freshness, MonitorError, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Reduces a feed locator to a single freshness value: the age in whole
/// days of the feed's first entry. The feed's own ordering is trusted to
/// present the most recent item first; no scan for the maximum happens.
pub struct FreshnessResolver {
    fetcher: FeedFetcher,
}

impl FreshnessResolver {
    pub fn new(fetcher: FeedFetcher) -> Self {
        Self { fetcher }
    }

    /// Any fetch or parse failure is `Unreadable`, which aborts the whole
    /// run. An empty feed is `NoEntries` and does not.
    pub async fn resolve(&self, locator: &str, now: DateTime<Utc>) -> Result<Freshness> {
        let raw = self
            .fetcher
            .fetch(locator)
            .await
            .map_err(|err| unreadable(locator, err.to_string()))?;

        let entries =
            parse_entry_dates(&raw).map_err(|err| unreadable(locator, err.to_string()))?;

        let Some(first) = entries.first() else {
            debug!("feed has no entries: {}", locator);
            return Ok(Freshness::NoEntries);
        };

        match first.activity_date() {
            Some(ts) => {
                // Floored whole days, clamped so a future-dated entry
                // counts as fresh rather than wrapping.
                let days = (now - ts).num_days().max(0) as u64;
                debug!("feed {} last updated {} days ago", locator, days);
                Ok(Freshness::DaysSinceUpdate(days))
            }
            None => {
                // An undated entry cannot witness activity.
                warn!("first entry of {} carries no usable timestamp", locator);
                Ok(Freshness::NoEntries)
            }
        }
    }
}

fn unreadable(locator: &str, reason: String) -> MonitorError {
    MonitorError::Unreadable {
        locator: locator.to_string(),
        reason,
    }
}
