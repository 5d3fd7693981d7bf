use crate::resolver::FreshnessResolver;
use crate::types::{Result, WatchlistRow};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use tracing::{debug, info};

/// Per-company activity, keyed by the lower-cased company name. Once a
/// company has been seen active it stays active, no matter how many of its
/// other feeds are stale.
#[derive(Debug, Default)]
pub struct CompanyActivityState {
    activity: HashMap<String, bool>,
}

impl CompanyActivityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, company: &str, active: bool) {
        let entry = self.activity.entry(company.to_lowercase()).or_insert(active);
        *entry = *entry || active;
    }

    pub fn inactive_companies(&self) -> Vec<String> {
        self.activity
            .iter()
            .filter(|(_, active)| !**active)
            .map(|(company, _)| company.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.activity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activity.is_empty()
    }
}

/// Drives the resolver over the whole watch list and folds the results
/// into a `CompanyActivityState`.
///
/// Feeds are fetched concurrently up to a bounded pool, but the merge loop
/// consumes results strictly in original row order, so state updates stay
/// single-writer and the first unreadable feed by row order is the one that
/// aborts the run. Resolutions still in flight at that point are dropped,
/// not awaited.
pub struct ActivityAggregator {
    resolver: FreshnessResolver,
    max_concurrent: usize,
}

impl ActivityAggregator {
    pub fn new(resolver: FreshnessResolver, max_concurrent: usize) -> Self {
        Self {
            resolver,
            max_concurrent: max_concurrent.max(1),
        }
    }

    pub async fn aggregate(
        &self,
        rows: Vec<WatchlistRow>,
        window_days: u32,
    ) -> Result<CompanyActivityState> {
        // One timestamp for the whole run, so every row is judged against
        // the same instant.
        let now = Utc::now();

        info!("resolving {} feeds, window of {} days", rows.len(), window_days);

        let mut results = stream::iter(rows.iter())
            .map(|row| async move {
                let freshness = self.resolver.resolve(&row.feed_url, now).await;
                (row, freshness)
            })
            .buffered(self.max_concurrent);

        let mut state = CompanyActivityState::new();
        while let Some((row, freshness)) = results.next().await {
            let freshness = freshness?;
            let active = freshness.is_active_within(window_days);
            debug!(
                "feed {} for {}: {:?} -> active={}",
                row.feed_url, row.company, freshness, active
            );
            state.record(&row.company, active);
        }

        info!("aggregated activity for {} companies", state.len());
        Ok(state)
    }
}
