use crate::aggregator::ActivityAggregator;
use crate::fetcher::FeedFetcher;
use crate::messages;
use crate::report::build_report;
use crate::resolver::FreshnessResolver;
use crate::types::{FetchConfig, Result};
use crate::watchlist::WatchlistReader;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "rss-activity-monitor",
    about = "Report companies with no recent activity on their RSS feeds",
    version,
    long_about = None
)]
pub struct Cli {
    /// CSV watch list with one company,feed-url pair per line
    pub watchlist: PathBuf,

    /// Freshness window in days; feeds with no entry younger than this
    /// count as inactive
    pub window_days: String,

    /// Maximum number of feeds fetched concurrently
    #[arg(long, default_value_t = 8)]
    pub concurrency: usize,
}

/// Wires reader, aggregator, and formatter together. Validation failures
/// are recovered locally and come back as the output message without
/// touching the network; malformed input and unreadable feeds propagate as
/// fatal errors.
pub async fn run(cli: Cli) -> Result<String> {
    if !cli.watchlist.exists() {
        return Ok(messages::file_not_found(&cli.watchlist));
    }

    let window_days: u32 = match cli.window_days.trim().parse() {
        Ok(days) => days,
        Err(_) => return Ok(messages::invalid_day_count(&cli.window_days)),
    };

    let rows = WatchlistReader::open(&cli.watchlist)?
        .rows()
        .collect::<Result<Vec<_>>>()?;
    info!("watch list has {} rows", rows.len());

    let fetcher = FeedFetcher::new(&FetchConfig::default())?;
    let resolver = FreshnessResolver::new(fetcher);
    let aggregator = ActivityAggregator::new(resolver, cli.concurrency);

    let state = aggregator.aggregate(rows, window_days).await?;
    let report = build_report(&state, window_days);

    Ok(report.to_string())
}
