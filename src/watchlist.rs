use crate::types::{MonitorError, Result, WatchlistRow};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Reads the headerless CSV watch list. Rows come back lazily in file
/// order; the iterator is consumed once and cannot restart.
pub struct WatchlistReader {
    reader: csv::Reader<File>,
}

impl WatchlistReader {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        debug!("opened watch list: {}", path.display());
        Ok(Self { reader })
    }

    /// Each row needs at least a company name and a feed locator; extra
    /// trailing fields are ignored. Anything the CSV layer cannot parse, or
    /// a row that is too short, fails the whole run.
    pub fn rows(self) -> impl Iterator<Item = Result<WatchlistRow>> {
        self.reader.into_records().map(|record| {
            let record = record.map_err(malformed)?;
            if record.len() < 2 {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(MonitorError::MalformedInput {
                    line,
                    reason: format!("expected at least 2 fields, found {}", record.len()),
                });
            }
            Ok(WatchlistRow {
                company: record[0].to_string(),
                feed_url: record[1].to_string(),
            })
        })
    }
}

fn malformed(err: csv::Error) -> MonitorError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    MonitorError::MalformedInput {
        line,
        reason: err.to_string(),
    }
}
