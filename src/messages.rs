//! User-facing message templates for the CLI layer. Kept in one place so
//! every output string the tool can produce is visible at a glance.

use std::path::Path;

pub fn file_not_found(path: &Path) -> String {
    format!("Input file not found: {}", path.display())
}

pub fn invalid_day_count(value: &str) -> String {
    format!("'{value}' is not a valid day count; expected a non-negative whole number.")
}

pub fn no_results(window_days: u32) -> String {
    format!("No inactive companies found within the last {window_days} days.")
}

pub fn results_header(window_days: u32) -> String {
    format!("The following companies have been inactive for {window_days}+ days:")
}
