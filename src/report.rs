use crate::aggregator::CompanyActivityState;
use crate::messages;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The final verdict of a run. Companies are sorted ascending at
/// construction so rendering is deterministic for any input permutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityReport {
    AllActive {
        window_days: u32,
    },
    Inactive {
        window_days: u32,
        companies: Vec<String>,
    },
}

pub fn build_report(state: &CompanyActivityState, window_days: u32) -> ActivityReport {
    let mut companies = state.inactive_companies();
    if companies.is_empty() {
        return ActivityReport::AllActive { window_days };
    }
    // Keys are already lower-cased, so a plain sort is case-insensitive.
    companies.sort();
    ActivityReport::Inactive {
        window_days,
        companies,
    }
}

impl fmt::Display for ActivityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityReport::AllActive { window_days } => {
                write!(f, "{}", messages::no_results(*window_days))
            }
            ActivityReport::Inactive {
                window_days,
                companies,
            } => {
                writeln!(f, "{}", messages::results_header(*window_days))?;
                for company in companies {
                    writeln!(f)?;
                    write!(f, "    {company}")?;
                }
                Ok(())
            }
        }
    }
}
