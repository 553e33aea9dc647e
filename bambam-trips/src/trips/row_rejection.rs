use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt::Display};

/// reasons a trip row is dropped during ingestion. rejected rows contribute
/// nothing to any count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowRejection {
    /// fewer than two commas, so no id/zone/hour layout is possible
    MissingDelimiter,
    /// id column is empty or holds a non-digit character
    InvalidId,
    EmptyZone,
    /// none of the candidate hour columns exist on this row
    MissingHourColumn,
    /// candidate hour columns exist but none holds a valid hour
    InvalidHour,
    /// the raw line is not valid UTF-8
    InvalidEncoding,
}

impl Display for RowRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RowRejection::MissingDelimiter => "missing delimiter",
            RowRejection::InvalidId => "invalid id",
            RowRejection::EmptyZone => "empty zone",
            RowRejection::MissingHourColumn => "missing hour column",
            RowRejection::InvalidHour => "invalid hour",
            RowRejection::InvalidEncoding => "invalid encoding",
        };
        write!(f, "{s}")
    }
}

/// receives each rejected row during ingestion. the analyzer itself never
/// reports rejections, callers that want diagnostics pass an observer.
pub trait RowRejectionObserver {
    /// `line_number` is 1-based and counts every physical line, including
    /// blank and header lines.
    fn on_rejected(&mut self, line_number: usize, reason: RowRejection);
}

impl RowRejectionObserver for () {
    fn on_rejected(&mut self, _line_number: usize, _reason: RowRejection) {}
}

/// tallies rejected rows by reason.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RejectionTally {
    counts: HashMap<RowRejection, usize>,
}

impl RejectionTally {
    pub fn count(&self, reason: RowRejection) -> usize {
        self.counts.get(&reason).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl RowRejectionObserver for RejectionTally {
    fn on_rejected(&mut self, line_number: usize, reason: RowRejection) {
        log::trace!("rejected line {line_number}: {reason}");
        *self.counts.entry(reason).or_default() += 1;
    }
}
