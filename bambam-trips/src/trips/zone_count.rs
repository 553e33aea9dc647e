use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

/// number of accepted trips picked up in a zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneCount {
    pub zone: String,
    pub count: u64,
}

impl ZoneCount {
    pub fn new(zone: &str, count: u64) -> ZoneCount {
        ZoneCount {
            zone: zone.to_string(),
            count,
        }
    }

    /// ranking order: count descending, then zone ascending.
    pub fn rank_cmp(&self, other: &ZoneCount) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.zone.cmp(&other.zone))
    }
}

impl Display for ZoneCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.zone, self.count)
    }
}
