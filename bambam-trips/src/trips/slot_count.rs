use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

/// number of accepted trips picked up in a zone during one hour of the day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotCount {
    pub zone: String,
    /// hour of day in [0, 23]
    pub hour: u8,
    pub count: u64,
}

impl SlotCount {
    pub fn new(zone: &str, hour: u8, count: u64) -> SlotCount {
        SlotCount {
            zone: zone.to_string(),
            hour,
            count,
        }
    }

    /// ranking order: count descending, then zone ascending, then hour ascending.
    pub fn rank_cmp(&self, other: &SlotCount) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.zone.cmp(&other.zone))
            .then_with(|| self.hour.cmp(&other.hour))
    }
}

impl Display for SlotCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.zone, self.hour, self.count)
    }
}
