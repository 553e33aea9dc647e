use super::{SlotCount, TripRow, ZoneCount};
use std::collections::HashMap;

pub const HOURS_PER_DAY: usize = 24;

/// expected upper bound on distinct zones in one source, used to pre-size
/// the running maps.
const ZONE_CAPACITY_HINT: usize = 16384;

/// running counts for one ingestion run. discarded once materialized.
#[derive(Debug)]
pub struct TripAggregator {
    zone_totals: HashMap<String, u64>,
    zone_hours: HashMap<String, [u64; HOURS_PER_DAY]>,
}

impl Default for TripAggregator {
    fn default() -> Self {
        Self {
            zone_totals: HashMap::with_capacity(ZONE_CAPACITY_HINT),
            zone_hours: HashMap::with_capacity(ZONE_CAPACITY_HINT),
        }
    }
}

impl TripAggregator {
    /// counts one accepted row. the zone key is only allocated the first
    /// time a zone is seen, and its 24 hour slots start at zero.
    pub fn observe(&mut self, row: &TripRow<'_>) {
        match self.zone_totals.get_mut(row.zone) {
            Some(total) => *total += 1,
            None => {
                self.zone_totals.insert(row.zone.to_string(), 1);
            }
        }
        let hour = usize::from(row.hour);
        match self.zone_hours.get_mut(row.zone) {
            Some(hours) => hours[hour] += 1,
            None => {
                let mut hours = [0; HOURS_PER_DAY];
                hours[hour] = 1;
                self.zone_hours.insert(row.zone.to_string(), hours);
            }
        }
    }

    pub fn n_zones(&self) -> usize {
        self.zone_totals.len()
    }

    /// flips the running maps into query-ready sequences. both sequences are
    /// in arbitrary order. only non-zero hour slots are kept.
    pub fn materialize(self) -> TripCache {
        let zones = self
            .zone_totals
            .into_iter()
            .map(|(zone, count)| ZoneCount { zone, count })
            .collect::<Vec<_>>();

        let n_slots = self
            .zone_hours
            .values()
            .map(|hours| hours.iter().filter(|c| **c > 0).count())
            .sum();
        let mut slots = Vec::with_capacity(n_slots);
        for (zone, hours) in self.zone_hours.iter() {
            for (hour, count) in hours.iter().enumerate() {
                if *count > 0 {
                    slots.push(SlotCount {
                        zone: zone.clone(),
                        hour: hour as u8,
                        count: *count,
                    });
                }
            }
        }

        TripCache { zones, slots }
    }
}

/// the materialized result of an ingestion run. read-only until the next
/// run replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripCache {
    pub zones: Vec<ZoneCount>,
    pub slots: Vec<SlotCount>,
}

impl TripCache {
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::TripAggregator;
    use crate::trips::TripRow;

    fn row(zone: &str, hour: u8) -> TripRow<'_> {
        TripRow { zone, hour }
    }

    #[test]
    fn test_materialize_is_sparse() {
        let mut agg = TripAggregator::default();
        agg.observe(&row("A", 8));
        agg.observe(&row("A", 8));
        agg.observe(&row("A", 23));
        agg.observe(&row("B", 0));
        assert_eq!(agg.n_zones(), 2);

        let mut cache = agg.materialize();
        cache.zones.sort_by(|a, b| a.zone.cmp(&b.zone));
        cache.slots.sort_by(|a, b| a.rank_cmp(b));
        assert_eq!(cache.zones.len(), 2);
        assert_eq!(cache.zones[0].count, 3);
        assert_eq!(cache.zones[1].count, 1);
        assert_eq!(cache.slots.len(), 3);
        assert_eq!((cache.slots[0].zone.as_str(), cache.slots[0].hour), ("A", 8));
        assert_eq!(cache.slots[0].count, 2);
    }

    #[test]
    fn test_slot_totals_match_zone_totals() {
        let mut agg = TripAggregator::default();
        for (i, zone) in ["A", "B", "C", "A", "B", "A"].iter().enumerate() {
            agg.observe(&row(zone, (i * 5 % 24) as u8));
        }
        let cache = agg.materialize();
        for zc in cache.zones.iter() {
            let slot_sum: u64 = cache
                .slots
                .iter()
                .filter(|s| s.zone == zc.zone)
                .map(|s| s.count)
                .sum();
            assert_eq!(slot_sum, zc.count);
        }
    }

    #[test]
    fn test_empty_aggregator() {
        let cache = TripAggregator::default().materialize();
        assert!(cache.is_empty());
        assert!(cache.slots.is_empty());
    }
}
