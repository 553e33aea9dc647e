use crate::trips::{RejectionTally, SlotCount, TripAnalyzer, ZoneCount};
use serde::Serialize;

/// overview of one ingestion run, written by the `summary` operation.
#[derive(Debug, Serialize)]
pub struct TripsSummary {
    pub source: String,
    pub zones: usize,
    pub slots: usize,
    pub accepted_rows: u64,
    pub rejected_rows: usize,
    pub rejections: RejectionTally,
    pub busiest_zone: Option<ZoneCount>,
    pub busiest_slot: Option<SlotCount>,
}

impl TripsSummary {
    pub fn new(source: &str, analyzer: &TripAnalyzer, rejections: RejectionTally) -> TripsSummary {
        TripsSummary {
            source: source.to_string(),
            zones: analyzer.zones().len(),
            slots: analyzer.slots().len(),
            accepted_rows: analyzer.zones().iter().map(|z| z.count).sum(),
            rejected_rows: rejections.total(),
            rejections,
            busiest_zone: analyzer.top_zones(1).pop(),
            busiest_slot: analyzer.top_busy_slots(1).pop(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::TripsSummary;
    use crate::trips::{RejectionTally, SlotCount, TripAnalyzer, ZoneCount};
    use std::io::Cursor;

    #[test]
    fn test_summary_of_run() {
        let mut analyzer = TripAnalyzer::default();
        let mut tally = RejectionTally::default();
        analyzer.ingest_with_observer(
            Cursor::new("1,A, 01 00\n2,A, 02 00\n3,B, 02 00\nx,B, 02 00\n"),
            &mut tally,
        );
        let summary = TripsSummary::new("memory", &analyzer, tally);
        assert_eq!(summary.zones, 2);
        assert_eq!(summary.slots, 3);
        assert_eq!(summary.accepted_rows, 3);
        assert_eq!(summary.rejected_rows, 1);
        assert_eq!(summary.busiest_zone, Some(ZoneCount::new("A", 2)));
        assert_eq!(summary.busiest_slot, Some(SlotCount::new("A", 1, 1)));

        let json = serde_json::to_value(&summary).expect("summary should serialize");
        assert_eq!(json["rejections"]["counts"]["invalid_id"], 1);
    }
}
