mod hour_column;
mod row_rejection;
mod shared_analyzer;
mod slot_count;
mod trip_aggregator;
mod trip_analyzer;
mod trip_analyzer_config;
mod trip_error;
mod trip_row;
mod zone_count;

pub use hour_column::{parse_hour, HourColumn, HourColumns, MIN_HOUR_COLUMN};
pub use row_rejection::{RejectionTally, RowRejection, RowRejectionObserver};
pub use shared_analyzer::SharedTripAnalyzer;
pub use slot_count::SlotCount;
pub use trip_aggregator::{TripAggregator, TripCache, HOURS_PER_DAY};
pub use trip_analyzer::TripAnalyzer;
pub use trip_analyzer_config::TripAnalyzerConfig;
pub use trip_error::TripError;
pub use trip_row::TripRow;
pub use zone_count::ZoneCount;
