mod operation;
mod trips_app;
mod trips_summary;

pub use operation::TripsOperation;
pub use trips_app::TripsApp;
pub use trips_summary::TripsSummary;
