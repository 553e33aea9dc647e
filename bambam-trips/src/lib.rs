//! zone and hour-of-day rankings over large, untrusted trip record files.
//!
//! a [`trips::TripAnalyzer`] makes a single pass over comma-delimited trip rows,
//! keeps the rows it can read a pickup zone and hour from, and answers
//! top-k queries for the busiest zones and the busiest (zone, hour) slots.
pub mod app;
pub mod trips;
