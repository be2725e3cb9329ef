//! Per-ride aggregation over a stream of readings.
//!
//! [`aggregate::Accumulators`] folds readings into latest, peak, trough and
//! time-series views; [`series`] puts each ride's series in clock order.

pub mod aggregate;
pub mod series;
pub mod types;
