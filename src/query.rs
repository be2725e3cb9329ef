//! Stateless lookups over an assembled [`Summary`].

use serde::Serialize;

use crate::analyzers::types::{LatestEntry, PeakEntry, TimeSeriesPoint, TroughEntry};
use crate::summary::Summary;

/// Everything the summary holds about one ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RideView<'a> {
    pub ride_key: &'a str,
    pub latest: &'a LatestEntry,
    pub peak: Option<&'a PeakEntry>,
    pub trough: Option<&'a TroughEntry>,
    pub series: &'a [TimeSeriesPoint],
}

/// Exact, case-sensitive lookup by ride key.
pub fn lookup<'a>(summary: &'a Summary, ride_key: &str) -> Option<RideView<'a>> {
    let latest = summary.latest_for(ride_key)?;
    Some(view(summary, latest))
}

/// Rides whose key contains `term`, ignoring case. An empty or blank term
/// matches every ride. Results are in ride-key order.
pub fn filter_rides<'a>(summary: &'a Summary, term: &str) -> Vec<RideView<'a>> {
    let needle = term.trim().to_lowercase();

    summary
        .latest_readings()
        .into_iter()
        .filter(|entry| needle.is_empty() || entry.ride_key.to_lowercase().contains(&needle))
        .map(|entry| view(summary, entry))
        .collect()
}

fn view<'a>(summary: &'a Summary, latest: &'a LatestEntry) -> RideView<'a> {
    let key = latest.ride_key.as_str();
    RideView {
        ride_key: key,
        latest,
        peak: summary.peak_for(key),
        trough: summary.trough_for(key),
        series: summary.series_for(key),
    }
}
