//! Assembled per-ride summary of one wait-time payload.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::analyzers::aggregate::Accumulators;
use crate::analyzers::series::sort_series;
use crate::analyzers::types::{LatestEntry, PeakEntry, TimeSeriesPoint, TroughEntry};
use crate::parser::split_rows;
use crate::reading::Reading;

/// Read-only snapshot of one aggregation pass.
///
/// Maps are keyed by ride and iterate in ride-key order, so two passes over
/// the same text produce identical summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    latest: BTreeMap<String, LatestEntry>,
    peak: BTreeMap<String, PeakEntry>,
    trough: BTreeMap<String, TroughEntry>,
    series: BTreeMap<String, Vec<TimeSeriesPoint>>,
    latest_timestamp: Option<NaiveDateTime>,
}

impl Summary {
    /// Runs the full pipeline over raw feed text: split, normalize, fold,
    /// sort, assemble. Never fails; see [`Reading::from_row`] for leniency.
    pub fn from_csv(text: &str) -> Self {
        let rows = split_rows(text);
        Self::from_readings(rows.iter().map(|row| Reading::from_row(row.as_slice())))
    }

    /// Folds already-normalized readings in the order given.
    pub fn from_readings<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = Reading>,
    {
        Self::assemble(Accumulators::fold(readings))
    }

    /// Sorts each series and computes the global latest timestamp.
    pub fn assemble(acc: Accumulators) -> Self {
        let Accumulators {
            latest,
            peak,
            trough,
            mut series,
            readings,
            invalid_timestamps,
        } = acc;

        sort_series(&mut series);

        let latest_timestamp = latest.values().filter_map(|e| e.timestamp).max();

        debug!(
            readings,
            invalid_timestamps,
            rides = latest.len(),
            ?latest_timestamp,
            "Summary assembled"
        );

        Summary {
            latest,
            peak,
            trough,
            series,
            latest_timestamp,
        }
    }

    /// Latest reading per ride, in ride-key order.
    pub fn latest_readings(&self) -> Vec<&LatestEntry> {
        self.latest.values().collect()
    }

    /// Peak entry per ride that had at least one open reading.
    pub fn peaks(&self) -> Vec<&PeakEntry> {
        self.peak.values().collect()
    }

    /// Trough entry per ride that had an open reading inside the trough window.
    pub fn troughs(&self) -> Vec<&TroughEntry> {
        self.trough.values().collect()
    }

    pub fn series(&self) -> &BTreeMap<String, Vec<TimeSeriesPoint>> {
        &self.series
    }

    /// Greatest valid adjusted timestamp across all rides.
    pub fn latest_timestamp(&self) -> Option<NaiveDateTime> {
        self.latest_timestamp
    }

    pub fn latest_for(&self, ride_key: &str) -> Option<&LatestEntry> {
        self.latest.get(ride_key)
    }

    pub fn peak_for(&self, ride_key: &str) -> Option<&PeakEntry> {
        self.peak.get(ride_key)
    }

    pub fn trough_for(&self, ride_key: &str) -> Option<&TroughEntry> {
        self.trough.get(ride_key)
    }

    /// Sorted series for a ride; empty when no reading fell in the display window.
    pub fn series_for(&self, ride_key: &str) -> &[TimeSeriesPoint] {
        self.series.get(ride_key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every ride seen in the payload, in key order.
    pub fn ride_keys(&self) -> impl Iterator<Item = &str> {
        self.latest.keys().map(String::as_str)
    }

    pub fn ride_count(&self) -> usize {
        self.latest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }
}
