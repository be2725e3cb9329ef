use crate::analyzers::types::{
    DISPLAY_WINDOW, LatestEntry, PeakEntry, TROUGH_WINDOW, TimeSeriesPoint, TroughEntry,
};
use crate::reading::Reading;
use std::collections::BTreeMap;

/// The four per-ride views built in one pass over the readings.
///
/// Every comparison is strict, so ties keep the first-seen value. A reading
/// without a valid timestamp can hold a latest or peak slot only until the
/// ride sees a reading with one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Accumulators {
    pub latest: BTreeMap<String, LatestEntry>,
    pub peak: BTreeMap<String, PeakEntry>,
    pub trough: BTreeMap<String, TroughEntry>,
    pub series: BTreeMap<String, Vec<TimeSeriesPoint>>,
    pub readings: usize,
    pub invalid_timestamps: usize,
}

impl Accumulators {
    /// Folds readings in source order.
    pub fn fold<I>(readings: I) -> Self
    where
        I: IntoIterator<Item = Reading>,
    {
        let mut acc = Accumulators::default();
        for reading in readings {
            acc.push(&reading);
        }
        acc
    }

    /// Applies one reading to all four views independently.
    pub fn push(&mut self, r: &Reading) {
        self.readings += 1;
        if !r.has_valid_timestamp() {
            self.invalid_timestamps += 1;
        }

        self.update_latest(r);
        self.update_series(r);

        if r.is_open {
            self.update_peak(r);
            self.update_trough(r);
        }
    }

    fn update_latest(&mut self, r: &Reading) {
        let replace = match self.latest.get(&r.ride_key) {
            None => true,
            Some(current) => r.adjusted_timestamp > current.timestamp,
        };

        if replace {
            self.latest.insert(r.ride_key.clone(), LatestEntry::from(r));
        }
    }

    fn update_series(&mut self, r: &Reading) {
        let (Some(ts), Some(hour)) = (r.adjusted_timestamp, r.hour_of_day) else {
            return;
        };
        if !DISPLAY_WINDOW.contains(&hour) {
            return;
        }

        self.series
            .entry(r.ride_key.clone())
            .or_default()
            .push(TimeSeriesPoint::new(ts, r.wait_minutes, r.is_open));
    }

    fn update_peak(&mut self, r: &Reading) {
        let replace = match self.peak.get(&r.ride_key) {
            None => true,
            Some(current) => match (current.timestamp.is_some(), r.has_valid_timestamp()) {
                (false, true) => true,
                (true, false) => false,
                _ => r.wait_minutes > current.max_wait_minutes,
            },
        };

        if replace {
            self.peak.insert(
                r.ride_key.clone(),
                PeakEntry {
                    ride_key: r.ride_key.clone(),
                    max_wait_minutes: r.wait_minutes,
                    timestamp: r.adjusted_timestamp,
                },
            );
        }
    }

    fn update_trough(&mut self, r: &Reading) {
        let (Some(ts), Some(hour)) = (r.adjusted_timestamp, r.hour_of_day) else {
            return;
        };
        if !TROUGH_WINDOW.contains(&hour) {
            return;
        }

        let replace = match self.trough.get(&r.ride_key) {
            None => true,
            Some(current) => r.wait_minutes < current.min_wait_minutes,
        };

        if replace {
            self.trough.insert(
                r.ride_key.clone(),
                TroughEntry {
                    ride_key: r.ride_key.clone(),
                    min_wait_minutes: r.wait_minutes,
                    timestamp: ts,
                },
            );
        }
    }
}
