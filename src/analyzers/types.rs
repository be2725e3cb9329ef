//! Accumulator entry types shared by the aggregation pipeline.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use std::ops::{Range, RangeInclusive};

use crate::reading::Reading;

/// Hours of the day during which time-series points are kept.
pub const DISPLAY_WINDOW: RangeInclusive<u32> = 8..=21;

/// Hours of the day during which the trough is tracked.
pub const TROUGH_WINDOW: Range<u32> = 10..18;

/// The most recent reading seen for a ride.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestEntry {
    pub ride_key: String,
    pub wait_minutes: u32,
    pub last_update: String,
    pub is_open: bool,
    pub timestamp: Option<NaiveDateTime>,
}

impl From<&Reading> for LatestEntry {
    fn from(r: &Reading) -> Self {
        LatestEntry {
            ride_key: r.ride_key.clone(),
            wait_minutes: r.wait_minutes,
            last_update: r.last_update.clone(),
            is_open: r.is_open,
            timestamp: r.adjusted_timestamp,
        }
    }
}

/// Highest open wait seen for a ride.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeakEntry {
    pub ride_key: String,
    pub max_wait_minutes: u32,
    pub timestamp: Option<NaiveDateTime>,
}

/// Lowest open wait seen for a ride inside [`TROUGH_WINDOW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TroughEntry {
    pub ride_key: String,
    pub min_wait_minutes: u32,
    pub timestamp: NaiveDateTime,
}

/// One intraday sample; `wait_minutes` is `None` while the ride is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    pub clock_label: String,
    pub wait_minutes: Option<u32>,
    pub is_open: bool,
}

impl TimeSeriesPoint {
    pub fn new(timestamp: NaiveDateTime, wait_minutes: u32, is_open: bool) -> Self {
        TimeSeriesPoint {
            clock_label: clock_label(timestamp),
            wait_minutes: is_open.then_some(wait_minutes),
            is_open,
        }
    }
}

/// Zero-padded 24-hour `HH:MM`.
pub fn clock_label(timestamp: NaiveDateTime) -> String {
    format!("{:02}:{:02}", timestamp.hour(), timestamp.minute())
}
