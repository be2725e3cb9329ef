use crate::analyzers::types::TimeSeriesPoint;
use chrono::NaiveTime;
use std::collections::BTreeMap;

/// Sorts every ride's series by time of day. The sort is stable, so points
/// with the same clock label keep their fold order.
pub fn sort_series(series: &mut BTreeMap<String, Vec<TimeSeriesPoint>>) {
    for points in series.values_mut() {
        sort_points(points);
    }
}

/// Stable sort of one series by its `HH:MM` label. Labels that fail to parse
/// sort first.
pub fn sort_points(points: &mut [TimeSeriesPoint]) {
    points.sort_by_key(|p| NaiveTime::parse_from_str(&p.clock_label, "%H:%M").ok());
}
