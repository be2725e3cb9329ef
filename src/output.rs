//! Rendering summaries for display.
//!
//! Supports debug pretty-printing, JSON, and a one-line-per-ride text view.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::query::RideView;
use crate::summary::Summary;

/// Logs a summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &Summary) {
    debug!("{:#?}", summary);
}

/// Pretty-printed JSON for any summary or ride view.
pub fn to_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One line describing a ride's current status and daily extremes.
///
/// `Space Mountain | open 40 min (upd 11:00) | peak 40 @ 12:00 | low 10 @ 10:00 | 2 pts`
pub fn ride_line(view: &RideView<'_>) -> String {
    let latest = view.latest;
    let status = if latest.is_open {
        format!("open {} min", latest.wait_minutes)
    } else {
        "closed".to_string()
    };

    let peak = match view.peak {
        Some(p) => format!("peak {} @ {}", p.max_wait_minutes, clock_or_dash(p.timestamp)),
        None => "peak -".to_string(),
    };

    let low = match view.trough {
        Some(t) => format!("low {} @ {}", t.min_wait_minutes, t.timestamp.format("%H:%M")),
        None => "low -".to_string(),
    };

    format!(
        "{} | {} (upd {}) | {} | {} | {} pts",
        view.ride_key,
        status,
        if latest.last_update.is_empty() { "-" } else { latest.last_update.as_str() },
        peak,
        low,
        view.series.len()
    )
}

/// Header line naming how many rides were seen and when the feed was last updated.
pub fn header_line(summary: &Summary) -> String {
    let updated = summary
        .latest_timestamp()
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string());

    format!("{} rides, last updated {}", summary.ride_count(), updated)
}

fn clock_or_dash(ts: Option<chrono::NaiveDateTime>) -> String {
    ts.map(|ts| ts.format("%H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
