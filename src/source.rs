//! Where a park's wait-time payload lives for a given day.
//!
//! Payloads are addressed as `{base}/{park}/{YYYY}/{MM}/{DD}.csv`.

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Which day's payload to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedDate {
    /// Resolved against the caller's clock.
    Today,
    On(NaiveDate),
}

impl FeedDate {
    /// Parses `YYYY-MM-DD`, or `today` (any case).
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("today") {
            return Ok(FeedDate::Today);
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(FeedDate::On)
            .with_context(|| format!("invalid date '{raw}', expected YYYY-MM-DD"))
    }

    /// The concrete date, with `today` supplying [`FeedDate::Today`].
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            FeedDate::Today => today,
            FeedDate::On(date) => date,
        }
    }
}

/// Slash-separated `YYYY/MM/DD` path segment.
pub fn date_segment(date: NaiveDate) -> String {
    format!("{:04}/{:02}/{:02}", date.year(), date.month(), date.day())
}

/// Per-park, per-day payload location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLocation {
    pub base: String,
    pub park: String,
    pub date: NaiveDate,
}

impl FeedLocation {
    pub fn new(base: &str, park: &str, date: FeedDate, today: NaiveDate) -> Result<Self> {
        let park = park.trim().trim_matches('/');
        if park.is_empty() {
            return Err(anyhow!("park must not be empty"));
        }

        Ok(FeedLocation {
            base: base.trim().trim_end_matches('/').to_string(),
            park: park.to_string(),
            date: date.resolve(today),
        })
    }

    /// Full path or URL of the payload.
    pub fn url(&self) -> String {
        format!("{}/{}/{}.csv", self.base, self.park, date_segment(self.date))
    }
}

impl fmt::Display for FeedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
