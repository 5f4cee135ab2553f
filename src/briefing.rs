// src/briefing.rs
//! # Forecast Briefing
//! Pure windowing helpers over an ordered forecast list: the per-day outlook
//! and the next-24-hours strip. Informational only; alerting lives in the
//! synthesizer.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::forecast::ForecastSample;

/// Days shown in the daily outlook.
pub const DAILY_DIGEST_DAYS: usize = 5;
/// Samples in the 24h strip (3-hour provider step).
pub const HOURLY_STRIP_LEN: usize = 8;

/// First sample of each distinct UTC calendar day, up to
/// [`DAILY_DIGEST_DAYS`] days. A forecast starting mid-day still contributes
/// that partial day.
pub fn daily_digest(samples: &[ForecastSample]) -> Vec<&ForecastSample> {
    let mut seen = std::collections::BTreeSet::new();
    let mut out = Vec::with_capacity(DAILY_DIGEST_DAYS);
    for sample in samples {
        if out.len() == DAILY_DIGEST_DAYS {
            break;
        }
        if seen.insert(utc_day(sample.timestamp)) {
            out.push(sample);
        }
    }
    out
}

/// Up to [`HOURLY_STRIP_LEN`] consecutive samples starting at the first one
/// whose UTC hour-of-day equals `now`'s, falling back to the head of the
/// list when no hour matches.
pub fn next_24h<'a>(samples: &'a [ForecastSample], now: DateTime<Utc>) -> &'a [ForecastSample] {
    let start = samples
        .iter()
        .position(|s| utc_hour(s.timestamp) == now.hour())
        .unwrap_or(0);
    let end = (start + HOURLY_STRIP_LEN).min(samples.len());
    &samples[start..end]
}

fn utc_day(ts_unix: u64) -> (i32, u32) {
    let dt = DateTime::from_timestamp(ts_unix as i64, 0).unwrap_or_default();
    (dt.year(), dt.ordinal())
}

fn utc_hour(ts_unix: u64) -> u32 {
    DateTime::from_timestamp(ts_unix as i64, 0)
        .unwrap_or_default()
        .hour()
}
