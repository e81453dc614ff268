//! Synthetic sleep-series generation
//!
//! This module is the computational core of SleepTrack: it turns a date, a
//! bedtime/waketime window and a per-tick asleep-probability into a binary
//! sample sequence plus derived summary statistics. Everything else in the
//! crate shapes this module's output for transport.

pub mod generator;

pub use generator::{
    generate_night, generate_series, parse_clock_time, parse_date, pick_sleep_quality, Clock,
    NightParams, SeriesParams, SystemClock,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quality tier for one night, mapping to a fixed chance of being asleep
/// at any given tick. `Custom` marks nights where the caller supplied the
/// probability directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Great,
    Good,
    Bad,
    Custom,
}

#[derive(Debug, Error)]
pub enum SleepError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),
    #[error("interval must be a positive number of minutes, got {0}")]
    InvalidInterval(i64),
    #[error("chance_asleep must be between 0 and 1, got {0}")]
    InvalidChance(f64),
}

/// One simulated night: summary statistics plus the raw binary signal
/// (1 = asleep, 0 = awake, one sample per interval tick).
///
/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightRecord {
    pub date: String,
    pub bedtime: String,
    pub waketime: String,
    pub interval_minutes: i64,
    pub sleep_quality: SleepQuality,
    /// Generating probability, rounded to 2 decimals for display. The raw
    /// value drives generation, so this may diverge from the empirical
    /// frequency of 1s in `sleep_data`.
    pub chance_asleep: f64,
    pub total_sleep_hours: f64,
    pub sleep_data: Vec<u8>,
}
