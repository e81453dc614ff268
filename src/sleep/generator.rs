use chrono::{Duration, Local, NaiveDate, NaiveTime};
use rand::Rng;

use super::{NightRecord, SleepError, SleepQuality};

/// Quality tiers and their fixed asleep-probabilities.
const QUALITY_TIERS: [(SleepQuality, f64); 3] = [
    (SleepQuality::Great, 0.95),
    (SleepQuality::Good, 0.85),
    (SleepQuality::Bad, 0.65),
];

/// Source of "today" for nights generated without an explicit date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the machine's local date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Draw a quality tier uniformly at random and return it with its fixed
/// asleep-probability.
pub fn pick_sleep_quality<R: Rng + ?Sized>(rng: &mut R) -> (SleepQuality, f64) {
    QUALITY_TIERS[rng.gen_range(0..QUALITY_TIERS.len())]
}

/// Inputs for one simulated night. `date: None` resolves to the injected
/// clock's today; `chance_asleep: None` draws a quality tier instead.
#[derive(Debug, Clone)]
pub struct NightParams {
    pub date: Option<NaiveDate>,
    pub bedtime: NaiveTime,
    pub waketime: NaiveTime,
    pub interval_minutes: i64,
    pub chance_asleep: Option<f64>,
}

impl Default for NightParams {
    fn default() -> Self {
        NightParams {
            date: None,
            bedtime: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            waketime: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            interval_minutes: 1,
            chance_asleep: None,
        }
    }
}

/// Inputs for a run of consecutive nights starting at `start_date`
/// (clock today when absent). The time window and interval apply to every
/// night; quality is drawn independently per night.
#[derive(Debug, Clone)]
pub struct SeriesParams {
    pub start_date: Option<NaiveDate>,
    pub num_nights: u32,
    pub bedtime: NaiveTime,
    pub waketime: NaiveTime,
    pub interval_minutes: i64,
}

impl Default for SeriesParams {
    fn default() -> Self {
        let night = NightParams::default();
        SeriesParams {
            start_date: None,
            num_nights: 7,
            bedtime: night.bedtime,
            waketime: night.waketime,
            interval_minutes: night.interval_minutes,
        }
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, SleepError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| SleepError::InvalidDate(value.to_string()))
}

pub fn parse_clock_time(value: &str) -> Result<NaiveTime, SleepError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| SleepError::InvalidTime(value.to_string()))
}

/// Generate one night of fake sleep data.
///
/// Each interval tick between bedtime and waketime gets an independent
/// uniform draw in `[0, 1)`; the tick is asleep when the draw falls below
/// the night's asleep-probability. Remainder minutes that do not fill a
/// full interval are dropped.
pub fn generate_night<C, R>(
    params: &NightParams,
    clock: &C,
    rng: &mut R,
) -> Result<NightRecord, SleepError>
where
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    if params.interval_minutes <= 0 {
        return Err(SleepError::InvalidInterval(params.interval_minutes));
    }
    if let Some(chance) = params.chance_asleep {
        if !(0.0..=1.0).contains(&chance) {
            return Err(SleepError::InvalidChance(chance));
        }
    }

    let date = params.date.unwrap_or_else(|| clock.today());

    let (quality, chance_asleep) = match params.chance_asleep {
        Some(chance) => (SleepQuality::Custom, chance),
        None => pick_sleep_quality(rng),
    };

    let start = date.and_time(params.bedtime);
    let mut end = date.and_time(params.waketime);
    // A night may cross midnight.
    if end <= start {
        end += Duration::days(1);
    }

    let total_minutes = (end - start).num_minutes();
    let data_points = total_minutes / params.interval_minutes;

    let mut sleep_data = Vec::with_capacity(data_points as usize);
    for _ in 0..data_points {
        sleep_data.push(u8::from(rng.gen::<f64>() < chance_asleep));
    }

    let asleep_minutes =
        sleep_data.iter().map(|&s| i64::from(s)).sum::<i64>() * params.interval_minutes;
    let total_sleep_hours = round2(asleep_minutes as f64 / 60.0);

    Ok(NightRecord {
        date: date.format("%Y-%m-%d").to_string(),
        bedtime: params.bedtime.format("%H:%M").to_string(),
        waketime: params.waketime.format("%H:%M").to_string(),
        interval_minutes: params.interval_minutes,
        sleep_quality: quality,
        chance_asleep: round2(chance_asleep),
        total_sleep_hours,
        sleep_data,
    })
}

/// Generate `num_nights` consecutive nights starting at the series start
/// date. A failed night aborts the whole series; there is no partial
/// result.
pub fn generate_series<C, R>(
    params: &SeriesParams,
    clock: &C,
    rng: &mut R,
) -> Result<Vec<NightRecord>, SleepError>
where
    C: Clock + ?Sized,
    R: Rng + ?Sized,
{
    let start_date = params.start_date.unwrap_or_else(|| clock.today());

    let mut nights = Vec::with_capacity(params.num_nights as usize);
    for i in 0..params.num_nights {
        let night = NightParams {
            date: Some(start_date + Duration::days(i64::from(i))),
            bedtime: params.bedtime,
            waketime: params.waketime,
            interval_minutes: params.interval_minutes,
            chance_asleep: None,
        };
        nights.push(generate_night(&night, clock, rng)?);
    }

    Ok(nights)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
