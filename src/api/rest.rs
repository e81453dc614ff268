use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::Filter;

use super::pages;
use crate::fhir::conversion::{
    make_condition_cancer, make_patient, make_sleep_bundle, make_sleep_observation,
    DEFAULT_CONDITION_ID, DEFAULT_PATIENT_ID,
};
use crate::sleep::{
    generate_night, generate_series, parse_clock_time, parse_date, Clock, NightParams,
    NightRecord, SeriesParams, SleepError,
};

/// Query options for one night. All optional; defaults mirror
/// [`NightParams::default`].
#[derive(Debug, Deserialize)]
pub struct SleepQuery {
    pub date: Option<String>,
    pub bedtime: Option<String>,
    pub waketime: Option<String>,
    pub interval: Option<i64>,
    pub chance_asleep: Option<f64>,
}

/// Query options for a run of consecutive nights.
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    pub start_date: Option<String>,
    pub num_nights: Option<u32>,
    pub bedtime: Option<String>,
    pub waketime: Option<String>,
    pub interval: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub struct RestApi {
    clock: Arc<dyn Clock + Send + Sync>,
}

impl RestApi {
    pub fn new(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        RestApi { clock }
    }

    pub fn routes(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        self.home()
            .or(self.get_sleep())
            .or(self.get_sleep_series())
            .or(self.get_fhir_observation())
            .or(self.dashboard())
    }

    fn home(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path::end()
            .and(warp::get())
            .map(|| warp::reply::html(pages::HOME_PAGE))
    }

    fn get_sleep(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let clock = Arc::clone(&self.clock);

        warp::path!("sleep")
            .and(warp::get())
            .and(warp::query::<SleepQuery>())
            .map(move |query: SleepQuery| {
                debug!(?query, "sleep night requested");

                match night_from_query(&query, clock.as_ref()) {
                    Ok(night) => warp::reply::with_status(warp::reply::json(&night), StatusCode::OK),
                    Err(err) => bad_request(&err),
                }
            })
    }

    fn get_sleep_series(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let clock = Arc::clone(&self.clock);

        warp::path!("sleep" / "series")
            .and(warp::get())
            .and(warp::query::<SeriesQuery>())
            .map(move |query: SeriesQuery| {
                debug!(?query, "sleep series requested");

                match series_from_query(&query, clock.as_ref()) {
                    Ok(nights) => {
                        warp::reply::with_status(warp::reply::json(&nights), StatusCode::OK)
                    }
                    Err(err) => bad_request(&err),
                }
            })
    }

    fn get_fhir_observation(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let clock = Arc::clone(&self.clock);

        warp::path!("fhir" / "observation")
            .and(warp::get())
            .map(move || {
                let night =
                    generate_night(&NightParams::default(), clock.as_ref(), &mut rand::thread_rng());

                match night {
                    Ok(night) => {
                        let patient = make_patient(DEFAULT_PATIENT_ID);
                        let condition =
                            make_condition_cancer(DEFAULT_PATIENT_ID, DEFAULT_CONDITION_ID);
                        let observation = make_sleep_observation(
                            &night,
                            DEFAULT_PATIENT_ID,
                            DEFAULT_CONDITION_ID,
                            None,
                        );
                        let bundle = make_sleep_bundle(patient, condition, observation);
                        warp::reply::with_status(warp::reply::json(&bundle), StatusCode::OK)
                    }
                    Err(err) => bad_request(&err),
                }
            })
    }

    fn dashboard(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("dashboard")
            .and(warp::get())
            .map(|| warp::reply::html(pages::DASHBOARD_PAGE))
    }
}

fn night_from_query(query: &SleepQuery, clock: &dyn Clock) -> Result<NightRecord, SleepError> {
    let mut params = NightParams::default();

    if let Some(date) = &query.date {
        params.date = Some(parse_date(date)?);
    }
    if let Some(bedtime) = &query.bedtime {
        params.bedtime = parse_clock_time(bedtime)?;
    }
    if let Some(waketime) = &query.waketime {
        params.waketime = parse_clock_time(waketime)?;
    }
    if let Some(interval) = query.interval {
        params.interval_minutes = interval;
    }
    params.chance_asleep = query.chance_asleep;

    generate_night(&params, clock, &mut rand::thread_rng())
}

fn series_from_query(
    query: &SeriesQuery,
    clock: &dyn Clock,
) -> Result<Vec<NightRecord>, SleepError> {
    let mut params = SeriesParams::default();

    if let Some(start_date) = &query.start_date {
        params.start_date = Some(parse_date(start_date)?);
    }
    if let Some(num_nights) = query.num_nights {
        params.num_nights = num_nights;
    }
    if let Some(bedtime) = &query.bedtime {
        params.bedtime = parse_clock_time(bedtime)?;
    }
    if let Some(waketime) = &query.waketime {
        params.waketime = parse_clock_time(waketime)?;
    }
    if let Some(interval) = query.interval {
        params.interval_minutes = interval;
    }

    generate_series(&params, clock, &mut rand::thread_rng())
}

fn bad_request(err: &SleepError) -> WithStatus<Json> {
    warn!(%err, "rejecting sleep request");

    let response = ApiResponse {
        status: "error".to_string(),
        message: err.to_string(),
        data: None,
    };
    warp::reply::with_status(warp::reply::json(&response), StatusCode::BAD_REQUEST)
}
