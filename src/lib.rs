//! SleepTrack: a synthetic sleep-data service
//!
//! Generates fake nightly sleep-state time series and serves them over
//! HTTP, optionally wrapped into a minimal FHIR R4 bundle (Patient,
//! Condition, Observation) so the series can travel in a clinical-record
//! shape. There is no sensor input and no persistence; every response is
//! computed from its own request.

pub mod api;
pub mod config;
pub mod error;
pub mod fhir;
pub mod sleep;
