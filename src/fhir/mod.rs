//! FHIR-specific types and operations
//!
//! A deliberately small slice of FHIR R4: just enough structure to wrap one
//! night of synthetic sleep data into a Patient + Condition + Observation
//! bundle. Field names and nesting match the R4 JSON rendering.

pub mod conversion;
pub mod resources;

use serde::{Deserialize, Serialize};

/// Literal reference to another resource, e.g. `Patient/patient-001`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    pub reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coding {
    pub system: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Concept with an optional coding list and an optional free-text label;
/// serialization drops whichever half is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coding: Option<Vec<Coding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

/// Inline sampled series: a flat space-separated rendering of the samples,
/// tagged with the sampling period in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampledData {
    pub origin: SampledDataOrigin,
    pub period: f64,
    pub dimensions: u32,
    pub data: String,
}

/// Zero point of a sampled series. Kept separate from [`Quantity`] so the
/// origin value serializes as an integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampledDataOrigin {
    pub value: i64,
    pub unit: String,
}
