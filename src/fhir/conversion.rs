//! Builders from a [`NightRecord`] to the FHIR resource triple.
//!
//! Pure structural transforms: every function copies fields into the target
//! shape and performs no validation.

use super::resources::{
    Bundle, BundleEntry, Condition, Observation, ObservationComponent, Patient, Resource,
};
use super::{CodeableConcept, Coding, Quantity, Reference, SampledData, SampledDataOrigin};
use crate::sleep::NightRecord;

pub const DEFAULT_PATIENT_ID: &str = "patient-001";
pub const DEFAULT_CONDITION_ID: &str = "cond-cancer-001";

pub fn make_patient(patient_id: &str) -> Patient {
    Patient {
        resource_type: "Patient".to_string(),
        id: patient_id.to_string(),
    }
}

/// Demo cancer condition, always active and confirmed, linked to the
/// patient.
pub fn make_condition_cancer(patient_id: &str, condition_id: &str) -> Condition {
    Condition {
        resource_type: "Condition".to_string(),
        id: condition_id.to_string(),
        subject: Reference {
            reference: format!("Patient/{patient_id}"),
        },
        clinical_status: CodeableConcept {
            coding: Some(vec![Coding {
                system: "http://terminology.hl7.org/CodeSystem/condition-clinical".to_string(),
                code: "active".to_string(),
                display: None,
            }]),
            text: None,
        },
        verification_status: CodeableConcept {
            coding: Some(vec![Coding {
                system: "http://terminology.hl7.org/CodeSystem/condition-ver-status".to_string(),
                code: "confirmed".to_string(),
                display: None,
            }]),
            text: None,
        },
        code: CodeableConcept {
            coding: None,
            text: Some("Cancer".to_string()),
        },
    }
}

/// Wrap one night into an Observation: total sleep hours as the measured
/// value, the raw binary signal as sampled data with the period in
/// milliseconds, and a reference to the condition.
pub fn make_sleep_observation(
    night: &NightRecord,
    patient_id: &str,
    condition_id: &str,
    obs_id: Option<&str>,
) -> Observation {
    let obs_id = obs_id.map_or_else(|| format!("obs-sleep-{}", night.date), str::to_string);

    let series_str = night
        .sleep_data
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let period_ms = night.interval_minutes as f64 * 60.0 * 1000.0;

    Observation {
        resource_type: "Observation".to_string(),
        id: obs_id,
        status: "final".to_string(),
        category: vec![CodeableConcept {
            coding: Some(vec![Coding {
                system: "http://terminology.hl7.org/CodeSystem/observation-category".to_string(),
                code: "activity".to_string(),
                display: Some("Activity".to_string()),
            }]),
            text: Some("Sleep".to_string()),
        }],
        code: CodeableConcept {
            coding: None,
            text: Some("Sleep duration and binary signal".to_string()),
        },
        subject: Reference {
            reference: format!("Patient/{patient_id}"),
        },
        effective_date_time: format!("{}T00:00:00Z", night.date),
        value_quantity: Quantity {
            value: night.total_sleep_hours,
            unit: "hours".to_string(),
        },
        component: vec![ObservationComponent {
            code: CodeableConcept {
                coding: None,
                text: Some("Sleep binary signal (1=asleep, 0=awake)".to_string()),
            },
            value_sampled_data: SampledData {
                origin: SampledDataOrigin {
                    value: 0,
                    unit: "binary".to_string(),
                },
                period: period_ms,
                dimensions: 1,
                data: series_str,
            },
        }],
        has_member: vec![Reference {
            reference: format!("Condition/{condition_id}"),
        }],
    }
}

/// Collection bundle holding the patient, condition and observation, in
/// that order.
pub fn make_sleep_bundle(
    patient: Patient,
    condition: Condition,
    observation: Observation,
) -> Bundle {
    Bundle {
        resource_type: "Bundle".to_string(),
        bundle_type: "collection".to_string(),
        entry: vec![
            BundleEntry {
                resource: Resource::Patient(patient),
            },
            BundleEntry {
                resource: Resource::Condition(condition),
            },
            BundleEntry {
                resource: Resource::Observation(observation),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleep::SleepQuality;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn test_night() -> NightRecord {
        NightRecord {
            date: "2025-10-19".to_string(),
            bedtime: "23:00".to_string(),
            waketime: "07:00".to_string(),
            interval_minutes: 5,
            sleep_quality: SleepQuality::Custom,
            chance_asleep: 0.85,
            total_sleep_hours: 0.25,
            sleep_data: vec![1, 0, 1, 1],
        }
    }

    #[test]
    fn observation_wraps_the_night_signal() {
        let night = test_night();
        let obs = make_sleep_observation(&night, DEFAULT_PATIENT_ID, DEFAULT_CONDITION_ID, None);

        assert_eq!(obs.id, "obs-sleep-2025-10-19");
        assert_eq!(obs.effective_date_time, "2025-10-19T00:00:00Z");
        assert_eq!(obs.value_quantity.value, 0.25);
        assert_eq!(obs.value_quantity.unit, "hours");

        let sampled = &obs.component[0].value_sampled_data;
        assert_eq!(sampled.data, "1 0 1 1");
        assert_eq!(sampled.period, 300_000.0);
        assert_eq!(sampled.dimensions, 1);
        assert_eq!(sampled.origin.value, 0);

        assert_eq!(obs.subject.reference, "Patient/patient-001");
        assert_eq!(obs.has_member[0].reference, "Condition/cond-cancer-001");
    }

    #[test]
    fn explicit_observation_id_wins_over_the_derived_one() {
        let night = test_night();
        let obs = make_sleep_observation(&night, "p", "c", Some("obs-custom"));
        assert_eq!(obs.id, "obs-custom");
    }

    #[test]
    fn condition_serializes_to_the_r4_shape() {
        let condition = make_condition_cancer(DEFAULT_PATIENT_ID, DEFAULT_CONDITION_ID);
        let value = serde_json::to_value(&condition).unwrap();

        assert_eq!(
            value,
            json!({
                "resourceType": "Condition",
                "id": "cond-cancer-001",
                "subject": {"reference": "Patient/patient-001"},
                "clinicalStatus": {
                    "coding": [{
                        "system": "http://terminology.hl7.org/CodeSystem/condition-clinical",
                        "code": "active"
                    }]
                },
                "verificationStatus": {
                    "coding": [{
                        "system": "http://terminology.hl7.org/CodeSystem/condition-ver-status",
                        "code": "confirmed"
                    }]
                },
                "code": {"text": "Cancer"}
            })
        );
    }

    #[test]
    fn bundle_collects_the_resource_triple_in_order() {
        let night = test_night();
        let bundle = make_sleep_bundle(
            make_patient(DEFAULT_PATIENT_ID),
            make_condition_cancer(DEFAULT_PATIENT_ID, DEFAULT_CONDITION_ID),
            make_sleep_observation(&night, DEFAULT_PATIENT_ID, DEFAULT_CONDITION_ID, None),
        );

        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value["resourceType"], "Bundle");
        assert_eq!(value["type"], "collection");

        let entries = value["entry"].as_array().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["resource"]["resourceType"], "Patient");
        assert_eq!(entries[1]["resource"]["resourceType"], "Condition");
        assert_eq!(entries[2]["resource"]["resourceType"], "Observation");
    }
}
