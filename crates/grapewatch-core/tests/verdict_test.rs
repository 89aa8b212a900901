//! Verdict wire format and outcome tags.

use proptest::prelude::*;

use grapewatch_core::models::sentinels::{HEALTHY_LABEL, UNKNOWN_LABEL};
use grapewatch_core::{
    AnalysisOutcome, DatasetError, GrapewatchErrorCode, InferenceError, ParseOutcome, Verdict,
};

#[test]
fn serializes_with_schema_field_names() {
    let json = serde_json::to_value(Verdict::new("Black Rot", 0.7, "lesions")).unwrap();
    assert_eq!(json["disease_detected"], "Black Rot");
    assert_eq!(json["confidence_score"], 0.7);
    assert_eq!(json["explanation"], "lesions");
}

#[test]
fn extra_fields_are_ignored() {
    let json = r#"{"disease_detected": "Black Rot", "confidence_score": 0.7, "explanation": "", "severity": "high"}"#;
    let v: Verdict = serde_json::from_str(json).unwrap();
    assert_eq!(v.disease_detected(), "Black Rot");
    assert_eq!(v.explanation(), "");
}

#[test]
fn null_field_is_rejected() {
    let json = r#"{"disease_detected": "Black Rot", "confidence_score": null, "explanation": ""}"#;
    assert!(serde_json::from_str::<Verdict>(json).is_err());
}

#[test]
fn sentinels_do_not_collide() {
    assert_ne!(HEALTHY_LABEL, UNKNOWN_LABEL);
}

#[test]
fn outcome_success_flags() {
    assert!(ParseOutcome::Direct.is_success());
    assert!(ParseOutcome::Embedded.is_success());
    assert!(!ParseOutcome::NoResponse.is_success());
    assert!(!ParseOutcome::EmbeddedInvalid.is_success());
    assert!(!ParseOutcome::NoRecordFound.is_success());
    assert_eq!(ParseOutcome::NoRecordFound.to_string(), "no_record_found");
}

#[test]
fn outcome_converts_to_pair() {
    let outcome = AnalysisOutcome {
        verdict: Verdict::healthy(),
        raw_response: Some("{}".to_string()),
        outcome: ParseOutcome::Direct,
    };
    let (verdict, raw): (Verdict, Option<String>) = outcome.into();
    assert!(verdict.is_healthy());
    assert_eq!(raw.as_deref(), Some("{}"));
}

#[test]
fn error_codes_are_stable() {
    let e = InferenceError::MissingCredential {
        env_var: "GEMINI_API_KEY".to_string(),
    };
    assert_eq!(e.error_code(), "INFERENCE_MISSING_CREDENTIAL");
    assert_eq!(DatasetError::Empty.error_code(), "DATASET_EMPTY");
}

proptest! {
    #[test]
    fn prop_non_empty_label_round_trips(label in "\\PC{1,30}", n in 0u32..=100, explanation in "\\PC{0,60}") {
        let v = Verdict::new(label, f64::from(n) / 100.0, explanation);
        let encoded = serde_json::to_string(&v).unwrap();
        let decoded: Verdict = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, v);
    }
}
