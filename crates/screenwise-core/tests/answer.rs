use std::collections::BTreeMap;

use screenwise_core::models::answer::{Answer, AnswerValue};
use screenwise_core::models::prediction::{PredictionSource, VideoPrediction};

#[test]
fn severity_index_follows_ordering() {
    let indices: Vec<u8> = AnswerValue::ALL.iter().map(|v| v.severity_index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert!(AnswerValue::Never < AnswerValue::Rarely);
    assert!(AnswerValue::Often < AnswerValue::Always);
}

#[test]
fn fraction_spans_zero_to_one() {
    assert_eq!(AnswerValue::Never.fraction(), 0.0);
    assert_eq!(AnswerValue::Sometimes.fraction(), 0.5);
    assert_eq!(AnswerValue::Always.fraction(), 1.0);
}

#[test]
fn parses_case_insensitive_names() {
    assert_eq!("often".parse::<AnswerValue>(), Ok(AnswerValue::Often));
    assert_eq!(" ALWAYS ".parse::<AnswerValue>(), Ok(AnswerValue::Always));
    let err = "sometimes?".parse::<AnswerValue>().unwrap_err();
    assert_eq!(err.to_string(), "unknown answer value: sometimes?");
}

#[test]
fn answer_deserializes_from_ui_payload() {
    let answer: Answer =
        serde_json::from_str(r#"{"question_id": "eye_contact", "value": "rarely"}"#).unwrap();
    assert_eq!(answer, Answer::new("eye_contact", AnswerValue::Rarely));
}

#[test]
fn prediction_source_round_trips_as_plain_tag() {
    let prediction = VideoPrediction {
        prediction_score: Some(42.0),
        confidence: 0.8,
        features_detected: BTreeMap::new(),
        source: PredictionSource::Python,
    };
    let json = serde_json::to_value(&prediction).unwrap();
    assert_eq!(json["source"], "python");

    let source: PredictionSource = serde_json::from_str("\"edge-model\"").unwrap();
    assert_eq!(source, PredictionSource::Other("edge-model".to_string()));
    assert!(!source.is_fallback());
    assert!(PredictionSource::from("Fallback".to_string()).is_fallback());
}

#[test]
fn prediction_without_score_is_not_fusable() {
    let prediction = VideoPrediction {
        prediction_score: None,
        confidence: 0.7,
        features_detected: BTreeMap::new(),
        source: PredictionSource::Model,
    };
    assert!(!prediction.is_fusable());
}
