use std::collections::BTreeMap;

use screenwise_core::models::prediction::{PredictionSource, VideoPrediction};
use screenwise_scoring::fusion::fuse;

fn prediction(score: Option<f64>) -> VideoPrediction {
    VideoPrediction {
        prediction_score: score,
        confidence: 0.9,
        features_detected: BTreeMap::new(),
        source: PredictionSource::Model,
    }
}

#[test]
fn sixty_forty_split() {
    assert_eq!(fuse(50.0, Some(&prediction(Some(100.0)))), Some(70.0));
    assert_eq!(fuse(100.0, Some(&prediction(Some(0.0)))), Some(60.0));
    assert_eq!(fuse(33.3, Some(&prediction(Some(66.6)))), Some(46.6));
}

#[test]
fn absent_prediction_is_not_fused() {
    assert_eq!(fuse(50.0, None), None);
}

#[test]
fn prediction_without_score_is_not_fused() {
    assert_eq!(fuse(50.0, Some(&prediction(None))), None);
    assert_eq!(fuse(50.0, Some(&prediction(Some(f64::NAN)))), None);
}

#[test]
fn prediction_score_is_clamped_before_fusion() {
    assert_eq!(fuse(50.0, Some(&prediction(Some(250.0)))), Some(70.0));
    assert_eq!(fuse(50.0, Some(&prediction(Some(-40.0)))), Some(30.0));
}

#[test]
fn fused_score_stays_between_inputs() {
    for questionnaire in [0.0, 12.5, 50.0, 87.3, 100.0] {
        for video in [0.0, 25.0, 64.9, 100.0] {
            let fused = fuse(questionnaire, Some(&prediction(Some(video)))).unwrap();
            let lo = f64::min(questionnaire, video) - 0.05;
            let hi = f64::max(questionnaire, video) + 0.05;
            assert!((lo..=hi).contains(&fused), "{questionnaire} + {video} -> {fused}");
        }
    }
}
