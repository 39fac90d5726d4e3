use screenwise_core::models::severity::{Severity, SeverityBand};

#[test]
fn band_boundaries_are_closed_below_open_above() {
    assert_eq!(SeverityBand::classify(0.0), SeverityBand::VeryLow);
    assert_eq!(SeverityBand::classify(24.9), SeverityBand::VeryLow);
    assert_eq!(SeverityBand::classify(25.0), SeverityBand::LowIndicators);
    assert_eq!(SeverityBand::classify(39.9), SeverityBand::LowIndicators);
    assert_eq!(SeverityBand::classify(40.0), SeverityBand::ModerateIndicators);
    assert_eq!(SeverityBand::classify(59.9), SeverityBand::ModerateIndicators);
    assert_eq!(SeverityBand::classify(60.0), SeverityBand::HighIndicators);
    assert_eq!(SeverityBand::classify(74.9), SeverityBand::HighIndicators);
    assert_eq!(SeverityBand::classify(75.0), SeverityBand::VeryHighIndicators);
    assert_eq!(SeverityBand::classify(100.0), SeverityBand::VeryHighIndicators);
}

#[test]
fn coarse_severity_matches_table() {
    assert_eq!(SeverityBand::classify(24.9).severity(), Severity::Low);
    assert_eq!(SeverityBand::classify(25.0).severity(), Severity::Mild);
    assert_eq!(SeverityBand::classify(59.9).severity(), Severity::Moderate);
    assert_eq!(SeverityBand::classify(60.0).severity(), Severity::High);
    assert_eq!(SeverityBand::classify(90.0).severity(), Severity::High);
}

#[test]
fn top_two_bands_share_severity_but_not_label() {
    let high = SeverityBand::HighIndicators;
    let very_high = SeverityBand::VeryHighIndicators;

    assert_eq!(high.severity(), very_high.severity());
    assert_eq!(high.label(), "High Indicators");
    assert_eq!(very_high.label(), "Very High Indicators");
    assert_ne!(high.recommendations(), very_high.recommendations());
}

#[test]
fn out_of_range_scores_still_classify() {
    assert_eq!(SeverityBand::classify(-3.0), SeverityBand::VeryLow);
    assert_eq!(SeverityBand::classify(f64::NAN), SeverityBand::VeryLow);
    assert_eq!(SeverityBand::classify(140.0), SeverityBand::VeryHighIndicators);
    assert_eq!(SeverityBand::classify(f64::INFINITY), SeverityBand::VeryHighIndicators);
}

#[test]
fn every_band_has_recommendations() {
    for (_, band) in SeverityBand::LOWER_BOUNDS {
        assert!(!band.recommendations().is_empty(), "{band:?}");
    }
}

#[test]
fn labels_match_serialized_form() {
    let json = serde_json::to_string(&SeverityBand::ModerateIndicators).unwrap();
    assert_eq!(json, "\"moderate_indicators\"");
    let json = serde_json::to_string(&Severity::Mild).unwrap();
    assert_eq!(json, "\"mild\"");
}
