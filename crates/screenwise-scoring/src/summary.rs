use screenwise_core::models::result::ScoringResult;

/// Format a result as a plain-text report section.
///
/// Reads the result only; nothing is recomputed.
pub fn render_summary(result: &ScoringResult) -> String {
    let mut output = String::from("## Screening Summary\n\n");

    if result.is_incomplete() {
        output.push_str("Assessment incomplete: no scored questions were answered.\n");
        return output;
    }

    output.push_str(&format!("- Questionnaire score: {:.1}\n", result.normalized_score));
    if let Some(fused) = result.fused_score {
        output.push_str(&format!("- Combined score: {fused:.1}\n"));
    }
    output.push_str(&format!("- Result: {}\n", result.severity_label));
    output.push_str(&format!("- Questions answered: {}\n", result.answered_count));

    if let Some(prediction) = &result.video_prediction {
        output.push_str("\n### Video Analysis\n");
        match prediction.prediction_score {
            Some(score) => output.push_str(&format!("- Score: {score:.1}\n")),
            None => output.push_str("- Score: unavailable\n"),
        }
        output.push_str(&format!("- Confidence: {:.0}%\n", prediction.confidence * 100.0));
        if prediction.source.is_fallback() {
            output.push_str("- Note: estimated while the video model was unavailable\n");
        }
        for (feature, value) in &prediction.features_detected {
            output.push_str(&format!("- {}: {value:.2}\n", feature.replace('_', " ")));
        }
    }

    output.push_str("\n### Top Contributing Factors\n");
    for (rank, contributor) in result.top_contributors.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({})\n   Action: {}\n",
            rank + 1,
            contributor.question,
            contributor.domain,
            contributor.action,
        ));
    }

    output.push_str("\n### Recommendations\n");
    for recommendation in &result.recommendations {
        output.push_str(&format!("- {recommendation}\n"));
    }

    output
}
