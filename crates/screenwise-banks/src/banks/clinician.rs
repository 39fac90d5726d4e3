use crate::question::{Question, Respondent};
use crate::QuestionBank;

/// Clinician observation checklist. Heavier weights on directly observed
/// social reciprocity than the self-report and caregiver banks.
pub struct Clinician;

impl QuestionBank for Clinician {
    fn id(&self) -> &str {
        "clinician"
    }

    fn name(&self) -> &str {
        "Clinician Observation"
    }

    fn respondent(&self) -> Respondent {
        Respondent::Clinician
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                (
                    "reciprocity",
                    "Limited social-emotional reciprocity observed during the session.",
                    2.0,
                    "Social Communication",
                    "Refer for a standardized diagnostic observation.",
                ),
                (
                    "nonverbal",
                    "Atypical use of gestures, facial expression, or eye gaze.",
                    1.8,
                    "Social Communication",
                    "Document nonverbal communication across settings.",
                ),
                (
                    "relationships",
                    "Difficulty developing or maintaining age-appropriate relationships.",
                    1.6,
                    "Social Interaction",
                    "Gather teacher or caregiver reports on peer relationships.",
                ),
                (
                    "stereotyped_speech",
                    "Stereotyped or repetitive speech, motor movements, or object use.",
                    1.5,
                    "Restricted and Repetitive Behavior",
                    "Assess frequency and interference of stereotyped behaviors.",
                ),
                (
                    "insistence_sameness",
                    "Insistence on sameness or ritualized patterns of behavior.",
                    1.4,
                    "Restricted and Repetitive Behavior",
                    "Plan behavioral supports for transitions.",
                ),
                (
                    "fixated_interests",
                    "Highly restricted, fixated interests of abnormal intensity.",
                    1.2,
                    "Restricted and Repetitive Behavior",
                    "Explore interests as a bridge for engagement in therapy.",
                ),
                (
                    "sensory_reactivity",
                    "Hyper- or hypo-reactivity to sensory input.",
                    1.2,
                    "Sensory Processing",
                    "Refer for an occupational therapy sensory profile.",
                ),
                (
                    "functional_impact",
                    "Symptoms cause significant impairment in daily functioning.",
                    1.8,
                    "Functioning",
                    "Coordinate a multidisciplinary support plan.",
                ),
            ];

            items
                .iter()
                .map(|(id, text, weight, domain, action)| {
                    Question::new(id, text, *weight, domain, action)
                })
                .collect()
        });
        &QUESTIONS
    }

    fn family_history_question(&self) -> Option<&str> {
        Some("family_history")
    }
}
