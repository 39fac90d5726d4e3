use crate::question::{Question, Respondent};
use crate::QuestionBank;

/// Self-report bank for adolescents and adults.
/// 10 questions across social, communication, behavioral, and sensory domains.
pub struct Individual;

impl QuestionBank for Individual {
    fn id(&self) -> &str {
        "individual"
    }

    fn name(&self) -> &str {
        "Individual Self-Report"
    }

    fn respondent(&self) -> Respondent {
        Respondent::Individual
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            vec![
                Question::new(
                    "social_cues",
                    "I find it hard to understand what others are thinking or feeling.",
                    1.5,
                    "Social Communication",
                    "Practice recognizing emotions with structured social-skills exercises.",
                ),
                Question::new(
                    "conversation",
                    "I find it difficult to keep a conversation going.",
                    1.2,
                    "Social Communication",
                    "Work with a speech-language therapist on conversational turn-taking.",
                ),
                Question::new(
                    "eye_contact",
                    "I avoid eye contact or find it uncomfortable.",
                    1.0,
                    "Social Communication",
                    "Discuss eye-contact discomfort with a clinician before attempting exposure.",
                ),
                Question::new(
                    "routines",
                    "I get very upset when my routine changes unexpectedly.",
                    1.3,
                    "Restricted and Repetitive Behavior",
                    "Use visual schedules and advance notice to prepare for changes.",
                ),
                Question::new(
                    "repetitive_movements",
                    "I repeat the same movements, such as rocking or hand-flapping.",
                    1.2,
                    "Restricted and Repetitive Behavior",
                    "Note when repetitive movements occur and share the pattern with a specialist.",
                ),
                Question::new(
                    "intense_interests",
                    "I focus intensely on a narrow set of interests.",
                    1.0,
                    "Restricted and Repetitive Behavior",
                    "Channel focused interests into structured learning or work activities.",
                ),
                Question::new(
                    "sensory_sounds",
                    "Everyday sounds feel overwhelming or painful.",
                    1.1,
                    "Sensory Processing",
                    "Try noise-reducing headphones and ask about an occupational therapy assessment.",
                ),
                Question::new(
                    "sensory_textures",
                    "Certain textures of clothing or food are intolerable to me.",
                    0.9,
                    "Sensory Processing",
                    "Keep a sensory diary and discuss accommodations with an occupational therapist.",
                ),
                Question::new(
                    "literal_language",
                    "I take jokes or figures of speech literally.",
                    0.8,
                    "Social Communication",
                    "Ask trusted people to flag sarcasm or idioms during conversations.",
                ),
                Question::new(
                    "group_settings",
                    "I feel exhausted after spending time in social groups.",
                    1.0,
                    "Social Interaction",
                    "Plan recovery time after social events and limit their length.",
                ),
            ]
        });
        &QUESTIONS
    }

    fn family_history_question(&self) -> Option<&str> {
        Some("family_history")
    }
}
