use crate::question::{Question, Respondent};
use crate::QuestionBank;

/// Caregiver report for young children.
/// 12 questions weighted toward early social-communication milestones.
pub struct Parent;

impl QuestionBank for Parent {
    fn id(&self) -> &str {
        "parent"
    }

    fn name(&self) -> &str {
        "Parent / Caregiver Report"
    }

    fn respondent(&self) -> Respondent {
        Respondent::Parent
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                (
                    "name_response",
                    "My child does not respond when their name is called.",
                    1.5,
                    "Social Communication",
                    "Practice name-response games during short daily play sessions.",
                ),
                (
                    "pointing",
                    "My child does not point to show me things of interest.",
                    1.4,
                    "Joint Attention",
                    "Model pointing and shared looking during everyday routines.",
                ),
                (
                    "eye_contact",
                    "My child avoids looking at my face or eyes.",
                    1.3,
                    "Social Communication",
                    "Use face-to-face play such as peekaboo to encourage shared attention.",
                ),
                (
                    "pretend_play",
                    "My child does not engage in pretend play.",
                    1.1,
                    "Play",
                    "Join your child's play and introduce simple pretend actions.",
                ),
                (
                    "speech_delay",
                    "My child uses fewer words than other children the same age.",
                    1.4,
                    "Language",
                    "Request a speech and language evaluation.",
                ),
                (
                    "echolalia",
                    "My child repeats words or phrases out of context.",
                    1.0,
                    "Language",
                    "Note repeated phrases and share examples with a speech therapist.",
                ),
                (
                    "lining_up",
                    "My child lines up toys or objects repeatedly.",
                    1.0,
                    "Restricted and Repetitive Behavior",
                    "Gently expand play by adding new steps to preferred activities.",
                ),
                (
                    "hand_flapping",
                    "My child flaps their hands, rocks, or spins.",
                    1.1,
                    "Restricted and Repetitive Behavior",
                    "Record when movements occur and share the recordings with a specialist.",
                ),
                (
                    "transitions",
                    "My child has intense meltdowns when routines change.",
                    1.2,
                    "Restricted and Repetitive Behavior",
                    "Use visual timers and picture schedules ahead of transitions.",
                ),
                (
                    "sensory_reactions",
                    "My child over-reacts or under-reacts to sounds, lights, or touch.",
                    1.1,
                    "Sensory Processing",
                    "Ask for an occupational therapy sensory assessment.",
                ),
                (
                    "peer_interest",
                    "My child shows little interest in other children.",
                    1.2,
                    "Social Interaction",
                    "Arrange short, structured play dates with one familiar peer.",
                ),
                (
                    "skill_loss",
                    "My child has lost words or skills they used to have.",
                    1.6,
                    "Development",
                    "Report any loss of skills to a pediatrician promptly.",
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
