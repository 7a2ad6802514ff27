//! Question and option wording for the ids scored in `weights`.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AnswerOption {
    pub id: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: [AnswerOption; 4],
}

const fn opt(id: &'static str, text: &'static str) -> AnswerOption {
    AnswerOption { id, text }
}

static QUESTIONS: [Question; 5] = [
    Question {
        id: "q1",
        prompt: "How do you approach challenges?",
        options: [
            opt("A", "Head-on and directly"),
            opt("B", "With enthusiasm, bringing others along"),
            opt("C", "Carefully, one step at a time"),
            opt("D", "Analytically, after studying the problem"),
        ],
    },
    Question {
        id: "q2",
        prompt: "In team settings, you prefer to...",
        options: [
            opt("A", "Lead decisively"),
            opt("B", "Motivate others"),
            opt("C", "Support the team"),
            opt("D", "Ensure accuracy"),
        ],
    },
    Question {
        id: "q3",
        prompt: "When making decisions, you...",
        options: [
            opt("A", "Decide quickly"),
            opt("B", "Consider the impact on people"),
            opt("C", "Take time to think"),
            opt("D", "Gather all the data"),
        ],
    },
    Question {
        id: "q4",
        prompt: "Your communication style is...",
        options: [
            opt("A", "Direct and brief"),
            opt("B", "Expressive and engaging"),
            opt("C", "Patient and attentive"),
            opt("D", "Precise and detailed"),
        ],
    },
    Question {
        id: "q5",
        prompt: "Under pressure, you tend to...",
        options: [
            opt("A", "Take charge"),
            opt("B", "Stay optimistic"),
            opt("C", "Remain calm"),
            opt("D", "Focus on the facts"),
        ],
    },
];

pub fn catalog() -> &'static [Question] {
    &QUESTIONS
}
