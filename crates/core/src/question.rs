use serde::Serialize;

/// Onboarding questionnaire entry served to the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
    pub example_answers: &'static [&'static str],
}

/// The static onboarding question set.
#[must_use]
pub const fn onboarding_questions() -> &'static [Question] {
    &[
        Question {
            id: "interest",
            text: "What subjects or topics interest you the most?",
            icon: "🎯",
            example_answers: &[
                "Technology and AI",
                "Arts and Design",
                "Business and Marketing",
                "Environmental Science",
            ],
        },
        Question {
            id: "skills",
            text: "What skills do you feel most confident in?",
            icon: "💪",
            example_answers: &[
                "Problem-solving",
                "Programming in JavaScript",
                "Creative writing",
                "Public speaking",
            ],
        },
        Question {
            id: "goal",
            text: "What's your ultimate dream job?",
            icon: "🚀",
            example_answers: &[
                "Software Engineer at Google",
                "Graphic Designer at an agency",
                "Entrepreneur running my own company",
                "Data Scientist in healthcare",
            ],
        },
        Question {
            id: "values",
            text: "What values matter most to you?",
            icon: "❤️",
            example_answers: &[
                "Work-life balance",
                "High salary",
                "Helping people",
                "Opportunities for learning",
            ],
        },
    ]
}
