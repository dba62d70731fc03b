use crate::types::question::{Category, Question, WiscarDimension};

pub const LIKERT_LABELS: [(u8, &str); 5] = [
    (1, "Strongly Disagree"),
    (2, "Disagree"),
    (3, "Neutral"),
    (4, "Agree"),
    (5, "Strongly Agree"),
];

pub const TITLE: &str = "Change Management Advisor Assessment";
pub const TAGLINE: &str =
    "Evaluate your readiness and fit to become a Change Management Advisor";
pub const INTRODUCTION: &str = "Change management advising is the practice of managing the human side of change: making sure stakeholders understand, accept and implement changes through communication, training and support. The assessment takes 20-30 minutes and covers personality, skills, knowledge and readiness.";

/// The shipped question catalog, in presentation order.
pub fn questions() -> Vec<Question> {
    use Category::{Psychometric, Technical, Wiscar};

    vec![
        Question::likert(
            "psych-1",
            Psychometric,
            "I find it energizing to help organizations navigate through periods of change.",
        )
        .with_facet("interest")
        .with_weight(1.2),
        Question::likert(
            "psych-2",
            Psychometric,
            "I remain calm and composed when facing unexpected challenges or resistance.",
        )
        .with_facet("personality")
        .with_weight(1.1),
        Question::likert(
            "psych-3",
            Psychometric,
            "I prefer working on long-term projects that may take months to show results.",
        )
        .with_facet("motivation")
        .with_weight(1.0),
        Question::multiple_choice(
            "psych-4",
            Psychometric,
            "When leading a team through change, which approach do you naturally gravitate toward?",
            &[
                "Detailed planning with clear timelines and milestones",
                "Flexible approach that adapts based on team feedback",
                "Strong communication focus with frequent check-ins",
                "Data-driven approach with metrics and analysis",
            ],
        )
        .with_facet("working-style"),
        Question::likert(
            "psych-5",
            Psychometric,
            "I can easily understand why people might resist organizational changes.",
        )
        .with_facet("empathy")
        .with_weight(1.3),
        Question::multiple_choice(
            "tech-1",
            Technical,
            "Which of the following is a key component of the ADKAR change management model?",
            &[
                "Awareness of the need for change",
                "Analysis of market conditions",
                "Assessment of technical capabilities",
                "Allocation of financial resources",
            ],
        )
        .with_correct_answer("Awareness of the need for change")
        .with_weight(1.0),
        Question::scenario(
            "tech-2",
            Technical,
            "A department is implementing new software, but 60% of employees are avoiding training sessions.",
            "What would be your primary approach to address this resistance?",
            &[
                "Mandate attendance at training sessions",
                "Investigate the root causes of avoidance",
                "Offer incentives for training completion",
                "Replace resistant employees with new hires",
            ],
        )
        .with_correct_answer("Investigate the root causes of avoidance"),
        Question::multiple_choice(
            "tech-3",
            Technical,
            "In stakeholder analysis, who would typically be classified as a \"Champion\"?",
            &[
                "Someone with high influence but low support for the change",
                "Someone with low influence but high support for the change",
                "Someone with high influence and high support for the change",
                "Someone with low influence and low support for the change",
            ],
        )
        .with_correct_answer("Someone with high influence and high support for the change"),
        Question::likert(
            "wiscar-will-1",
            Wiscar,
            "I am willing to invest significant time and effort to develop expertise in change management.",
        )
        .with_dimension(WiscarDimension::Will)
        .with_weight(1.2),
        Question::likert(
            "wiscar-interest-1",
            Wiscar,
            "I actively seek out articles, books, or courses about organizational behavior and change.",
        )
        .with_dimension(WiscarDimension::Interest)
        .with_weight(1.1),
        Question::multiple_choice(
            "wiscar-skill-1",
            Wiscar,
            "How would you rate your current communication skills in difficult conversations?",
            &[
                "Excellent - I can handle any challenging conversation",
                "Good - I can manage most difficult situations",
                "Fair - I sometimes struggle but can get through it",
                "Poor - I tend to avoid difficult conversations",
            ],
        )
        .with_dimension(WiscarDimension::Skill),
        Question::scenario(
            "wiscar-cognitive-1",
            Wiscar,
            "Your change initiative is behind schedule. Leadership is pressuring for faster results, but your team is showing signs of burnout.",
            "How would you analyze and address this situation?",
            &[
                "Push the team harder to meet leadership expectations",
                "Request a deadline extension without team input",
                "Analyze workload, assess team capacity, and propose realistic alternatives",
                "Focus only on the most critical deliverables",
            ],
        )
        .with_dimension(WiscarDimension::Cognitive)
        .with_correct_answer(
            "Analyze workload, assess team capacity, and propose realistic alternatives",
        ),
        Question::likert(
            "wiscar-ability-1",
            Wiscar,
            "I actively seek feedback on my performance and use it to improve my approach.",
        )
        .with_dimension(WiscarDimension::Ability)
        .with_weight(1.1),
        Question::scenario(
            "wiscar-real-world-1",
            Wiscar,
            "You are consulting for a manufacturing company implementing lean processes. The floor supervisors are openly skeptical.",
            "What would be your first priority?",
            &[
                "Present data showing the benefits of lean processes",
                "Build relationships and understand their concerns",
                "Work with management to enforce compliance",
                "Find quick wins to demonstrate value",
            ],
        )
        .with_dimension(WiscarDimension::RealWorld)
        .with_correct_answer("Build relationships and understand their concerns"),
    ]
}

pub fn likert_label(value: u8) -> Option<&'static str> {
    LIKERT_LABELS
        .iter()
        .find(|(scale, _)| *scale == value)
        .map(|(_, label)| *label)
}
