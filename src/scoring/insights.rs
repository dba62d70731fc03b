use crate::types::question::WiscarDimension;
use crate::types::report::Insights;
use crate::types::scoring::{Recommendation, Score, ScoreCard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Psychometric,
    Technical,
    Wiscar(WiscarDimension),
}

impl Metric {
    fn read(self, card: &ScoreCard) -> Score {
        match self {
            Self::Psychometric => card.psychometric,
            Self::Technical => card.technical,
            Self::Wiscar(dimension) => card.wiscar.get(dimension),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Threshold {
    AtLeast(Score),
    Below(Score),
}

impl Threshold {
    fn holds(self, score: Score) -> bool {
        match self {
            Self::AtLeast(limit) => score >= limit,
            Self::Below(limit) => score < limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Strength,
    Improvement,
}

#[derive(Debug, Clone, Copy)]
struct InsightRule {
    metric: Metric,
    threshold: Threshold,
    target: Target,
    text: &'static str,
}

const STRENGTH_LEVEL: Score = 75;
const IMPROVEMENT_LEVEL: Score = 60;

// Rules fire independently, in table order.
const RULES: &[InsightRule] = &[
    InsightRule {
        metric: Metric::Psychometric,
        threshold: Threshold::AtLeast(STRENGTH_LEVEL),
        target: Target::Strength,
        text: "Strong personality fit for change management roles",
    },
    InsightRule {
        metric: Metric::Technical,
        threshold: Threshold::AtLeast(STRENGTH_LEVEL),
        target: Target::Strength,
        text: "Solid foundation in change management frameworks",
    },
    InsightRule {
        metric: Metric::Wiscar(WiscarDimension::Will),
        threshold: Threshold::AtLeast(STRENGTH_LEVEL),
        target: Target::Strength,
        text: "High motivation and commitment to the field",
    },
    InsightRule {
        metric: Metric::Wiscar(WiscarDimension::Cognitive),
        threshold: Threshold::AtLeast(STRENGTH_LEVEL),
        target: Target::Strength,
        text: "Excellent analytical and problem-solving abilities",
    },
    InsightRule {
        metric: Metric::Psychometric,
        threshold: Threshold::Below(IMPROVEMENT_LEVEL),
        target: Target::Improvement,
        text: "Develop emotional intelligence and stress management skills",
    },
    InsightRule {
        metric: Metric::Technical,
        threshold: Threshold::Below(IMPROVEMENT_LEVEL),
        target: Target::Improvement,
        text: "Study change management frameworks (ADKAR, Kotter's 8 Steps)",
    },
    InsightRule {
        metric: Metric::Wiscar(WiscarDimension::Skill),
        threshold: Threshold::Below(IMPROVEMENT_LEVEL),
        target: Target::Improvement,
        text: "Practice communication and conflict resolution skills",
    },
];

pub const CAREER_PATHS: [&str; 5] = [
    "Change Management Advisor",
    "Organizational Development Specialist",
    "Business Transformation Consultant",
    "HR Change Agent",
    "Project Manager with Change Focus",
];

pub fn next_steps(recommendation: Recommendation) -> [&'static str; 3] {
    match recommendation {
        Recommendation::Yes => [
            "Consider pursuing change management certification (Prosci, CCMP)",
            "Seek opportunities to lead change initiatives in your current role",
            "Network with change management professionals",
        ],
        Recommendation::Maybe => [
            "Focus on developing identified improvement areas",
            "Gain experience in project management or team leadership",
            "Take introductory courses in organizational behavior",
        ],
        Recommendation::No => [
            "Consider building foundational skills in communication and leadership",
            "Explore related fields like HR, project management, or training",
            "Reassess after gaining more professional experience",
        ],
    }
}

pub fn generate_insights(card: &ScoreCard, recommendation: Recommendation) -> Insights {
    let mut insights = Insights::default();

    for rule in RULES {
        if !rule.threshold.holds(rule.metric.read(card)) {
            continue;
        }
        let list = match rule.target {
            Target::Strength => &mut insights.strengths,
            Target::Improvement => &mut insights.improvements,
        };
        list.push(rule.text.to_string());
    }

    insights.next_steps = next_steps(recommendation)
        .iter()
        .map(|step| step.to_string())
        .collect();
    insights.career_paths = CAREER_PATHS.iter().map(|path| path.to_string()).collect();
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::WiscarScores;

    fn card(psychometric: Score, technical: Score, wiscar: WiscarScores) -> ScoreCard {
        ScoreCard::new(psychometric, technical, wiscar)
    }

    #[test]
    fn high_scores_emit_every_strength_and_no_improvements() {
        let card = card(90, 90, WiscarScores::uniform(90));
        let insights = generate_insights(&card, Recommendation::Yes);
        assert_eq!(insights.strengths.len(), 4);
        assert!(insights.improvements.is_empty());
        assert_eq!(
            insights.next_steps[0],
            "Consider pursuing change management certification (Prosci, CCMP)"
        );
    }

    #[test]
    fn zero_scores_emit_every_improvement_and_no_strengths() {
        let card = card(0, 0, WiscarScores::default());
        let insights = generate_insights(&card, Recommendation::No);
        assert!(insights.strengths.is_empty());
        assert_eq!(
            insights.improvements,
            vec![
                "Develop emotional intelligence and stress management skills",
                "Study change management frameworks (ADKAR, Kotter's 8 Steps)",
                "Practice communication and conflict resolution skills",
            ]
        );
    }

    #[test]
    fn middle_band_fires_nothing() {
        let card = card(60, 74, WiscarScores::uniform(70));
        let insights = generate_insights(&card, Recommendation::Maybe);
        assert!(insights.strengths.is_empty());
        assert!(insights.improvements.is_empty());
        assert_eq!(insights.next_steps.len(), 3);
    }

    #[test]
    fn thresholds_are_inclusive_for_strengths_and_exclusive_for_improvements() {
        let wiscar = WiscarScores {
            will: 75,
            cognitive: 74,
            skill: 59,
            ..WiscarScores::uniform(80)
        };
        let insights = generate_insights(&card(75, 60, wiscar), Recommendation::Maybe);
        assert_eq!(
            insights.strengths,
            vec![
                "Strong personality fit for change management roles",
                "High motivation and commitment to the field",
            ]
        );
        assert_eq!(
            insights.improvements,
            vec!["Practice communication and conflict resolution skills"]
        );
    }

    #[test]
    fn next_steps_follow_tier_and_career_paths_are_constant() {
        let low = generate_insights(&card(0, 0, WiscarScores::default()), Recommendation::No);
        let high = generate_insights(
            &card(100, 100, WiscarScores::uniform(100)),
            Recommendation::Yes,
        );
        assert_ne!(low.next_steps, high.next_steps);
        assert_eq!(
            low.next_steps[2],
            "Reassess after gaining more professional experience"
        );
        assert_eq!(low.career_paths, high.career_paths);
        assert_eq!(low.career_paths.len(), 5);
    }
}
