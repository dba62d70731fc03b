use crate::types::scoring::{Recommendation, Score, ScoreCard, WiscarScores};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_steps: Vec<String>,
    pub career_paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub psychometric_score: Score,
    pub technical_score: Score,
    pub wiscar_scores: WiscarScores,
    pub overall_score: Score,
    pub recommendation: Recommendation,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub next_steps: Vec<String>,
    pub career_paths: Vec<String>,
}

impl AssessmentResults {
    pub fn new(card: ScoreCard, insights: Insights) -> Self {
        Self {
            psychometric_score: card.psychometric,
            technical_score: card.technical,
            wiscar_scores: card.wiscar,
            overall_score: card.overall,
            recommendation: card.recommendation(),
            strengths: insights.strengths,
            improvements: insights.improvements,
            next_steps: insights.next_steps,
            career_paths: insights.career_paths,
        }
    }

    /// WISCAR average as displayed next to the radar, rounded like every other score.
    pub fn wiscar_average(&self) -> Score {
        crate::types::scoring::round_half_up(self.wiscar_scores.mean())
    }
}
