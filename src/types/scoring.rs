use crate::types::question::WiscarDimension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer score; within 0..=100 for well-formed input.
pub type Score = i32;

pub const PSYCHOMETRIC_WEIGHT: f64 = 0.30;
pub const TECHNICAL_WEIGHT: f64 = 0.30;
pub const WISCAR_WEIGHT: f64 = 0.40;

pub const YES_THRESHOLD: Score = 75;
pub const MAYBE_THRESHOLD: Score = 55;

/// Rounds half toward positive infinity, so `-2.5` becomes `-2` and `2.5` becomes `3`.
pub fn round_half_up(value: f64) -> Score {
    (value + 0.5).floor() as Score
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: Score,
    pub interest: Score,
    pub skill: Score,
    pub cognitive: Score,
    pub ability: Score,
    pub real_world: Score,
}

impl WiscarScores {
    pub fn from_fn(mut score: impl FnMut(WiscarDimension) -> Score) -> Self {
        Self {
            will: score(WiscarDimension::Will),
            interest: score(WiscarDimension::Interest),
            skill: score(WiscarDimension::Skill),
            cognitive: score(WiscarDimension::Cognitive),
            ability: score(WiscarDimension::Ability),
            real_world: score(WiscarDimension::RealWorld),
        }
    }

    #[cfg(test)]
    pub fn uniform(score: Score) -> Self {
        Self::from_fn(|_| score)
    }

    pub fn get(&self, dimension: WiscarDimension) -> Score {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (WiscarDimension, Score)> + '_ {
        WiscarDimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    pub fn mean(&self) -> f64 {
        let sum: f64 = self.iter().map(|(_, score)| f64::from(score)).sum();
        sum / WiscarDimension::ALL.len() as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub fn from_overall(overall: Score) -> Self {
        if overall >= YES_THRESHOLD {
            Self::Yes
        } else if overall >= MAYBE_THRESHOLD {
            Self::Maybe
        } else {
            Self::No
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Maybe => "maybe",
            Self::No => "no",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Highly Recommended",
            Self::Maybe => "Proceed with Preparation",
            Self::No => "Consider Alternative Paths",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Yes => "You demonstrate strong potential for success in change management roles. Your skills and mindset align well with industry requirements.",
            Self::Maybe => "Good foundation with room for growth. With focused development in key areas, you can build a successful change management career.",
            Self::No => "Consider building foundational skills or exploring related fields before pursuing change management roles.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCard {
    pub psychometric: Score,
    pub technical: Score,
    pub wiscar: WiscarScores,
    pub overall: Score,
}

impl ScoreCard {
    pub fn new(psychometric: Score, technical: Score, wiscar: WiscarScores) -> Self {
        let overall = round_half_up(
            f64::from(psychometric) * PSYCHOMETRIC_WEIGHT
                + f64::from(technical) * TECHNICAL_WEIGHT
                + wiscar.mean() * WISCAR_WEIGHT,
        );
        Self {
            psychometric,
            technical,
            wiscar,
            overall,
        }
    }

    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_overall(self.overall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_breaks_ties_toward_positive_infinity() {
        assert_eq!(round_half_up(72.5), 73);
        assert_eq!(round_half_up(72.49), 72);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(0.0), 0);
    }

    #[test]
    fn recommendation_thresholds_are_inclusive_on_lower_bound() {
        assert_eq!(Recommendation::from_overall(100), Recommendation::Yes);
        assert_eq!(Recommendation::from_overall(75), Recommendation::Yes);
        assert_eq!(Recommendation::from_overall(74), Recommendation::Maybe);
        assert_eq!(Recommendation::from_overall(55), Recommendation::Maybe);
        assert_eq!(Recommendation::from_overall(54), Recommendation::No);
        assert_eq!(Recommendation::from_overall(0), Recommendation::No);
    }

    #[test]
    fn overall_weights_categories_thirty_thirty_forty() {
        let card = ScoreCard::new(80, 80, WiscarScores::uniform(80));
        assert_eq!(card.overall, 80);
        assert_eq!(card.recommendation(), Recommendation::Yes);

        let card = ScoreCard::new(100, 0, WiscarScores::uniform(50));
        assert_eq!(card.overall, 50);

        let card = ScoreCard::new(0, 0, WiscarScores::default());
        assert_eq!(card.overall, 0);
        assert_eq!(card.recommendation(), Recommendation::No);
    }

    #[test]
    fn wiscar_mean_averages_all_six_dimensions() {
        let scores = WiscarScores {
            will: 60,
            interest: 60,
            skill: 60,
            cognitive: 90,
            ability: 90,
            real_world: 90,
        };
        assert_eq!(scores.mean(), 75.0);
        assert_eq!(scores.get(WiscarDimension::RealWorld), 90);
        assert_eq!(scores.iter().count(), 6);
    }
}
