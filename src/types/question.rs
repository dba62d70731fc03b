use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerKind {
    /// Single select on the fixed 1-5 agreement scale.
    Likert,
    MultipleChoice,
    Scenario,
}

impl AnswerKind {
    pub fn is_option_based(self) -> bool {
        matches!(self, Self::MultipleChoice | Self::Scenario)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Likert => "likert",
            Self::MultipleChoice => "multiple-choice",
            Self::Scenario => "scenario",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Psychometric,
    Technical,
    Wiscar,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric",
            Self::Technical => "Technical",
            Self::Wiscar => "WISCAR",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The six axes of the WISCAR readiness framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const ALL: [WiscarDimension; 6] = [
        Self::Will,
        Self::Interest,
        Self::Skill,
        Self::Cognitive,
        Self::Ability,
        Self::RealWorld,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive",
            Self::Ability => "Ability",
            Self::RealWorld => "Real-World",
        }
    }
}

impl fmt::Display for WiscarDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub kind: AnswerKind,
    pub category: Category,
    /// Only meaningful for WISCAR questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<WiscarDimension>,
    /// Informational label for non-WISCAR questions; never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Question {
    fn base(id: &str, kind: AnswerKind, category: Category, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            category,
            dimension: None,
            facet: None,
            prompt: prompt.to_string(),
            scenario: None,
            options: Vec::new(),
            correct_answer: None,
            weight: None,
        }
    }

    pub fn likert(id: &str, category: Category, prompt: &str) -> Self {
        Self::base(id, AnswerKind::Likert, category, prompt)
    }

    pub fn multiple_choice(id: &str, category: Category, prompt: &str, options: &[&str]) -> Self {
        let mut question = Self::base(id, AnswerKind::MultipleChoice, category, prompt);
        question.options = options.iter().map(|option| option.to_string()).collect();
        question
    }

    pub fn scenario(
        id: &str,
        category: Category,
        scenario: &str,
        prompt: &str,
        options: &[&str],
    ) -> Self {
        let mut question = Self::base(id, AnswerKind::Scenario, category, prompt);
        question.scenario = Some(scenario.to_string());
        question.options = options.iter().map(|option| option.to_string()).collect();
        question
    }

    pub fn with_dimension(mut self, dimension: WiscarDimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn with_facet(mut self, facet: &str) -> Self {
        self.facet = Some(facet.to_string());
        self
    }

    pub fn with_correct_answer(mut self, answer: &str) -> Self {
        self.correct_answer = Some(answer.to_string());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn weight(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn is_graded(&self) -> bool {
        self.kind.is_option_based() && self.correct_answer.is_some()
    }
}
