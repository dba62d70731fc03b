use serde::{Deserialize, Serialize};
use std::fmt;

/// A single scalar answer: numeric for scale questions, option text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Scale(f64),
    Choice(String),
}

impl Answer {
    /// Numeric reading of the answer. Text that parses as a number counts.
    pub fn as_scale(&self) -> Option<f64> {
        match self {
            Self::Scale(value) => Some(*value),
            Self::Choice(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Scale(_) => None,
            Self::Choice(text) => Some(text.as_str()),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale(value) => write!(f, "{value}"),
            Self::Choice(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(alias = "questionId")]
    pub question_id: String,
    pub answer: Answer,
    #[serde(default, alias = "timeSpent", skip_serializing_if = "Option::is_none")]
    pub time_spent_ms: Option<u64>,
}

impl Response {
    pub fn new(question_id: impl Into<String>, answer: Answer) -> Self {
        Self {
            question_id: question_id.into(),
            answer,
            time_spent_ms: None,
        }
    }

    #[cfg(test)]
    pub fn scale(question_id: impl Into<String>, value: f64) -> Self {
        Self::new(question_id, Answer::Scale(value))
    }

    #[cfg(test)]
    pub fn choice(question_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(question_id, Answer::Choice(text.into()))
    }

    pub fn with_time_spent(mut self, millis: u64) -> Self {
        self.time_spent_ms = Some(millis);
        self
    }
}
