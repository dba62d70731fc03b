pub mod builtin;

use crate::error::{ReadinessError, Result};
use crate::types::config::ReadinessConfig;
use crate::types::question::{Category, Question};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Ordered, validated question catalog. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BankFile {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        validate(&questions)?;
        Ok(Self { questions })
    }

    pub fn builtin() -> Self {
        Self {
            questions: builtin::questions(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: BankFile = toml::from_str(content)?;
        Self::new(file.questions)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let bank = Self::from_toml_str(&content).map_err(|e| match e {
            ReadinessError::Toml(e) => {
                ReadinessError::InvalidBank(format!("{}: {}", path.display(), e))
            }
            other => other,
        })?;
        tracing::info!(path = %path.display(), questions = bank.len(), "loaded question bank");
        Ok(bank)
    }

    /// The configured replacement bank, or the built-in one.
    pub fn resolve(root: &Path, config: &ReadinessConfig) -> Result<Self> {
        match config.bank_path(root) {
            Some(path) => Self::load(&path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Question> + '_ {
        self.questions
            .iter()
            .filter(move |question| question.category == category)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

fn validate(questions: &[Question]) -> Result<()> {
    if questions.is_empty() {
        return Err(ReadinessError::InvalidBank(
            "question bank has no questions".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for question in questions {
        let id = question.id.as_str();
        if id.trim().is_empty() {
            return Err(ReadinessError::InvalidBank(
                "question id must not be empty".to_string(),
            ));
        }
        if !seen.insert(id) {
            return Err(ReadinessError::InvalidBank(format!(
                "duplicate question id: {id}"
            )));
        }

        match (question.category, question.dimension) {
            (Category::Wiscar, None) => {
                return Err(ReadinessError::InvalidBank(format!(
                    "{id}: wiscar questions require a dimension"
                )));
            }
            (Category::Psychometric | Category::Technical, Some(_)) => {
                return Err(ReadinessError::InvalidBank(format!(
                    "{id}: only wiscar questions may set a dimension"
                )));
            }
            _ => {}
        }

        if let Some(weight) = question.weight {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ReadinessError::InvalidBank(format!(
                    "{id}: weight must be a positive number (found {weight})"
                )));
            }
        }

        if question.kind.is_option_based() {
            if question.options.is_empty() {
                return Err(ReadinessError::InvalidBank(format!(
                    "{id}: {} questions require options",
                    question.kind.as_str()
                )));
            }
            if let Some(correct) = &question.correct_answer {
                if !question.options.contains(correct) {
                    return Err(ReadinessError::InvalidBank(format!(
                        "{id}: correct_answer is not one of the options"
                    )));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::question::{AnswerKind, WiscarDimension};

    #[test]
    fn builtin_bank_is_valid() {
        let bank = QuestionBank::builtin();
        validate(bank.questions()).expect("builtin bank should validate");
        assert_eq!(bank.len(), 14);
        assert_eq!(bank.in_category(Category::Psychometric).count(), 5);
        assert_eq!(bank.in_category(Category::Technical).count(), 3);
        assert_eq!(bank.in_category(Category::Wiscar).count(), 6);
    }

    #[test]
    fn builtin_bank_covers_every_wiscar_dimension_once() {
        let bank = QuestionBank::builtin();
        for dimension in WiscarDimension::ALL {
            let count = bank
                .in_category(Category::Wiscar)
                .filter(|question| question.dimension == Some(dimension))
                .count();
            assert_eq!(count, 1, "dimension {dimension} should have one question");
        }
    }

    #[test]
    fn lookup_by_id() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.questions()[0].id, "psych-1");
        assert_eq!(
            bank.get("tech-2").map(|question| question.kind),
            Some(AnswerKind::Scenario)
        );
        assert!(bank.get("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = QuestionBank::new(vec![
            Question::likert("q1", Category::Psychometric, "a"),
            Question::likert("q1", Category::Technical, "b"),
        ])
        .expect_err("duplicates should be rejected");
        assert!(err.to_string().contains("duplicate question id: q1"));
    }

    #[test]
    fn rejects_wiscar_question_without_dimension() {
        let err = QuestionBank::new(vec![Question::likert("w", Category::Wiscar, "a")])
            .expect_err("missing dimension should be rejected");
        assert!(err.to_string().contains("require a dimension"));
    }

    #[test]
    fn rejects_non_positive_weight_and_unknown_correct_answer() {
        let weight = QuestionBank::new(vec![
            Question::likert("q", Category::Psychometric, "a").with_weight(0.0)
        ]);
        assert!(weight.is_err());

        let correct = QuestionBank::new(vec![Question::multiple_choice(
            "q",
            Category::Technical,
            "a",
            &["x", "y"],
        )
        .with_correct_answer("z")]);
        assert!(correct.is_err());
    }

    #[test]
    fn rejects_empty_bank() {
        assert!(QuestionBank::new(Vec::new()).is_err());
    }

    #[test]
    fn parses_bank_from_toml() {
        let bank = QuestionBank::from_toml_str(
            r#"
[[questions]]
id = "p1"
kind = "likert"
category = "psychometric"
prompt = "I enjoy change."
weight = 2.0

[[questions]]
id = "w1"
kind = "multiple-choice"
category = "wiscar"
dimension = "skill"
prompt = "Rate yourself."
options = ["Good", "Poor"]
"#,
        )
        .expect("bank should parse");

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.questions()[0].weight(), 2.0);
        assert_eq!(
            bank.get("w1").and_then(|question| question.dimension),
            Some(WiscarDimension::Skill)
        );
    }

    #[test]
    fn likert_labels_cover_the_scale() {
        assert_eq!(builtin::likert_label(1), Some("Strongly Disagree"));
        assert_eq!(builtin::likert_label(5), Some("Strongly Agree"));
        assert_eq!(builtin::likert_label(6), None);
    }
}
