use crate::error::{ReadinessError, Result};
use crate::types::question::{AnswerKind, Question};
use crate::types::response::Answer;

/// Turns command-line input into an answer for `question`. Scale questions
/// take `1`-`5`; option questions take the 1-based option number or the
/// exact option text.
pub fn parse_answer(question: &Question, raw: &str) -> Result<Answer> {
    let raw = raw.trim();
    let answer = match question.kind {
        AnswerKind::Likert => Answer::Scale(raw.parse::<f64>().map_err(|_| {
            invalid(question, format!("expected a number from 1 to 5, got '{raw}'"))
        })?),
        AnswerKind::MultipleChoice | AnswerKind::Scenario => {
            match raw.parse::<usize>() {
                Ok(number) if (1..=question.options.len()).contains(&number) => {
                    Answer::Choice(question.options[number - 1].clone())
                }
                _ => Answer::Choice(raw.to_string()),
            }
        }
    };
    validate_answer(question, &answer)?;
    Ok(answer)
}

/// Checks that an answer is one the wizard could have produced.
pub fn validate_answer(question: &Question, answer: &Answer) -> Result<()> {
    match question.kind {
        AnswerKind::Likert => {
            let value = answer
                .as_scale()
                .ok_or_else(|| invalid(question, "expected a numeric scale answer".to_string()))?;
            if value.fract() != 0.0 || !(1.0..=5.0).contains(&value) {
                return Err(invalid(
                    question,
                    format!("scale answers must be a whole number from 1 to 5, got {value}"),
                ));
            }
        }
        AnswerKind::MultipleChoice | AnswerKind::Scenario => {
            let choice = answer
                .as_choice()
                .ok_or_else(|| invalid(question, "expected one of the listed options".to_string()))?;
            if !question.options.iter().any(|option| option == choice) {
                return Err(invalid(
                    question,
                    format!(
                        "'{choice}' is not an option; pick 1-{}",
                        question.options.len()
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn invalid(question: &Question, reason: String) -> ReadinessError {
    ReadinessError::InvalidAnswer {
        question: question.id.clone(),
        reason,
    }
}
