use crate::types::question::{AnswerKind, Question};
use crate::types::response::{Answer, Response};
use crate::types::scoring::{round_half_up, Score};
use std::collections::HashMap;
use tracing::warn;

pub const SCALE_MAX: f64 = 5.0;
pub const CORRECT_SCORE: f64 = 100.0;
pub const INCORRECT_SCORE: f64 = 0.0;
/// Opinion questions have no right answer; any choice counts as reasonable.
pub const UNGRADED_SCORE: f64 = 75.0;

/// Per-question score before weighting. `None` means the answer does not
/// fit the question's kind and the response is skipped.
pub fn raw_score(question: &Question, answer: &Answer) -> Option<f64> {
    match question.kind {
        AnswerKind::Likert => answer.as_scale().map(|value| value / SCALE_MAX * 100.0),
        AnswerKind::MultipleChoice | AnswerKind::Scenario => {
            let choice = answer.as_choice()?;
            Some(match &question.correct_answer {
                Some(correct) if choice == correct => CORRECT_SCORE,
                Some(_) => INCORRECT_SCORE,
                None => UNGRADED_SCORE,
            })
        }
    }
}

/// Weighted mean of the raw scores of every answered question, rounded.
/// Unanswered questions are left out of both sides of the average; a
/// category with nothing answered scores 0.
pub fn category_score<'a>(
    questions: impl IntoIterator<Item = &'a Question>,
    responses: &HashMap<&str, &Response>,
) -> Score {
    let mut total_score = 0.0;
    let mut total_weight = 0.0;

    for question in questions {
        let Some(response) = responses.get(question.id.as_str()) else {
            continue;
        };
        let Some(score) = raw_score(question, &response.answer) else {
            warn!(
                question = %question.id,
                kind = question.kind.as_str(),
                answer = %response.answer,
                "skipping response that does not match the question kind"
            );
            continue;
        };
        let weight = question.weight();
        total_score += score * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        round_half_up(total_score / total_weight)
    } else {
        0
    }
}
