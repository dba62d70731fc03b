pub mod category;
pub mod insights;

use crate::bank::QuestionBank;
use crate::types::question::Category;
use crate::types::report::AssessmentResults;
use crate::types::response::Response;
use crate::types::scoring::{ScoreCard, WiscarScores};
use std::collections::HashMap;
use tracing::debug;

/// Scores a response collection against the bank. Pure: the same inputs
/// always produce the same results. When the collection holds more than one
/// response for a question, the last one wins.
pub fn compute_results(bank: &QuestionBank, responses: &[Response]) -> AssessmentResults {
    let latest = latest_by_question(responses);
    for id in latest.keys().filter(|id| bank.get(id).is_none()) {
        debug!(question = %id, "ignoring response for unknown question");
    }

    let psychometric = category::category_score(bank.in_category(Category::Psychometric), &latest);
    let technical = category::category_score(bank.in_category(Category::Technical), &latest);
    let wiscar = WiscarScores::from_fn(|dimension| {
        category::category_score(
            bank.in_category(Category::Wiscar)
                .filter(|question| question.dimension == Some(dimension)),
            &latest,
        )
    });

    let card = ScoreCard::new(psychometric, technical, wiscar);
    let recommendation = card.recommendation();
    debug!(
        psychometric,
        technical,
        overall = card.overall,
        recommendation = %recommendation,
        "computed assessment scores"
    );

    let insights = insights::generate_insights(&card, recommendation);
    AssessmentResults::new(card, insights)
}

fn latest_by_question(responses: &[Response]) -> HashMap<&str, &Response> {
    responses
        .iter()
        .map(|response| (response.question_id.as_str(), response))
        .collect()
}
