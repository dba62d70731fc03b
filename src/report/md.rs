use crate::bank::{builtin, QuestionBank};
use crate::types::question::AnswerKind;
use crate::types::report::AssessmentResults;

pub fn to_markdown(results: &AssessmentResults) -> String {
    let mut output = String::new();
    output.push_str("# Assessment Results\n\n");
    output.push_str(&format!(
        "Overall readiness score: {}/100\n\n",
        results.overall_score
    ));
    output.push_str(&format!(
        "Recommendation: **{}** ({})\n\n{}\n\n",
        results.recommendation.label(),
        results.recommendation,
        results.recommendation.summary()
    ));

    output.push_str("## Category Scores\n\n");
    output.push_str(&format!(
        "- psychometric fit: {}\n- technical readiness: {}\n- wiscar average: {}\n\n",
        results.psychometric_score,
        results.technical_score,
        results.wiscar_average()
    ));

    output.push_str("## WISCAR Profile\n\n");
    output.push_str("| Dimension | Score | |\n|---|---:|---|\n");
    for (dimension, score) in results.wiscar_scores.iter() {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            dimension.label(),
            score,
            meter(score)
        ));
    }
    output.push('\n');

    push_list(&mut output, "Strengths", &results.strengths);
    push_list(&mut output, "Areas for Improvement", &results.improvements);
    push_list(&mut output, "Next Steps", &results.next_steps);
    push_list(&mut output, "Career Paths", &results.career_paths);

    output.trim_end().to_string() + "\n"
}

pub fn bank_to_markdown(bank: &QuestionBank) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", builtin::TITLE));
    for (index, question) in bank.questions().iter().enumerate() {
        let section = match question.dimension {
            Some(dimension) => format!("{} / {}", question.category, dimension),
            None => question.category.to_string(),
        };
        let graded = if question.is_graded() { ", graded" } else { "" };
        output.push_str(&format!(
            "{}. [{}] {} ({}{})\n",
            index + 1,
            question.id,
            question.prompt,
            section,
            graded
        ));
        output.push_str(&options_block(question.kind, &question.options));
    }
    output
}

/// Numbered choices as shown to the respondent, indented under the prompt.
pub fn options_block(kind: AnswerKind, options: &[String]) -> String {
    let mut output = String::new();
    match kind {
        AnswerKind::Likert => {
            for (value, label) in builtin::LIKERT_LABELS {
                output.push_str(&format!("   {value}) {label}\n"));
            }
        }
        AnswerKind::MultipleChoice | AnswerKind::Scenario => {
            for (index, option) in options.iter().enumerate() {
                output.push_str(&format!("   {}) {}\n", index + 1, option));
            }
        }
    }
    output
}

fn push_list(output: &mut String, title: &str, items: &[String]) {
    output.push_str(&format!("## {title}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
    output.push('\n');
}

fn meter(score: i32) -> String {
    let filled = (score.clamp(0, 100) / 10) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled))
}
