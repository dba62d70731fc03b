use crate::bank::QuestionBank;
use crate::types::report::AssessmentResults;

pub fn to_json(results: &AssessmentResults) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

pub fn bank_to_json(bank: &QuestionBank) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(bank.questions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::compute_results;

    #[test]
    fn json_results_use_snake_case_fields_and_lowercase_tier() {
        let results = compute_results(&QuestionBank::builtin(), &[]);
        let rendered = to_json(&results).expect("json should serialize");
        assert!(rendered.contains("\"overall_score\": 0"));
        assert!(rendered.contains("\"recommendation\": \"no\""));
        assert!(rendered.contains("\"real_world\": 0"));
    }

    #[test]
    fn json_results_round_trip() {
        let results = compute_results(&QuestionBank::builtin(), &[]);
        let rendered = to_json(&results).expect("json should serialize");
        let parsed: AssessmentResults = serde_json::from_str(&rendered).expect("should parse");
        assert_eq!(parsed, results);
    }

    #[test]
    fn json_bank_lists_every_question() {
        let rendered = bank_to_json(&QuestionBank::builtin()).expect("json should serialize");
        let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("should parse");
        assert_eq!(parsed.as_array().map(Vec::len), Some(14));
        assert!(rendered.contains("\"kind\": \"multiple-choice\""));
    }
}
