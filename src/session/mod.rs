pub mod answer;
pub mod progress;
pub mod storage;

use crate::bank::QuestionBank;
use crate::error::{ReadinessError, Result};
use crate::types::question::Question;
use crate::types::response::{Answer, Response};
use chrono::{DateTime, Utc};
use progress::Progress;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const INTRO_STEP: usize = 1;
const FIRST_QUESTION_STEP: usize = 2;

/// Latest answer per question. Replacing an answer moves it to the end so
/// the list stays in answer order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseStore {
    responses: Vec<Response>,
}

impl ResponseStore {
    pub fn upsert(&mut self, response: Response) -> Option<Response> {
        let previous = self
            .responses
            .iter()
            .position(|existing| existing.question_id == response.question_id)
            .map(|index| self.responses.remove(index));
        self.responses.push(response);
        previous
    }

    pub fn get(&self, question_id: &str) -> Option<&Response> {
        self.responses
            .iter()
            .find(|response| response.question_id == question_id)
    }

    pub fn as_slice(&self) -> &[Response] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question at this bank index.
    Question(usize),
    Completed,
}

/// In-progress wizard state, owned by the caller and persisted after every
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSession {
    pub current_step: usize,
    pub responses: ResponseStore,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub is_complete: bool,
}

impl AssessmentSession {
    pub fn start(now: DateTime<Utc>) -> Self {
        Self {
            current_step: INTRO_STEP,
            responses: ResponseStore::default(),
            started_at: now,
            completed_at: None,
            is_complete: false,
        }
    }

    pub fn current_question<'b>(&self, bank: &'b QuestionBank) -> Option<&'b Question> {
        self.current_step
            .checked_sub(FIRST_QUESTION_STEP)
            .and_then(|index| bank.questions().get(index))
    }

    pub fn current_answer(&self, bank: &QuestionBank) -> Option<&Answer> {
        let question = self.current_question(bank)?;
        self.responses.get(&question.id).map(|response| &response.answer)
    }

    /// Stores an answer, replacing any earlier answer to the same question.
    /// Returns the replaced response.
    pub fn record_answer(
        &mut self,
        bank: &QuestionBank,
        question_id: &str,
        answer: Answer,
        now: DateTime<Utc>,
    ) -> Result<Option<Response>> {
        if self.is_complete {
            return Err(ReadinessError::SessionComplete);
        }
        let question = bank
            .get(question_id)
            .ok_or_else(|| ReadinessError::UnknownQuestion(question_id.to_string()))?;
        answer::validate_answer(question, &answer)?;

        let elapsed = now
            .signed_duration_since(self.started_at)
            .num_milliseconds()
            .max(0) as u64;
        let response = Response::new(question_id, answer).with_time_spent(elapsed);
        let replaced = self.responses.upsert(response);
        debug!(
            question = question_id,
            replaced = replaced.is_some(),
            "recorded answer"
        );
        Ok(replaced)
    }

    pub fn advance(&mut self, bank: &QuestionBank, now: DateTime<Utc>) -> Result<Advance> {
        if self.is_complete {
            return Err(ReadinessError::SessionComplete);
        }
        if self.current_step <= INTRO_STEP {
            self.current_step = FIRST_QUESTION_STEP;
            return Ok(Advance::Question(0));
        }

        let question = self
            .current_question(bank)
            .ok_or_else(|| ReadinessError::UnknownQuestion(format!("step {}", self.current_step)))?;
        if self.responses.get(&question.id).is_none() {
            return Err(ReadinessError::AnswerRequired(question.id.clone()));
        }

        let index = self.current_step - FIRST_QUESTION_STEP;
        if index + 1 < bank.len() {
            self.current_step += 1;
            Ok(Advance::Question(index + 1))
        } else {
            self.is_complete = true;
            self.completed_at = Some(now);
            info!(answered = self.responses.len(), "assessment completed");
            Ok(Advance::Completed)
        }
    }

    /// Steps back one screen; the introduction is the floor.
    pub fn retreat(&mut self) -> Result<usize> {
        if self.is_complete {
            return Err(ReadinessError::SessionComplete);
        }
        if self.current_step > INTRO_STEP {
            self.current_step -= 1;
        }
        Ok(self.current_step)
    }

    pub fn progress(&self, bank: &QuestionBank) -> Progress {
        Progress::compute(self.current_step, self.is_complete, bank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::question::Category;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).single().expect("valid timestamp")
    }

    fn small_bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question::likert("p1", Category::Psychometric, "first"),
            Question::multiple_choice("t1", Category::Technical, "second", &["a", "b"])
                .with_correct_answer("a"),
        ])
        .expect("bank should validate")
    }

    #[test]
    fn store_keeps_one_response_per_question() {
        let mut store = ResponseStore::default();
        assert!(store.upsert(Response::scale("q", 2.0)).is_none());
        store.upsert(Response::scale("other", 3.0));
        let replaced = store.upsert(Response::scale("q", 5.0));

        assert_eq!(replaced, Some(Response::scale("q", 2.0)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.as_slice()[1], Response::scale("q", 5.0));
    }

    #[test]
    fn walks_intro_questions_and_completes() {
        let bank = small_bank();
        let mut session = AssessmentSession::start(t0());
        assert!(session.current_question(&bank).is_none());

        assert_eq!(session.advance(&bank, t0()).expect("intro"), Advance::Question(0));
        assert_eq!(
            session.current_question(&bank).map(|q| q.id.as_str()),
            Some("p1")
        );

        let err = session.advance(&bank, t0()).expect_err("answer required");
        assert!(matches!(err, ReadinessError::AnswerRequired(ref id) if id == "p1"));

        session
            .record_answer(&bank, "p1", Answer::Scale(4.0), t0() + Duration::seconds(3))
            .expect("answer should record");
        assert_eq!(
            session.responses.get("p1").and_then(|r| r.time_spent_ms),
            Some(3000)
        );
        assert_eq!(session.advance(&bank, t0()).expect("next"), Advance::Question(1));

        session
            .record_answer(&bank, "t1", Answer::Choice("b".to_string()), t0())
            .expect("answer should record");
        let done = t0() + Duration::minutes(5);
        assert_eq!(session.advance(&bank, done).expect("finish"), Advance::Completed);
        assert!(session.is_complete);
        assert_eq!(session.completed_at, Some(done));
    }

    #[test]
    fn completed_session_is_frozen() {
        let bank = small_bank();
        let mut session = AssessmentSession::start(t0());
        session.advance(&bank, t0()).expect("intro");
        session
            .record_answer(&bank, "p1", Answer::Scale(3.0), t0())
            .expect("answer");
        session.advance(&bank, t0()).expect("next");
        session
            .record_answer(&bank, "t1", Answer::Choice("a".to_string()), t0())
            .expect("answer");
        session.advance(&bank, t0()).expect("complete");

        let err = session
            .record_answer(&bank, "p1", Answer::Scale(5.0), t0())
            .expect_err("store is frozen");
        assert!(matches!(err, ReadinessError::SessionComplete));
        assert!(session.retreat().is_err());
        assert_eq!(session.responses.get("p1").map(|r| &r.answer), Some(&Answer::Scale(3.0)));
    }

    #[test]
    fn retreat_never_goes_below_introduction() {
        let bank = small_bank();
        let mut session = AssessmentSession::start(t0());
        assert_eq!(session.retreat().expect("retreat"), INTRO_STEP);
        session.advance(&bank, t0()).expect("intro");
        assert_eq!(session.retreat().expect("retreat"), INTRO_STEP);
    }

    #[test]
    fn answers_are_validated_against_the_bank() {
        let bank = small_bank();
        let mut session = AssessmentSession::start(t0());
        assert!(matches!(
            session.record_answer(&bank, "ghost", Answer::Scale(1.0), t0()),
            Err(ReadinessError::UnknownQuestion(_))
        ));
        assert!(matches!(
            session.record_answer(&bank, "p1", Answer::Scale(9.0), t0()),
            Err(ReadinessError::InvalidAnswer { .. })
        ));
        assert!(session.responses.as_slice().is_empty());
    }

    #[test]
    fn overriding_an_answer_keeps_a_single_entry() {
        let bank = small_bank();
        let mut session = AssessmentSession::start(t0());
        session
            .record_answer(&bank, "p1", Answer::Scale(1.0), t0())
            .expect("first answer");
        let replaced = session
            .record_answer(&bank, "p1", Answer::Scale(5.0), t0())
            .expect("second answer");
        assert_eq!(replaced.map(|r| r.answer), Some(Answer::Scale(1.0)));
        assert_eq!(session.responses.len(), 1);
    }

    #[test]
    fn session_round_trips_through_json() {
        let bank = small_bank();
        let mut session = AssessmentSession::start(t0());
        session
            .record_answer(&bank, "p1", Answer::Scale(2.0), t0())
            .expect("answer");
        let json = serde_json::to_string(&session).expect("serialize");
        assert!(json.contains("\"responses\":[{"));
        let restored: AssessmentSession = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, session);
    }
}
