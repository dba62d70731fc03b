use crate::bank::{builtin, QuestionBank};
use crate::cli::{AnswerCommand, StartCommand};
use crate::error::{ReadinessError, Result};
use crate::report::md::options_block;
use crate::session::answer::parse_answer;
use crate::session::storage::SessionStorage;
use crate::session::{Advance, AssessmentSession};
use crate::types::question::AnswerKind;
use crate::types::response::Answer;
use chrono::Utc;
use tracing::info;

pub fn execute_start(
    cmd: &StartCommand,
    storage: &SessionStorage,
    bank: &QuestionBank,
) -> Result<String> {
    if let Some(existing) = storage.load_session()? {
        if !existing.is_complete && !cmd.force {
            return Err(ReadinessError::SessionInProgress);
        }
    }
    let session = AssessmentSession::start(Utc::now());
    storage.save_session(&session)?;
    info!(questions = bank.len(), "assessment started");
    Ok(describe_step(&session, bank))
}

pub fn execute_show(storage: &SessionStorage, bank: &QuestionBank) -> Result<String> {
    let session = storage.require_session()?;
    Ok(describe_step(&session, bank))
}

pub fn execute_answer(
    cmd: &AnswerCommand,
    storage: &SessionStorage,
    bank: &QuestionBank,
) -> Result<String> {
    let mut session = storage.require_session()?;
    if session.is_complete {
        return Err(ReadinessError::SessionComplete);
    }

    let question = match &cmd.question {
        Some(id) => bank
            .get(id)
            .ok_or_else(|| ReadinessError::UnknownQuestion(id.clone()))?,
        None => session
            .current_question(bank)
            .ok_or(ReadinessError::NotOnQuestion)?,
    };
    let answer = parse_answer(question, &cmd.value)?;
    let shown = answer.to_string();
    let replaced = session.record_answer(bank, &question.id, answer, Utc::now())?;
    storage.save_session(&session)?;

    let verb = if replaced.is_some() { "updated" } else { "recorded" };
    Ok(format!("{verb} {}: {shown}", question.id))
}

pub fn execute_next(storage: &SessionStorage, bank: &QuestionBank) -> Result<String> {
    let mut session = storage.require_session()?;
    let now = Utc::now();
    match session.advance(bank, now)? {
        Advance::Question(_) => {
            storage.save_session(&session)?;
            Ok(describe_step(&session, bank))
        }
        Advance::Completed => {
            // Snapshot first: a session marked complete must always have one.
            let path = storage.save_finalized(session.responses.as_slice(), now)?;
            storage.save_session(&session)?;
            Ok(format!(
                "Assessment complete! {} answers saved to {}\nRun `readiness results` to see your report.",
                session.responses.len(),
                path.display()
            ))
        }
    }
}

pub fn execute_back(storage: &SessionStorage, bank: &QuestionBank) -> Result<String> {
    let mut session = storage.require_session()?;
    session.retreat()?;
    storage.save_session(&session)?;
    Ok(describe_step(&session, bank))
}

pub fn execute_status(storage: &SessionStorage, bank: &QuestionBank) -> Result<String> {
    let session = storage.require_session()?;
    Ok(format!(
        "{}\nanswered: {} of {}",
        session.progress(bank),
        session.responses.len(),
        bank.len()
    ))
}

/// Text for the current wizard step, followed by the progress indicator.
pub fn describe_step(session: &AssessmentSession, bank: &QuestionBank) -> String {
    let progress = session.progress(bank);
    let mut output = String::new();

    if session.is_complete {
        output.push_str("Assessment complete. Run `readiness results` to see your report.\n");
    } else {
        match session.current_question(bank) {
            None => {
                output.push_str(&format!("{}\n{}\n\n", builtin::TITLE, builtin::TAGLINE));
                output.push_str(builtin::INTRODUCTION);
                output.push_str(&format!(
                    "\n\n{} questions. Run `readiness next` to begin.\n",
                    bank.len()
                ));
            }
            Some(question) => {
                output.push_str(&format!(
                    "Question {} of {} ({})\n\n",
                    session.current_step - 1,
                    bank.len(),
                    progress.section.label()
                ));
                if let Some(scenario) = &question.scenario {
                    output.push_str(&format!("Scenario: {scenario}\n\n"));
                }
                output.push_str(&format!("{}\n", question.prompt));
                output.push_str(&options_block(question.kind, &question.options));
                match session.current_answer(bank) {
                    Some(answer) => output.push_str(&format!(
                        "\ncurrent answer: {}\nRun `readiness next` to continue or `readiness answer <VALUE>` to change it.\n",
                        describe_answer(question.kind, answer)
                    )),
                    None => output.push_str("\nRun `readiness answer <VALUE>` to answer.\n"),
                }
            }
        }
    }

    output.push('\n');
    output.push_str(&progress.to_string());
    output
}

fn describe_answer(kind: AnswerKind, answer: &Answer) -> String {
    let label = match (kind, answer) {
        (AnswerKind::Likert, Answer::Scale(value)) => builtin::likert_label(*value as u8),
        _ => None,
    };
    match label {
        Some(label) => format!("{answer} ({label})"),
        None => answer.to_string(),
    }
}
