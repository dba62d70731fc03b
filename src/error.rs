use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadinessError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid question bank: {0}")]
    InvalidBank(String),

    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("invalid answer for {question}: {reason}")]
    InvalidAnswer { question: String, reason: String },

    #[error("no assessment in progress; run `readiness start` first")]
    NoSession,

    #[error("an assessment is already in progress; pass --force to start over")]
    SessionInProgress,

    #[error("assessment already completed; run `readiness reset` to retake it")]
    SessionComplete,

    #[error("the introduction has no question; run `readiness next` first")]
    NotOnQuestion,

    #[error("answer required before proceeding: {0}")]
    AnswerRequired(String),

    #[error("no completed assessment found; run `readiness start` to begin")]
    NoFinalizedResponses,

    #[error("finalized responses are corrupted: checksum mismatch in {0}")]
    ChecksumMismatch(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReadinessError {
    /// Errors the respondent can fix by running another command, as opposed
    /// to runtime failures.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NoSession
                | Self::SessionInProgress
                | Self::SessionComplete
                | Self::NotOnQuestion
                | Self::AnswerRequired(_)
                | Self::NoFinalizedResponses
                | Self::UnknownQuestion(_)
                | Self::InvalidAnswer { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReadinessError>;
