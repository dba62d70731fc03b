use crate::error::{ReadinessError, Result};
use crate::session::AssessmentSession;
use crate::types::config::ReadinessConfig;
use crate::types::response::Response;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Two independent entries: the in-progress session, and the response
/// snapshot written once at completion.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    session_path: PathBuf,
    responses_path: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct FinalizedSnapshot {
    completed_at: DateTime<Utc>,
    checksum: String,
    responses: Vec<Response>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResponsesFile {
    Snapshot(FinalizedSnapshot),
    Plain(Vec<Response>),
}

impl SessionStorage {
    pub fn new(root: &Path, config: &ReadinessConfig) -> Self {
        Self {
            session_path: config.session_path(root),
            responses_path: config.responses_path(root),
        }
    }

    pub fn load_session(&self) -> Result<Option<AssessmentSession>> {
        if !self.session_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.session_path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn require_session(&self) -> Result<AssessmentSession> {
        self.load_session()?.ok_or(ReadinessError::NoSession)
    }

    pub fn save_session(&self, session: &AssessmentSession) -> Result<()> {
        write_json(&self.session_path, session)?;
        debug!(path = %self.session_path.display(), step = session.current_step, "session saved");
        Ok(())
    }

    pub fn save_finalized(
        &self,
        responses: &[Response],
        completed_at: DateTime<Utc>,
    ) -> Result<PathBuf> {
        let snapshot = FinalizedSnapshot {
            completed_at,
            checksum: checksum(responses)?,
            responses: responses.to_vec(),
        };
        write_json(&self.responses_path, &snapshot)?;
        info!(
            path = %self.responses_path.display(),
            responses = responses.len(),
            "finalized responses written"
        );
        Ok(self.responses_path.clone())
    }

    pub fn load_finalized(&self) -> Result<Vec<Response>> {
        if !self.responses_path.exists() {
            return Err(ReadinessError::NoFinalizedResponses);
        }
        load_responses_file(&self.responses_path)
    }

    /// Deletes both entries. Returns whether anything was removed.
    pub fn reset(&self) -> Result<bool> {
        let mut removed = false;
        for path in [&self.session_path, &self.responses_path] {
            if path.exists() {
                fs::remove_file(path)?;
                removed = true;
            }
        }
        Ok(removed)
    }
}

/// Reads either a finalized snapshot, verifying its checksum, or a plain
/// JSON array of responses.
pub fn load_responses_file(path: &Path) -> Result<Vec<Response>> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<ResponsesFile>(&content)? {
        ResponsesFile::Snapshot(snapshot) => {
            if checksum(&snapshot.responses)? != snapshot.checksum {
                return Err(ReadinessError::ChecksumMismatch(path.display().to_string()));
            }
            Ok(snapshot.responses)
        }
        ResponsesFile::Plain(responses) => Ok(responses),
    }
}

fn checksum(responses: &[Response]) -> Result<String> {
    let bytes = serde_json::to_vec(responses)?;
    Ok(sha256_hex(&bytes))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
