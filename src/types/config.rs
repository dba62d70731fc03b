use crate::error::ReadinessError;
use crate::report::OutputFormat;
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_STATE_DIR: &str = ".readiness";
pub const DEFAULT_SESSION_FILE: &str = "session.json";
pub const DEFAULT_RESPONSES_FILE: &str = "responses.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadinessConfig {
    pub storage: Option<StorageConfig>,
    pub bank: Option<BankConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    pub state_dir: Option<String>,
    pub session_file: Option<String>,
    pub responses_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BankConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub format: Option<OutputFormat>,
}

impl ReadinessConfig {
    pub fn state_dir(&self, root: &Path) -> PathBuf {
        let dir = self
            .storage
            .as_ref()
            .and_then(|storage| storage.state_dir.as_deref())
            .unwrap_or(DEFAULT_STATE_DIR);
        root.join(dir)
    }

    pub fn session_path(&self, root: &Path) -> PathBuf {
        let file = self
            .storage
            .as_ref()
            .and_then(|storage| storage.session_file.as_deref())
            .unwrap_or(DEFAULT_SESSION_FILE);
        self.state_dir(root).join(file)
    }

    pub fn responses_path(&self, root: &Path) -> PathBuf {
        let file = self
            .storage
            .as_ref()
            .and_then(|storage| storage.responses_file.as_deref())
            .unwrap_or(DEFAULT_RESPONSES_FILE);
        self.state_dir(root).join(file)
    }

    pub fn bank_path(&self, root: &Path) -> Option<PathBuf> {
        self.bank
            .as_ref()
            .and_then(|bank| bank.path.as_deref())
            .map(|path| root.join(path))
    }

    pub fn report_format(&self) -> Option<OutputFormat> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn validate(&self) -> Result<(), ReadinessError> {
        if let Some(storage) = &self.storage {
            if let Some(dir) = &storage.state_dir {
                validate_relative("storage.state_dir", dir)?;
            }
            for (key, value) in [
                ("storage.session_file", &storage.session_file),
                ("storage.responses_file", &storage.responses_file),
            ] {
                if let Some(file) = value {
                    validate_file_name(key, file)?;
                }
            }
            let session = storage
                .session_file
                .as_deref()
                .unwrap_or(DEFAULT_SESSION_FILE);
            let responses = storage
                .responses_file
                .as_deref()
                .unwrap_or(DEFAULT_RESPONSES_FILE);
            if session == responses {
                return Err(ReadinessError::ConfigParse(
                    "storage.session_file and storage.responses_file must differ".to_string(),
                ));
            }
        }

        if let Some(path) = self.bank.as_ref().and_then(|bank| bank.path.as_ref()) {
            if path.trim().is_empty() {
                return Err(ReadinessError::ConfigParse(
                    "bank.path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

fn validate_relative(key: &str, value: &str) -> Result<(), ReadinessError> {
    let path = Path::new(value);
    if value.trim().is_empty()
        || path.is_absolute()
        || path
            .components()
            .any(|component| matches!(component, Component::ParentDir))
    {
        return Err(ReadinessError::ConfigParse(format!(
            "{key} must be a relative path inside the working directory: {value}"
        )));
    }
    Ok(())
}

fn validate_file_name(key: &str, value: &str) -> Result<(), ReadinessError> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ReadinessError::ConfigParse(format!(
            "{key} must be a plain file name: {value}"
        ))),
    }
}
