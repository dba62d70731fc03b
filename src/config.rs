use crate::error::{ReadinessError, Result};
use crate::types::config::ReadinessConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "readiness.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".readiness/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/readiness/config.toml";

/// Loads the layered configuration for `root`. Every layer is optional;
/// with no files present the built-in defaults apply.
pub fn load_config(root: &Path) -> Result<ReadinessConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<ReadinessConfig> {
    let mut merged = Value::Table(Map::new());
    let mut layers = 0;
    if let Some(path) = global_path {
        layers += merge_file_if_exists(&mut merged, path)? as usize;
    }
    layers += merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))? as usize;
    layers += merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))? as usize;
    tracing::debug!(layers, root = %root.display(), "configuration loaded");

    let cfg: ReadinessConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ReadinessError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ReadinessError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_file_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.storage.is_none());
        assert_eq!(
            cfg.session_path(dir.path()),
            dir.path().join(".readiness/session.json")
        );
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[storage]
state_dir = "global-state"
responses_file = "global-final.json"

[report]
format = "json"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[storage]
state_dir = "repo-state"

[bank]
path = "questions.toml"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".readiness")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[report]
format = "md"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed");

        assert_eq!(
            cfg.responses_path(root.path()),
            root.path().join("repo-state/global-final.json")
        );
        assert_eq!(
            cfg.bank_path(root.path()),
            Some(root.path().join("questions.toml"))
        );
        assert_eq!(cfg.report_format(), Some(OutputFormat::Md));
    }

    #[test]
    fn load_config_reports_invalid_toml_with_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[storage\n")
            .expect("broken config should write");

        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(matches!(err, ReadinessError::ConfigParse(_)));
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
