//! Credential resolution.
//!
//! Each credential is taken from its flag (or `MOBLOG_*` environment
//! variable) first, then from the TOML credentials file:
//!
//! ```toml
//! api_key = "..."
//! login = "..."
//! password = "..."
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use moblog::Credentials;
use serde::Deserialize;

use crate::cli::GlobalOptions;

/// Credentials file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "moblog.toml";

/// Contents of a credentials file. Every field is optional so flags can
/// supply the rest.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsFile {
    pub api_key: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
}

impl CredentialsFile {
    /// Parses a credentials file from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid credentials file")
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read credentials file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// Loads the explicit config file, or the default one if it exists.
fn load_file(explicit: Option<&Path>) -> Result<CredentialsFile> {
    match explicit {
        Some(path) => CredentialsFile::load(path),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                tracing::debug!(path = %default.display(), "using default credentials file");
                CredentialsFile::load(&default)
            } else {
                Ok(CredentialsFile::default())
            }
        }
    }
}

/// Resolves the credential triple from flags, environment and file.
pub fn resolve_credentials(global: &GlobalOptions) -> Result<Credentials> {
    let file = load_file(global.config.as_deref())?;
    merge(global, file)
}

fn merge(global: &GlobalOptions, file: CredentialsFile) -> Result<Credentials> {
    let api_key = pick(
        global.api_key.clone(),
        file.api_key,
        "api_key",
        "--api-key",
        "MOBLOG_API_KEY",
    )?;
    let login = pick(global.login.clone(), file.login, "login", "--login", "MOBLOG_LOGIN")?;
    let password = pick(
        global.password.clone(),
        file.password,
        "password",
        "--password",
        "MOBLOG_PASSWORD",
    )?;
    Ok(Credentials::new(api_key, login, password))
}

fn pick(
    flag: Option<String>,
    file: Option<String>,
    field: &str,
    long: &str,
    env: &str,
) -> Result<String> {
    flag.or(file).ok_or_else(|| {
        anyhow!("missing {field}: pass {long}, set {env}, or add `{field}` to the credentials file")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_flags() -> GlobalOptions {
        GlobalOptions {
            config: None,
            api_key: None,
            login: None,
            password: None,
            is_json: false,
            is_revealed: false,
            is_log_json: false,
            is_verbose: false,
            is_quiet: false,
        }
    }

    #[test]
    fn parses_complete_file() {
        let file = CredentialsFile::parse(
            r#"
            api_key = "k-9f3a"
            login = "alice"
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert_eq!(file.api_key.as_deref(), Some("k-9f3a"));
        assert_eq!(file.login.as_deref(), Some("alice"));
        assert_eq!(file.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(CredentialsFile::parse("username = \"alice\"").is_err());
    }

    #[test]
    fn flags_override_file() {
        let file = CredentialsFile {
            api_key: Some("file-key".into()),
            login: Some("file-login".into()),
            password: Some("file-pass".into()),
        };
        let options = GlobalOptions {
            login: Some("flag-login".into()),
            ..no_flags()
        };

        let credentials = merge(&options, file).unwrap();

        assert_eq!(credentials, Credentials::new("file-key", "flag-login", "file-pass"));
    }

    #[test]
    fn missing_field_names_its_sources() {
        let file = CredentialsFile {
            api_key: Some("k".into()),
            login: Some("l".into()),
            password: None,
        };

        let err = merge(&no_flags(), file).unwrap_err().to_string();

        assert!(err.contains("--password"));
        assert!(err.contains("MOBLOG_PASSWORD"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("moblog-no-such-credentials.toml");
        assert!(load_file(Some(&path)).is_err());
    }

    #[test]
    fn loads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("moblog-{}.toml", std::process::id()));
        std::fs::write(&path, "login = \"bob\"\n").unwrap();

        let file = load_file(Some(&path)).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(file.login.as_deref(), Some("bob"));
        assert!(file.api_key.is_none());
    }
}
