use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

const APP_DIR: &str = "roster";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_SOURCE_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_RAW_PATH: &str = "out/users_raw.json";
pub const DEFAULT_CLEAN_PATH: &str = "out/users_clean.json";
pub const DEFAULT_USER_AGENT: &str = "roster";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source_url: String,
    pub raw_path: PathBuf,
    pub clean_path: PathBuf,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            raw_path: PathBuf::from(DEFAULT_RAW_PATH),
            clean_path: PathBuf::from(DEFAULT_CLEAN_PATH),
            fetch: FetchConfig {
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid source_url value: {0}")]
    InvalidSourceUrl(String),
    #[error("invalid {field} value: path cannot be empty")]
    InvalidPath { field: &'static str },
    #[error("invalid fetch.user_agent value: cannot be empty")]
    InvalidUserAgent,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    source_url: Option<String>,
    raw_path: Option<PathBuf>,
    clean_path: Option<PathBuf>,
    fetch: Option<FetchFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FetchFile {
    user_agent: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

/// Checks that `value` is an absolute http(s) URL.
pub fn validate_source_url(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let url = Url::parse(trimmed).map_err(|_| ConfigError::InvalidSourceUrl(value.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidSourceUrl(value.to_string())),
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(url) = parsed.source_url {
        config.source_url = validate_source_url(&url)?;
    }

    if let Some(path) = parsed.raw_path {
        config.raw_path = non_empty_path(path, "raw_path")?;
    }

    if let Some(path) = parsed.clean_path {
        config.clean_path = non_empty_path(path, "clean_path")?;
    }

    if let Some(fetch) = parsed.fetch {
        if let Some(user_agent) = fetch.user_agent {
            let trimmed = user_agent.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::InvalidUserAgent);
            }
            config.fetch.user_agent = trimmed.to_string();
        }
    }

    Ok(config)
}

fn non_empty_path(path: PathBuf, field: &'static str) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::InvalidPath { field });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{
        load_at_path, merge_config, validate_source_url, ConfigError, ConfigFile, FetchFile,
        DEFAULT_CLEAN_PATH, DEFAULT_SOURCE_URL,
    };
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            source_url: Some("http://localhost:8080/users".to_string()),
            raw_path: Some(PathBuf::from("data/raw.json")),
            clean_path: None,
            fetch: Some(FetchFile {
                user_agent: Some(" roster-test ".to_string()),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.source_url, "http://localhost:8080/users");
        assert_eq!(merged.raw_path, PathBuf::from("data/raw.json"));
        assert_eq!(merged.clean_path, PathBuf::from(DEFAULT_CLEAN_PATH));
        assert_eq!(merged.fetch.user_agent, "roster-test");
    }

    #[test]
    fn merge_config_rejects_non_http_url() {
        let parsed = ConfigFile {
            source_url: Some("ftp://example.com/users".to_string()),
            raw_path: None,
            clean_path: None,
            fetch: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSourceUrl(_)));
    }

    #[test]
    fn merge_config_rejects_empty_paths() {
        let parsed = ConfigFile {
            source_url: None,
            raw_path: None,
            clean_path: Some(PathBuf::new()),
            fetch: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPath {
                field: "clean_path"
            }
        ));
    }

    #[test]
    fn validate_source_url_accepts_default() {
        let url = validate_source_url(DEFAULT_SOURCE_URL).expect("valid url");
        assert_eq!(url, DEFAULT_SOURCE_URL);
        assert!(validate_source_url("not a url").is_err());
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "clean_path = \"build/clean.json\"\n[fetch]\nuser_agent = \"bot\"\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.clean_path, PathBuf::from("build/clean.json"));
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.fetch.user_agent, "bot");
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "retries = 3\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
