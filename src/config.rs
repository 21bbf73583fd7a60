//! Configuration handling for TMDB access.
//!
//! Configuration is stored in `config.yaml` inside the movieseek home and includes:
//! - TMDB credentials (bearer access token or v3 API key)
//! - API base URL and default search parameters
//!
//! Environment variables take precedence over the file.

use std::env;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::{MovieSeekError, Result};
use crate::{fs, paths};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";

pub const ENV_ACCESS_TOKEN: &str = "TMDB_ACCESS_TOKEN";
pub const ENV_API_KEY: &str = "TMDB_API_KEY";
pub const ENV_BASE_URL: &str = "TMDB_BASE_URL";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// TMDB section of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TmdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
}

/// The single authentication mechanism used for a request.
///
/// A bearer token always wins over an API key when both are configured.
#[derive(Debug)]
pub enum Credentials {
    Bearer(SecretString),
    ApiKey(SecretString),
}

impl Credentials {
    pub fn mode(&self) -> &'static str {
        match self {
            Credentials::Bearer(_) => "bearer",
            Credentials::ApiKey(_) => "api_key",
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let Some(content) = fs::read_file_if_exists(path)? else {
            return Ok(Config::default());
        };
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_yaml_ng::to_string(self)?;
        fs::write_file_atomic(path, &content)
    }

    /// Get the bearer access token from environment or config
    pub fn access_token(&self) -> Option<String> {
        non_empty_env(ENV_ACCESS_TOKEN).or_else(|| non_empty(self.tmdb.access_token.as_deref()))
    }

    /// Get the v3 API key from environment or config
    pub fn api_key(&self) -> Option<String> {
        non_empty_env(ENV_API_KEY).or_else(|| non_empty(self.tmdb.api_key.as_deref()))
    }

    /// Resolve the credential mode, or `None` when nothing is configured.
    pub fn credentials(&self) -> Option<Credentials> {
        if let Some(token) = self.access_token() {
            return Some(Credentials::Bearer(SecretString::from(token)));
        }
        self.api_key()
            .map(|key| Credentials::ApiKey(SecretString::from(key)))
    }

    pub fn base_url(&self) -> String {
        non_empty_env(ENV_BASE_URL)
            .or_else(|| non_empty(self.tmdb.base_url.as_deref()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn language(&self) -> String {
        non_empty(self.tmdb.language.as_deref()).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }

    pub fn include_adult(&self) -> bool {
        self.tmdb.include_adult.unwrap_or(false)
    }

    pub fn set_access_token(&mut self, token: String) {
        self.tmdb.access_token = Some(token);
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.tmdb.api_key = Some(api_key);
    }

    /// Set the API base URL, rejecting values that are not absolute http(s) URLs
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        let parsed = url::Url::parse(base_url).map_err(|e| {
            MovieSeekError::Config(format!("invalid base URL '{base_url}': {e}"))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(MovieSeekError::Config(format!(
                "invalid base URL '{base_url}': expected http or https"
            )));
        }
        self.tmdb.base_url = Some(base_url.trim_end_matches('/').to_string());
        Ok(())
    }

    pub fn set_language(&mut self, language: String) {
        self.tmdb.language = Some(language);
    }

    pub fn set_include_adult(&mut self, include_adult: bool) {
        self.tmdb.include_adult = Some(include_adult);
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_guards::{EnvGuard, without_tmdb_env};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_default() {
        let _env = without_tmdb_env();
        let config = Config::default();
        assert!(config.credentials().is_none());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.language(), "en-US");
        assert!(!config.include_adult());
    }

    #[test]
    #[serial]
    fn test_token_wins_over_api_key() {
        let _env = without_tmdb_env();
        let mut config = Config::default();
        config.set_api_key("key123".to_string());
        config.set_access_token("token123".to_string());

        let creds = config.credentials().unwrap();
        assert_eq!(creds.mode(), "bearer");
    }

    #[test]
    #[serial]
    fn test_api_key_only() {
        let _env = without_tmdb_env();
        let mut config = Config::default();
        config.set_api_key("key123".to_string());

        let creds = config.credentials().unwrap();
        assert_eq!(creds.mode(), "api_key");
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let _env = without_tmdb_env();
        let mut config = Config::default();
        config.set_api_key("from-file".to_string());
        let _key = unsafe { EnvGuard::set(ENV_API_KEY, "from-env") };

        assert_eq!(config.api_key(), Some("from-env".to_string()));
    }

    #[test]
    #[serial]
    fn test_blank_values_are_unset() {
        let _env = without_tmdb_env();
        let mut config = Config::default();
        config.set_access_token("   ".to_string());
        assert!(config.credentials().is_none());
    }

    #[test]
    #[serial]
    fn test_base_url_trailing_slash_trimmed() {
        let _env = without_tmdb_env();
        let mut config = Config::default();
        config.set_base_url("http://127.0.0.1:9999/3/").unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9999/3");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = Config::default();
        assert!(config.set_base_url("not a url").is_err());
        assert!(config.set_base_url("ftp://example.com").is_err());
    }

    #[test]
    #[serial]
    fn test_config_round_trip_through_file() {
        let _env = without_tmdb_env();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.set_access_token("token123".to_string());
        config.set_language("fr-FR".to_string());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.access_token(), Some("token123".to_string()));
        assert_eq!(loaded.language(), "fr-FR");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert!(config.tmdb.access_token.is_none());
    }
}
