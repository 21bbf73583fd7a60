//! Configuration commands for managing TMDB settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value (secrets masked)
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::{MovieSeekError, Result};

const VALID_KEYS: &str =
    "tmdb.access_token, tmdb.api_key, tmdb.base_url, tmdb.language, tmdb.include_adult";

/// Validate a config key, suggesting dot notation for `tmdb_access_token` style keys
fn validate_config_key(key: &str) -> Result<&str> {
    if let Some(rest) = key.strip_prefix("tmdb_") {
        return Err(MovieSeekError::Config(format!(
            "invalid config key '{key}'. Use dot notation: 'tmdb.{rest}'"
        )));
    }
    Ok(key)
}

fn unknown_key(key: &str) -> MovieSeekError {
    MovieSeekError::Config(format!("unknown config key '{key}'. Valid keys: {VALID_KEYS}"))
}

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(MovieSeekError::Config(format!(
            "invalid value '{value}' for {key}. Expected: true or false"
        ))),
    }
}

fn secret_status(value: Option<String>) -> String {
    match value {
        Some(v) => mask_sensitive_value(&v).green().to_string(),
        None => "not configured".dimmed().to_string(),
    }
}

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;

    let access_token = config.access_token();
    let api_key = config.api_key();
    let mode = config.credentials().map(|c| c.mode());

    let json_output = json!({
        "tmdb": {
            "access_token": access_token.as_deref().map(mask_sensitive_value),
            "api_key": api_key.as_deref().map(mask_sensitive_value),
            "base_url": config.base_url(),
            "language": config.language(),
            "include_adult": config.include_adult(),
        },
        "credential_mode": mode,
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text = String::new();
    text.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text.push_str(&format!("{}:\n", "tmdb".cyan()));
    text.push_str(&format!("  access_token: {}\n", secret_status(access_token)));
    text.push_str(&format!("  api_key: {}\n", secret_status(api_key)));
    text.push_str(&format!("  base_url: {}\n", config.base_url()));
    text.push_str(&format!("  language: {}\n", config.language()));
    text.push_str(&format!("  include_adult: {}\n", config.include_adult()));
    text.push('\n');

    let mode_text = match mode {
        Some(mode) => mode.green().to_string(),
        None => "no credentials".yellow().to_string(),
    };
    text.push_str(&format!("{}: {mode_text}\n\n", "credential mode".cyan()));
    text.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output).with_text(text).print(json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;

    let shown = match key {
        "tmdb.access_token" => {
            config.set_access_token(value.to_string());
            json!(mask_sensitive_value(value))
        }
        "tmdb.api_key" => {
            config.set_api_key(value.to_string());
            json!(mask_sensitive_value(value))
        }
        "tmdb.base_url" => {
            config.set_base_url(value)?;
            json!(value.trim_end_matches('/'))
        }
        "tmdb.language" => {
            if value.trim().is_empty() {
                return Err(MovieSeekError::Config(
                    "tmdb.language cannot be empty".to_string(),
                ));
            }
            config.set_language(value.trim().to_string());
            json!(value.trim())
        }
        "tmdb.include_adult" => {
            let enabled = parse_bool(key, value)?;
            config.set_include_adult(enabled);
            json!(enabled)
        }
        _ => return Err(unknown_key(key)),
    };

    config.save()?;
    tracing::debug!(key, "configuration updated");

    let text = match &shown {
        serde_json::Value::String(s) => format!("Set {} to {s}", key.cyan()),
        other => format!("Set {} to {other}", key.cyan()),
    };
    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": shown,
        "success": true,
    }))
    .with_text(text)
    .print(json)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    validate_config_key(key)?;

    let config = Config::load()?;

    let masked_secret = |value: Option<String>| -> Result<(serde_json::Value, String)> {
        let value = value.ok_or_else(|| MovieSeekError::Config(format!("{key} not set")))?;
        let masked = mask_sensitive_value(&value);
        let json = json!({
            "key": key,
            "value": masked,
            "configured": true,
            "masked": true,
        });
        let text = format!("{masked} (masked - showing first 2 and last 2 characters)");
        Ok((json, text))
    };

    let plain = |value: serde_json::Value, text: String| {
        (
            json!({
                "key": key,
                "value": value,
                "configured": true,
            }),
            text,
        )
    };

    let (json_output, text_output) = match key {
        "tmdb.access_token" => masked_secret(config.access_token())?,
        "tmdb.api_key" => masked_secret(config.api_key())?,
        "tmdb.base_url" => plain(json!(config.base_url()), config.base_url()),
        "tmdb.language" => plain(json!(config.language()), config.language()),
        "tmdb.include_adult" => plain(
            json!(config.include_adult()),
            config.include_adult().to_string(),
        ),
        _ => return Err(unknown_key(key)),
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}
