use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieSeekError {
    #[error("configuration error: {0}")]
    Config(String),

    /// Network failure or unreadable response body. Carries the transport's
    /// own detail so it can be shown to the user as-is.
    #[error("{0}")]
    Transport(String),

    #[error("TMDB search failed with status {0}")]
    Status(u16),

    #[error("request cancelled")]
    Cancelled,

    #[error("failed to {operation} {}: {source}", path.display())]
    Storage {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl MovieSeekError {
    /// True when the failure was caused by a superseded request.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, MovieSeekError::Cancelled)
    }

    /// Human readable detail, or `None` when the error carries no message.
    pub fn detail(&self) -> Option<String> {
        let message = self.to_string();
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

impl From<reqwest::Error> for MovieSeekError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return MovieSeekError::Status(status.as_u16());
        }
        MovieSeekError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MovieSeekError>;
