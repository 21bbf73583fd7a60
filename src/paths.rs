use std::path::PathBuf;

/// Returns the movieseek home directory.
///
/// Resolution order:
/// 1. `MOVIESEEK_HOME` environment variable (if set)
/// 2. Platform config directory (e.g. `~/.config/movieseek`)
/// 3. `.movieseek` in the current working directory
pub fn movieseek_home() -> PathBuf {
    if let Ok(home) = std::env::var("MOVIESEEK_HOME")
        && !home.is_empty()
    {
        return PathBuf::from(home);
    }

    directories::ProjectDirs::from("com", "movieseek", "movieseek")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".movieseek"))
}

/// Returns the path to the YAML configuration file.
pub fn config_file() -> PathBuf {
    movieseek_home().join("config.yaml")
}

/// Returns the path to the persisted favorites.
pub fn favorites_file() -> PathBuf {
    movieseek_home().join("favorites.json")
}

/// Returns the path the TUI writes its log to.
pub fn log_file() -> PathBuf {
    movieseek_home().join("movieseek.log")
}
