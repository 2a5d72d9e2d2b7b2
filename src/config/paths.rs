use std::path::Path;

/// Name of the directory that holds config and logs inside the platform config dir.
pub const APP_DIR_NAME: &str = "golf_teletext";

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
        .join("logs")
        .to_string_lossy()
        .to_string()
}

/// Returns the path of the personal round log, next to the config file.
pub fn get_round_log_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
        .join("rounds.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the path of the HTTP response cache file.
///
/// Uses the platform cache directory (e.g. ~/.cache on Linux) and falls back
/// to the config directory, then to the current directory.
pub fn get_http_cache_path() -> String {
    dirs::cache_dir()
        .or_else(dirs::config_dir)
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR_NAME)
        .join("http_cache.json")
        .to_string_lossy()
        .to_string()
}
