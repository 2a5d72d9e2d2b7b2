use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must look like a URL or domain name
/// - API key cannot be empty or contain whitespace
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty and its parent directory
///   must exist or be creatable
pub fn validate_config(
    api_base_url: &str,
    api_key: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        // Without a protocol it should at least look like a domain
        if !api_base_url.contains('.') && !api_base_url.starts_with("localhost") {
            return Err(AppError::config_error(
                "API base URL must be a valid URL or domain name",
            ));
        }
    }

    if api_key.trim().is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    if api_key.chars().any(char::is_whitespace) {
        return Err(AppError::config_error("API key cannot contain whitespace"));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config("https://api.sportsdata.io/golf/v2/json", "abc123", 30, &None).is_ok());
        assert!(validate_config("localhost:8080", "abc123", 30, &None).is_ok());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = validate_config("", "abc123", 30, &None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_non_domain_base_url_rejected() {
        assert!(validate_config("notadomain", "abc123", 30, &None).is_err());
    }

    #[test]
    fn test_api_key_rules() {
        assert!(validate_config("https://api.example.com", "", 30, &None).is_err());
        assert!(validate_config("https://api.example.com", "   ", 30, &None).is_err());
        assert!(validate_config("https://api.example.com", "ab cd", 30, &None).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(validate_config("https://api.example.com", "abc123", 0, &None).is_err());
    }

    #[test]
    fn test_log_path_parent_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("golf.log");
        let log_path = Some(log_path.to_string_lossy().to_string());

        assert!(validate_config("https://api.example.com", "abc123", 30, &log_path).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        assert!(validate_config("https://api.example.com", "abc123", 30, &Some(String::new())).is_err());
    }
}
