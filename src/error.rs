use thiserror::Error;

/// Everything that can go wrong while loading golf data, reading config or
/// keeping the round log.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure that is neither a timeout nor a refused connection.
    /// Strip the URL first so the API key never shows up.
    #[error("Request to the golf API failed: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Nothing found at {url} (404)")]
    ApiNotFound { url: String },

    #[error("Golf API rejected the request ({status} {message}): {url}")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Golf API rate limit reached ({message}): {url}")]
    ApiRateLimit { message: String, url: String },

    #[error("Golf API failed ({status} {message}): {url}")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Golf API is unavailable ({status} {message}): {url}")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Timed out waiting for {url}")]
    NetworkTimeout { url: String },

    #[error("Could not connect to {url}: {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Response from {url} is not JSON: {message}")]
    ApiMalformedJson { message: String, url: String },

    #[error("Response from {url} has an unexpected shape: {message}")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("Response from {url} is empty: {message}")]
    ApiNoData { message: String, url: String },

    #[error("Tournament not found: {tournament_id}")]
    ApiTournamentNotFound { tournament_id: i32 },

    #[error("Cache file error: {0}")]
    CacheFile(String),

    #[error("Round {id} not found in the round log")]
    RoundNotFound { id: u32 },

    #[error("Invalid round: {0}")]
    InvalidRound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not write TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Could not read TOML: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn cache_file_error(msg: impl Into<String>) -> Self {
        Self::CacheFile(msg.into())
    }

    pub fn invalid_round(msg: impl Into<String>) -> Self {
        Self::InvalidRound(msg.into())
    }

    pub fn round_not_found(id: u32) -> Self {
        Self::RoundNotFound { id }
    }

    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// 4xx other than 404 and 429
    pub fn api_client_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_server_error(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// 502 and 503
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_tournament_not_found(tournament_id: i32) -> Self {
        Self::ApiTournamentNotFound { tournament_id }
    }

    /// Whether the same request may succeed if sent again after a pause.
    /// The fetch loop retries exactly these errors.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiServiceUnavailable { .. }
                | AppError::ApiRateLimit { .. }
        )
    }

    /// Whether the provider answered but had nothing for the request
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::ApiNotFound { .. }
                | AppError::ApiTournamentNotFound { .. }
                | AppError::ApiNoData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_url() {
        let url = "https://api.sportsdata.io/golf/v2/json/News";
        for error in [
            AppError::api_not_found(url),
            AppError::api_client_error(401, "Unauthorized", url),
            AppError::api_rate_limit("Too Many Requests", url),
            AppError::api_service_unavailable(503, "Service Unavailable", url),
            AppError::network_timeout(url),
            AppError::api_malformed_json("Response is not valid JSON", url),
        ] {
            assert!(error.to_string().contains(url), "{error}");
        }
    }

    #[test]
    fn test_round_log_errors() {
        assert_eq!(
            AppError::round_not_found(7).to_string(),
            "Round 7 not found in the round log"
        );
        assert_eq!(
            AppError::invalid_round("a round has 9 or 18 holes").to_string(),
            "Invalid round: a round has 9 or 18 holes"
        );
    }

    #[test]
    fn test_transient_failures_are_retryable() {
        assert!(AppError::network_timeout("u").is_retryable());
        assert!(AppError::network_connection("u", "refused").is_retryable());
        assert!(AppError::api_server_error(500, "x", "u").is_retryable());
        assert!(AppError::api_service_unavailable(502, "x", "u").is_retryable());
        assert!(AppError::api_rate_limit("x", "u").is_retryable());
    }

    #[test]
    fn test_definite_answers_are_not_retryable() {
        assert!(!AppError::api_not_found("u").is_retryable());
        assert!(!AppError::api_client_error(401, "Unauthorized", "u").is_retryable());
        assert!(!AppError::api_unexpected_structure("x", "u").is_retryable());
        assert!(!AppError::api_tournament_not_found(561).is_retryable());
    }

    #[test]
    fn test_not_found_family() {
        assert!(AppError::api_not_found("u").is_not_found());
        assert!(AppError::api_no_data("empty", "u").is_not_found());
        assert!(AppError::api_tournament_not_found(561).is_not_found());
        assert!(!AppError::api_server_error(500, "x", "u").is_not_found());
        assert!(!AppError::round_not_found(3).is_not_found());
    }
}
