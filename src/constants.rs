//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

/// Default base URL of the golf statistics API
pub const DEFAULT_API_BASE_URL: &str = "https://api.sportsdata.io/golf/v2/json";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Capacity of the HTTP response cache (number of URLs)
pub const HTTP_RESPONSE_CACHE_CAPACITY: usize = 100;

/// Tournament defaults
pub mod tournament {
    /// Base identifier used for the "current tournament" leaderboard
    pub const DEFAULT_CURRENT_TOURNAMENT_ID: i32 = 560;

    /// Base identifier used for the "next tournament" info box
    pub const DEFAULT_NEXT_TOURNAMENT_ID: i32 = 561;

    /// Number of players shown on the dashboard leaderboard
    pub const DEFAULT_LEADERBOARD_SIZE: usize = 5;

    /// Number of rounds in a regular stroke play event
    pub const ROUNDS_PER_TOURNAMENT: usize = 4;
}

/// Cache TTL (Time To Live) values in seconds
pub mod cache_ttl {
    /// News feed (10 minutes)
    pub const NEWS_SECONDS: u64 = 600;

    /// Leaderboard of a tournament that is being played right now
    pub const LIVE_LEADERBOARD_SECONDS: u64 = 60;

    /// Leaderboard of a tournament that has not started or is over (1 hour)
    pub const LEADERBOARD_SECONDS: u64 = 3600;

    /// Season schedules, season stats and player profiles (6 hours)
    pub const SEASON_DATA_SECONDS: u64 = 21600;

    /// Fallback for any other endpoint (5 minutes)
    pub const DEFAULT_SECONDS: u64 = 300;
}

/// UI layout constants
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Width used when rendering to a non-terminal writer
    pub const DEFAULT_PAGE_WIDTH: usize = 80;

    /// Width of the player name column in leaderboard rows
    pub const NAME_COLUMN_WIDTH: usize = 24;

    /// Width of the id column in schedule and ranking rows
    pub const ID_COLUMN_WIDTH: usize = 10;

    /// News article bodies are cut to this many characters
    pub const NEWS_CONTENT_MAX_CHARS: usize = 240;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the API key
    pub const API_KEY: &str = "GOLF_API_KEY";

    /// Environment variable for API base URL override
    pub const API_BASE_URL: &str = "GOLF_API_BASE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "GOLF_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "GOLF_HTTP_TIMEOUT";
}

/// Retry configuration
pub mod retry {
    /// Maximum number of retries for transient API failures
    pub const MAX_RETRIES: u32 = 3;

    /// Initial backoff delay, doubled after each attempt (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;
}
