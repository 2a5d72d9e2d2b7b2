//! Golf Teletext Library
//!
//! This library provides functionality for fetching PGA tour news, leaderboards and
//! schedules and displaying them in a teletext-style format.
//!
//! The current tournament is picked by a small resolver: on the rollover weekday
//! (Thursday) the configured tournament identifier steps forward by one.
//!
//! Alongside the tour data it keeps a personal round log with hole-by-hole
//! scores and the statistics derived from them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use golf_teletext::config::Config;
//! use golf_teletext::data_fetcher::api::{create_http_client_with_timeout, fetch_dashboard};
//! use golf_teletext::data_fetcher::api::current_resolution_date;
//! use golf_teletext::error::AppError;
//! use golf_teletext::teletext_ui::build_dashboard_page;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     // Fetch news, leaderboard and next tournament concurrently
//!     let dashboard = fetch_dashboard(&client, &config, current_resolution_date(), 5).await;
//!
//!     // Render the page to stdout
//!     let page = build_dashboard_page(&dashboard, false);
//!     page.render_to(&mut std::io::stdout())?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod round_log;
pub mod teletext_ui;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{
    Dashboard, ROLLOVER_WEEKDAY, TournamentId, fetch_dashboard, resolve_tournament_id,
    resolve_tournament_id_for_date,
};
pub use data_fetcher::models::{LeaderboardResponse, NewsItem, Tournament};
pub use error::AppError;
pub use round_log::{GolfRound, RoundLog, RoundStatistics};
pub use teletext_ui::{GolfPage, PageRegion, TeletextRow};

// Re-export cache monitoring functions for external tools
pub use data_fetcher::cache::{
    CacheStats, clear_http_response_cache, get_http_response_cache_stats,
    load_http_response_cache, persist_http_response_cache,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
