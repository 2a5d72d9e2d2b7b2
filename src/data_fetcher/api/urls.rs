//! URL building utilities for API endpoints
//!
//! The API key is never part of these URLs; it is attached as a query
//! parameter when the request is sent so URLs are safe to log and cache.

use super::tournament_logic::TournamentId;

/// Builds the URL of the general golf news feed.
///
/// # Example
/// ```
/// use golf_teletext::data_fetcher::api::build_news_url;
///
/// let url = build_news_url("https://api.example.com/golf/v2/json");
/// assert_eq!(url, "https://api.example.com/golf/v2/json/News");
/// ```
pub fn build_news_url(api_base_url: &str) -> String {
    format!("{api_base_url}/News")
}

/// Builds the leaderboard URL for a tournament.
///
/// # Example
/// ```
/// use golf_teletext::data_fetcher::api::{TournamentId, build_leaderboard_url};
///
/// let url = build_leaderboard_url("https://api.example.com", TournamentId(560));
/// assert_eq!(url, "https://api.example.com/Leaderboard/560");
/// ```
pub fn build_leaderboard_url(api_base_url: &str, tournament_id: TournamentId) -> String {
    format!("{api_base_url}/Leaderboard/{tournament_id}")
}

/// Builds the URL listing all tournaments of a season.
pub fn build_tournaments_url(api_base_url: &str, season: i32) -> String {
    format!("{api_base_url}/Tournaments/{season}")
}

/// Builds the URL of season statistics, the source of world rankings.
pub fn build_player_season_stats_url(api_base_url: &str, season: i32) -> String {
    format!("{api_base_url}/PlayerSeasonStats/{season}")
}

/// Builds the URL of a player profile.
pub fn build_player_url(api_base_url: &str, player_id: i64) -> String {
    format!("{api_base_url}/Player/{player_id}")
}

/// Builds the URL of news about a single player.
pub fn build_player_news_url(api_base_url: &str, player_id: i64) -> String {
    format!("{api_base_url}/NewsByPlayerID/{player_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.sportsdata.io/golf/v2/json";

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(build_news_url(BASE), format!("{BASE}/News"));
        assert_eq!(
            build_leaderboard_url(BASE, TournamentId(561)),
            format!("{BASE}/Leaderboard/561")
        );
        assert_eq!(
            build_tournaments_url(BASE, 2024),
            format!("{BASE}/Tournaments/2024")
        );
        assert_eq!(
            build_player_season_stats_url(BASE, 2024),
            format!("{BASE}/PlayerSeasonStats/2024")
        );
        assert_eq!(
            build_player_url(BASE, 40000019),
            format!("{BASE}/Player/40000019")
        );
        assert_eq!(
            build_player_news_url(BASE, 40000019),
            format!("{BASE}/NewsByPlayerID/40000019")
        );
    }

    #[test]
    fn test_urls_never_carry_key() {
        let url = build_leaderboard_url(BASE, TournamentId(560));
        assert!(!url.contains("key="));
    }
}
