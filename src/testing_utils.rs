use crate::config::Config;
use crate::data_fetcher::models::{
    LeaderboardPlayer, LeaderboardResponse, NewsItem, PlayerRound, Tournament,
};

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a tournament with the fields the pages display filled in
    pub fn create_tournament(tournament_id: i32, name: &str) -> Tournament {
        Tournament {
            tournament_id,
            name: name.to_string(),
            start_date: Some("2024-04-11T00:00:00".to_string()),
            end_date: Some("2024-04-14T00:00:00".to_string()),
            is_over: false,
            is_in_progress: false,
            canceled: false,
            venue: Some("Augusta National Golf Club".to_string()),
            location: Some("Augusta, GA".to_string()),
            par: Some(72),
            yards: Some(7510),
            purse: Some(20_000_000.0),
        }
    }

    /// Creates a player who has completed `rounds_played` rounds of 71 strokes
    pub fn create_player(name: &str, rank: i32, total_score: f64, rounds_played: usize) -> LeaderboardPlayer {
        let rounds = (1..=rounds_played)
            .map(|number| PlayerRound {
                number: Some(number as i32),
                par: Some(72),
                score: Some(71.0),
            })
            .collect();

        LeaderboardPlayer {
            player_id: Some(40_000_000 + i64::from(rank)),
            name: name.to_string(),
            rank: Some(rank),
            country: Some("USA".to_string()),
            total_score: Some(total_score),
            total_strokes: None,
            rounds,
        }
    }

    /// Creates a leaderboard with `player_count` players named "Player 1", "Player 2", ...
    pub fn create_leaderboard(
        tournament_id: i32,
        name: &str,
        player_count: usize,
    ) -> LeaderboardResponse {
        let players = (0..player_count)
            .map(|i| {
                Self::create_player(&format!("Player {}", i + 1), i as i32, -12.0 + i as f64, 4)
            })
            .collect();

        LeaderboardResponse {
            tournament: Self::create_tournament(tournament_id, name),
            players,
        }
    }

    /// Creates a news item with source and link
    pub fn create_news_item(title: &str) -> NewsItem {
        NewsItem {
            news_id: Some(1),
            title: title.to_string(),
            content: Some("Content of the article.".to_string()),
            source: Some("RotoBaller".to_string()),
            original_source: Some("PGA Tour".to_string()),
            original_source_url: Some("https://example.com/article".to_string()),
            ..NewsItem::default()
        }
    }
}

/// Config pointing at a mock server with a fixed test key
pub fn test_config(api_base_url: &str) -> Config {
    Config {
        api_base_url: api_base_url.to_string(),
        api_key: "test-key".to_string(),
        ..Config::default()
    }
}
