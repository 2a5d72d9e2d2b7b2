// src/data_fetcher/api/orchestrator.rs - Concurrent fetching of multi-region pages

use crate::config::Config;
use crate::data_fetcher::models::{LeaderboardResponse, NewsItem, Player, Tournament};
use crate::error::AppError;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::golf_api::{
    fetch_leaderboard_top, fetch_news, fetch_player, fetch_player_news, fetch_tournament,
};
use super::tournament_logic::{TournamentId, resolve_tournament_id_for_date};

/// Everything the dashboard shows. Each region carries its own result so one
/// failing request never hides the others.
#[derive(Debug)]
pub struct Dashboard {
    pub resolution_date: NaiveDate,
    pub current_tournament_id: TournamentId,
    pub next_tournament_id: TournamentId,
    pub news: Result<Vec<NewsItem>, AppError>,
    pub leaderboard: Result<LeaderboardResponse, AppError>,
    pub next_tournament: Result<Tournament, AppError>,
}

/// Fetches news, the current leaderboard and the next tournament concurrently.
///
/// Both tournament identifiers go through the resolver independently, each
/// from its own configured base id. The three requests may complete in any
/// order.
#[instrument(skip(client, config))]
pub async fn fetch_dashboard(
    client: &Client,
    config: &Config,
    resolution_date: NaiveDate,
    leaderboard_size: usize,
) -> Dashboard {
    let current_tournament_id =
        resolve_tournament_id_for_date(TournamentId(config.current_tournament_id), resolution_date);
    let next_tournament_id =
        resolve_tournament_id_for_date(TournamentId(config.next_tournament_id), resolution_date);

    info!(
        "Fetching dashboard for {}: current tournament {}, next tournament {}",
        resolution_date, current_tournament_id, next_tournament_id
    );

    let (news, leaderboard, next_tournament) = futures::join!(
        fetch_news(client, config),
        fetch_leaderboard_top(client, config, current_tournament_id, leaderboard_size),
        fetch_tournament(client, config, next_tournament_id),
    );

    for (region, error) in [
        ("news", news.as_ref().err()),
        ("leaderboard", leaderboard.as_ref().err()),
        ("next tournament", next_tournament.as_ref().err()),
    ] {
        if let Some(e) = error {
            warn!("Dashboard region '{}' failed: {}", region, e);
        }
    }

    Dashboard {
        resolution_date,
        current_tournament_id,
        next_tournament_id,
        news,
        leaderboard,
        next_tournament,
    }
}

/// A player's profile together with news about them.
#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub player: Player,
    pub news: Vec<NewsItem>,
}

/// Fetches a player profile and their news in parallel.
///
/// The profile is required; missing news degrades to an empty list.
#[instrument(skip(client, config))]
pub async fn fetch_player_profile(
    client: &Client,
    config: &Config,
    player_id: i64,
) -> Result<PlayerProfile, AppError> {
    let (player, news) = futures::join!(
        fetch_player(client, config, player_id),
        fetch_player_news(client, config, player_id),
    );

    let news = news.unwrap_or_else(|e| {
        warn!("Could not fetch news for player {}: {}", player_id, e);
        Vec::new()
    });

    Ok(PlayerProfile {
        player: player?,
        news,
    })
}
