//! Typed access to the golf statistics endpoints

use crate::config::Config;
use crate::data_fetcher::models::{
    LeaderboardResponse, NewsItem, Player, PlayerSeasonStats, Tournament, sort_by_world_rank,
};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::tournament_logic::TournamentId;
use super::urls::{
    build_leaderboard_url, build_news_url, build_player_news_url, build_player_season_stats_url,
    build_player_url, build_tournaments_url,
};

/// Fetches the general golf news feed.
#[instrument(skip(client, config))]
pub async fn fetch_news(client: &Client, config: &Config) -> Result<Vec<NewsItem>, AppError> {
    let url = build_news_url(&config.api_base_url);
    let news: Vec<NewsItem> = fetch(client, &url, &config.api_key).await?;
    info!("Fetched {} news items", news.len());
    Ok(news)
}

/// Fetches the full leaderboard of a tournament.
///
/// A 404 from the provider becomes [`AppError::ApiTournamentNotFound`].
#[instrument(skip(client, config))]
pub async fn fetch_leaderboard(
    client: &Client,
    config: &Config,
    tournament_id: TournamentId,
) -> Result<LeaderboardResponse, AppError> {
    let url = build_leaderboard_url(&config.api_base_url, tournament_id);
    match fetch::<LeaderboardResponse>(client, &url, &config.api_key).await {
        Ok(leaderboard) => {
            info!(
                "Fetched leaderboard for {} ({}) with {} players",
                leaderboard.tournament.name,
                tournament_id,
                leaderboard.players.len()
            );
            Ok(leaderboard)
        }
        Err(AppError::ApiNotFound { .. }) => {
            Err(AppError::api_tournament_not_found(tournament_id.value()))
        }
        Err(e) => Err(e),
    }
}

/// Fetches a leaderboard and keeps only the top `count` players.
pub async fn fetch_leaderboard_top(
    client: &Client,
    config: &Config,
    tournament_id: TournamentId,
    count: usize,
) -> Result<LeaderboardResponse, AppError> {
    let mut leaderboard = fetch_leaderboard(client, config, tournament_id).await?;
    leaderboard.truncate_players(count);
    Ok(leaderboard)
}

/// Fetches tournament details. The provider only exposes single tournaments
/// through their leaderboard, so the player list is dropped.
pub async fn fetch_tournament(
    client: &Client,
    config: &Config,
    tournament_id: TournamentId,
) -> Result<Tournament, AppError> {
    fetch_leaderboard(client, config, tournament_id)
        .await
        .map(|leaderboard| leaderboard.tournament)
}

/// Fetches the season schedule sorted by start date. Tournaments without a
/// start date keep their provider order at the end.
#[instrument(skip(client, config))]
pub async fn fetch_schedule(
    client: &Client,
    config: &Config,
    season: i32,
) -> Result<Vec<Tournament>, AppError> {
    let url = build_tournaments_url(&config.api_base_url, season);
    let mut tournaments: Vec<Tournament> = fetch(client, &url, &config.api_key).await?;
    tournaments.sort_by_key(|t| (t.start_date_naive().is_none(), t.start_date_naive()));
    info!("Fetched {} tournaments for season {}", tournaments.len(), season);
    Ok(tournaments)
}

/// Fetches season stats ordered by world ranking, limited to `limit` players.
#[instrument(skip(client, config))]
pub async fn fetch_world_rankings(
    client: &Client,
    config: &Config,
    season: i32,
    limit: usize,
) -> Result<Vec<PlayerSeasonStats>, AppError> {
    let url = build_player_season_stats_url(&config.api_base_url, season);
    let mut stats: Vec<PlayerSeasonStats> = fetch(client, &url, &config.api_key).await?;
    sort_by_world_rank(&mut stats);
    stats.truncate(limit);
    Ok(stats)
}

#[instrument(skip(client, config))]
pub async fn fetch_player(
    client: &Client,
    config: &Config,
    player_id: i64,
) -> Result<Player, AppError> {
    let url = build_player_url(&config.api_base_url, player_id);
    fetch(client, &url, &config.api_key).await
}

#[instrument(skip(client, config))]
pub async fn fetch_player_news(
    client: &Client,
    config: &Config,
    player_id: i64,
) -> Result<Vec<NewsItem>, AppError> {
    let url = build_player_news_url(&config.api_base_url, player_id);
    fetch(client, &url, &config.api_key).await
}
