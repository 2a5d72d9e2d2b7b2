// src/teletext_ui/pages.rs - Builds the pages for each view from fetched data

use super::core::{GolfPage, PageRegion, TeletextRow};
use crate::data_fetcher::api::{Dashboard, PlayerProfile, TournamentId};
use crate::data_fetcher::models::{LeaderboardResponse, PlayerSeasonStats, Tournament};
use crate::error::AppError;
use crate::round_log::{GolfRound, RoundLog};

pub const PAGE_TITLE: &str = "GOLF";
pub const DASHBOARD_PAGE: u16 = 240;
pub const LEADERBOARD_PAGE: u16 = 241;
pub const SCHEDULE_PAGE: u16 = 242;
pub const RANKINGS_PAGE: u16 = 243;
pub const PLAYER_PAGE: u16 = 244;
pub const ROUNDS_PAGE: u16 = 245;
pub const SCORECARD_PAGE: u16 = 246;

/// Short message shown in place of a region whose data could not be loaded.
pub fn region_error_message(what: &str, error: &AppError) -> String {
    match error {
        AppError::ApiTournamentNotFound { tournament_id } => {
            format!("Tournament {tournament_id} not found")
        }
        AppError::RoundNotFound { id } => format!("Round {id} not found"),
        e if e.is_not_found() => format!("No {what} found"),
        AppError::ApiRateLimit { .. } => {
            format!("Could not load {what}: rate limit reached, try again later")
        }
        AppError::NetworkTimeout { .. } | AppError::NetworkConnection { .. } => {
            format!("Could not load {what}: network error")
        }
        e => format!("Could not load {what}: {e}"),
    }
}

fn new_page(page_number: u16, plain: bool) -> GolfPage {
    GolfPage::new(page_number, PAGE_TITLE.to_string(), plain)
}

fn append_leaderboard(page: &mut GolfPage, leaderboard: &LeaderboardResponse) {
    page.set_heading(PageRegion::Leaderboard, leaderboard.tournament.name.clone());
    if leaderboard.players.is_empty() {
        page.add_region(PageRegion::Leaderboard);
        return;
    }
    page.append(PageRegion::Leaderboard, TeletextRow::LeaderboardHeader);
    page.extend(
        PageRegion::Leaderboard,
        leaderboard
            .players
            .iter()
            .map(TeletextRow::from_leaderboard_player),
    );
}

fn append_tournament_info(page: &mut GolfPage, region: PageRegion, tournament: &Tournament) {
    page.set_heading(region, tournament.name.clone());
    page.extend(region, TeletextRow::tournament_info(tournament));
}

/// News, current leaderboard and next tournament, always in that order.
pub fn build_dashboard_page(dashboard: &Dashboard, plain: bool) -> GolfPage {
    let mut page = new_page(DASHBOARD_PAGE, plain);
    page.set_resolution_date(dashboard.resolution_date);

    page.add_region(PageRegion::News);
    page.add_region(PageRegion::Leaderboard);
    page.add_region(PageRegion::NextTournament);

    match &dashboard.news {
        Ok(news) => page.extend(PageRegion::News, news.iter().map(TeletextRow::from_news)),
        Err(e) => page.add_error_message(PageRegion::News, &region_error_message("news", e)),
    }

    match &dashboard.leaderboard {
        Ok(leaderboard) => append_leaderboard(&mut page, leaderboard),
        Err(e) => page.add_error_message(
            PageRegion::Leaderboard,
            &region_error_message("leaderboard", e),
        ),
    }

    match &dashboard.next_tournament {
        Ok(tournament) => {
            append_tournament_info(&mut page, PageRegion::NextTournament, tournament)
        }
        Err(e) => page.add_error_message(
            PageRegion::NextTournament,
            &region_error_message("next tournament", e),
        ),
    }

    page
}

/// Leaderboard of an explicitly chosen tournament, followed by its details.
pub fn build_leaderboard_page(
    tournament_id: TournamentId,
    result: &Result<LeaderboardResponse, AppError>,
    plain: bool,
) -> GolfPage {
    let mut page = new_page(LEADERBOARD_PAGE, plain);
    match result {
        Ok(leaderboard) => {
            append_leaderboard(&mut page, leaderboard);
            page.extend(
                PageRegion::NextTournament,
                TeletextRow::tournament_info(&leaderboard.tournament),
            );
            page.set_heading(PageRegion::NextTournament, "TOURNAMENT DETAILS");
        }
        Err(e) => {
            page.set_heading(PageRegion::Leaderboard, format!("TOURNAMENT {tournament_id}"));
            page.add_error_message(
                PageRegion::Leaderboard,
                &region_error_message("leaderboard", e),
            );
        }
    }
    page
}

pub fn build_schedule_page(
    season: i32,
    result: &Result<Vec<Tournament>, AppError>,
    plain: bool,
) -> GolfPage {
    let mut page = new_page(SCHEDULE_PAGE, plain);
    page.set_heading(PageRegion::Schedule, format!("PGA TOUR SCHEDULE {season}"));
    match result {
        Ok(tournaments) => page.extend(
            PageRegion::Schedule,
            tournaments.iter().map(TeletextRow::from_schedule),
        ),
        Err(e) => {
            page.add_error_message(PageRegion::Schedule, &region_error_message("schedule", e))
        }
    }
    page
}

pub fn build_rankings_page(
    season: i32,
    result: &Result<Vec<PlayerSeasonStats>, AppError>,
    plain: bool,
) -> GolfPage {
    let mut page = new_page(RANKINGS_PAGE, plain);
    page.set_heading(PageRegion::Rankings, format!("WORLD RANKINGS {season}"));
    match result {
        Ok(stats) => page.extend(
            PageRegion::Rankings,
            stats.iter().map(TeletextRow::from_ranking),
        ),
        Err(e) => {
            page.add_error_message(PageRegion::Rankings, &region_error_message("rankings", e))
        }
    }
    page
}

/// Player details with the player's news below them.
pub fn build_player_page(
    player_id: i64,
    result: &Result<PlayerProfile, AppError>,
    plain: bool,
) -> GolfPage {
    let mut page = new_page(PLAYER_PAGE, plain);
    match result {
        Ok(profile) => {
            page.set_heading(PageRegion::Player, profile.player.full_name());
            page.extend(
                PageRegion::Player,
                TeletextRow::player_details(&profile.player),
            );
            page.extend(
                PageRegion::News,
                profile.news.iter().map(TeletextRow::from_news),
            );
        }
        Err(e) => {
            page.set_heading(PageRegion::Player, format!("PLAYER {player_id}"));
            page.add_error_message(PageRegion::Player, &region_error_message("player", e));
        }
    }
    page
}

/// Logged rounds newest first, followed by statistics over all of them.
pub fn build_rounds_page(log: &RoundLog, plain: bool) -> GolfPage {
    let mut page = new_page(ROUNDS_PAGE, plain);
    page.add_region(PageRegion::RoundHistory);
    page.add_region(PageRegion::RoundStatistics);
    if log.rounds.is_empty() {
        return page;
    }

    page.extend(
        PageRegion::RoundHistory,
        log.history().into_iter().map(TeletextRow::from_round),
    );
    page.extend(
        PageRegion::RoundStatistics,
        TeletextRow::round_statistics(&log.statistics()),
    );
    page
}

/// Hole by hole scorecard of one logged round.
pub fn build_scorecard_page(
    round_id: u32,
    result: &Result<GolfRound, AppError>,
    plain: bool,
) -> GolfPage {
    let mut page = new_page(SCORECARD_PAGE, plain);
    match result {
        Ok(round) => {
            page.set_heading(
                PageRegion::Scorecard,
                format!(
                    "{} {}",
                    round.course_name,
                    round.date_played.format("%d.%m.%Y")
                ),
            );
            page.extend(PageRegion::Scorecard, TeletextRow::scorecard(round));
        }
        Err(e) => {
            page.set_heading(PageRegion::Scorecard, format!("ROUND {round_id}"));
            page.add_error_message(PageRegion::Scorecard, &region_error_message("round", e));
        }
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::Player;
    use crate::testing_utils::TestDataBuilder;
    use chrono::NaiveDate;

    fn dashboard(
        news: Result<Vec<crate::data_fetcher::models::NewsItem>, AppError>,
        leaderboard: Result<LeaderboardResponse, AppError>,
        next_tournament: Result<Tournament, AppError>,
    ) -> Dashboard {
        Dashboard {
            resolution_date: NaiveDate::from_ymd_opt(2024, 4, 10).unwrap(),
            current_tournament_id: TournamentId(560),
            next_tournament_id: TournamentId(561),
            news,
            leaderboard,
            next_tournament,
        }
    }

    #[test]
    fn test_dashboard_regions_in_fixed_order() {
        let page = build_dashboard_page(
            &dashboard(
                Ok(vec![TestDataBuilder::create_news_item("Headline")]),
                Ok(TestDataBuilder::create_leaderboard(
                    560,
                    "Masters Tournament",
                    5,
                )),
                Ok(TestDataBuilder::create_tournament(561, "RBC Heritage")),
            ),
            true,
        );

        let kinds: Vec<_> = page.regions().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PageRegion::News,
                PageRegion::Leaderboard,
                PageRegion::NextTournament
            ]
        );
        let leaderboard = page.region(PageRegion::Leaderboard).unwrap();
        assert_eq!(leaderboard.heading, "Masters Tournament");
        // Column header plus five players
        assert_eq!(leaderboard.rows.len(), 6);
        assert_eq!(
            page.region(PageRegion::NextTournament).unwrap().heading,
            "RBC Heritage"
        );
    }

    #[test]
    fn test_dashboard_failed_region_becomes_error_message() {
        let page = build_dashboard_page(
            &dashboard(
                Err(AppError::api_rate_limit("slow down", "https://x/News")),
                Ok(TestDataBuilder::create_leaderboard(
                    560,
                    "Masters Tournament",
                    2,
                )),
                Err(AppError::api_tournament_not_found(561)),
            ),
            true,
        );

        assert!(page.has_error_message("Could not load news: rate limit reached, try again later"));
        assert!(page.has_error_message("Tournament 561 not found"));
        let output = page.render();
        assert!(output.contains("Masters Tournament"));
        assert!(output.contains("Player 2"));
    }

    #[test]
    fn test_empty_leaderboard_renders_no_data() {
        let page = build_dashboard_page(
            &dashboard(
                Ok(Vec::new()),
                Ok(TestDataBuilder::create_leaderboard(560, "Masters Tournament", 0)),
                Ok(TestDataBuilder::create_tournament(561, "RBC Heritage")),
            ),
            true,
        );
        let output = page.render();
        assert_eq!(output.matches("No data").count(), 2);
    }

    #[test]
    fn test_leaderboard_page_error() {
        let page = build_leaderboard_page(
            TournamentId(999),
            &Err(AppError::api_tournament_not_found(999)),
            true,
        );
        assert_eq!(
            page.region(PageRegion::Leaderboard).unwrap().heading,
            "TOURNAMENT 999"
        );
        assert!(page.has_error_message("Tournament 999 not found"));
    }

    #[test]
    fn test_schedule_page_rows() {
        let tournaments = vec![
            TestDataBuilder::create_tournament(1, "The Sentry"),
            TestDataBuilder::create_tournament(2, "Sony Open"),
        ];
        let page = build_schedule_page(2024, &Ok(tournaments), true);
        let region = page.region(PageRegion::Schedule).unwrap();
        assert_eq!(region.heading, "PGA TOUR SCHEDULE 2024");
        assert_eq!(region.rows.len(), 2);
        assert!(page.render().contains("2024-04-11 - 2024-04-14"));
    }

    #[test]
    fn test_schedule_page_lists_leaderboard_ids() {
        let tournaments = vec![TestDataBuilder::create_tournament(587, "Masters Tournament")];
        let output = build_schedule_page(2024, &Ok(tournaments), true).render();
        assert!(output.contains("#587 Masters Tournament"));
    }

    #[test]
    fn test_rankings_page_lists_player_ids() {
        let stats = vec![PlayerSeasonStats {
            player_id: 40000047,
            name: "Xander Schauffele".to_string(),
            world_golf_rank: Some(2),
            ..PlayerSeasonStats::default()
        }];
        let output = build_rankings_page(2024, &Ok(stats), true).render();
        assert!(output.contains("40000047"));
    }

    #[test]
    fn test_rankings_page_error_from_timeout() {
        let page = build_rankings_page(
            2024,
            &Err(AppError::network_timeout("https://x/PlayerSeasonStats/2024")),
            true,
        );
        assert!(page.has_error_message("Could not load rankings: network error"));
    }

    #[test]
    fn test_rounds_page_lists_history_and_statistics() {
        let mut log = RoundLog::default();
        let nine = crate::round_log::parse_holes(
            "4/5/2/f,3/3/2/g,5/5/2/fg,4/4/2/f,4/6/3,3/4/2,5/6/2/f,4/4/1/fg,4/5/2",
        )
        .unwrap();
        let day = |d| NaiveDate::from_ymd_opt(2024, 7, d).unwrap();
        log.add(day(1), "Pebble Beach", nine.clone()).unwrap();
        log.add(day(2), "Spyglass Hill", nine).unwrap();

        let page = build_rounds_page(&log, true);
        let history = page.region(PageRegion::RoundHistory).unwrap();
        assert_eq!(history.rows.len(), 2);
        assert!(matches!(
            &history.rows[0],
            TeletextRow::RoundRow { course, to_par, .. } if course == "Spyglass Hill" && to_par == "+6"
        ));

        let output = page.render();
        assert!(output.contains("STATISTICS"));
        assert!(output.contains("Fairways hit"));
        assert!(output.contains("55.56%"));
        assert!(output.contains("Recent scores   42 42"));
    }

    #[test]
    fn test_empty_round_log_shows_no_data() {
        let output = build_rounds_page(&RoundLog::default(), true).render();
        assert!(output.contains("ROUND HISTORY"));
        assert_eq!(output.matches("No data").count(), 2);
    }

    #[test]
    fn test_scorecard_page_for_missing_round() {
        let page = build_scorecard_page(12, &Err(AppError::round_not_found(12)), true);
        assert_eq!(
            page.region(PageRegion::Scorecard).unwrap().heading,
            "ROUND 12"
        );
        assert!(page.has_error_message("Round 12 not found"));
    }

    #[test]
    fn test_player_page() {
        let profile = PlayerProfile {
            player: Player {
                player_id: 40000019,
                first_name: "Scottie".to_string(),
                last_name: "Scheffler".to_string(),
                country: Some("USA".to_string()),
                ..Player::default()
            },
            news: vec![TestDataBuilder::create_news_item("Scheffler wins again")],
        };
        let page = build_player_page(40000019, &Ok(profile), true);
        assert_eq!(
            page.region(PageRegion::Player).unwrap().heading,
            "Scottie Scheffler"
        );
        assert!(page.render().contains("Scheffler wins again"));
    }
}
