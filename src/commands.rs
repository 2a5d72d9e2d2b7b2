use crate::cli::Args;
use chrono::{Datelike, Local, NaiveDate};
use crossterm::{execute, terminal::SetTitle};
use golf_teletext::config::{Config, normalize_base_url, paths};
use golf_teletext::data_fetcher::api::{
    TournamentId, create_http_client_with_timeout, current_resolution_date, fetch_dashboard,
    fetch_leaderboard, fetch_player_profile, fetch_schedule, fetch_world_rankings,
};
use golf_teletext::data_fetcher::cache::{
    get_http_response_cache_stats, load_http_response_cache, persist_http_response_cache,
};
use golf_teletext::error::AppError;
use golf_teletext::round_log::{RoundLog, RoundUpdate, parse_holes};
use golf_teletext::teletext_ui::pages::PAGE_TITLE;
use golf_teletext::teletext_ui::{
    GolfPage, build_dashboard_page, build_leaderboard_page, build_player_page,
    build_rankings_page, build_rounds_page, build_schedule_page, build_scorecard_page,
};
use std::io::stdout;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid date '{value}', expected YYYY-MM-DD: {e}"))
    })
}

/// Parses the `--date` argument, falling back to today's local date.
pub fn parse_resolution_date(date: Option<&str>) -> Result<NaiveDate, AppError> {
    match date {
        Some(value) => parse_date(value),
        None => Ok(current_resolution_date()),
    }
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(PAGE_TITLE))?;
    Config::display().await?;
    Ok(())
}

/// Handles configuration update commands (--set-api-key, --set-base-url,
/// --set-current-id, --set-next-id, --set-log-file, --clear-log-file).
///
/// Starts from the existing config file when there is one so that unrelated
/// settings are kept.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(api_key) = &args.new_api_key {
        config.api_key = api_key.trim().to_string();
    }

    if let Some(base_url) = &args.new_api_base_url {
        config.api_base_url = normalize_base_url(base_url);
    }

    if let Some(id) = args.new_current_tournament_id {
        config.current_tournament_id = id;
    }

    if let Some(id) = args.new_next_tournament_id {
        config.next_tournament_id = id;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    info!("Config updated at {}", config_path);
    println!("Config updated successfully!");

    if config.api_key.is_empty() {
        println!("No API key set yet. Add one with --set-api-key.");
    }
    Ok(())
}

fn print_page(page: &GolfPage, plain: bool) -> Result<(), AppError> {
    if !plain {
        execute!(stdout(), SetTitle(PAGE_TITLE))?;
    }
    page.render_to(&mut stdout())?;
    println!();
    Ok(())
}

/// Fetches the data for the requested view and prints the page.
///
/// Fetch failures end up as error messages on the page; only configuration,
/// argument and terminal errors are returned.
pub async fn handle_view_command(args: &Args) -> Result<(), AppError> {
    let resolution_date = parse_resolution_date(args.date.as_deref())?;
    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let season = args.season.unwrap_or_else(|| resolution_date.year());

    // Responses from earlier runs are reused until their TTL runs out
    let cache_path = PathBuf::from(paths::get_http_cache_path());
    if args.refresh {
        info!("Skipping cached responses from earlier runs");
    } else if let Err(e) = load_http_response_cache(&cache_path).await {
        warn!("Ignoring HTTP response cache file: {e}");
    }

    let page = if let Some(id) = args.leaderboard {
        let tournament_id = TournamentId::new(id);
        let result = fetch_leaderboard(&client, &config, tournament_id).await;
        build_leaderboard_page(tournament_id, &result, args.plain)
    } else if args.schedule {
        let result = fetch_schedule(&client, &config, season).await;
        build_schedule_page(season, &result, args.plain)
    } else if args.rankings {
        let result = fetch_world_rankings(&client, &config, season, args.top).await;
        build_rankings_page(season, &result, args.plain)
    } else if let Some(player_id) = args.player {
        let result = fetch_player_profile(&client, &config, player_id).await;
        build_player_page(player_id, &result, args.plain)
    } else {
        let dashboard = fetch_dashboard(&client, &config, resolution_date, args.top).await;
        build_dashboard_page(&dashboard, args.plain)
    };

    let stats = get_http_response_cache_stats().await;
    debug!(
        "HTTP response cache: {}/{} entries",
        stats.size, stats.capacity
    );
    if let Err(e) = persist_http_response_cache(&cache_path).await {
        warn!("Could not save HTTP response cache: {e}");
    }

    print_page(&page, args.plain)
}

fn round_update_from_args(args: &Args) -> Result<RoundUpdate, AppError> {
    Ok(RoundUpdate {
        date_played: args.played.as_deref().map(parse_date).transpose()?,
        course_name: args.course.clone(),
        holes: args.holes.as_deref().map(parse_holes).transpose()?,
    })
}

fn scorecard_page(log: &RoundLog, id: u32, plain: bool) -> GolfPage {
    build_scorecard_page(id, &log.get(id).cloned(), plain)
}

/// Runs the round log action in `args` against `log`.
///
/// Returns the page to show and whether the log changed and has to be saved.
/// New rounds without `--played` are dated `today`.
pub fn run_round_command(
    log: &mut RoundLog,
    args: &Args,
    today: NaiveDate,
) -> Result<(GolfPage, bool), AppError> {
    let update = round_update_from_args(args)?;

    if args.add_round {
        let course = update.course_name.as_deref().unwrap_or_default();
        let holes = update.holes.unwrap_or_default();
        let id = log
            .add(update.date_played.unwrap_or(today), course, holes)?
            .id;
        return Ok((scorecard_page(log, id, args.plain), true));
    }

    if let Some(id) = args.edit_round {
        log.edit(id, update)?;
        return Ok((scorecard_page(log, id, args.plain), true));
    }

    if let Some(id) = args.delete_round {
        log.delete(id)?;
        return Ok((build_rounds_page(log, args.plain), true));
    }

    if let Some(id) = args.round {
        return Ok((scorecard_page(log, id, args.plain), false));
    }

    Ok((build_rounds_page(log, args.plain), false))
}

/// Handles --rounds, --round, --add-round, --edit-round and --delete-round.
/// These work offline and need no API key.
pub async fn handle_round_command(args: &Args) -> Result<(), AppError> {
    let path = RoundLog::get_path();
    let mut log = RoundLog::load_from_path(&path).await?;

    let (page, changed) = run_round_command(&mut log, args, Local::now().date_naive())?;
    if changed {
        log.save_to_path(&path).await?;
        info!("Round log saved to {path}");
    }

    print_page(&page, args.plain)
}
