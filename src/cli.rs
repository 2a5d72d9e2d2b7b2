use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgGroup, Parser};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments ask for a configuration change instead of a page.
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_key.is_some()
        || args.new_api_base_url.is_some()
        || args.new_current_tournament_id.is_some()
        || args.new_next_tournament_id.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Returns true when the arguments read or change the personal round log.
pub fn is_round_command(args: &Args) -> bool {
    args.rounds
        || args.round.is_some()
        || args.add_round
        || args.edit_round.is_some()
        || args.delete_round.is_some()
}

/// Golf Teletext Viewer
///
/// A teletext-style viewer for PGA tour news, leaderboards and schedules.
///
/// Without view options the dashboard is shown: today's news, the leaderboard
/// of the current tournament and details of the next one. On Thursdays, when
/// a new tournament starts, the configured tournament ids step forward by one.
///
/// Only one view or round log action can be given at a time.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(version)]
#[command(styles = get_styles())]
#[command(group(
    ArgGroup::new("view")
        .args([
            "leaderboard",
            "schedule",
            "rankings",
            "player",
            "rounds",
            "round",
            "add_round",
            "edit_round",
            "delete_round",
        ])
        .multiple(false)
))]
#[command(group(ArgGroup::new("round_write").args(["add_round", "edit_round"])))]
pub struct Args {
    /// Show the full leaderboard of a specific tournament id.
    /// The id is used as given, without the Thursday rollover.
    #[arg(long = "leaderboard", value_name = "TOURNAMENT_ID", help_heading = "Views")]
    pub leaderboard: Option<i32>,

    /// Show the tournament schedule of a season.
    #[arg(long = "schedule", short = 's', help_heading = "Views")]
    pub schedule: bool,

    /// Show the world golf rankings of a season.
    #[arg(long = "rankings", short = 'r', help_heading = "Views")]
    pub rankings: bool,

    /// Show a player's profile and news.
    #[arg(long = "player", value_name = "PLAYER_ID", help_heading = "Views")]
    pub player: Option<i64>,

    /// Season for --schedule and --rankings. Defaults to the current year.
    #[arg(long = "season", value_name = "YEAR", help_heading = "Views")]
    pub season: Option<i32>,

    /// Show the round history and statistics of the personal round log.
    #[arg(long = "rounds", help_heading = "Round Log")]
    pub rounds: bool,

    /// Show the scorecard of a logged round.
    #[arg(long = "round", value_name = "ROUND_ID", help_heading = "Round Log")]
    pub round: Option<u32>,

    /// Log a new 9 or 18 hole round. Needs --course and --holes.
    #[arg(
        long = "add-round",
        requires = "course",
        requires = "holes",
        help_heading = "Round Log"
    )]
    pub add_round: bool,

    /// Change a logged round. Only the given --course, --played and --holes are replaced.
    #[arg(long = "edit-round", value_name = "ROUND_ID", help_heading = "Round Log")]
    pub edit_round: Option<u32>,

    /// Delete a logged round.
    #[arg(long = "delete-round", value_name = "ROUND_ID", help_heading = "Round Log")]
    pub delete_round: Option<u32>,

    /// Course name of the round being added or edited.
    #[arg(long = "course", requires = "round_write", help_heading = "Round Log")]
    pub course: Option<String>,

    /// Date the round was played (YYYY-MM-DD). New rounds default to today.
    #[arg(long = "played", value_name = "DATE", requires = "round_write", help_heading = "Round Log")]
    pub played: Option<String>,

    /// Hole by hole scores as PAR/SCORE/PUTTS[/FLAGS], separated by commas.
    /// FLAGS may contain f (fairway hit) and g (green in regulation),
    /// e.g. "4/5/2/f,3/3/2/g,5/6/3".
    #[arg(long = "holes", value_name = "HOLES", requires = "round_write", help_heading = "Round Log")]
    pub holes: Option<String>,

    /// Resolve tournaments as if today were this date (YYYY-MM-DD).
    #[arg(long = "date", short = 'd', help_heading = "Display Options")]
    pub date: Option<String>,

    /// Number of players shown in the dashboard leaderboard and rankings.
    #[arg(
        long = "top",
        short = 'n',
        default_value_t = golf_teletext::constants::tournament::DEFAULT_LEADERBOARD_SIZE,
        help_heading = "Display Options"
    )]
    pub top: usize,

    /// Fetch everything again instead of reusing responses cached by earlier runs.
    #[arg(long = "refresh", help_heading = "Display Options")]
    pub refresh: bool,

    /// Disable colours and clickable links in the output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub plain: bool,

    /// Update the API key in config.
    #[arg(long = "set-api-key", value_name = "KEY", help_heading = "Configuration")]
    pub new_api_key: Option<String>,

    /// Update the API base URL in config. https:// is added when no scheme is given.
    #[arg(long = "set-base-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_base_url: Option<String>,

    /// Update the base id of the current tournament in config.
    #[arg(long = "set-current-id", value_name = "TOURNAMENT_ID", help_heading = "Configuration")]
    pub new_current_tournament_id: Option<i32>,

    /// Update the base id of the next tournament in config.
    #[arg(long = "set-next-id", value_name = "TOURNAMENT_ID", help_heading = "Configuration")]
    pub new_next_tournament_id: Option<i32>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode. Logs are written to stdout in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
