// src/teletext_ui/formatting.rs - Text formatting for scores, dates and the rows built from API models

use super::core::TeletextRow;
use crate::constants::tournament::ROUNDS_PER_TOURNAMENT;
use crate::constants::ui::NEWS_CONTENT_MAX_CHARS;
use crate::data_fetcher::models::{
    LeaderboardPlayer, NewsItem, Player, PlayerSeasonStats, Tournament, parse_api_date,
};
use crate::round_log::{GolfRound, RoundStatistics};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MISSING: &str = "-";

/// Formats a score relative to par: `E` for even, `+N` over, `-N` under.
///
/// # Example
/// ```
/// use golf_teletext::teletext_ui::format_score;
///
/// assert_eq!(format_score(0.0), "E");
/// assert_eq!(format_score(3.0), "+3");
/// assert_eq!(format_score(-12.0), "-12");
/// ```
pub fn format_score(score: f64) -> String {
    let rounded = score.round() as i64;
    match rounded {
        0 => "E".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}

pub fn format_optional_score(score: Option<f64>) -> String {
    score.map(format_score).unwrap_or_else(|| MISSING.to_string())
}

/// Round scores from the provider are stroke counts, so they are shown as
/// the plain number (`68`) without any relation to par.
pub fn format_round_score(strokes: Option<f64>) -> String {
    strokes
        .map(|s| (s.round() as i64).to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Leaderboard position shown to the user: the provider's zero-based rank plus one.
pub fn format_position(rank: Option<i32>) -> String {
    rank.map(|r| r.saturating_add(1).to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Formats a provider timestamp as `YYYY-MM-DD`. Unparseable values are shown as-is.
pub fn format_api_date(value: Option<&str>) -> String {
    match value {
        Some(raw) => parse_api_date(raw)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => MISSING.to_string(),
    }
}

/// Formats a dollar amount with thousands separators, e.g. `$20,000,000`.
pub fn format_money(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn format_optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

fn text_or_missing(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => MISSING.to_string(),
    }
}

/// Pads or truncates text to an exact display width, counting wide characters correctly.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        result.push(ch);
        used += w;
    }
    result.push_str(&" ".repeat(width.saturating_sub(result.width())));
    result
}

/// Shortens text to at most `max_chars` characters, ending with `...` when cut.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

impl TeletextRow {
    pub fn from_news(item: &NewsItem) -> Self {
        TeletextRow::NewsItem {
            title: item.title.trim().to_string(),
            source: item.display_source().to_string(),
            link: item.link().map(str::to_string),
            content: item
                .content
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(|c| truncate_text(c, NEWS_CONTENT_MAX_CHARS)),
        }
    }

    pub fn from_leaderboard_player(player: &LeaderboardPlayer) -> Self {
        let rounds = (0..ROUNDS_PER_TOURNAMENT)
            .map(|i| format_round_score(player.round_score(i)))
            .collect();

        TeletextRow::LeaderboardRow {
            position: format_position(player.rank),
            name: player.name.clone(),
            total: format_optional_score(player.total_score),
            rounds,
        }
    }

    /// Info lines describing a tournament, in display order
    pub fn tournament_info(tournament: &Tournament) -> Vec<Self> {
        let info = |label: &str, value: String| TeletextRow::InfoLine {
            label: label.to_string(),
            value,
        };

        vec![
            info("Location", text_or_missing(tournament.location.as_deref())),
            info("Venue", text_or_missing(tournament.venue.as_deref())),
            info("Par", format_optional(tournament.par)),
            info("Yards", format_optional(tournament.yards)),
            info("Start Date", format_api_date(tournament.start_date.as_deref())),
            info("End Date", format_api_date(tournament.end_date.as_deref())),
        ]
    }

    pub fn from_schedule(tournament: &Tournament) -> Self {
        let name = if tournament.canceled {
            format!("{} (canceled)", tournament.name)
        } else {
            tournament.name.clone()
        };

        TeletextRow::ScheduleRow {
            id: tournament.tournament_id.to_string(),
            name,
            par: format_optional(tournament.par),
            location: text_or_missing(tournament.location.as_deref()),
            venue: text_or_missing(tournament.venue.as_deref()),
            purse: tournament
                .purse
                .map(format_money)
                .unwrap_or_else(|| MISSING.to_string()),
            start: format_api_date(tournament.start_date.as_deref()),
            end: format_api_date(tournament.end_date.as_deref()),
        }
    }

    pub fn from_ranking(stats: &PlayerSeasonStats) -> Self {
        TeletextRow::RankingRow {
            id: stats.player_id.to_string(),
            rank: format_optional(stats.world_golf_rank),
            name: stats.name.clone(),
            events: format_optional(stats.events),
            wins: format_optional(stats.wins),
            earnings: stats
                .earnings
                .map(format_money)
                .unwrap_or_else(|| MISSING.to_string()),
        }
    }

    pub fn from_round(round: &GolfRound) -> Self {
        TeletextRow::RoundRow {
            id: round.id.to_string(),
            date: round.date_played.format("%Y-%m-%d").to_string(),
            course: round.course_name.clone(),
            holes: round.holes.len().to_string(),
            score: round.total_score().to_string(),
            to_par: format_score(round.difference() as f64),
        }
    }

    /// Hole by hole rows of a round followed by its totals
    pub fn scorecard(round: &GolfRound) -> Vec<Self> {
        let mark = |hit: bool| (if hit { "x" } else { MISSING }).to_string();

        let mut rows = vec![TeletextRow::HoleHeader];
        rows.extend(round.holes.iter().enumerate().map(|(i, hole)| {
            TeletextRow::HoleRow {
                hole: (i + 1).to_string(),
                par: hole.par.to_string(),
                score: hole.score.to_string(),
                putts: hole.putts.to_string(),
                fairway: mark(hole.fairway_hit),
                green: mark(hole.green_in_regulation),
            }
        }));
        rows.push(TeletextRow::InfoLine {
            label: "Total".to_string(),
            value: format!(
                "{} ({}) on par {}",
                round.total_score(),
                format_score(round.difference() as f64),
                round.par()
            ),
        });
        rows.push(TeletextRow::InfoLine {
            label: "Putts".to_string(),
            value: round.total_putts().to_string(),
        });
        rows
    }

    pub fn round_statistics(stats: &RoundStatistics) -> Vec<Self> {
        let info = |label: &str, value: String| TeletextRow::InfoLine {
            label: label.to_string(),
            value,
        };
        let list = |values: &[u32]| {
            if values.is_empty() {
                MISSING.to_string()
            } else {
                values
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            }
        };
        let categories = &stats.categories;

        vec![
            info(
                "Rounds",
                format!("{} ({} holes)", stats.rounds_played, stats.holes_played),
            ),
            TeletextRow::PercentageLine {
                label: "Fairways hit".to_string(),
                percentage: stats.fairway_percentage,
            },
            TeletextRow::PercentageLine {
                label: "Greens in reg.".to_string(),
                percentage: stats.green_in_regulation_percentage,
            },
            info("Recent scores", list(&stats.recent_scores)),
            info("Recent putts", list(&stats.recent_putts)),
            info("Avg 18 holes", format!("{:.2}", stats.average_full_round)),
            info("Avg per 9", format!("{:.2}", stats.average_per_nine)),
            info("Avg par 3", format!("{:.2}", stats.average_par_3)),
            info("Avg par 4", format!("{:.2}", stats.average_par_4)),
            info("Avg par 5", format!("{:.2}", stats.average_par_5)),
            info("Eagles", categories.eagles.to_string()),
            info("Birdies", categories.birdies.to_string()),
            info("Pars", categories.pars.to_string()),
            info("Bogeys", categories.bogeys.to_string()),
            info("Double bogeys", categories.double_bogeys.to_string()),
            info("Triple bogeys", categories.triple_bogeys.to_string()),
            info("Worse", categories.worse.to_string()),
        ]
    }

    pub fn player_details(player: &Player) -> Vec<Self> {
        let info = |label: &str, value: String| TeletextRow::InfoLine {
            label: label.to_string(),
            value,
        };

        vec![
            info("Country", text_or_missing(player.country.as_deref())),
            info("Born", format_api_date(player.birth_date.as_deref())),
            info("Birthplace", text_or_missing(player.birth_city.as_deref())),
            info("College", text_or_missing(player.college.as_deref())),
            info("Swings", text_or_missing(player.swings.as_deref())),
            info("PGA Debut", format_optional(player.pga_debut)),
        ]
    }
}
