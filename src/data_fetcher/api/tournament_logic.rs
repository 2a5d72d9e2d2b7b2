//! Tournament selection logic
//!
//! Golf tournaments start play on Thursday. On that day the "current" and
//! "next" views both step forward to the following tournament identifier.

use chrono::{Datelike, Local, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Day of the week on which the resolver steps to the next tournament.
pub const ROLLOVER_WEEKDAY: Weekday = Weekday::Thu;

/// Identifier of a tournament in the provider catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TournamentId(pub i32);

impl TournamentId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    /// The identifier that follows this one. Saturates at `i32::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<i32> for TournamentId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns today's local calendar date.
pub fn current_resolution_date() -> NaiveDate {
    Utc::now().with_timezone(&Local).date_naive()
}

/// Resolves the tournament to query using today's local date.
///
/// See [`resolve_tournament_id_for_date`] for the rule.
pub fn resolve_tournament_id(base_id: TournamentId) -> TournamentId {
    resolve_tournament_id_for_date(base_id, current_resolution_date())
}

/// Resolves the tournament to query for the given date.
///
/// Returns `base_id + 1` when `date` falls on [`ROLLOVER_WEEKDAY`], otherwise
/// `base_id` unchanged. Only exact equality with the rollover weekday
/// triggers the step; later days of the same week fall back to `base_id`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use golf_teletext::data_fetcher::api::{TournamentId, resolve_tournament_id_for_date};
///
/// let thursday = NaiveDate::from_ymd_opt(2024, 4, 11).unwrap();
/// let resolved = resolve_tournament_id_for_date(TournamentId(560), thursday);
/// assert_eq!(resolved, TournamentId(561));
/// ```
pub fn resolve_tournament_id_for_date(base_id: TournamentId, date: NaiveDate) -> TournamentId {
    let weekday = date.weekday();
    let resolved = if weekday == ROLLOVER_WEEKDAY {
        base_id.next()
    } else {
        base_id
    };

    debug!(
        "Resolved tournament {} -> {} for {} ({:?})",
        base_id, resolved, date, weekday
    );
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    // Week of the 2024 Masters: Monday 8th through Sunday 14th of April
    fn april_2024(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    #[test]
    fn test_wednesday_keeps_base_id() {
        assert_eq!(april_2024(10).weekday(), Weekday::Wed);
        assert_eq!(
            resolve_tournament_id_for_date(TournamentId(560), april_2024(10)),
            TournamentId(560)
        );
    }

    #[test]
    fn test_thursday_steps_to_next_id() {
        assert_eq!(april_2024(11).weekday(), Weekday::Thu);
        assert_eq!(
            resolve_tournament_id_for_date(TournamentId(560), april_2024(11)),
            TournamentId(561)
        );
    }

    #[test]
    fn test_sunday_keeps_base_id() {
        assert_eq!(april_2024(14).weekday(), Weekday::Sun);
        assert_eq!(
            resolve_tournament_id_for_date(TournamentId(561), april_2024(14)),
            TournamentId(561)
        );
    }

    #[test]
    fn test_days_around_thursday_do_not_step() {
        // Wednesday and Friday sit right next to the rollover day
        for day in [10, 12] {
            assert_eq!(
                resolve_tournament_id_for_date(TournamentId(42), april_2024(day)),
                TournamentId(42),
                "day {day} should not step"
            );
        }
    }

    #[test]
    fn test_whole_week_only_thursday_steps() {
        for day in 8..=14 {
            let date = april_2024(day);
            let expected = if date.weekday() == Weekday::Thu { 101 } else { 100 };
            assert_eq!(
                resolve_tournament_id_for_date(TournamentId(100), date),
                TournamentId(expected),
                "unexpected result for {date}"
            );
        }
    }

    #[test]
    fn test_result_is_base_or_next_for_any_base() {
        for base in [i32::MIN, -1, 0, 1, 560, 561, i32::MAX - 1] {
            for day in 8..=14 {
                let resolved = resolve_tournament_id_for_date(TournamentId(base), april_2024(day));
                assert!(
                    resolved == TournamentId(base) || resolved == TournamentId(base + 1),
                    "base {base} resolved to {resolved}"
                );
            }
        }
    }

    #[test]
    fn test_repeated_calls_on_same_day_are_stable() {
        let thursday = april_2024(11);
        let first = resolve_tournament_id_for_date(TournamentId(560), thursday);
        for _ in 0..10 {
            assert_eq!(resolve_tournament_id_for_date(TournamentId(560), thursday), first);
        }
    }

    #[test]
    fn test_max_id_does_not_overflow() {
        assert_eq!(
            resolve_tournament_id_for_date(TournamentId(i32::MAX), april_2024(11)),
            TournamentId(i32::MAX)
        );
    }

    #[test]
    fn test_ambient_clock_form_matches_injected_form() {
        // Evaluate both against the same day; retry once if midnight passed in between
        for _ in 0..2 {
            let today = current_resolution_date();
            let resolved = resolve_tournament_id(TournamentId(560));
            if today == current_resolution_date() {
                assert_eq!(resolved, resolve_tournament_id_for_date(TournamentId(560), today));
                return;
            }
        }
    }

    #[test]
    fn test_tournament_id_display_and_serde() {
        let id = TournamentId::from(560);
        assert_eq!(id.to_string(), "560");
        assert_eq!(id.value(), 560);
        assert_eq!(serde_json::to_string(&id).unwrap(), "560");
        assert_eq!(serde_json::from_str::<TournamentId>("561").unwrap(), id.next());
    }
}
