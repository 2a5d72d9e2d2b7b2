//! Statistics over the logged rounds

use super::scorecard::GolfRound;

/// Number of rounds in the recent scores and putts lists
pub const RECENT_ROUNDS: usize = 10;

/// How many holes ended at each score relative to par
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCategories {
    /// Two or more under par
    pub eagles: usize,
    pub birdies: usize,
    pub pars: usize,
    pub bogeys: usize,
    pub double_bogeys: usize,
    pub triple_bogeys: usize,
    /// Four or more over par
    pub worse: usize,
}

impl ScoreCategories {
    fn record(&mut self, to_par: i64) {
        match to_par {
            i64::MIN..=-2 => self.eagles += 1,
            -1 => self.birdies += 1,
            0 => self.pars += 1,
            1 => self.bogeys += 1,
            2 => self.double_bogeys += 1,
            3 => self.triple_bogeys += 1,
            _ => self.worse += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundStatistics {
    pub rounds_played: usize,
    pub holes_played: usize,
    /// Total strokes of the most recent rounds, newest first
    pub recent_scores: Vec<u32>,
    /// Putts per round of the most recent rounds, newest first
    pub recent_putts: Vec<u32>,
    pub fairway_percentage: f64,
    pub green_in_regulation_percentage: f64,
    /// Mean total of 18 hole rounds
    pub average_full_round: f64,
    /// Mean strokes per nine: 9 hole totals and halved 18 hole totals
    pub average_per_nine: f64,
    pub average_par_3: f64,
    pub average_par_4: f64,
    pub average_par_5: f64,
    pub categories: ScoreCategories,
}

/// Rounds to two decimals
fn hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean rounded to two decimals, 0.0 when there is nothing to average
fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        hundredths(sum / count as f64)
    }
}

/// Share of `hits` in `total` as a percentage with two decimals, 0.0 for no holes
pub fn percentage(hits: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        hundredths(hits as f64 / total as f64 * 100.0)
    }
}

impl RoundStatistics {
    /// Computes the statistics. The order of `rounds` does not matter;
    /// recency is decided by the date played, then by round id.
    pub fn from_rounds(rounds: &[GolfRound]) -> Self {
        let mut newest_first: Vec<&GolfRound> = rounds.iter().collect();
        newest_first.sort_by(|a, b| {
            b.date_played
                .cmp(&a.date_played)
                .then_with(|| b.id.cmp(&a.id))
        });
        let recent = &newest_first[..newest_first.len().min(RECENT_ROUNDS)];

        let holes = || rounds.iter().flat_map(|r| r.holes.iter());
        let holes_played = holes().count();
        let par_average = |par: u32| {
            mean(
                holes()
                    .filter(|h| h.par == par)
                    .map(|h| f64::from(h.score)),
            )
        };

        let mut categories = ScoreCategories::default();
        for hole in holes() {
            categories.record(hole.to_par());
        }

        Self {
            rounds_played: rounds.len(),
            holes_played,
            recent_scores: recent.iter().map(|r| r.total_score()).collect(),
            recent_putts: recent.iter().map(|r| r.total_putts()).collect(),
            fairway_percentage: percentage(holes().filter(|h| h.fairway_hit).count(), holes_played),
            green_in_regulation_percentage: percentage(
                holes().filter(|h| h.green_in_regulation).count(),
                holes_played,
            ),
            average_full_round: mean(
                rounds
                    .iter()
                    .filter(|r| r.is_full_round())
                    .map(|r| f64::from(r.total_score())),
            ),
            average_per_nine: mean(rounds.iter().map(|r| {
                let total = f64::from(r.total_score());
                if r.is_full_round() { total / 2.0 } else { total }
            })),
            average_par_3: par_average(3),
            average_par_4: par_average(4),
            average_par_5: par_average(5),
            categories,
        }
    }
}
