use super::schedule::Tournament;
use serde::{Deserialize, Serialize};

/// Response of `/Leaderboard/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardResponse {
    #[serde(rename = "Tournament")]
    pub tournament: Tournament,
    #[serde(rename = "Players", default)]
    pub players: Vec<LeaderboardPlayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LeaderboardPlayer {
    #[serde(rename = "PlayerID", default)]
    pub player_id: Option<i64>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rank", default)]
    pub rank: Option<i32>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "TotalScore", default)]
    pub total_score: Option<f64>,
    #[serde(rename = "TotalStrokes", default)]
    pub total_strokes: Option<f64>,
    #[serde(rename = "Rounds", default)]
    pub rounds: Vec<PlayerRound>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlayerRound {
    #[serde(rename = "Number", default)]
    pub number: Option<i32>,
    #[serde(rename = "Par", default)]
    pub par: Option<i32>,
    #[serde(rename = "Score", default)]
    pub score: Option<f64>,
}

impl LeaderboardPlayer {
    /// Strokes taken in the round at `index` (0-based), if it has been played.
    pub fn round_score(&self, index: usize) -> Option<f64> {
        self.rounds.get(index).and_then(|round| round.score)
    }
}

impl LeaderboardResponse {
    /// Keeps only the first `count` players. Shorter lists are left untouched.
    pub fn truncate_players(&mut self, count: usize) {
        self.players.truncate(count);
    }
}
