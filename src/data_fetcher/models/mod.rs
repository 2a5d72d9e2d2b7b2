pub mod leaderboard;
pub mod news;
pub mod players;
pub mod schedule;

pub use leaderboard::{LeaderboardPlayer, LeaderboardResponse, PlayerRound};
pub use news::NewsItem;
pub use players::{Player, PlayerSeasonStats, sort_by_world_rank};
pub use schedule::{Tournament, parse_api_date};
