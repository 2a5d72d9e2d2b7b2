//! Personal round log: scorecards of rounds the user played, kept in a TOML
//! file next to the config, and the statistics computed from them.

pub mod scorecard;
pub mod stats;
pub mod store;

pub use scorecard::{FULL_ROUND_HOLES, GolfRound, HALF_ROUND_HOLES, HoleScore, parse_holes};
pub use stats::{RECENT_ROUNDS, RoundStatistics, ScoreCategories, percentage};
pub use store::{RoundLog, RoundUpdate};
