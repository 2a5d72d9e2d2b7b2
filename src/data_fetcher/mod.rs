pub mod api;
pub mod cache;
pub mod models;

pub use api::{
    Dashboard, TournamentId, fetch_dashboard, resolve_tournament_id,
    resolve_tournament_id_for_date,
};
pub use models::{LeaderboardResponse, NewsItem, Tournament};
