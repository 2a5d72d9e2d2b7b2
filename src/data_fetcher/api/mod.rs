pub mod fetch_utils;
pub mod golf_api;
pub mod http_client;
pub mod orchestrator;
pub mod tournament_logic;
pub mod urls;

pub use golf_api::*;
pub use http_client::create_http_client_with_timeout;
pub use orchestrator::{Dashboard, PlayerProfile, fetch_dashboard, fetch_player_profile};
pub use tournament_logic::{
    ROLLOVER_WEEKDAY, TournamentId, current_resolution_date, resolve_tournament_id,
    resolve_tournament_id_for_date,
};
pub use urls::*;
