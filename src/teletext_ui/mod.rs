// src/teletext_ui/mod.rs - Teletext-style page model and rendering

pub mod colors;
pub mod core;
pub mod formatting;
pub mod pages;
mod rendering;

pub use core::{GolfPage, PageRegion, Region, TeletextRow};
pub use formatting::{
    format_api_date, format_money, format_position, format_round_score, format_score,
};
pub use pages::{
    build_dashboard_page, build_leaderboard_page, build_player_page, build_rankings_page,
    build_rounds_page, build_schedule_page, build_scorecard_page, region_error_message,
};
