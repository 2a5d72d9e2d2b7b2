use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Tournament as returned by `/Tournaments/{season}` and embedded in leaderboards.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Tournament {
    #[serde(rename = "TournamentID")]
    pub tournament_id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "StartDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "EndDate", default)]
    pub end_date: Option<String>,
    #[serde(rename = "IsOver", default)]
    pub is_over: bool,
    #[serde(rename = "IsInProgress", default)]
    pub is_in_progress: bool,
    #[serde(rename = "Canceled", default)]
    pub canceled: bool,
    #[serde(rename = "Venue", default)]
    pub venue: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Par", default)]
    pub par: Option<i32>,
    #[serde(rename = "Yards", default)]
    pub yards: Option<i32>,
    #[serde(rename = "Purse", default)]
    pub purse: Option<f64>,
}

impl Tournament {
    /// Start date as a calendar date, if the provider sent a parseable timestamp.
    pub fn start_date_naive(&self) -> Option<chrono::NaiveDate> {
        self.start_date.as_deref().and_then(parse_api_date)
    }

    /// End date as a calendar date, if the provider sent a parseable timestamp.
    pub fn end_date_naive(&self) -> Option<chrono::NaiveDate> {
        self.end_date.as_deref().and_then(parse_api_date)
    }
}

/// Parses provider timestamps such as `2024-04-11T00:00:00` or plain `2024-04-11`.
pub fn parse_api_date(value: &str) -> Option<chrono::NaiveDate> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .ok()
}
