//! The round log file: loading, saving and changing logged rounds

use super::scorecard::{GolfRound, HoleScore};
use super::stats::RoundStatistics;
use crate::config::paths;
use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Fields to replace in a logged round. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoundUpdate {
    pub date_played: Option<NaiveDate>,
    pub course_name: Option<String>,
    pub holes: Option<Vec<HoleScore>>,
}

/// All rounds the user has logged, stored as TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundLog {
    #[serde(default)]
    pub rounds: Vec<GolfRound>,
}

impl RoundLog {
    /// Returns the platform-specific path of the round log file.
    pub fn get_path() -> String {
        paths::get_round_log_path()
    }

    /// Loads the log from `path`. A missing file is an empty log.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        if !Path::new(path).exists() {
            debug!("No round log at {path}, starting empty");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).await?;
        let log: RoundLog = toml::from_str(&content)?;
        debug!("Loaded {} rounds from {path}", log.rounds.len());
        Ok(log)
    }

    /// Writes the log to `path`, creating the parent directory when needed.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    fn next_id(&self) -> Result<u32, AppError> {
        self.rounds
            .iter()
            .map(|r| r.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| AppError::invalid_round("round log is full"))
    }

    fn position(&self, id: u32) -> Result<usize, AppError> {
        self.rounds
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::round_not_found(id))
    }

    /// Validates and logs a new round, returning it with its new id.
    pub fn add(
        &mut self,
        date_played: NaiveDate,
        course_name: &str,
        holes: Vec<HoleScore>,
    ) -> Result<&GolfRound, AppError> {
        let round = GolfRound {
            id: self.next_id()?,
            date_played,
            course_name: course_name.trim().to_string(),
            holes,
        };
        round.validate()?;
        info!(
            "Logged round {} at {} ({} holes)",
            round.id,
            round.course_name,
            round.holes.len()
        );
        self.rounds.push(round);
        Ok(&self.rounds[self.rounds.len() - 1])
    }

    /// Applies `update` to a round. The round is left untouched when the
    /// result would not be valid.
    pub fn edit(&mut self, id: u32, update: RoundUpdate) -> Result<&GolfRound, AppError> {
        let index = self.position(id)?;
        let mut edited = self.rounds[index].clone();
        if let Some(date) = update.date_played {
            edited.date_played = date;
        }
        if let Some(course) = update.course_name {
            edited.course_name = course.trim().to_string();
        }
        if let Some(holes) = update.holes {
            edited.holes = holes;
        }
        edited.validate()?;

        info!("Edited round {id}");
        self.rounds[index] = edited;
        Ok(&self.rounds[index])
    }

    /// Removes a round and its hole scores.
    pub fn delete(&mut self, id: u32) -> Result<GolfRound, AppError> {
        let index = self.position(id)?;
        info!("Deleted round {id}");
        Ok(self.rounds.remove(index))
    }

    pub fn get(&self, id: u32) -> Result<&GolfRound, AppError> {
        self.position(id).map(|index| &self.rounds[index])
    }

    /// Rounds newest first by date played, then by id.
    pub fn history(&self) -> Vec<&GolfRound> {
        let mut rounds: Vec<&GolfRound> = self.rounds.iter().collect();
        rounds.sort_by(|a, b| {
            b.date_played
                .cmp(&a.date_played)
                .then_with(|| b.id.cmp(&a.id))
        });
        rounds
    }

    pub fn statistics(&self) -> RoundStatistics {
        RoundStatistics::from_rounds(&self.rounds)
    }
}
