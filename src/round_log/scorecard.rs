//! Scorecards of rounds the user played, and parsing of hole-by-hole input

use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A logged round has exactly this many holes or [`FULL_ROUND_HOLES`]
pub const HALF_ROUND_HOLES: usize = 9;
pub const FULL_ROUND_HOLES: usize = 18;

/// One hole of a scorecard. Hole numbers follow the position in the round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoleScore {
    pub par: u32,
    pub score: u32,
    pub putts: u32,
    #[serde(default)]
    pub fairway_hit: bool,
    #[serde(default)]
    pub green_in_regulation: bool,
}

impl HoleScore {
    /// Strokes relative to par; negative under par
    pub fn to_par(&self) -> i64 {
        i64::from(self.score) - i64::from(self.par)
    }

    fn validate(&self, hole_number: usize) -> Result<(), AppError> {
        if !(3..=5).contains(&self.par) {
            return Err(AppError::invalid_round(format!(
                "hole {hole_number}: par must be 3, 4 or 5, got {}",
                self.par
            )));
        }
        if self.score < 1 {
            return Err(AppError::invalid_round(format!(
                "hole {hole_number}: score must be at least 1"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GolfRound {
    pub id: u32,
    pub date_played: NaiveDate,
    pub course_name: String,
    pub holes: Vec<HoleScore>,
}

impl GolfRound {
    /// Par of the round: the sum of the hole pars
    pub fn par(&self) -> u32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    pub fn total_score(&self) -> u32 {
        self.holes.iter().map(|h| h.score).sum()
    }

    pub fn total_putts(&self) -> u32 {
        self.holes.iter().map(|h| h.putts).sum()
    }

    /// Total strokes minus par; negative under par
    pub fn difference(&self) -> i64 {
        i64::from(self.total_score()) - i64::from(self.par())
    }

    pub fn is_full_round(&self) -> bool {
        self.holes.len() == FULL_ROUND_HOLES
    }

    /// Checks the course name, the hole count and every hole.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.course_name.trim().is_empty() {
            return Err(AppError::invalid_round("course name cannot be empty"));
        }
        if self.holes.len() != HALF_ROUND_HOLES && self.holes.len() != FULL_ROUND_HOLES {
            return Err(AppError::invalid_round(format!(
                "a round has {HALF_ROUND_HOLES} or {FULL_ROUND_HOLES} holes, got {}",
                self.holes.len()
            )));
        }
        self.holes
            .iter()
            .enumerate()
            .try_for_each(|(i, hole)| hole.validate(i + 1))
    }
}

fn parse_number(field: &str, what: &str, hole_number: usize) -> Result<u32, AppError> {
    field.trim().parse::<u32>().map_err(|_| {
        AppError::invalid_round(format!(
            "hole {hole_number}: {what} must be a whole number, got '{}'",
            field.trim()
        ))
    })
}

fn parse_hole(entry: &str, hole_number: usize) -> Result<HoleScore, AppError> {
    let fields: Vec<&str> = entry.split('/').collect();
    if !(3..=4).contains(&fields.len()) {
        return Err(AppError::invalid_round(format!(
            "hole {hole_number}: expected PAR/SCORE/PUTTS[/FLAGS], got '{entry}'"
        )));
    }

    let mut hole = HoleScore {
        par: parse_number(fields[0], "par", hole_number)?,
        score: parse_number(fields[1], "score", hole_number)?,
        putts: parse_number(fields[2], "putts", hole_number)?,
        fairway_hit: false,
        green_in_regulation: false,
    };

    for flag in fields.get(3).copied().unwrap_or_default().trim().chars() {
        match flag.to_ascii_lowercase() {
            'f' => hole.fairway_hit = true,
            'g' => hole.green_in_regulation = true,
            other => {
                return Err(AppError::invalid_round(format!(
                    "hole {hole_number}: unknown flag '{other}', use f or g"
                )));
            }
        }
    }

    hole.validate(hole_number)?;
    Ok(hole)
}

/// Parses hole entries such as `4/5/2/f, 3/3/2/g, 5/6/3`.
///
/// Entries are `PAR/SCORE/PUTTS` with optional flags: `f` for a fairway hit
/// and `g` for a green in regulation. Commas or whitespace separate holes.
pub fn parse_holes(input: &str) -> Result<Vec<HoleScore>, AppError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .map(|(i, entry)| parse_hole(entry, i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(par: u32, score: u32) -> HoleScore {
        HoleScore {
            par,
            score,
            putts: 2,
            fairway_hit: false,
            green_in_regulation: false,
        }
    }

    fn round_of(holes: Vec<HoleScore>) -> GolfRound {
        GolfRound {
            id: 1,
            date_played: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
            course_name: "Pebble Beach".to_string(),
            holes,
        }
    }

    #[test]
    fn test_parse_holes_with_flags() {
        let holes = parse_holes("4/5/2/f, 3/3/2/g,5/4/1/FG 4/6/3").unwrap();
        assert_eq!(holes.len(), 4);
        assert_eq!(
            holes[0],
            HoleScore {
                par: 4,
                score: 5,
                putts: 2,
                fairway_hit: true,
                green_in_regulation: false
            }
        );
        assert!(holes[1].green_in_regulation && !holes[1].fairway_hit);
        assert!(holes[2].fairway_hit && holes[2].green_in_regulation);
        assert_eq!(holes[2].to_par(), -1);
        assert!(!holes[3].fairway_hit && !holes[3].green_in_regulation);
    }

    #[test]
    fn test_parse_holes_rejects_bad_entries() {
        for input in ["6/5/2", "4/0/2", "4/5/-1", "4/5", "4/5/2/x", "four/5/2"] {
            let err = parse_holes(input).unwrap_err();
            assert!(matches!(err, AppError::InvalidRound(_)), "{input}");
        }
        let err = parse_holes("4/4/2,4/4/2,7/4/2").unwrap_err();
        assert!(err.to_string().contains("hole 3"));
    }

    #[test]
    fn test_round_totals() {
        let round = round_of(vec![hole(4, 5), hole(3, 3), hole(5, 4)]);
        assert_eq!(round.par(), 12);
        assert_eq!(round.total_score(), 12);
        assert_eq!(round.total_putts(), 6);
        assert_eq!(round.difference(), 0);
    }

    #[test]
    fn test_round_needs_nine_or_eighteen_holes() {
        assert!(round_of(vec![hole(4, 4); 9]).validate().is_ok());
        assert!(round_of(vec![hole(4, 4); 18]).validate().is_ok());
        assert!(round_of(vec![hole(4, 4); 10]).validate().is_err());
        assert!(round_of(Vec::new()).validate().is_err());

        let mut unnamed = round_of(vec![hole(4, 4); 9]);
        unnamed.course_name = "  ".to_string();
        assert!(unnamed.validate().is_err());
    }
}
