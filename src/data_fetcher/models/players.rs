use serde::{Deserialize, Serialize};

/// Player profile from `/Player/{id}`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Player {
    #[serde(rename = "PlayerID")]
    pub player_id: i64,
    #[serde(rename = "FirstName", default)]
    pub first_name: String,
    #[serde(rename = "LastName", default)]
    pub last_name: String,
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    #[serde(rename = "BirthDate", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "BirthCity", default)]
    pub birth_city: Option<String>,
    #[serde(rename = "College", default)]
    pub college: Option<String>,
    #[serde(rename = "Swings", default)]
    pub swings: Option<String>,
    #[serde(rename = "PgaDebut", default)]
    pub pga_debut: Option<i32>,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Season statistics row from `/PlayerSeasonStats/{season}`, used for world rankings.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct PlayerSeasonStats {
    #[serde(rename = "PlayerID")]
    pub player_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "WorldGolfRank", default)]
    pub world_golf_rank: Option<i32>,
    #[serde(rename = "Events", default)]
    pub events: Option<i32>,
    #[serde(rename = "Wins", default)]
    pub wins: Option<i32>,
    #[serde(rename = "Earnings", default)]
    pub earnings: Option<f64>,
    #[serde(rename = "FedExPoints", default)]
    pub fedex_points: Option<f64>,
}

/// Orders season stats by world rank; unranked players go last, ties by name.
pub fn sort_by_world_rank(stats: &mut [PlayerSeasonStats]) {
    stats.sort_by(|a, b| match (a.world_golf_rank, b.world_golf_rank) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_deserialization() {
        let json = r#"{
            "PlayerID": 40000019,
            "FirstName": "Scottie",
            "LastName": "Scheffler",
            "Weight": 200,
            "Swings": "R",
            "PgaDebut": 2018,
            "Country": "USA",
            "BirthDate": "1996-06-21T00:00:00",
            "BirthCity": "Ridgewood",
            "College": "Texas",
            "PhotoUrl": "https://example.com/p.png"
        }"#;

        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.full_name(), "Scottie Scheffler");
        assert_eq!(player.pga_debut, Some(2018));
        assert_eq!(player.college.as_deref(), Some("Texas"));
    }

    #[test]
    fn test_player_full_name_with_missing_first_name() {
        let player = Player {
            player_id: 1,
            last_name: "Åberg".to_string(),
            ..Player::default()
        };
        assert_eq!(player.full_name(), "Åberg");
    }

    #[test]
    fn test_sort_by_world_rank() {
        let stat = |name: &str, rank: Option<i32>| PlayerSeasonStats {
            player_id: 0,
            name: name.to_string(),
            world_golf_rank: rank,
            ..PlayerSeasonStats::default()
        };
        let mut stats = vec![
            stat("Unranked B", None),
            stat("Third", Some(3)),
            stat("Unranked A", None),
            stat("First", Some(1)),
        ];

        sort_by_world_rank(&mut stats);

        let names: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Third", "Unranked A", "Unranked B"]);
    }
}
