use serde::{Deserialize, Serialize};

/// Body of the `partidas` endpoint. A missing or `null` list is an empty round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchListResponse {
    #[serde(default, rename = "partidas", alias = "matches")]
    pub matches: Option<Vec<Match>>,
}

impl MatchListResponse {
    pub fn new(matches: Vec<Match>) -> Self {
        Self {
            matches: Some(matches),
        }
    }

    pub fn matches(&self) -> &[Match] {
        self.matches.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.matches().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "clube_casa_id", alias = "homeClubId")]
    pub home_club_id: u32,
    #[serde(rename = "clube_casa", alias = "homeClub")]
    pub home_club: Club,
    #[serde(rename = "clube_visitante_id", alias = "awayClubId")]
    pub away_club_id: u32,
    #[serde(rename = "clube_visitante", alias = "awayClub")]
    pub away_club: Club,
    #[serde(default, rename = "placar_oficial_mandante", alias = "officialHomeScore")]
    pub official_home_score: Option<u32>,
    #[serde(default, rename = "placar_oficial_visitante", alias = "officialAwayScore")]
    pub official_away_score: Option<u32>,
}

impl Match {
    /// Scoreline as shown on the card; a side without an official score shows `0`.
    pub fn scoreline(&self) -> String {
        format!(
            "{} - {}",
            self.official_home_score.unwrap_or(0),
            self.official_away_score.unwrap_or(0)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
}

impl Club {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
