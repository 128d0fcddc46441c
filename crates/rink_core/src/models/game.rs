use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    New,
    InProgress,
    Completed,
    Cancelled,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::New => "new",
            GameStatus::InProgress => "in_progress",
            GameStatus::Completed => "completed",
            GameStatus::Cancelled => "cancelled",
        }
    }

    /// Recording the first event of a fresh game starts it.
    pub fn after_event_recorded(self) -> GameStatus {
        match self {
            GameStatus::New => GameStatus::InProgress,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub status: Option<GameStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[validate(schema(function = "validate_distinct_teams"))]
pub struct GameInsert {
    #[validate(length(min = 1))]
    pub home_team_id: String,
    #[validate(length(min = 1))]
    pub away_team_id: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub status: Option<GameStatus>,
}

fn validate_distinct_teams(game: &GameInsert) -> Result<(), ValidationError> {
    if game.home_team_id == game.away_team_id {
        return Err(ValidationError::new("home_and_away_must_differ"));
    }
    Ok(())
}

impl GameInsert {
    pub fn new(home_team_id: impl Into<String>, away_team_id: impl Into<String>) -> Self {
        Self {
            home_team_id: home_team_id.into(),
            away_team_id: away_team_id.into(),
            location: None,
            start_date: None,
            start_time: None,
            status: Some(GameStatus::New),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_start(mut self, date: Option<NaiveDate>, time: Option<NaiveTime>) -> Self {
        self.start_date = date;
        self.start_time = time;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct TeamInsert {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// One jersey on a team's roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: String,
    pub team_id: String,
    pub player_number: String,
    #[serde(default)]
    pub player_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RosterInsert {
    #[validate(length(min = 1))]
    pub team_id: String,
    #[validate(length(min = 1, max = 3))]
    pub player_number: String,
    #[serde(default)]
    pub player_name: Option<String>,
}
