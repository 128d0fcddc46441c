//! Access to the relational backend that holds games, teams, rosters and
//! recorded events.
//!
//! The hosted store itself is external; [`GameStore`] is the seam the rest of
//! the crate talks to and [`MemoryStore`] the implementation used by tests and
//! the CLI.

pub mod games;
pub mod memory;

use thiserror::Error;

use crate::error::EventError;
use crate::models::{
    Game, GameEventRow, GameInsert, GameStatus, RosterEntry, RosterInsert, Team, TeamInsert,
};

pub use games::{
    create_game, create_game_with_team_names, create_team, fetch_game, fetch_game_events,
    fetch_recent_games, game_state, order_recent_games, record_event, NewGameForm,
};
pub use memory::MemoryStore;

pub const GAME_TABLE: &str = "game";
pub const GAME_EVENT_TABLE: &str = "game_event";
pub const TEAM_TABLE: &str = "team";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No {table} row with id {id}")]
    NotFound { table: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] EventError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<validator::ValidationErrors> for StoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        StoreError::Validation(errors.to_string())
    }
}

/// Row-level operations against the backing tables.
///
/// Implementations are plain data access: they enforce referential integrity
/// the way the database would but leave input validation to the callers in
/// [`games`].
pub trait GameStore {
    fn insert_team(&mut self, team: TeamInsert) -> Result<Team, StoreError>;
    fn teams(&self) -> Result<Vec<Team>, StoreError>;
    fn team(&self, id: &str) -> Result<Option<Team>, StoreError>;

    fn insert_roster_entry(&mut self, entry: RosterInsert) -> Result<RosterEntry, StoreError>;
    fn roster(&self, team_id: &str) -> Result<Vec<RosterEntry>, StoreError>;

    fn insert_game(&mut self, game: GameInsert) -> Result<Game, StoreError>;
    fn game(&self, id: &str) -> Result<Option<Game>, StoreError>;
    /// All games, in no particular order.
    fn games(&self) -> Result<Vec<Game>, StoreError>;
    fn update_game_status(&mut self, id: &str, status: GameStatus) -> Result<(), StoreError>;

    fn insert_event(&mut self, event: GameEventRow) -> Result<GameEventRow, StoreError>;
    /// Events of one game, most recent first.
    fn events_for_game(&self, game_id: &str) -> Result<Vec<GameEventRow>, StoreError>;
}
