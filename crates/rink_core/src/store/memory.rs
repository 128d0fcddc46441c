use uuid::Uuid;

use super::{GameStore, StoreError, GAME_TABLE, TEAM_TABLE};
use crate::models::{
    Game, GameEventRow, GameInsert, GameStatus, RosterEntry, RosterInsert, Team, TeamInsert,
};

/// In-process store. Rows live in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    teams: Vec<Team>,
    roster: Vec<RosterEntry>,
    games: Vec<Game>,
    events: Vec<GameEventRow>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn require_team(&self, id: &str) -> Result<(), StoreError> {
        if self.teams.iter().any(|t| t.id == id) {
            Ok(())
        } else {
            Err(StoreError::NotFound { table: TEAM_TABLE, id: id.to_string() })
        }
    }
}

impl GameStore for MemoryStore {
    fn insert_team(&mut self, team: TeamInsert) -> Result<Team, StoreError> {
        let team = Team { id: new_id(), name: team.name };
        self.teams.push(team.clone());
        Ok(team)
    }

    fn teams(&self) -> Result<Vec<Team>, StoreError> {
        Ok(self.teams.clone())
    }

    fn team(&self, id: &str) -> Result<Option<Team>, StoreError> {
        Ok(self.teams.iter().find(|t| t.id == id).cloned())
    }

    fn insert_roster_entry(&mut self, entry: RosterInsert) -> Result<RosterEntry, StoreError> {
        self.require_team(&entry.team_id)?;
        let entry = RosterEntry {
            id: new_id(),
            team_id: entry.team_id,
            player_number: entry.player_number,
            player_name: entry.player_name,
        };
        self.roster.push(entry.clone());
        Ok(entry)
    }

    fn roster(&self, team_id: &str) -> Result<Vec<RosterEntry>, StoreError> {
        Ok(self.roster.iter().filter(|r| r.team_id == team_id).cloned().collect())
    }

    fn insert_game(&mut self, game: GameInsert) -> Result<Game, StoreError> {
        self.require_team(&game.home_team_id)?;
        self.require_team(&game.away_team_id)?;

        let game = Game {
            id: new_id(),
            home_team_id: game.home_team_id,
            away_team_id: game.away_team_id,
            location: game.location,
            start_date: game.start_date,
            start_time: game.start_time,
            status: game.status.or(Some(GameStatus::New)),
        };
        self.games.push(game.clone());
        Ok(game)
    }

    fn game(&self, id: &str) -> Result<Option<Game>, StoreError> {
        Ok(self.games.iter().find(|g| g.id == id).cloned())
    }

    fn games(&self) -> Result<Vec<Game>, StoreError> {
        Ok(self.games.clone())
    }

    fn update_game_status(&mut self, id: &str, status: GameStatus) -> Result<(), StoreError> {
        let game = self
            .games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| StoreError::NotFound { table: GAME_TABLE, id: id.to_string() })?;
        game.status = Some(status);
        Ok(())
    }

    fn insert_event(&mut self, mut event: GameEventRow) -> Result<GameEventRow, StoreError> {
        if !self.games.iter().any(|g| g.id == event.game_id) {
            return Err(StoreError::NotFound { table: GAME_TABLE, id: event.game_id });
        }
        if event.id.is_none() {
            event.id = Some(new_id());
        }
        self.events.push(event.clone());
        Ok(event)
    }

    fn events_for_game(&self, game_id: &str) -> Result<Vec<GameEventRow>, StoreError> {
        Ok(self.events.iter().rev().filter(|e| e.game_id == game_id).cloned().collect())
    }
}
