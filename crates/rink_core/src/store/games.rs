//! Game and event operations used by the pages and dialogs.
//!
//! These wrap a [`GameStore`] with the validation and status bookkeeping the
//! recording flow expects.

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info, warn};
use validator::Validate;

use super::{GameStore, StoreError, GAME_EVENT_TABLE, GAME_TABLE};
use crate::analysis::{summarize, GameSummary};
use crate::models::{
    validate_rows, EventDraft, Game, GameEventRow, GameInsert, GameStatus, Team, TeamInsert,
};

/// Games ordered by start date then start time, newest first, undated last.
pub fn fetch_recent_games<S>(store: &S, limit: usize) -> Result<Vec<Game>, StoreError>
where
    S: GameStore + ?Sized,
{
    let games = order_recent_games(store.games()?, limit);
    debug!(count = games.len(), limit, "fetched recent games");
    Ok(games)
}

/// The ordering behind [`fetch_recent_games`], for game lists already in hand.
pub fn order_recent_games(mut games: Vec<Game>, limit: usize) -> Vec<Game> {
    // `None` sorts below `Some`, so reversing the comparison also puts
    // missing dates and times at the end.
    games.sort_by(|a, b| {
        b.start_date.cmp(&a.start_date).then_with(|| b.start_time.cmp(&a.start_time))
    });
    games.truncate(limit);
    games
}

pub fn fetch_game<S>(store: &S, id: &str) -> Result<Option<Game>, StoreError>
where
    S: GameStore + ?Sized,
{
    store.game(id)
}

pub fn create_team<S>(store: &mut S, name: &str) -> Result<Team, StoreError>
where
    S: GameStore + ?Sized,
{
    let insert = TeamInsert { name: name.trim().to_string() };
    insert.validate()?;
    let team = store.insert_team(insert)?;
    info!(team_id = %team.id, name = %team.name, "created team");
    Ok(team)
}

pub fn create_game<S>(store: &mut S, game: GameInsert) -> Result<Game, StoreError>
where
    S: GameStore + ?Sized,
{
    game.validate()?;
    let game = store.insert_game(game)?;
    info!(table = GAME_TABLE, game_id = %game.id, "created game");
    Ok(game)
}

/// Values entered in the "add game" dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewGameForm {
    pub home_team: String,
    pub away_team: String,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
}

/// Create a game from team names, reusing teams that already exist under the
/// exact same name.
pub fn create_game_with_team_names<S>(store: &mut S, form: NewGameForm) -> Result<Game, StoreError>
where
    S: GameStore + ?Sized,
{
    let home = find_or_create_team(store, &form.home_team)?;
    let away = find_or_create_team(store, &form.away_team)?;

    let mut insert = GameInsert::new(home.id, away.id).with_start(form.start_date, form.start_time);
    insert.location = form.location.filter(|l| !l.trim().is_empty());
    create_game(store, insert)
}

fn find_or_create_team<S>(store: &mut S, name: &str) -> Result<Team, StoreError>
where
    S: GameStore + ?Sized,
{
    let name = name.trim();
    if let Some(team) = store.teams()?.into_iter().find(|t| t.name == name) {
        return Ok(team);
    }
    create_team(store, name)
}

/// Validate and persist an event from a recording dialog.
///
/// The first event recorded on a `new` game moves it to `in_progress`.
pub fn record_event<S>(
    store: &mut S,
    draft: &EventDraft,
    current_status: Option<GameStatus>,
) -> Result<GameEventRow, StoreError>
where
    S: GameStore + ?Sized,
{
    let event = draft.build()?;
    let stored = store.insert_event(event.to_row()?)?;
    info!(
        table = GAME_EVENT_TABLE,
        game_id = %stored.game_id,
        event_type = %stored.event_type,
        subtype = stored.event_subtype.as_deref().unwrap_or("-"),
        "recorded event"
    );

    if let Some(status) = current_status {
        let next = status.after_event_recorded();
        if next != status {
            store.update_game_status(&stored.game_id, next)?;
            info!(game_id = %stored.game_id, from = status.as_str(), to = next.as_str(), "game status changed");
        }
    }

    Ok(stored)
}

/// Events of a game, most recent first.
pub fn fetch_game_events<S>(store: &S, game_id: &str) -> Result<Vec<GameEventRow>, StoreError>
where
    S: GameStore + ?Sized,
{
    store.events_for_game(game_id)
}

/// Scoreboard state of a stored game.
pub fn game_state<S>(store: &S, game_id: &str) -> Result<GameSummary, StoreError>
where
    S: GameStore + ?Sized,
{
    if store.game(game_id)?.is_none() {
        return Err(StoreError::NotFound { table: GAME_TABLE, id: game_id.to_string() });
    }

    let rows = store.events_for_game(game_id)?;
    let (events, rejected) = validate_rows(&rows);
    if !rejected.is_empty() {
        warn!(game_id, invalid = rejected.len(), "skipping stored events that fail validation");
    }
    Ok(summarize(&events))
}
