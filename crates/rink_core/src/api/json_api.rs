use serde::{Deserialize, Serialize};

use crate::analysis::{period_label, summarize, REGULATION_PERIODS};
use crate::error::{CoreError, Result};
use crate::models::{validate_rows, GameEvent, GameEventRow};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct DeriveRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub events: Vec<GameEventRow>,
    /// Overrides the regulation period count used for the period label.
    #[serde(default)]
    pub regulation_periods: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeriveResponse {
    pub schema_version: u8,
    pub score_home: u32,
    pub score_away: u32,
    pub period: u32,
    pub period_label: String,
    pub game_over: bool,
    pub penalties_home: u32,
    pub penalties_away: u32,
    pub event_count: usize,
    /// Rows that fail validation. They have no effect on the derived state.
    pub invalid_events: usize,
}

fn check_schema(found: u8) -> Result<()> {
    if found != SCHEMA_VERSION {
        return Err(CoreError::UnsupportedSchema { found, expected: SCHEMA_VERSION });
    }
    Ok(())
}

/// Derive the scoreboard state from a JSON request holding raw event rows.
pub fn derive_state_json(request_json: &str) -> Result<String> {
    let request: DeriveRequest = serde_json::from_str(request_json)?;
    check_schema(request.schema_version)?;

    let regulation = request.regulation_periods.unwrap_or(REGULATION_PERIODS).max(1);

    let (events, rejected) = validate_rows(&request.events);
    for (index, err) in &rejected {
        tracing::warn!(
            index,
            event_type = %request.events[*index].event_type,
            error = %err,
            "event row failed validation and is skipped"
        );
    }

    let summary = summarize(&events);
    let response = DeriveResponse {
        schema_version: SCHEMA_VERSION,
        score_home: summary.score.home,
        score_away: summary.score.away,
        period: summary.period,
        period_label: period_label(summary.period, regulation),
        game_over: summary.game_over,
        penalties_home: summary.penalties.home,
        penalties_away: summary.penalties.away,
        event_count: request.events.len(),
        invalid_events: rejected.len(),
    };

    Ok(serde_json::to_string(&response)?)
}

/// Validate a single row and return it in normalized form.
///
/// Blank strings are dropped and `details` is reshaped to the payload of the
/// row's `(event_type, event_subtype)`.
pub fn validate_event_json(row_json: &str) -> Result<String> {
    let row: GameEventRow = serde_json::from_str(row_json)?;
    let event = GameEvent::try_from(row)?;
    Ok(serde_json::to_string(&event)?)
}

/// JSON Schema of the stored event row.
pub fn event_row_schema_json() -> Result<String> {
    let schema = schemars::schema_for!(GameEventRow);
    Ok(serde_json::to_string_pretty(&schema)?)
}
