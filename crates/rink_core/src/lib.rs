//! # rink_core - Hockey Game Tracking Engine
//!
//! Records the events of a live hockey game and derives the scoreboard from
//! them.
//!
//! ## Features
//! - Closed event taxonomy with typed detail payloads
//! - Score and period derived from the event log, never stored
//! - Pluggable store for games, teams, rosters and events
//! - JSON API for embedding hosts

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use analysis::{
    calculate_score, current_period, period_label, summarize, EventTags, GameSummary, Score,
};
pub use api::{derive_state_json, event_row_schema_json, validate_event_json, SCHEMA_VERSION};
pub use config::TrackerConfig;
pub use error::{CoreError, EventError, Result};
pub use models::{
    validate_rows, EventDraft, EventKind, EventType, GameEvent, GameEventRow, Stoppage,
    StoppageSubtype, TeamSide,
};
pub use store::{GameStore, MemoryStore, StoreError};
