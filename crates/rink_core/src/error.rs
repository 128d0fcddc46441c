use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Rejections raised while building or parsing a game event.
///
/// The derivation engine never produces these; they belong to the recording
/// side, which must refuse to persist an event that fails here.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),

    #[error("Unknown stoppage subtype: {0}")]
    UnknownSubtype(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Unknown penalty type: {0}")]
    UnknownPenaltyType(String),

    #[error("Unknown stoppage reason: {0}")]
    UnknownReason(String),

    #[error("Stoppage event requires a subtype")]
    MissingSubtype,

    #[error("Event type {event_type} does not take a subtype (got {subtype})")]
    UnexpectedSubtype { event_type: String, subtype: String },

    #[error("Other stoppage requires a reason")]
    MissingReason,

    #[error("Event must belong to a game")]
    MissingGameId,

    #[error("Period must be 1 or greater, got {0}")]
    InvalidPeriod(i64),

    #[error("Invalid details for {event_type}/{subtype}: {source}")]
    InvalidDetails {
        event_type: String,
        subtype: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unsupported schema version: {found} (expected {expected})")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
