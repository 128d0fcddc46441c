pub mod details;
pub mod events;
pub mod game;
pub mod taxonomy;

pub use details::{
    DetailFields, EndDetails, FaceoffDetails, GoalDetails, IcingDetails, OffsideDetails,
    OtherStoppageDetails, PenaltyDetails,
};
pub use events::{validate_rows, EventDraft, EventKind, GameEvent, GameEventRow, Stoppage};
pub use game::{Game, GameInsert, GameStatus, RosterEntry, RosterInsert, Team, TeamInsert};
pub use taxonomy::{EventType, OtherStoppageReason, PenaltyType, StoppageSubtype, TeamSide};
