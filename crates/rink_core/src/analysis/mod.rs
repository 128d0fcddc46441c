//! Game-state derivation
//!
//! Score, period and the other display values are never stored. They are
//! folded from the full event list every time it changes, so every function
//! here is pure over a caller-owned snapshot and may run concurrently.
//!
//! Derivation only looks at the tags of an event, exposed through
//! [`EventTags`]. Both validated [`GameEvent`]s and raw [`GameEventRow`]s
//! implement it; a raw row with an unrecognised tag simply projects to
//! `None` and has no effect.

pub mod period;
pub mod score;
pub mod summary;
pub mod timeline;

#[cfg(test)]
mod proptest_checks;

pub use period::{current_period, period_label, REGULATION_PERIODS};
pub use score::{calculate_score, Score};
pub use summary::{summarize, GameSummary, SideTally};
pub use timeline::{event_clock, event_details, event_summary, humanize_tag, TimelineEntry};

use crate::models::{EventType, GameEvent, GameEventRow, StoppageSubtype, TeamSide};

/// The tag projection derivation works on.
pub trait EventTags {
    fn event_type(&self) -> Option<EventType>;
    fn subtype(&self) -> Option<StoppageSubtype>;
    fn team(&self) -> Option<TeamSide>;

    fn is_stoppage(&self, subtype: StoppageSubtype) -> bool {
        self.event_type() == Some(EventType::Stoppage) && self.subtype() == Some(subtype)
    }
}

impl EventTags for GameEvent {
    fn event_type(&self) -> Option<EventType> {
        Some(self.kind.event_type())
    }

    fn subtype(&self) -> Option<StoppageSubtype> {
        self.kind.subtype()
    }

    fn team(&self) -> Option<TeamSide> {
        self.team
    }
}

impl EventTags for GameEventRow {
    fn event_type(&self) -> Option<EventType> {
        self.event_type.parse().ok()
    }

    fn subtype(&self) -> Option<StoppageSubtype> {
        self.event_subtype.as_deref().and_then(|s| s.parse().ok())
    }

    fn team(&self) -> Option<TeamSide> {
        self.team.as_deref().and_then(|t| t.parse().ok())
    }
}

impl<T: EventTags + ?Sized> EventTags for &T {
    fn event_type(&self) -> Option<EventType> {
        (**self).event_type()
    }

    fn subtype(&self) -> Option<StoppageSubtype> {
        (**self).subtype()
    }

    fn team(&self) -> Option<TeamSide> {
        (**self).team()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{
        DetailFields, EventDraft, EventKind, EventType, GameEvent, GameEventRow,
        OtherStoppageReason, StoppageSubtype, TeamSide,
    };

    pub const GAME: &str = "game-1";

    pub fn goal(team: TeamSide) -> GameEvent {
        GameEvent::goal(GAME, team)
    }

    pub fn stoppage(subtype: StoppageSubtype) -> GameEvent {
        let fields = DetailFields {
            reason: Some(OtherStoppageReason::Injury),
            ..Default::default()
        };
        EventDraft::stoppage(GAME, subtype)
            .with_fields(fields)
            .build()
            .expect("fixture stoppage builds")
    }

    pub fn faceoff() -> GameEvent {
        let kind = EventKind::build(EventType::Faceoff, None, &DetailFields::default())
            .expect("fixture faceoff builds");
        GameEvent::new(GAME, kind)
    }

    pub fn reserved(event_type: EventType) -> GameEvent {
        let kind =
            EventKind::build(event_type, None, &DetailFields::default()).expect("reserved builds");
        GameEvent::new(GAME, kind)
    }

    pub fn raw(event_type: &str, subtype: Option<&str>, team: Option<&str>) -> GameEventRow {
        GameEventRow {
            game_id: GAME.to_string(),
            event_type: event_type.to_string(),
            event_subtype: subtype.map(str::to_string),
            team: team.map(str::to_string),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_raw_rows_project_unknown_tags_to_none() {
        let row = raw("hit", Some("board"), Some("visitors"));
        assert_eq!(row.event_type(), None);
        assert_eq!(EventTags::subtype(&row), None);
        assert_eq!(EventTags::team(&row), None);
    }

    #[test]
    fn test_typed_and_raw_agree() {
        let typed = stoppage(StoppageSubtype::PeriodEnd);
        let row = typed.to_row().unwrap();
        assert_eq!(EventTags::event_type(&typed), row.event_type());
        assert_eq!(EventTags::subtype(&typed), EventTags::subtype(&row));
        assert!(row.is_stoppage(StoppageSubtype::PeriodEnd));
        assert!(!goal(TeamSide::Home).is_stoppage(StoppageSubtype::PeriodEnd));
    }
}
