use schemars::JsonSchema;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::details::{
    non_blank, DetailFields, EndDetails, FaceoffDetails, GoalDetails, IcingDetails,
    OffsideDetails, OtherStoppageDetails, PenaltyDetails,
};
use super::taxonomy::{EventType, StoppageSubtype, TeamSide};
use crate::analysis::{current_period, EventTags};
use crate::error::EventError;

/// A stoppage together with the payload its subtype requires.
#[derive(Debug, Clone, PartialEq)]
pub enum Stoppage {
    Offside(OffsideDetails),
    Icing(IcingDetails),
    Penalty(PenaltyDetails),
    PeriodEnd(EndDetails),
    GameEnd(EndDetails),
    Other(OtherStoppageDetails),
}

impl Stoppage {
    pub fn subtype(&self) -> StoppageSubtype {
        match self {
            Stoppage::Offside(_) => StoppageSubtype::Offside,
            Stoppage::Icing(_) => StoppageSubtype::Icing,
            Stoppage::Penalty(_) => StoppageSubtype::Penalty,
            Stoppage::PeriodEnd(_) => StoppageSubtype::PeriodEnd,
            Stoppage::GameEnd(_) => StoppageSubtype::GameEnd,
            Stoppage::Other(_) => StoppageSubtype::Other,
        }
    }

    fn build(subtype: StoppageSubtype, fields: &DetailFields) -> Result<Self, EventError> {
        Ok(match subtype {
            StoppageSubtype::Offside => Stoppage::Offside(fields.offside()),
            StoppageSubtype::Icing => Stoppage::Icing(fields.icing()),
            StoppageSubtype::Penalty => Stoppage::Penalty(fields.penalty()),
            StoppageSubtype::PeriodEnd => Stoppage::PeriodEnd(EndDetails { confirmed: true }),
            StoppageSubtype::GameEnd => Stoppage::GameEnd(EndDetails { confirmed: true }),
            StoppageSubtype::Other => Stoppage::Other(OtherStoppageDetails {
                reason: fields.reason.ok_or(EventError::MissingReason)?,
                player: non_blank(&fields.player),
            }),
        })
    }

    fn from_details(subtype: StoppageSubtype, details: Option<&Value>) -> Result<Self, EventError> {
        let Some(value) = details.filter(|v| !v.is_null()) else {
            return match subtype {
                StoppageSubtype::Offside => Ok(Stoppage::Offside(OffsideDetails::default())),
                StoppageSubtype::Icing => Ok(Stoppage::Icing(IcingDetails::default())),
                StoppageSubtype::Penalty => Ok(Stoppage::Penalty(PenaltyDetails::default())),
                StoppageSubtype::PeriodEnd => Ok(Stoppage::PeriodEnd(EndDetails::default())),
                StoppageSubtype::GameEnd => Ok(Stoppage::GameEnd(EndDetails::default())),
                StoppageSubtype::Other => Err(EventError::MissingReason),
            };
        };

        if subtype == StoppageSubtype::Other {
            let has_reason = value
                .get("reason")
                .and_then(Value::as_str)
                .is_some_and(|r| !r.trim().is_empty());
            if !has_reason {
                return Err(EventError::MissingReason);
            }
        }

        let wrap = |source| EventError::InvalidDetails {
            event_type: EventType::Stoppage.as_str().to_string(),
            subtype: subtype.as_str().to_string(),
            source,
        };
        let value = value.clone();

        Ok(match subtype {
            StoppageSubtype::Offside => Stoppage::Offside(serde_json::from_value(value).map_err(wrap)?),
            StoppageSubtype::Icing => Stoppage::Icing(serde_json::from_value(value).map_err(wrap)?),
            StoppageSubtype::Penalty => Stoppage::Penalty(serde_json::from_value(value).map_err(wrap)?),
            StoppageSubtype::PeriodEnd => {
                Stoppage::PeriodEnd(serde_json::from_value(value).map_err(wrap)?)
            }
            StoppageSubtype::GameEnd => Stoppage::GameEnd(serde_json::from_value(value).map_err(wrap)?),
            StoppageSubtype::Other => Stoppage::Other(serde_json::from_value(value).map_err(wrap)?),
        })
    }
}

/// Every recordable event, keyed by `(type, subtype)` with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Stoppage(Stoppage),
    Goal(GoalDetails),
    /// Reserved.
    Shot,
    /// Reserved.
    Pass,
    Faceoff(FaceoffDetails),
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Stoppage(_) => EventType::Stoppage,
            EventKind::Goal(_) => EventType::Goal,
            EventKind::Shot => EventType::Shot,
            EventKind::Pass => EventType::Pass,
            EventKind::Faceoff(_) => EventType::Faceoff,
        }
    }

    pub fn subtype(&self) -> Option<StoppageSubtype> {
        match self {
            EventKind::Stoppage(stoppage) => Some(stoppage.subtype()),
            _ => None,
        }
    }

    /// Build the payload for `(event_type, subtype)` out of raw form values.
    ///
    /// This is the one place that decides which payload a pair gets. A
    /// stoppage needs a subtype, nothing else may have one, and an `other`
    /// stoppage needs a reason.
    pub fn build(
        event_type: EventType,
        subtype: Option<StoppageSubtype>,
        fields: &DetailFields,
    ) -> Result<Self, EventError> {
        match (event_type, subtype) {
            (EventType::Stoppage, None) => Err(EventError::MissingSubtype),
            (EventType::Stoppage, Some(subtype)) => {
                Ok(EventKind::Stoppage(Stoppage::build(subtype, fields)?))
            }
            (other, Some(subtype)) => Err(EventError::UnexpectedSubtype {
                event_type: other.as_str().to_string(),
                subtype: subtype.as_str().to_string(),
            }),
            (EventType::Goal, None) => Ok(EventKind::Goal(fields.goal())),
            (EventType::Shot, None) => Ok(EventKind::Shot),
            (EventType::Pass, None) => Ok(EventKind::Pass),
            (EventType::Faceoff, None) => Ok(EventKind::Faceoff(fields.faceoff())),
        }
    }

    /// Parse the kind out of the stored columns.
    pub fn from_row_parts(
        event_type: &str,
        subtype: Option<&str>,
        details: Option<&Value>,
    ) -> Result<Self, EventError> {
        let event_type: EventType = event_type.parse()?;
        let subtype = subtype.filter(|s| !s.is_empty());

        match (event_type, subtype) {
            (EventType::Stoppage, None) => Err(EventError::MissingSubtype),
            (EventType::Stoppage, Some(subtype)) => {
                let subtype: StoppageSubtype = subtype.parse()?;
                Ok(EventKind::Stoppage(Stoppage::from_details(subtype, details)?))
            }
            (other, Some(subtype)) => Err(EventError::UnexpectedSubtype {
                event_type: other.as_str().to_string(),
                subtype: subtype.to_string(),
            }),
            (EventType::Goal, None) => {
                Ok(EventKind::Goal(parse_optional(EventType::Goal, details)?))
            }
            (EventType::Shot, None) => {
                reject_payload(EventType::Shot, details)?;
                Ok(EventKind::Shot)
            }
            (EventType::Pass, None) => {
                reject_payload(EventType::Pass, details)?;
                Ok(EventKind::Pass)
            }
            (EventType::Faceoff, None) => {
                Ok(EventKind::Faceoff(parse_optional(EventType::Faceoff, details)?))
            }
        }
    }

    fn details_ref(&self) -> Option<DetailsRef<'_>> {
        match self {
            EventKind::Stoppage(Stoppage::Offside(d)) => Some(DetailsRef::Offside(d)),
            EventKind::Stoppage(Stoppage::Icing(d)) => Some(DetailsRef::Icing(d)),
            EventKind::Stoppage(Stoppage::Penalty(d)) => Some(DetailsRef::Penalty(d)),
            EventKind::Stoppage(Stoppage::PeriodEnd(d)) | EventKind::Stoppage(Stoppage::GameEnd(d)) => {
                Some(DetailsRef::End(d))
            }
            EventKind::Stoppage(Stoppage::Other(d)) => Some(DetailsRef::Other(d)),
            EventKind::Goal(d) => Some(DetailsRef::Goal(d)),
            EventKind::Faceoff(d) => Some(DetailsRef::Faceoff(d)),
            EventKind::Shot | EventKind::Pass => None,
        }
    }

    /// Payload as stored in the `details` column.
    pub fn details_json(&self) -> Result<Option<Value>, serde_json::Error> {
        self.details_ref().map(serde_json::to_value).transpose()
    }
}

fn parse_optional<T>(event_type: EventType, details: Option<&Value>) -> Result<T, EventError>
where
    T: Default + for<'de> Deserialize<'de>,
{
    match details.filter(|v| !v.is_null()) {
        None => Ok(T::default()),
        Some(value) => serde_json::from_value(value.clone()).map_err(|source| {
            EventError::InvalidDetails {
                event_type: event_type.as_str().to_string(),
                subtype: String::new(),
                source,
            }
        }),
    }
}

/// Reserved kinds have no payload shape; only `null` or `{}` is accepted.
fn reject_payload(event_type: EventType, details: Option<&Value>) -> Result<(), EventError> {
    let carries_payload = match details {
        None | Some(Value::Null) => false,
        Some(Value::Object(map)) => !map.is_empty(),
        Some(_) => true,
    };
    if carries_payload {
        return Err(EventError::InvalidDetails {
            event_type: event_type.as_str().to_string(),
            subtype: String::new(),
            source: <serde_json::Error as serde::de::Error>::custom(format!(
                "{event_type} events carry no details"
            )),
        });
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(untagged)]
enum DetailsRef<'a> {
    Offside(&'a OffsideDetails),
    Icing(&'a IcingDetails),
    Penalty(&'a PenaltyDetails),
    End(&'a EndDetails),
    Other(&'a OtherStoppageDetails),
    Goal(&'a GoalDetails),
    Faceoff(&'a FaceoffDetails),
}

/// One row of the external `game_event` table, exactly as stored.
///
/// Nothing here is checked; use `GameEvent::try_from` to validate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
pub struct GameEventRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub game_id: String,
    pub event_type: String,
    #[serde(default)]
    pub event_subtype: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub period: Option<i64>,
    #[serde(default)]
    pub game_time: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

/// A validated event.
///
/// Serializes to and from the [`GameEventRow`] shape so the typed model and
/// the stored rows cannot drift apart.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "GameEventRow")]
pub struct GameEvent {
    pub id: Option<String>,
    pub game_id: String,
    pub kind: EventKind,
    pub team: Option<TeamSide>,
    pub period: Option<u32>,
    pub game_time: Option<String>,
}

impl GameEvent {
    pub fn new(game_id: impl Into<String>, kind: EventKind) -> Self {
        Self { id: None, game_id: game_id.into(), kind, team: None, period: None, game_time: None }
    }

    pub fn goal(game_id: impl Into<String>, team: TeamSide) -> Self {
        Self::new(game_id, EventKind::Goal(GoalDetails::default())).with_team(team)
    }

    pub fn stoppage(game_id: impl Into<String>, stoppage: Stoppage) -> Self {
        Self::new(game_id, EventKind::Stoppage(stoppage))
    }

    pub fn with_team(mut self, team: TeamSide) -> Self {
        self.team = Some(team);
        self
    }

    pub fn with_period(mut self, period: u32) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_game_time(mut self, game_time: impl Into<String>) -> Self {
        self.game_time = Some(game_time.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    pub fn subtype(&self) -> Option<StoppageSubtype> {
        self.kind.subtype()
    }

    pub fn to_row(&self) -> Result<GameEventRow, serde_json::Error> {
        Ok(GameEventRow {
            id: self.id.clone(),
            game_id: self.game_id.clone(),
            event_type: self.event_type().as_str().to_string(),
            event_subtype: self.subtype().map(|s| s.as_str().to_string()),
            team: self.team.map(|t| t.as_str().to_string()),
            period: self.period.map(i64::from),
            game_time: self.game_time.clone(),
            details: self.kind.details_json()?,
        })
    }
}

#[derive(Serialize)]
struct GameEventWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    game_id: &'a str,
    event_type: EventType,
    event_subtype: Option<StoppageSubtype>,
    team: Option<TeamSide>,
    period: Option<u32>,
    game_time: Option<&'a str>,
    details: Option<DetailsRef<'a>>,
}

impl Serialize for GameEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GameEventWire {
            id: self.id.as_deref(),
            game_id: &self.game_id,
            event_type: self.event_type(),
            event_subtype: self.subtype(),
            team: self.team,
            period: self.period,
            game_time: self.game_time.as_deref(),
            details: self.kind.details_ref(),
        }
        .serialize(serializer)
    }
}

fn parse_period(period: Option<i64>) -> Result<Option<u32>, EventError> {
    match period {
        None => Ok(None),
        Some(p) if p < 1 => Err(EventError::InvalidPeriod(p)),
        Some(p) => u32::try_from(p).map(Some).map_err(|_| EventError::InvalidPeriod(p)),
    }
}

impl TryFrom<GameEventRow> for GameEvent {
    type Error = EventError;

    fn try_from(row: GameEventRow) -> Result<Self, Self::Error> {
        if row.game_id.trim().is_empty() {
            return Err(EventError::MissingGameId);
        }

        let kind = EventKind::from_row_parts(
            &row.event_type,
            row.event_subtype.as_deref(),
            row.details.as_ref(),
        )?;

        let team = row
            .team
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::parse::<TeamSide>)
            .transpose()?;

        Ok(GameEvent {
            id: row.id,
            game_id: row.game_id,
            kind,
            team,
            period: parse_period(row.period)?,
            game_time: non_blank(&row.game_time),
        })
    }
}

impl TryFrom<&GameEventRow> for GameEvent {
    type Error = EventError;

    fn try_from(row: &GameEventRow) -> Result<Self, Self::Error> {
        GameEvent::try_from(row.clone())
    }
}

/// Split stored rows into the events that validate and the indices of those
/// that do not, with the reason.
pub fn validate_rows(rows: &[GameEventRow]) -> (Vec<GameEvent>, Vec<(usize, EventError)>) {
    let mut events = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        match GameEvent::try_from(row) {
            Ok(event) => events.push(event),
            Err(err) => rejected.push((index, err)),
        }
    }
    (events, rejected)
}

/// Form state of a recording dialog before it is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub game_id: String,
    pub event_type: EventType,
    pub subtype: Option<StoppageSubtype>,
    pub team: Option<TeamSide>,
    pub period: Option<u32>,
    pub game_time: Option<String>,
    pub fields: DetailFields,
}

impl EventDraft {
    pub fn new(game_id: impl Into<String>, event_type: EventType) -> Self {
        Self {
            game_id: game_id.into(),
            event_type,
            subtype: None,
            team: None,
            period: None,
            game_time: None,
            fields: DetailFields::default(),
        }
    }

    pub fn stoppage(game_id: impl Into<String>, subtype: StoppageSubtype) -> Self {
        Self { subtype: Some(subtype), ..Self::new(game_id, EventType::Stoppage) }
    }

    pub fn with_team(mut self, team: TeamSide) -> Self {
        self.team = Some(team);
        self
    }

    pub fn with_period(mut self, period: u32) -> Self {
        self.period = Some(period);
        self
    }

    /// Preselect the period the game is in, as the dialogs do when opened.
    pub fn with_current_period<E: EventTags>(self, events: &[E]) -> Self {
        self.with_period(current_period(events))
    }

    pub fn with_game_time(mut self, game_time: impl Into<String>) -> Self {
        self.game_time = Some(game_time.into());
        self
    }

    pub fn with_fields(mut self, fields: DetailFields) -> Self {
        self.fields = fields;
        self
    }

    /// Whether the dialog may enable its save button.
    pub fn can_submit(&self) -> bool {
        self.build().is_ok()
    }

    pub fn build(&self) -> Result<GameEvent, EventError> {
        if self.game_id.trim().is_empty() {
            return Err(EventError::MissingGameId);
        }

        let kind = EventKind::build(self.event_type, self.subtype, &self.fields)?;

        Ok(GameEvent {
            id: None,
            game_id: self.game_id.clone(),
            kind,
            team: self.team,
            // A cleared period field reads as 0.
            period: self.period.filter(|p| *p > 0),
            game_time: non_blank(&self.game_time),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::taxonomy::{OtherStoppageReason, PenaltyType};
    use serde_json::json;
    use strum::IntoEnumIterator;

    fn row(event_type: &str, subtype: Option<&str>, details: Option<Value>) -> GameEventRow {
        GameEventRow {
            game_id: "game-1".to_string(),
            event_type: event_type.to_string(),
            event_subtype: subtype.map(str::to_string),
            details,
            ..Default::default()
        }
    }

    #[test]
    fn test_every_pair_has_one_payload() {
        let fields = DetailFields {
            reason: Some(OtherStoppageReason::Injury),
            ..Default::default()
        };
        for event_type in EventType::iter() {
            if event_type.takes_subtype() {
                for subtype in StoppageSubtype::iter() {
                    let kind = EventKind::build(event_type, Some(subtype), &fields).unwrap();
                    assert_eq!(kind.event_type(), event_type);
                    assert_eq!(kind.subtype(), Some(subtype));
                }
                assert!(matches!(
                    EventKind::build(event_type, None, &fields),
                    Err(EventError::MissingSubtype)
                ));
            } else {
                let kind = EventKind::build(event_type, None, &fields).unwrap();
                assert_eq!(kind.event_type(), event_type);
                assert_eq!(kind.subtype(), None);
                assert!(matches!(
                    EventKind::build(event_type, Some(StoppageSubtype::Icing), &fields),
                    Err(EventError::UnexpectedSubtype { .. })
                ));
            }
        }
    }

    #[test]
    fn test_other_stoppage_needs_reason() {
        let draft = EventDraft::stoppage("game-1", StoppageSubtype::Other);
        assert!(!draft.can_submit());
        assert!(matches!(draft.build(), Err(EventError::MissingReason)));

        let draft = draft.with_fields(DetailFields {
            reason: Some(OtherStoppageReason::NetDislodged),
            player: Some("".to_string()),
            ..Default::default()
        });
        assert!(draft.can_submit());
        let event = draft.build().unwrap();
        assert_eq!(
            event.kind,
            EventKind::Stoppage(Stoppage::Other(OtherStoppageDetails {
                reason: OtherStoppageReason::NetDislodged,
                player: None,
            }))
        );
    }

    #[test]
    fn test_draft_clears_zero_period_and_rejects_missing_game() {
        let event = EventDraft::stoppage("game-1", StoppageSubtype::Icing)
            .with_period(0)
            .build()
            .unwrap();
        assert_eq!(event.period, None);
        assert_eq!(event.to_row().unwrap().period, None);

        let draft = EventDraft::stoppage("  ", StoppageSubtype::Icing);
        assert!(matches!(draft.build(), Err(EventError::MissingGameId)));
    }

    #[test]
    fn test_draft_seeded_with_current_period() {
        let end = EventDraft::stoppage("game-1", StoppageSubtype::PeriodEnd).build().unwrap();
        let goal = GameEvent::goal("game-1", TeamSide::Home);

        let draft = EventDraft::new("game-1", EventType::Goal).with_current_period(&[end.clone()]);
        assert_eq!(draft.period, Some(2));

        let rows = vec![end.to_row().unwrap(), goal.to_row().unwrap(), end.to_row().unwrap()];
        let event = EventDraft::stoppage("game-1", StoppageSubtype::Icing)
            .with_current_period(&rows)
            .build()
            .unwrap();
        assert_eq!(event.period, Some(3));

        let empty: Vec<GameEvent> = Vec::new();
        assert_eq!(EventDraft::new("game-1", EventType::Shot).with_current_period(&empty).period, Some(1));
    }

    #[test]
    fn test_period_end_is_confirmed() {
        let event = EventDraft::stoppage("game-1", StoppageSubtype::PeriodEnd)
            .with_period(1)
            .with_game_time("0:00")
            .build()
            .unwrap();
        let stored = event.to_row().unwrap();
        assert_eq!(stored.event_subtype.as_deref(), Some("period_end"));
        assert_eq!(stored.details, Some(json!({ "confirmed": true })));
        assert_eq!(stored.team, None);
    }

    #[test]
    fn test_row_round_trip() {
        let event = EventDraft::stoppage("game-1", StoppageSubtype::Penalty)
            .with_team(TeamSide::Away)
            .with_period(2)
            .with_game_time("12:31")
            .with_fields(DetailFields {
                player: Some("22".to_string()),
                penalty_type: Some(PenaltyType::CrossChecking),
                duration: Some(2),
                ..Default::default()
            })
            .build()
            .unwrap();

        let stored = event.to_row().unwrap();
        assert_eq!(stored.event_type, "stoppage");
        assert_eq!(stored.team.as_deref(), Some("away"));
        assert_eq!(stored.period, Some(2));
        assert_eq!(
            stored.details,
            Some(json!({ "player": "22", "penaltyType": "cross_checking", "duration": 2 }))
        );

        let back = GameEvent::try_from(stored).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_serde_matches_row_shape() {
        let event = GameEvent::goal("game-1", TeamSide::Home).with_period(3).with_id("ev-9");
        let via_serde = serde_json::to_value(&event).unwrap();
        let via_row = serde_json::to_value(event.to_row().unwrap()).unwrap();
        assert_eq!(via_serde, via_row);

        let parsed: GameEvent = serde_json::from_value(via_serde).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_row_errors() {
        assert!(matches!(
            GameEvent::try_from(row("hit", None, None)),
            Err(EventError::UnknownEventType(_))
        ));
        assert!(matches!(
            GameEvent::try_from(row("stoppage", None, None)),
            Err(EventError::MissingSubtype)
        ));
        assert!(matches!(
            GameEvent::try_from(row("stoppage", Some("timeout"), None)),
            Err(EventError::UnknownSubtype(_))
        ));
        assert!(matches!(
            GameEvent::try_from(row("goal", Some("icing"), None)),
            Err(EventError::UnexpectedSubtype { .. })
        ));
        assert!(matches!(
            GameEvent::try_from(row("stoppage", Some("other"), Some(json!({ "player": "3" })))),
            Err(EventError::MissingReason)
        ));
        assert!(matches!(
            GameEvent::try_from(row("stoppage", Some("other"), Some(json!({ "reason": "" })))),
            Err(EventError::MissingReason)
        ));
        assert!(matches!(
            GameEvent::try_from(row(
                "stoppage",
                Some("penalty"),
                Some(json!({ "penaltyType": "spearing" }))
            )),
            Err(EventError::InvalidDetails { .. })
        ));

        let mut bad_team = row("goal", None, None);
        bad_team.team = Some("visitors".to_string());
        assert!(matches!(GameEvent::try_from(bad_team), Err(EventError::UnknownTeam(_))));

        let mut bad_period = row("goal", None, None);
        bad_period.period = Some(0);
        assert!(matches!(GameEvent::try_from(bad_period), Err(EventError::InvalidPeriod(0))));
    }

    #[test]
    fn test_missing_details_take_empty_shape() {
        let event = GameEvent::try_from(row("stoppage", Some("icing"), None)).unwrap();
        assert_eq!(event.kind, EventKind::Stoppage(Stoppage::Icing(IcingDetails::default())));

        let event = GameEvent::try_from(row("stoppage", Some("game_end"), Some(Value::Null))).unwrap();
        assert_eq!(event.kind, EventKind::Stoppage(Stoppage::GameEnd(EndDetails { confirmed: true })));

        let event = GameEvent::try_from(row("faceoff", None, None)).unwrap();
        assert_eq!(event.kind, EventKind::Faceoff(FaceoffDetails::default()));
    }

    #[test]
    fn test_validate_rows_keeps_indices() {
        let rows = vec![
            row("goal", None, None),
            row("goal", Some("icing"), None),
            row("stoppage", Some("period_end"), None),
            row("stoppage", Some("period_end"), Some(json!({ "confirmed": "yes" }))),
        ];
        let (events, rejected) = validate_rows(&rows);
        assert_eq!(events.len(), 2);
        let indices: Vec<usize> = rejected.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 3]);
        assert!(matches!(rejected[0].1, EventError::UnexpectedSubtype { .. }));
        assert!(matches!(rejected[1].1, EventError::InvalidDetails { .. }));
    }

    #[test]
    fn test_reserved_kinds_have_no_details() {
        let event = GameEvent::try_from(row("shot", None, None)).unwrap();
        assert_eq!(event.kind, EventKind::Shot);
        assert_eq!(event.to_row().unwrap().details, None);

        let event = GameEvent::try_from(row("pass", None, Some(json!({})))).unwrap();
        assert_eq!(event.kind, EventKind::Pass);
    }

    #[test]
    fn test_reserved_kinds_reject_payload() {
        for event_type in ["shot", "pass"] {
            let err = GameEvent::try_from(row(event_type, None, Some(json!({ "anything": 1 }))))
                .unwrap_err();
            match err {
                EventError::InvalidDetails { event_type: found, .. } => assert_eq!(found, event_type),
                other => panic!("unexpected error: {other:?}"),
            }
        }
        assert!(matches!(
            GameEvent::try_from(row("shot", None, Some(json!("wrist")))),
            Err(EventError::InvalidDetails { .. })
        ));
    }
}
