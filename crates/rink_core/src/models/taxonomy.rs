//! Closed vocabularies shared by the recording dialogs and the derivation
//! engine.
//!
//! Every tag serializes as its snake_case wire value, the same string the
//! `game_event` table stores in `event_type` / `event_subtype` / `team` and
//! inside `details`.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// Side an event is attributed to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TeamSide::Home => "Home",
            TeamSide::Away => "Away",
        }
    }
}

impl FromStr for TeamSide {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(TeamSide::Home),
            "away" => Ok(TeamSide::Away),
            other => Err(EventError::UnknownTeam(other.to_string())),
        }
    }
}

/// Top-level event tag.
///
/// `Shot` and `Pass` are reserved: they can be recorded but no derivation
/// reads them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Stoppage,
    Goal,
    Shot,
    Pass,
    Faceoff,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Stoppage => "stoppage",
            EventType::Goal => "goal",
            EventType::Shot => "shot",
            EventType::Pass => "pass",
            EventType::Faceoff => "faceoff",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Stoppage => "Stoppage",
            EventType::Goal => "Goal",
            EventType::Shot => "Shot",
            EventType::Pass => "Pass",
            EventType::Faceoff => "Face-off",
        }
    }

    /// Only stoppages carry a subtype.
    pub fn takes_subtype(&self) -> bool {
        matches!(self, EventType::Stoppage)
    }
}

impl FromStr for EventType {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stoppage" => Ok(EventType::Stoppage),
            "goal" => Ok(EventType::Goal),
            "shot" => Ok(EventType::Shot),
            "pass" => Ok(EventType::Pass),
            "faceoff" => Ok(EventType::Faceoff),
            other => Err(EventError::UnknownEventType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum StoppageSubtype {
    Offside,
    Icing,
    Penalty,
    PeriodEnd,
    GameEnd,
    Other,
}

impl StoppageSubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoppageSubtype::Offside => "offside",
            StoppageSubtype::Icing => "icing",
            StoppageSubtype::Penalty => "penalty",
            StoppageSubtype::PeriodEnd => "period_end",
            StoppageSubtype::GameEnd => "game_end",
            StoppageSubtype::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StoppageSubtype::Offside => "Offside",
            StoppageSubtype::Icing => "Icing",
            StoppageSubtype::Penalty => "Penalty",
            StoppageSubtype::PeriodEnd => "Period/Game End",
            StoppageSubtype::GameEnd => "Game End",
            StoppageSubtype::Other => "Other",
        }
    }

    /// Whether the stoppage dialog offers this subtype as a first-step choice.
    /// Game end is reached through the period-end flow instead.
    pub fn is_selectable(&self) -> bool {
        !matches!(self, StoppageSubtype::GameEnd)
    }
}

impl FromStr for StoppageSubtype {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offside" => Ok(StoppageSubtype::Offside),
            "icing" => Ok(StoppageSubtype::Icing),
            "penalty" => Ok(StoppageSubtype::Penalty),
            "period_end" => Ok(StoppageSubtype::PeriodEnd),
            "game_end" => Ok(StoppageSubtype::GameEnd),
            "other" => Ok(StoppageSubtype::Other),
            other => Err(EventError::UnknownSubtype(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum PenaltyType {
    Tripping,
    Hooking,
    Slashing,
    Holding,
    Interference,
    Roughing,
    HighSticking,
    CrossChecking,
    Boarding,
    Charging,
    DelayOfGame,
    TooManyMen,
    Other,
}

impl PenaltyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PenaltyType::Tripping => "tripping",
            PenaltyType::Hooking => "hooking",
            PenaltyType::Slashing => "slashing",
            PenaltyType::Holding => "holding",
            PenaltyType::Interference => "interference",
            PenaltyType::Roughing => "roughing",
            PenaltyType::HighSticking => "high_sticking",
            PenaltyType::CrossChecking => "cross_checking",
            PenaltyType::Boarding => "boarding",
            PenaltyType::Charging => "charging",
            PenaltyType::DelayOfGame => "delay_of_game",
            PenaltyType::TooManyMen => "too_many_men",
            PenaltyType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PenaltyType::Tripping => "Tripping",
            PenaltyType::Hooking => "Hooking",
            PenaltyType::Slashing => "Slashing",
            PenaltyType::Holding => "Holding",
            PenaltyType::Interference => "Interference",
            PenaltyType::Roughing => "Roughing",
            PenaltyType::HighSticking => "High Sticking",
            PenaltyType::CrossChecking => "Cross Checking",
            PenaltyType::Boarding => "Boarding",
            PenaltyType::Charging => "Charging",
            PenaltyType::DelayOfGame => "Delay of Game",
            PenaltyType::TooManyMen => "Too Many Men",
            PenaltyType::Other => "Other",
        }
    }
}

impl FromStr for PenaltyType {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tripping" => Ok(PenaltyType::Tripping),
            "hooking" => Ok(PenaltyType::Hooking),
            "slashing" => Ok(PenaltyType::Slashing),
            "holding" => Ok(PenaltyType::Holding),
            "interference" => Ok(PenaltyType::Interference),
            "roughing" => Ok(PenaltyType::Roughing),
            "high_sticking" => Ok(PenaltyType::HighSticking),
            "cross_checking" => Ok(PenaltyType::CrossChecking),
            "boarding" => Ok(PenaltyType::Boarding),
            "charging" => Ok(PenaltyType::Charging),
            "delay_of_game" => Ok(PenaltyType::DelayOfGame),
            "too_many_men" => Ok(PenaltyType::TooManyMen),
            "other" => Ok(PenaltyType::Other),
            other => Err(EventError::UnknownPenaltyType(other.to_string())),
        }
    }
}

/// Reason recorded for a stoppage of subtype `other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum OtherStoppageReason {
    Injury,
    PuckOutOfPlay,
    NetDislodged,
    HighStick,
    HandPass,
    GoalieCover,
}

impl OtherStoppageReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            OtherStoppageReason::Injury => "injury",
            OtherStoppageReason::PuckOutOfPlay => "puck_out_of_play",
            OtherStoppageReason::NetDislodged => "net_dislodged",
            OtherStoppageReason::HighStick => "high_stick",
            OtherStoppageReason::HandPass => "hand_pass",
            OtherStoppageReason::GoalieCover => "goalie_cover",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OtherStoppageReason::Injury => "Injury",
            OtherStoppageReason::PuckOutOfPlay => "Puck Out of Play",
            OtherStoppageReason::NetDislodged => "Net Dislodged",
            OtherStoppageReason::HighStick => "High Stick (non-penalty)",
            OtherStoppageReason::HandPass => "Hand Pass",
            OtherStoppageReason::GoalieCover => "Goalie Cover",
        }
    }
}

impl FromStr for OtherStoppageReason {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "injury" => Ok(OtherStoppageReason::Injury),
            "puck_out_of_play" => Ok(OtherStoppageReason::PuckOutOfPlay),
            "net_dislodged" => Ok(OtherStoppageReason::NetDislodged),
            "high_stick" => Ok(OtherStoppageReason::HighStick),
            "hand_pass" => Ok(OtherStoppageReason::HandPass),
            "goalie_cover" => Ok(OtherStoppageReason::GoalieCover),
            other => Err(EventError::UnknownReason(other.to_string())),
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StoppageSubtype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PenaltyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for OtherStoppageReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(EventType::iter().count(), 5);
        assert_eq!(StoppageSubtype::iter().count(), 6);
        assert_eq!(PenaltyType::iter().count(), 13);
        assert_eq!(OtherStoppageReason::iter().count(), 6);
    }

    #[test]
    fn test_wire_tags_match_serde() {
        // as_str must agree with the serde representation, otherwise rows
        // written by the dialogs would not parse back.
        for t in EventType::iter() {
            assert_eq!(serde_json::to_value(t).unwrap(), t.as_str());
            assert_eq!(t.as_str().parse::<EventType>().unwrap(), t);
        }
        for s in StoppageSubtype::iter() {
            assert_eq!(serde_json::to_value(s).unwrap(), s.as_str());
            assert_eq!(s.as_str().parse::<StoppageSubtype>().unwrap(), s);
        }
        for p in PenaltyType::iter() {
            assert_eq!(serde_json::to_value(p).unwrap(), p.as_str());
            assert_eq!(p.as_str().parse::<PenaltyType>().unwrap(), p);
        }
        for r in OtherStoppageReason::iter() {
            assert_eq!(serde_json::to_value(r).unwrap(), r.as_str());
            assert_eq!(r.as_str().parse::<OtherStoppageReason>().unwrap(), r);
        }
        for side in TeamSide::iter() {
            assert_eq!(serde_json::to_value(side).unwrap(), side.as_str());
            assert_eq!(side.as_str().parse::<TeamSide>().unwrap(), side);
        }
    }

    #[test]
    fn test_unknown_tags_rejected() {
        assert!(matches!("penalty_box".parse::<EventType>(), Err(EventError::UnknownEventType(_))));
        assert!(matches!("timeout".parse::<StoppageSubtype>(), Err(EventError::UnknownSubtype(_))));
        assert!(matches!("spearing".parse::<PenaltyType>(), Err(EventError::UnknownPenaltyType(_))));
        assert!(matches!("fog".parse::<OtherStoppageReason>(), Err(EventError::UnknownReason(_))));
        assert!(matches!("Home".parse::<TeamSide>(), Err(EventError::UnknownTeam(_))));
    }

    #[test]
    fn test_only_game_end_hidden_from_dialog() {
        let hidden: Vec<_> = StoppageSubtype::iter().filter(|s| !s.is_selectable()).collect();
        assert_eq!(hidden, vec![StoppageSubtype::GameEnd]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StoppageSubtype::PeriodEnd.label(), "Period/Game End");
        assert_eq!(OtherStoppageReason::HighStick.label(), "High Stick (non-penalty)");
        assert_eq!(PenaltyType::DelayOfGame.label(), "Delay of Game");
    }
}
