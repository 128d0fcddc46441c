//! Detail payloads stored in `game_event.details`.
//!
//! Which struct applies is decided by the event's `(type, subtype)` pair, see
//! [`crate::models::EventKind`]. Keys are camelCase on the wire.

use serde::{Deserialize, Serialize};

use super::taxonomy::{OtherStoppageReason, PenaltyType, TeamSide};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OffsideDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_carrying: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_offside: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IcingDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_type: Option<PenaltyType>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_shot: Option<bool>,
}

/// Payload of `period_end` and `game_end` stoppages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndDetails {
    pub confirmed: bool,
}

impl Default for EndDetails {
    fn default() -> Self {
        Self { confirmed: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OtherStoppageDetails {
    pub reason: OtherStoppageReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
}

/// Reserved: recorded but not read by any derivation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scorer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assist1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assist2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
}

/// Reserved: recorded but not read by any derivation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FaceoffDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub won_by: Option<TeamSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_player: Option<String>,
}

/// Raw form values collected by the recording dialogs.
///
/// Every field is optional here; [`crate::models::EventKind::build`] picks the
/// ones relevant to the chosen `(type, subtype)` and drops the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailFields {
    pub player: Option<String>,
    pub player_carrying: Option<String>,
    pub player_offside: Option<String>,
    pub penalty_type: Option<PenaltyType>,
    pub duration: Option<u32>,
    pub penalty_shot: bool,
    pub reason: Option<OtherStoppageReason>,
    pub scorer: Option<String>,
    pub assist1: Option<String>,
    pub assist2: Option<String>,
    pub shot_type: Option<String>,
    pub location: Option<String>,
    pub won_by: Option<TeamSide>,
    pub home_player: Option<String>,
    pub away_player: Option<String>,
}

/// Blank input counts as "not entered".
pub(crate) fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

impl DetailFields {
    pub fn offside(&self) -> OffsideDetails {
        OffsideDetails {
            player_carrying: non_blank(&self.player_carrying),
            player_offside: non_blank(&self.player_offside),
        }
    }

    pub fn icing(&self) -> IcingDetails {
        IcingDetails { player: non_blank(&self.player) }
    }

    pub fn penalty(&self) -> PenaltyDetails {
        PenaltyDetails {
            player: non_blank(&self.player),
            penalty_type: self.penalty_type,
            duration: self.duration.filter(|d| *d > 0),
            penalty_shot: self.penalty_shot.then_some(true),
        }
    }

    pub fn goal(&self) -> GoalDetails {
        GoalDetails {
            scorer: non_blank(&self.scorer),
            assist1: non_blank(&self.assist1),
            assist2: non_blank(&self.assist2),
            shot_type: non_blank(&self.shot_type),
        }
    }

    pub fn faceoff(&self) -> FaceoffDetails {
        FaceoffDetails {
            location: non_blank(&self.location),
            won_by: self.won_by,
            home_player: non_blank(&self.home_player),
            away_player: non_blank(&self.away_player),
        }
    }
}
