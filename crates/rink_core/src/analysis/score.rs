use serde::{Deserialize, Serialize};

use super::EventTags;
use crate::models::{EventType, TeamSide};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Count goals per side.
///
/// A goal without a recognised team counts for neither side; every other
/// event type leaves the score alone.
pub fn calculate_score<E: EventTags>(events: &[E]) -> Score {
    events.iter().fold(Score::default(), |mut score, event| {
        if event.event_type() == Some(EventType::Goal) {
            match event.team() {
                Some(TeamSide::Home) => score.home += 1,
                Some(TeamSide::Away) => score.away += 1,
                None => {}
            }
        }
        score
    })
}
