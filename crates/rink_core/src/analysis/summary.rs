use serde::{Deserialize, Serialize};

use super::{calculate_score, current_period, EventTags, Score};
use crate::models::{StoppageSubtype, TeamSide};

/// Per-side counter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SideTally {
    pub home: u32,
    pub away: u32,
}

impl SideTally {
    fn add(&mut self, side: TeamSide) {
        match side {
            TeamSide::Home => self.home += 1,
            TeamSide::Away => self.away += 1,
        }
    }
}

/// Everything the scoreboard shows, derived in one pass over the events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSummary {
    pub score: Score,
    pub period: u32,
    /// Set once a `game_end` stoppage is recorded. Does not touch `period`.
    pub game_over: bool,
    pub penalties: SideTally,
    pub events: usize,
}

pub fn summarize<E: EventTags>(events: &[E]) -> GameSummary {
    let mut penalties = SideTally::default();
    let mut game_over = false;

    for event in events {
        if event.is_stoppage(StoppageSubtype::Penalty) {
            if let Some(side) = event.team() {
                penalties.add(side);
            }
        } else if event.is_stoppage(StoppageSubtype::GameEnd) {
            game_over = true;
        }
    }

    let summary = GameSummary {
        score: calculate_score(events),
        period: current_period(events),
        game_over,
        penalties,
        events: events.len(),
    };
    tracing::debug!(
        home = summary.score.home,
        away = summary.score.away,
        period = summary.period,
        game_over = summary.game_over,
        events = summary.events,
        "derived game summary"
    );
    summary
}
