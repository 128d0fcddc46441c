//! Display strings for the event log.

use serde::Serialize;

use crate::models::{EventKind, GameEvent, Stoppage};

const DETAIL_SEPARATOR: &str = " • ";

/// `"period_end"` -> `"Period End"`.
pub fn humanize_tag(tag: &str) -> String {
    tag.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line headline, e.g. `"Icing - Away"` or `"GOAL - Home"`.
pub fn event_summary(event: &GameEvent) -> String {
    let team = event.team.map(|t| format!(" - {}", t.label())).unwrap_or_default();

    match &event.kind {
        EventKind::Stoppage(stoppage) => {
            format!("{}{}", humanize_tag(stoppage.subtype().as_str()), team)
        }
        EventKind::Goal(_) => format!("GOAL{team}"),
        EventKind::Faceoff(_) => format!("Face-off{team}"),
        EventKind::Shot | EventKind::Pass => event.event_type().as_str().to_string(),
    }
}

/// Payload rendered for the expanded log row. Empty when there is nothing
/// worth showing.
pub fn event_details(event: &GameEvent) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let EventKind::Stoppage(stoppage) = &event.kind {
        match stoppage {
            Stoppage::Offside(d) => {
                if let Some(p) = &d.player_carrying {
                    parts.push(format!("Carrying: #{p}"));
                }
                if let Some(p) = &d.player_offside {
                    parts.push(format!("Offside: #{p}"));
                }
            }
            Stoppage::Icing(d) => {
                if let Some(p) = &d.player {
                    parts.push(format!("Player #{p}"));
                }
            }
            Stoppage::Penalty(d) => {
                if let Some(p) = &d.player {
                    parts.push(format!("Player #{p}"));
                }
                if let Some(kind) = d.penalty_type {
                    parts.push(format!("Type: {}", humanize_tag(kind.as_str())));
                }
                if let Some(minutes) = d.duration.filter(|m| *m > 0) {
                    parts.push(format!("Duration: {minutes} min"));
                }
                if d.penalty_shot == Some(true) {
                    parts.push("Penalty Shot".to_string());
                }
            }
            Stoppage::Other(d) => {
                if let Some(p) = &d.player {
                    parts.push(format!("Player #{p}"));
                }
                parts.push(format!("Reason: {}", humanize_tag(d.reason.as_str())));
            }
            Stoppage::PeriodEnd(_) | Stoppage::GameEnd(_) => {}
        }
    }

    parts.join(DETAIL_SEPARATOR)
}

/// `"P2 - 14:05"`, either half alone, or `None` when neither was recorded.
pub fn event_clock(event: &GameEvent) -> Option<String> {
    match (event.period, event.game_time.as_deref()) {
        (Some(p), Some(t)) => Some(format!("P{p} - {t}")),
        (Some(p), None) => Some(format!("P{p}")),
        (None, Some(t)) => Some(t.to_string()),
        (None, None) => None,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimelineEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<String>,
    pub summary: String,
    pub details: String,
}

impl From<&GameEvent> for TimelineEntry {
    fn from(event: &GameEvent) -> Self {
        Self {
            id: event.id.clone(),
            clock: event_clock(event),
            summary: event_summary(event),
            details: event_details(event),
        }
    }
}
