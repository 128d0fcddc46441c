use super::EventTags;
use crate::models::StoppageSubtype;

pub const REGULATION_PERIODS: u32 = 3;

/// `1 + number of period_end stoppages`.
///
/// A `game_end` stoppage does not advance the counter: ending the game is a
/// separate signal from ending a period.
pub fn current_period<E: EventTags>(events: &[E]) -> u32 {
    let ended = events.iter().filter(|e| e.is_stoppage(StoppageSubtype::PeriodEnd)).count();
    1 + ended as u32
}

/// Scoreboard text for a period number.
///
/// `0` means the game has not started. Periods past regulation are overtime
/// and numbered from 1.
pub fn period_label(period: u32, regulation_periods: u32) -> String {
    match period {
        0 => "Not Started".to_string(),
        p if p <= regulation_periods => format!("{} Period", ordinal(p)),
        p => format!("OT {}", p - regulation_periods),
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
