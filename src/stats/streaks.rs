//! Daily streak tracking
//!
//! Streaks are day-granular in the local clock. Nothing here normalizes
//! timezones beyond truncating to the calendar day.

use chrono::{DateTime, Local, NaiveDate};

/// What happened to the streak on a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// First quiz ever played
    Started,
    /// Another quiz on the same day
    Unchanged,
    /// First quiz of the day after playing yesterday
    Extended,
    /// Gap of two or more days, or a last date in the future
    Reset,
}

impl StreakChange {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Unchanged => "unchanged",
            Self::Extended => "extended",
            Self::Reset => "reset",
        }
    }
}

/// Compute the streak value after a quiz completed on `today`
pub fn next_streak(
    last_quiz_date: Option<NaiveDate>,
    current_streak: u32,
    today: NaiveDate,
) -> (u32, StreakChange) {
    let Some(last) = last_quiz_date else {
        return (1, StreakChange::Started);
    };

    if last == today {
        return (current_streak, StreakChange::Unchanged);
    }

    if today.pred_opt() == Some(last) {
        (current_streak.saturating_add(1), StreakChange::Extended)
    } else {
        (1, StreakChange::Reset)
    }
}

/// Calendar day of a local timestamp
pub fn day_of(now: DateTime<Local>) -> NaiveDate {
    now.date_naive()
}

/// Whether a streak is still alive on `today` (played today or yesterday)
pub fn is_active(last_quiz_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    let Some(last) = last_quiz_date else {
        return false;
    };
    let days_since = (today - last).num_days();
    (0..=1).contains(&days_since)
}
