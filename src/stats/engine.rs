//! Stats engine - pure state transitions over `UserStats`
//!
//! Both operations take the caller's snapshot by reference and return a new
//! record, so the caller's copy is never touched. Nothing here performs I/O.

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info};

use super::badges::{Badge, check_completion_badges};
use super::models::{HISTORY_LIMIT, QuizOutcome, QuizRecord, UserStats};
use super::streaks::{StreakChange, day_of, next_streak};

/// Result of applying a completed quiz
#[derive(Debug, Clone)]
pub struct CompletionUpdate {
    pub stats: UserStats,
    /// Badges earned by this completion, in catalog order
    pub new_badges: Vec<&'static Badge>,
    pub points_earned: u64,
    pub streak_change: StreakChange,
}

/// Result of a direct badge award
#[derive(Debug, Clone)]
pub struct BadgeAward {
    pub stats: UserStats,
    pub new_badges: Vec<&'static Badge>,
}

/// Apply a completed quiz using the current local time
pub fn apply_completion(stats: &UserStats, outcome: &QuizOutcome) -> CompletionUpdate {
    apply_completion_at(stats, outcome, Local::now())
}

/// Apply a completed quiz as if it finished at `now`
///
/// Steps run in a fixed order because the badge rules read the totals,
/// streak and partitions updated before them.
pub fn apply_completion_at(
    stats: &UserStats,
    outcome: &QuizOutcome,
    now: DateTime<Local>,
) -> CompletionUpdate {
    let mut next = stats.clone();
    let score = outcome.clamped_score();
    let total = outcome.total_questions;

    if score != outcome.score {
        debug!(
            "Clamped quiz score {} to {} for {} questions",
            outcome.score, score, total
        );
    }

    // Counters come from disk and may be arbitrarily large
    next.total_quizzes_completed = next.total_quizzes_completed.saturating_add(1);
    next.total_questions_answered = next.total_questions_answered.saturating_add(u64::from(total));
    next.total_correct_answers = next.total_correct_answers.saturating_add(u64::from(score));

    let points_earned = u64::from(score) * outcome.difficulty.points_per_correct();
    next.total_points = next.total_points.saturating_add(points_earned);

    let today = day_of(now);
    let (streak, streak_change) = next_streak(next.last_quiz_date, next.current_streak, today);
    debug!(
        "Daily streak {}: {} -> {}",
        streak_change.label(),
        next.current_streak,
        streak
    );
    next.current_streak = streak;
    next.last_quiz_date = Some(today);
    next.longest_streak = next.longest_streak.max(next.current_streak);

    next.performance_by_difficulty
        .get_mut(outcome.difficulty)
        .record(score, total);
    next.performance_by_topic
        .entry(outcome.topic.clone())
        .or_default()
        .record(score, total);

    next.quiz_history.insert(
        0,
        QuizRecord {
            topic: outcome.topic.clone(),
            difficulty: outcome.difficulty,
            score,
            total_questions: total,
            date: now.with_timezone(&Utc),
        },
    );
    next.quiz_history.truncate(HISTORY_LIMIT);

    let mut new_badges = Vec::new();
    for id in check_completion_badges(&next, outcome) {
        if let Some(badge) = Badge::get(id) {
            info!("Badge earned: {} ({})", badge.name, id.as_str());
            next.badges.push(id.as_str().to_string());
            new_badges.push(badge);
        }
    }

    CompletionUpdate {
        stats: next,
        new_badges,
        points_earned,
        streak_change,
    }
}

/// Award a badge outside the completion flow (e.g. a bookmark threshold)
///
/// Already-held and unknown ids are no-ops.
pub fn award_badge(stats: &UserStats, badge_id: &str) -> BadgeAward {
    let mut next = stats.clone();

    if next.has_badge(badge_id) {
        return BadgeAward {
            stats: next,
            new_badges: Vec::new(),
        };
    }

    let Some(badge) = Badge::by_str(badge_id) else {
        debug!("Ignoring award of unknown badge '{}'", badge_id);
        return BadgeAward {
            stats: next,
            new_badges: Vec::new(),
        };
    };

    info!("Badge earned: {} ({})", badge.name, badge_id);
    next.badges.push(badge_id.to_string());
    BadgeAward {
        stats: next,
        new_badges: vec![badge],
    }
}
