//! Badge rule evaluation
//!
//! Each check is a pure predicate over the already-updated stats. Badges listed
//! in `unlocked` are never returned again.

use super::definitions::BadgeId;
use crate::stats::models::{QuizOutcome, UserStats};

fn is_unlocked(unlocked: &[String], id: BadgeId) -> bool {
    unlocked.iter().any(|u| u == id.as_str())
}

/// First completed quiz
pub fn check_milestone_badges(total_quizzes: u64, unlocked: &[String]) -> Vec<BadgeId> {
    let mut newly_unlocked = Vec::new();

    if total_quizzes == 1 && !is_unlocked(unlocked, BadgeId::NoviceJurist) {
        newly_unlocked.push(BadgeId::NoviceJurist);
    }

    newly_unlocked
}

/// Perfect score on the quiz just completed
pub fn check_skill_badges(outcome: &QuizOutcome, unlocked: &[String]) -> Vec<BadgeId> {
    let mut newly_unlocked = Vec::new();

    if outcome.is_perfect() && !is_unlocked(unlocked, BadgeId::Perfectionist) {
        newly_unlocked.push(BadgeId::Perfectionist);
    }

    newly_unlocked
}

/// Daily streak thresholds
pub fn check_streak_badges(current_streak: u32, unlocked: &[String]) -> Vec<BadgeId> {
    let mut newly_unlocked = Vec::new();

    let milestones = [
        (3, BadgeId::Consistent3Day),
        (7, BadgeId::Consistent7Day),
    ];

    for (threshold, id) in milestones {
        if current_streak >= threshold && !is_unlocked(unlocked, id) {
            newly_unlocked.push(id);
        }
    }

    newly_unlocked
}

/// Breadth across difficulty levels and topics
pub fn check_exploration_badges(stats: &UserStats, unlocked: &[String]) -> Vec<BadgeId> {
    let mut newly_unlocked = Vec::new();

    if stats.performance_by_difficulty.all_played()
        && !is_unlocked(unlocked, BadgeId::DifficultyMaster)
    {
        newly_unlocked.push(BadgeId::DifficultyMaster);
    }

    let milestones = [(3, BadgeId::TopicDabbler), (5, BadgeId::TopicExpert)];

    for (threshold, id) in milestones {
        if stats.topics_played() >= threshold && !is_unlocked(unlocked, id) {
            newly_unlocked.push(id);
        }
    }

    newly_unlocked
}

/// Accumulated point thresholds
pub fn check_points_badges(total_points: u64, unlocked: &[String]) -> Vec<BadgeId> {
    let mut newly_unlocked = Vec::new();

    let milestones = [(1_000, BadgeId::Points1000), (5_000, BadgeId::Points5000)];

    for (threshold, id) in milestones {
        if total_points >= threshold && !is_unlocked(unlocked, id) {
            newly_unlocked.push(id);
        }
    }

    newly_unlocked
}

/// Run every completion rule, in catalog order
pub fn check_completion_badges(stats: &UserStats, outcome: &QuizOutcome) -> Vec<BadgeId> {
    let unlocked = &stats.badges;
    let mut newly_unlocked = Vec::new();

    newly_unlocked.extend(check_milestone_badges(stats.total_quizzes_completed, unlocked));
    newly_unlocked.extend(check_skill_badges(outcome, unlocked));
    newly_unlocked.extend(check_streak_badges(stats.current_streak, unlocked));
    newly_unlocked.extend(check_exploration_badges(stats, unlocked));
    newly_unlocked.extend(check_points_badges(stats.total_points, unlocked));

    newly_unlocked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;
    use crate::stats::models::PerformanceRecord;

    #[test]
    fn test_novice_only_on_exactly_first_quiz() {
        assert_eq!(check_milestone_badges(1, &[]), vec![BadgeId::NoviceJurist]);
        assert!(check_milestone_badges(2, &[]).is_empty());
        assert!(check_milestone_badges(1, &["novice_jurist".to_string()]).is_empty());
    }

    #[test]
    fn test_perfectionist_requires_nonempty_quiz() {
        let empty = QuizOutcome::new("Torts", Difficulty::Beginner, 0, 0);
        assert!(check_skill_badges(&empty, &[]).is_empty());

        let perfect = QuizOutcome::new("Torts", Difficulty::Beginner, 5, 5);
        assert_eq!(check_skill_badges(&perfect, &[]), vec![BadgeId::Perfectionist]);
    }

    #[test]
    fn test_streak_thresholds() {
        assert!(check_streak_badges(2, &[]).is_empty());
        assert_eq!(check_streak_badges(3, &[]), vec![BadgeId::Consistent3Day]);
        assert_eq!(
            check_streak_badges(7, &["consistent_3_day".to_string()]),
            vec![BadgeId::Consistent7Day]
        );
    }

    #[test]
    fn test_exploration_badges() {
        let mut stats = UserStats::default();
        for (i, topic) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            stats
                .performance_by_topic
                .insert(topic.to_string(), PerformanceRecord { correct: 0, total: 1 });
            let found = check_exploration_badges(&stats, &[]);
            assert_eq!(found.contains(&BadgeId::TopicDabbler), i >= 2);
            assert_eq!(found.contains(&BadgeId::TopicExpert), i >= 4);
        }
        assert!(!check_exploration_badges(&stats, &[]).contains(&BadgeId::DifficultyMaster));

        for difficulty in Difficulty::ALL {
            stats.performance_by_difficulty.get_mut(difficulty).record(0, 1);
        }
        assert!(check_exploration_badges(&stats, &[]).contains(&BadgeId::DifficultyMaster));
    }

    #[test]
    fn test_points_thresholds() {
        assert!(check_points_badges(999, &[]).is_empty());
        assert_eq!(check_points_badges(1_000, &[]), vec![BadgeId::Points1000]);
        assert_eq!(
            check_points_badges(5_000, &[]),
            vec![BadgeId::Points1000, BadgeId::Points5000]
        );
    }
}
