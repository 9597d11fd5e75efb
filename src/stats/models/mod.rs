//! Data models for learner statistics
//!
//! `UserStats` is the single persisted aggregate. Field names serialize in
//! camelCase so records written by earlier releases of the app load unchanged.

mod outcome;

pub use outcome::QuizOutcome;

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Difficulty;

/// Maximum number of entries kept in `UserStats::quiz_history`
pub const HISTORY_LIMIT: usize = 100;

/// Accuracy within one partition (a topic or a difficulty level)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub correct: u64,
    pub total: u64,
}

impl PerformanceRecord {
    /// Accumulate one quiz worth of answers
    pub fn record(&mut self, correct: u32, total: u32) {
        self.correct = self.correct.saturating_add(u64::from(correct));
        self.total = self.total.saturating_add(u64::from(total));
    }

    /// Rounded accuracy percentage, 0 when nothing was answered
    pub fn accuracy(&self) -> u32 {
        percentage(self.correct, self.total)
    }

    /// Clamp `correct` so that `correct <= total` holds
    pub(crate) fn normalized(self) -> Self {
        Self {
            correct: self.correct.min(self.total),
            total: self.total,
        }
    }
}

/// Per-difficulty performance; every level is always present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyBreakdown {
    #[serde(rename = "Beginner", default)]
    pub beginner: PerformanceRecord,
    #[serde(rename = "Intermediate", default)]
    pub intermediate: PerformanceRecord,
    #[serde(rename = "Expert", default)]
    pub expert: PerformanceRecord,
}

impl DifficultyBreakdown {
    pub fn get(&self, difficulty: Difficulty) -> &PerformanceRecord {
        match difficulty {
            Difficulty::Beginner => &self.beginner,
            Difficulty::Intermediate => &self.intermediate,
            Difficulty::Expert => &self.expert,
        }
    }

    pub fn get_mut(&mut self, difficulty: Difficulty) -> &mut PerformanceRecord {
        match difficulty {
            Difficulty::Beginner => &mut self.beginner,
            Difficulty::Intermediate => &mut self.intermediate,
            Difficulty::Expert => &mut self.expert,
        }
    }

    /// Iterate levels in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &PerformanceRecord)> {
        Difficulty::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Whether at least one question was answered at every level
    pub fn all_played(&self) -> bool {
        self.iter().all(|(_, record)| record.total > 0)
    }
}

/// One completed quiz in the history log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    pub topic: String,
    pub difficulty: Difficulty,
    pub score: u32,
    pub total_questions: u32,
    pub date: DateTime<Utc>,
}

/// Cumulative statistics for the single local learner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_quizzes_completed: u64,
    pub total_questions_answered: u64,
    pub total_correct_answers: u64,
    pub performance_by_topic: BTreeMap<String, PerformanceRecord>,
    pub performance_by_difficulty: DifficultyBreakdown,
    /// Most recent first, at most `HISTORY_LIMIT` entries
    pub quiz_history: Vec<QuizRecord>,

    // Gamification
    pub total_points: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Calendar day of the most recent streak-contributing quiz
    pub last_quiz_date: Option<NaiveDate>,
    /// Earned badge ids in award order
    pub badges: Vec<String>,
}

impl UserStats {
    /// Rounded overall accuracy percentage
    pub fn overall_accuracy(&self) -> u32 {
        percentage(self.total_correct_answers, self.total_questions_answered)
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b == id)
    }

    /// Number of distinct topics played
    pub fn topics_played(&self) -> usize {
        self.performance_by_topic.len()
    }

    /// Re-establish the record invariants after loading untrusted data
    pub(crate) fn normalize(&mut self) {
        for record in self.performance_by_topic.values_mut() {
            *record = record.normalized();
        }
        for difficulty in Difficulty::ALL {
            let record = self.performance_by_difficulty.get_mut(difficulty);
            *record = record.normalized();
        }
        self.total_correct_answers = self.total_correct_answers.min(self.total_questions_answered);
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.quiz_history.truncate(HISTORY_LIMIT);

        let mut seen = std::collections::HashSet::new();
        self.badges.retain(|id| seen.insert(id.clone()));
    }
}

pub(crate) fn percentage(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_every_difficulty_zeroed() {
        let stats = UserStats::default();
        let levels: Vec<_> = stats.performance_by_difficulty.iter().collect();
        assert_eq!(levels.len(), 3);
        assert!(levels.iter().all(|(_, r)| **r == PerformanceRecord::default()));
        assert!(stats.last_quiz_date.is_none());
    }

    #[test]
    fn test_serializes_with_legacy_field_names() {
        let json = serde_json::to_value(UserStats::default()).unwrap();
        assert!(json.get("totalQuizzesCompleted").is_some());
        assert!(json.get("lastQuizDate").unwrap().is_null());
        assert!(json["performanceByDifficulty"].get("Intermediate").is_some());
    }

    #[test]
    fn test_accuracy_rounding() {
        let record = PerformanceRecord { correct: 2, total: 3 };
        assert_eq!(record.accuracy(), 67);
        assert_eq!(PerformanceRecord::default().accuracy(), 0);
    }

    #[test]
    fn test_normalize_repairs_invariants() {
        let mut stats = UserStats {
            total_correct_answers: 9,
            total_questions_answered: 5,
            current_streak: 4,
            longest_streak: 2,
            badges: vec!["perfectionist".into(), "bookworm".into(), "perfectionist".into()],
            ..Default::default()
        };
        stats
            .performance_by_topic
            .insert("Torts".into(), PerformanceRecord { correct: 7, total: 5 });

        stats.normalize();

        assert_eq!(stats.total_correct_answers, 5);
        assert_eq!(stats.longest_streak, 4);
        assert_eq!(stats.performance_by_topic["Torts"].correct, 5);
        assert_eq!(stats.badges, vec!["perfectionist", "bookworm"]);
    }
}
