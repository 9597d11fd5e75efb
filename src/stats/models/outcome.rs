use serde::{Deserialize, Serialize};

use super::percentage;
use crate::domain::Difficulty;

/// Result of a finished quiz run, fed into the stats engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    pub score: u32,
    pub topic: String,
    pub difficulty: Difficulty,
    pub total_questions: u32,
}

impl QuizOutcome {
    pub fn new(
        topic: impl Into<String>,
        difficulty: Difficulty,
        score: u32,
        total_questions: u32,
    ) -> Self {
        Self {
            score,
            topic: topic.into(),
            difficulty,
            total_questions,
        }
    }

    /// Score clamped into `0..=total_questions`
    pub fn clamped_score(&self) -> u32 {
        self.score.min(self.total_questions)
    }

    /// Every question answered correctly (never true for an empty quiz)
    pub fn is_perfect(&self) -> bool {
        self.total_questions > 0 && self.clamped_score() == self.total_questions
    }

    /// Rounded score percentage
    pub fn percentage(&self) -> u32 {
        percentage(
            u64::from(self.clamped_score()),
            u64::from(self.total_questions),
        )
    }

    /// Encouragement line shown on the result screen
    pub fn feedback(&self) -> &'static str {
        match self.percentage() {
            100 => "Perfect Score! You are a true Legal Eagle!",
            p if p >= 80 => "Excellent work! Your legal knowledge is impressive.",
            p if p >= 50 => "Good effort! Keep studying to sharpen your skills.",
            _ => "Keep trying! Every expert was once a beginner.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_clamped_to_total() {
        let outcome = QuizOutcome::new("Contracts", Difficulty::Beginner, 9, 5);
        assert_eq!(outcome.clamped_score(), 5);
        assert!(outcome.is_perfect());
    }

    #[test]
    fn test_empty_quiz_is_not_perfect() {
        let outcome = QuizOutcome::new("Contracts", Difficulty::Beginner, 0, 0);
        assert!(!outcome.is_perfect());
        assert_eq!(outcome.percentage(), 0);
    }

    #[test]
    fn test_feedback_tiers() {
        let at = |score| QuizOutcome::new("Torts", Difficulty::Expert, score, 10).feedback();
        assert!(at(10).starts_with("Perfect Score"));
        assert!(at(8).starts_with("Excellent"));
        assert!(at(5).starts_with("Good effort"));
        assert!(at(4).starts_with("Keep trying"));
    }
}
