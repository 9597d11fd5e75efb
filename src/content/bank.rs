//! Local JSON question bank
//!
//! ```json
//! {
//!   "domains": [{"name": "...", "description": "...", "icon": "Gavel", "subdomains": ["..."]}],
//!   "questions": [{"topic": "Law of Torts", "difficulty": "Expert", "question": "...",
//!                  "options": ["..", "..", "..", ".."], "correctAnswer": "..",
//!                  "explanation": "...", "hint": "..."}]
//! }
//! ```
//!
//! Entries without a `difficulty` are served at every level. Entries that do
//! not parse are dropped one by one when the bank is loaded.

use std::path::Path;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::validate::{RawDomain, RawQuestion};
use super::{ContentError, MOCK_TEST_TOPIC, QuestionSource};
use crate::domain::Difficulty;

/// One bank entry: a raw question tagged with its topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankEntry {
    pub topic: String,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(flatten)]
    pub question: RawQuestion,
}

impl BankEntry {
    fn matches(&self, topic: &str, difficulty: Difficulty) -> bool {
        let level_ok = self.difficulty.is_none_or(|d| d == difficulty);
        let topic_ok = topic == MOCK_TEST_TOPIC || self.topic.trim().eq_ignore_ascii_case(topic.trim());
        level_ok && topic_ok
    }
}

/// Bank file shape before its items are parsed
#[derive(Deserialize)]
struct BankFile {
    #[serde(default)]
    domains: Vec<Value>,
    #[serde(default)]
    questions: Vec<Value>,
}

/// Question source backed by a JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuestionBank {
    pub domains: Vec<RawDomain>,
    pub questions: Vec<BankEntry>,
}

impl QuestionBank {
    /// Parse a bank from JSON text
    ///
    /// Fails only when the file itself is not a bank object; unreadable
    /// items are logged and skipped.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let file: BankFile =
            serde_json::from_str(json).map_err(|e| ContentError::Malformed(e.to_string()))?;
        Ok(Self {
            domains: parse_items(file.domains, "domain"),
            questions: parse_items(file.questions, "question"),
        })
    }

    /// Read and parse a bank file
    pub async fn from_path(path: &Path) -> Result<Self, ContentError> {
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            ContentError::Provider(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Distinct topics in bank order
    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = Vec::new();
        for entry in &self.questions {
            if !topics.iter().any(|t| t.eq_ignore_ascii_case(&entry.topic)) {
                topics.push(&entry.topic);
            }
        }
        topics
    }
}

fn parse_items<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Skipping unreadable bank {} #{}: {}", what, index + 1, e);
                None
            }
        })
        .collect()
}

#[async_trait]
impl QuestionSource for QuestionBank {
    async fn generate_questions(
        &self,
        topic: &str,
        count: u32,
        difficulty: Difficulty,
    ) -> Result<Vec<RawQuestion>, ContentError> {
        Ok(self
            .questions
            .iter()
            .filter(|entry| entry.matches(topic, difficulty))
            .take(count as usize)
            .map(|entry| entry.question.clone())
            .collect())
    }

    async fn generate_domains(&self) -> Result<Vec<RawDomain>, ContentError> {
        Ok(self.domains.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANK: &str = r#"{
        "questions": [
            {"topic": "Law of Torts", "difficulty": "Beginner", "question": "Q1",
             "options": ["a", "b", "c", "d"], "correctAnswer": "a", "explanation": "e", "hint": "h"},
            {"topic": "law of torts", "question": "Q2",
             "options": ["a", "b", "c", "d"], "correctAnswer": "b", "explanation": "e", "hint": "h"},
            {"topic": "Contracts", "difficulty": "Expert", "question": "Q3",
             "options": ["a", "b", "c", "d"], "correctAnswer": "c", "explanation": "e", "hint": "h"}
        ]
    }"#;

    #[tokio::test]
    async fn test_filters_by_topic_and_difficulty() {
        let bank = QuestionBank::from_json(BANK).unwrap();

        let beginner = bank
            .generate_questions("LAW OF TORTS", 10, Difficulty::Beginner)
            .await
            .unwrap();
        assert_eq!(beginner.len(), 2);

        let expert = bank
            .generate_questions("Law of Torts", 10, Difficulty::Expert)
            .await
            .unwrap();
        assert_eq!(expert.len(), 1);
        assert_eq!(expert[0].question.as_deref(), Some("Q2"));
    }

    #[tokio::test]
    async fn test_mock_test_draws_from_every_topic() {
        let bank = QuestionBank::from_json(BANK).unwrap();
        let mock = bank
            .generate_questions(MOCK_TEST_TOPIC, 120, Difficulty::Expert)
            .await
            .unwrap();
        assert_eq!(mock.len(), 2);
    }

    #[test]
    fn test_topics_are_deduplicated() {
        let bank = QuestionBank::from_json(BANK).unwrap();
        assert_eq!(bank.topics(), vec!["Law of Torts", "Contracts"]);
    }

    #[tokio::test]
    async fn test_mistyped_entry_is_skipped() {
        let bank = QuestionBank::from_json(
            r#"{
                "domains": [{"name": "Torts", "description": "d", "icon": "i", "subdomains": "x"},
                            {"name": "Contracts", "description": "d", "icon": "i", "subdomains": ["Offer"]}],
                "questions": [
                    {"topic": "Torts", "question": "Q1", "options": ["a", "b", "c", "d"],
                     "correctAnswer": "a", "explanation": "e", "hint": "h"},
                    {"topic": "Torts", "question": "Q2", "options": [1, 2, 3, 4],
                     "correctAnswer": "1", "explanation": "e", "hint": "h"},
                    {"topic": "Torts", "difficulty": "Impossible", "question": "Q3",
                     "options": ["a", "b", "c", "d"], "correctAnswer": "a", "explanation": "e", "hint": "h"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(bank.questions.len(), 1);
        assert_eq!(bank.domains.len(), 1);
        let questions = bank
            .generate_questions("Torts", 5, Difficulty::Beginner)
            .await
            .unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question.as_deref(), Some("Q1"));
    }

    #[test]
    fn test_malformed_bank() {
        assert!(matches!(
            QuestionBank::from_json("{\"questions\": 3}"),
            Err(ContentError::Malformed(_))
        ));
    }
}
