//! Best-effort persistence of the single `UserStats` record
//!
//! Every backend failure is logged and absorbed here. Loading never fails:
//! it returns defaults merged with whatever fields could be recovered.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::kv::KeyValueStore;
use super::models::{DifficultyBreakdown, UserStats};
use crate::domain::Difficulty;

/// Key under which the stats record is stored
pub const STATS_STORAGE_KEY: &str = "legalEagleStats";

/// Handle to the persisted stats record
#[derive(Clone)]
pub struct StatsStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
}

impl StatsStore {
    /// Store under the default key
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(backend, STATS_STORAGE_KEY)
    }

    /// Store under a custom key, for independent records on one backend
    pub fn with_key(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the record, falling back to defaults for anything unreadable
    pub fn load(&self) -> UserStats {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored stats under '{}', using defaults", self.key);
                return UserStats::default();
            }
            Err(e) => {
                warn!("Failed to load stats: {}", e);
                return UserStats::default();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => recover_stats(&map),
            Ok(other) => {
                warn!("Stored stats is not an object ({}), using defaults", kind_of(&other));
                UserStats::default()
            }
            Err(e) => {
                warn!("Failed to parse stored stats: {}", e);
                UserStats::default()
            }
        }
    }

    /// Persist the record; failures are logged only
    pub fn save(&self, stats: &UserStats) {
        let json = match serde_json::to_string(stats) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize stats: {}", e);
                return;
            }
        };

        if let Err(e) = self.backend.set(&self.key, &json) {
            warn!("Failed to save stats: {}", e);
        }
    }

    /// Overwrite the stored record with defaults and return them
    pub fn reset(&self) -> UserStats {
        let stats = UserStats::default();
        self.save(&stats);
        stats
    }
}

/// Rebuild stats field by field so one bad field does not discard the rest
fn recover_stats(map: &Map<String, Value>) -> UserStats {
    let defaults = UserStats::default();
    let mut stats = UserStats {
        total_quizzes_completed: field(map, "totalQuizzesCompleted", defaults.total_quizzes_completed),
        total_questions_answered: field(map, "totalQuestionsAnswered", defaults.total_questions_answered),
        total_correct_answers: field(map, "totalCorrectAnswers", defaults.total_correct_answers),
        performance_by_topic: defaults.performance_by_topic,
        performance_by_difficulty: recover_difficulty(map.get("performanceByDifficulty")),
        quiz_history: recover_list(map, "quizHistory"),
        total_points: field(map, "totalPoints", defaults.total_points),
        current_streak: field(map, "currentStreak", defaults.current_streak),
        longest_streak: field(map, "longestStreak", defaults.longest_streak),
        last_quiz_date: field(map, "lastQuizDate", defaults.last_quiz_date),
        badges: recover_list(map, "badges"),
    };

    if let Some(Value::Object(topics)) = map.get("performanceByTopic") {
        for (topic, value) in topics {
            match serde_json::from_value(value.clone()) {
                Ok(record) => {
                    stats.performance_by_topic.insert(topic.clone(), record);
                }
                Err(e) => warn!("Dropping unreadable topic record '{}': {}", topic, e),
            }
        }
    }

    stats.normalize();
    stats
}

fn field<T: DeserializeOwned>(map: &Map<String, Value>, name: &str, default: T) -> T {
    let Some(value) = map.get(name) else {
        return default;
    };
    match serde_json::from_value(value.clone()) {
        Ok(v) => v,
        Err(e) => {
            warn!("Ignoring unreadable stats field '{}': {}", name, e);
            default
        }
    }
}

fn recover_difficulty(value: Option<&Value>) -> DifficultyBreakdown {
    let mut breakdown = DifficultyBreakdown::default();
    let Some(Value::Object(levels)) = value else {
        return breakdown;
    };

    for difficulty in Difficulty::ALL {
        *breakdown.get_mut(difficulty) = field(levels, difficulty.as_str(), Default::default());
    }
    breakdown
}

/// Recover a list entry by entry; a non-list value yields an empty list
fn recover_list<T: DeserializeOwned>(map: &Map<String, Value>, name: &str) -> Vec<T> {
    let Some(value) = map.get(name) else {
        return Vec::new();
    };
    let Value::Array(entries) = value else {
        warn!("Stored '{}' is not a list ({}), resetting it", name, kind_of(value));
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry.clone()) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Dropping unreadable '{}' entry #{}: {}", name, index + 1, e);
                None
            }
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
